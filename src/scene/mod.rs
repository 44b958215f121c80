//! X3D scene graph produced from a 3MF build
//!
//! The scene is a flat group of [`TransformNode`]s, one per build item in
//! build order. Each node either defines a shape (first placement of an
//! object) or reuses an earlier definition, mirroring X3D's `DEF`/`USE`.
//! Geometry lives once in [`SceneGraph::shapes`]; nodes refer to it by
//! [`ShapeHandle`].

mod assembler;
mod bounds;
mod viewpoint;

pub use assembler::SceneAssembler;
pub use bounds::{BoundsAccumulator, GlobalBounds};
pub use viewpoint::{OVERHEAD_DESCRIPTION, VIEWPOINT_HEIGHT_FACTOR, Viewpoint, derive_viewpoint};

use crate::mesh::MeshModel;
use crate::metadata::MetaTag;
use crate::transform::TransformAttributes;
use crate::units::UnitInfo;

/// `DEF` name of the appearance shared by all shapes
pub const APPEARANCE_DEF: &str = "mesh-appearance";

/// Index of a [`ShapeDefinition`] in [`SceneGraph::shapes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub(crate) usize);

impl ShapeHandle {
    /// Position in [`SceneGraph::shapes`]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Geometry of one object, defined once and shared by every placement
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDefinition {
    /// Name used for `DEF`/`USE`
    pub def_name: String,
    /// The 3MF object this geometry came from
    pub object_id: String,
    /// Object-space geometry
    pub mesh: MeshModel,
}

impl ShapeDefinition {
    /// Create a definition named after its object
    pub fn new(object_id: &str, mesh: MeshModel) -> Self {
        Self {
            def_name: format!("object-{}", object_id),
            object_id: object_id.to_string(),
            mesh,
        }
    }
}

/// How a node refers to its shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeUse {
    /// First placement: the node carries the full definition (`DEF`)
    Define(ShapeHandle),
    /// Later placement: the node references the definition (`USE`)
    Reuse(ShapeHandle),
}

impl ShapeUse {
    /// The referenced shape
    pub fn handle(self) -> ShapeHandle {
        match self {
            ShapeUse::Define(h) | ShapeUse::Reuse(h) => h,
        }
    }
}

/// One placed build item
#[derive(Debug, Clone, PartialEq)]
pub struct TransformNode {
    /// Object placed by this item
    pub object_id: String,
    /// Transform fields; absent fields are omitted from the X3D node
    pub attributes: TransformAttributes,
    /// Part number metadata, when the build item has one
    pub part_number: Option<String>,
    /// Shape definition or reference
    pub shape: ShapeUse,
}

/// Material shared by every shape
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// `DEF` name
    pub def_name: String,
    /// Material diffuse colour (RGB)
    pub diffuse_color: [f64; 3],
}

impl Appearance {
    /// Shared appearance with the given colour
    pub fn with_color(diffuse_color: [f64; 3]) -> Self {
        Self {
            def_name: APPEARANCE_DEF.to_string(),
            diffuse_color,
        }
    }
}

/// Geometry, placements, bounds and camera of an assembled build
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    /// One node per build item, in build order
    pub nodes: Vec<TransformNode>,
    /// Shape definitions, in order of first use
    pub shapes: Vec<ShapeDefinition>,
    /// Bounds of all placed geometry
    pub bounds: GlobalBounds,
    /// Overhead camera
    pub viewpoint: Viewpoint,
}

impl SceneGraph {
    /// The definition a handle refers to
    pub fn shape(&self, handle: ShapeHandle) -> &ShapeDefinition {
        &self.shapes[handle.0]
    }

    /// Definition used by a node
    pub fn node_shape(&self, node: &TransformNode) -> &ShapeDefinition {
        self.shape(node.shape.handle())
    }
}

/// A complete converted scene, ready for X3D serialization
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Length unit of all coordinates
    pub unit: UnitInfo,
    /// Document metadata, mapped to X3D names
    pub metadata: Vec<MetaTag>,
    /// Appearance shared by all shapes
    pub appearance: Appearance,
    /// Placed geometry and camera
    pub graph: SceneGraph,
}
