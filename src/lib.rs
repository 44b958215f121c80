//! # threemf_x3d
//!
//! Convert parsed 3MF (3D Manufacturing Format) models into X3D scene graphs.
//!
//! A 3MF build places mesh objects with 4x3 affine matrices. X3D can only
//! express a translation, one axis-angle rotation and a scale per Transform
//! node, so each matrix is decomposed (polar decomposition via SVD) and
//! rejected if it cannot be represented. Objects placed more than once are
//! defined once and reused, and the bounds of all placed geometry give an
//! overhead camera.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Exact 3MF transform attribute parsing (12 values, no truncation or padding)
//! - Translation/rotation/scale decomposition with tolerance-based field omission
//! - `DEF`/`USE` style shape deduplication keyed by object id
//! - Global bounds and viewpoint derivation
//! - Unit and metadata mapping for the X3D header
//!
//! Reading the 3MF package and writing X3D XML are left to the caller: the
//! input is a [`Model`], the output a [`Scene`].
//!
//! ## Example
//!
//! ```
//! use threemf_x3d::{BuildItem, Mesh, Model, Object, Triangle, Vertex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut mesh = Mesh::new();
//! mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::new(10.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::new(0.0, 10.0, 0.0));
//! mesh.triangles.push(Triangle::new(0, 1, 2));
//!
//! let mut model = Model::new();
//! model.resources.objects.push(Object::with_mesh("1", mesh));
//! model.build.items.push(BuildItem::new("1"));
//! model
//!     .build
//!     .items
//!     .push(BuildItem::with_transform("1", "1 0 0 0 1 0 0 0 1 20 0 0"));
//!
//! let scene = model.to_scene()?;
//! assert_eq!(scene.graph.nodes.len(), 2);
//! assert_eq!(scene.graph.shapes.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod mesh;
pub mod metadata;
pub mod model;
pub mod resolver;
pub mod scene;
pub mod transform;
pub mod units;

pub use config::ConversionConfig;
pub use error::{Error, Result};
pub use mesh::MeshModel;
pub use metadata::MetaTag;
pub use model::{Build, BuildItem, Mesh, MetadataEntry, Model, Object, Resources, Triangle, Vertex};
pub use resolver::{MeshResolver, ResourceResolver};
pub use scene::{
    Appearance, GlobalBounds, Scene, SceneAssembler, SceneGraph, ShapeDefinition, ShapeHandle,
    ShapeUse, TransformNode, Viewpoint,
};
pub use transform::{AffineMatrix, AxisAngle, TransformAttributes};
pub use units::{UnitInfo, UnitTable};

use tracing::info;

impl Model {
    /// Convert this model into an X3D scene with the default configuration
    ///
    /// Accepts `millimeter` and `meter` models and gives every shape a light
    /// grey material.
    pub fn to_scene(&self) -> Result<Scene> {
        self.to_scene_with_config(&ConversionConfig::default())
    }

    /// Convert this model into an X3D scene
    ///
    /// The conversion either succeeds completely or returns the first error;
    /// no partial scene is produced.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use threemf_x3d::{ConversionConfig, Model};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let model = Model::new();
    /// let config = ConversionConfig::new().with_unit("inch", 0.0254);
    /// let scene = model.to_scene_with_config(&config)?;
    /// println!("camera at {}", scene.graph.viewpoint.position);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_scene_with_config(&self, config: &ConversionConfig) -> Result<Scene> {
        config.validate()?;

        let unit = config.units().lookup(&self.unit)?.clone();
        info!(unit = %unit.name, factor = unit.conversion_factor, "Unit identified");

        let metadata = metadata::map_metadata(&self.metadata);

        let mut resolver = ResourceResolver::new(&self.resources);
        let graph = SceneAssembler::new().assemble(&self.build.items, &mut resolver)?;
        info!(
            nodes = graph.nodes.len(),
            shapes = graph.shapes.len(),
            "Scene assembled"
        );

        Ok(Scene {
            unit,
            metadata,
            appearance: Appearance::with_color(config.color()),
            graph,
        })
    }
}

/// Convert a model with the default configuration
///
/// Shorthand for [`Model::to_scene`].
pub fn convert(model: &Model) -> Result<Scene> {
    model.to_scene()
}
