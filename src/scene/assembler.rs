//! Build item iteration, object deduplication and bounds tracking

use std::collections::HashMap;

use tracing::{debug, info};

use super::bounds::BoundsAccumulator;
use super::viewpoint::derive_viewpoint;
use super::{SceneGraph, ShapeDefinition, ShapeHandle, ShapeUse, TransformNode};
use crate::error::{Error, Result};
use crate::model::BuildItem;
use crate::resolver::MeshResolver;
use crate::transform::AffineMatrix;

/// Turns a sequence of build items into a [`SceneGraph`]
///
/// One assembler serves exactly one conversion: [`assemble`](Self::assemble)
/// consumes it, so the shape cache and bounds cannot leak between
/// conversions. Items are processed strictly in order; the first
/// placement of an object resolves its mesh and every later placement of
/// the same id reuses it without calling the resolver again.
#[derive(Debug, Default)]
pub struct SceneAssembler {
    shapes: Vec<ShapeDefinition>,
    by_object: HashMap<String, ShapeHandle>,
    nodes: Vec<TransformNode>,
    bounds: BoundsAccumulator,
}

impl SceneAssembler {
    /// Create an assembler for one conversion
    pub fn new() -> Self {
        Self::default()
    }

    /// Place every item and derive bounds and viewpoint
    ///
    /// # Errors
    ///
    /// The first failing item aborts the whole assembly:
    /// - [`Error::MissingObjectId`] for an item with a blank `objectid`
    /// - [`Error::Format`] for a malformed `transform`
    /// - [`Error::UnsupportedTransform`] for a transform X3D cannot express
    /// - resolver errors ([`Error::ResourceNotFound`], [`Error::MeshMalformed`])
    /// - [`Error::EmptyScene`] when `items` is empty
    pub fn assemble<R>(mut self, items: &[BuildItem], resolver: &mut R) -> Result<SceneGraph>
    where
        R: MeshResolver + ?Sized,
    {
        info!(items = items.len(), "Assembling build items");

        for (index, item) in items.iter().enumerate() {
            self.place(index, item, resolver)?;
        }

        let bounds = self.bounds.finish()?;
        info!(min = ?bounds.min, max = ?bounds.max, "Global bounds");
        let viewpoint = derive_viewpoint(&bounds);

        Ok(SceneGraph {
            nodes: self.nodes,
            shapes: self.shapes,
            bounds,
            viewpoint,
        })
    }

    fn place<R>(&mut self, index: usize, item: &BuildItem, resolver: &mut R) -> Result<()>
    where
        R: MeshResolver + ?Sized,
    {
        let object_id = item.objectid.as_str();
        if object_id.trim().is_empty() {
            return Err(Error::MissingObjectId(index));
        }
        debug!(index, object_id, "Build item");

        let matrix = match item.transform.as_deref() {
            Some(s) => AffineMatrix::parse(s)?,
            None => AffineMatrix::identity(),
        };

        let shape = match self.by_object.get(object_id) {
            Some(&handle) => ShapeUse::Reuse(handle),
            None => {
                let mesh = resolver.resolve(object_id)?;
                let handle = ShapeHandle(self.shapes.len());
                self.shapes.push(ShapeDefinition::new(object_id, mesh));
                self.by_object.insert(object_id.to_string(), handle);
                ShapeUse::Define(handle)
            }
        };

        let (min, max) = self.shapes[shape.handle().0]
            .mesh
            .transformed_aabb(&matrix);
        self.bounds.push(min, max);

        let attributes = matrix.decompose()?;

        self.nodes.push(TransformNode {
            object_id: object_id.to_string(),
            attributes,
            part_number: item.partnumber.clone(),
            shape,
        });
        Ok(())
    }
}
