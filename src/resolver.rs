//! Mesh resolution: looking up the geometry behind an object id
//!
//! The scene assembler never reads resources directly. It asks a
//! [`MeshResolver`] for an object's [`MeshModel`] the first time the object
//! is placed and caches the answer, so a resolver is called at most once per
//! object id during a conversion.

use tracing::debug;

use crate::error::{Error, Result};
use crate::mesh::MeshModel;
use crate::model::{Object, Resources};

/// Source of object geometry
pub trait MeshResolver {
    /// Produce the mesh of the object with the given id
    ///
    /// # Errors
    /// - [`Error::ResourceNotFound`] if no object has this id
    /// - [`Error::MeshMalformed`] if the object has no usable mesh
    fn resolve(&mut self, object_id: &str) -> Result<MeshModel>;
}

impl<F> MeshResolver for F
where
    F: FnMut(&str) -> Result<MeshModel>,
{
    fn resolve(&mut self, object_id: &str) -> Result<MeshModel> {
        self(object_id)
    }
}

/// Resolves object ids against a model's `<resources>` section
///
/// When several objects share an id, the first one in document order wins.
#[derive(Debug, Clone, Copy)]
pub struct ResourceResolver<'a> {
    resources: &'a Resources,
}

impl<'a> ResourceResolver<'a> {
    /// Create a resolver over the given resources
    pub fn new(resources: &'a Resources) -> Self {
        Self { resources }
    }
}

impl MeshResolver for ResourceResolver<'_> {
    fn resolve(&mut self, object_id: &str) -> Result<MeshModel> {
        let object = self
            .resources
            .find_object(object_id)
            .ok_or_else(|| Error::ResourceNotFound(object_id.to_string()))?;
        extract_mesh(object)
    }
}

/// Convert an object's mesh into a validated [`MeshModel`]
pub fn extract_mesh(object: &Object) -> Result<MeshModel> {
    let mesh = object
        .mesh
        .as_ref()
        .ok_or_else(|| Error::mesh_malformed(&object.id, "object has no mesh"))?;

    let points = mesh.vertices.iter().map(Into::into).collect();
    let triangles = mesh
        .triangles
        .iter()
        .map(|t| [t.v1, t.v2, t.v3])
        .collect();

    let model = MeshModel::new(&object.id, points, triangles)?;
    debug!(
        object_id = %object.id,
        vertices = model.points().len(),
        triangles = model.triangles().len(),
        "Extracted object mesh"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mesh, Triangle, Vertex};

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::new(0.0, 1.0, 0.0));
        mesh.triangles.push(Triangle::new(0, 1, 2));
        mesh
    }

    #[test]
    fn test_resolves_existing_object() {
        let mut resources = Resources::new();
        resources.objects.push(Object::with_mesh("5", triangle_mesh()));

        let mesh = ResourceResolver::new(&resources).resolve("5").unwrap();
        assert_eq!(mesh.points().len(), 3);
        assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_missing_resource() {
        let resources = Resources::new();
        let err = ResourceResolver::new(&resources).resolve("9").unwrap_err();
        assert_eq!(err, Error::ResourceNotFound("9".to_string()));
    }

    #[test]
    fn test_object_without_mesh() {
        let mut resources = Resources::new();
        resources.objects.push(Object::new("2"));
        let err = ResourceResolver::new(&resources).resolve("2").unwrap_err();
        assert!(matches!(err, Error::MeshMalformed(_)));
        assert!(err.to_string().contains("object has no mesh"));
    }

    #[test]
    fn test_mesh_without_triangles() {
        let mut mesh = triangle_mesh();
        mesh.triangles.clear();
        let err = extract_mesh(&Object::with_mesh("4", mesh)).unwrap_err();
        assert!(err.to_string().contains("no triangles"));
    }

    #[test]
    fn test_closure_resolver() {
        let mut calls = Vec::new();
        let mut resolver = |id: &str| {
            calls.push(id.to_string());
            extract_mesh(&Object::with_mesh(id, triangle_mesh()))
        };
        assert!(resolver.resolve("a").is_ok());
        assert_eq!(calls, vec!["a".to_string()]);
    }
}
