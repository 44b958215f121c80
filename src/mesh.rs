//! Triangle mesh geometry for one object
//!
//! A [`MeshModel`] is the geometry an X3D `IndexedTriangleSet` is built
//! from: an ordered point list and index triples into it. It is validated
//! on construction and immutable afterwards, so every consumer can index
//! `points` with the triangle indices without further checks.

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::transform::{AffineMatrix, transform_points};

/// An axis-aligned bounding box as (min corner, max corner)
pub type BoundingBox = (Point3<f64>, Point3<f64>);

/// Validated vertex/triangle arrays for one object
#[derive(Debug, Clone, PartialEq)]
pub struct MeshModel {
    points: Vec<Point3<f64>>,
    triangles: Vec<[usize; 3]>,
}

impl MeshModel {
    /// Create a mesh, rejecting empty data and out-of-range indices
    ///
    /// # Arguments
    /// * `object_id` - Owning object, used in error messages
    /// * `points` - Vertex positions in object space
    /// * `triangles` - Vertex index triples
    pub fn new(
        object_id: &str,
        points: Vec<Point3<f64>>,
        triangles: Vec<[usize; 3]>,
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::mesh_malformed(object_id, "mesh has no vertices"));
        }
        if triangles.is_empty() {
            return Err(Error::mesh_malformed(object_id, "mesh has no triangles"));
        }

        let count = points.len();
        for (t, tri) in triangles.iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&i| i >= count) {
                return Err(Error::mesh_malformed(
                    object_id,
                    &format!(
                        "triangle {} references vertex {} but the mesh has {} vertices",
                        t, bad, count
                    ),
                ));
            }
        }

        Ok(Self { points, triangles })
    }

    /// Vertex positions
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Triangle index triples
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Triangle indices flattened in order, as in an X3D `index` field
    pub fn flat_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.triangles.iter().flatten().copied()
    }

    /// Bounding box of the untransformed points
    pub fn aabb(&self) -> BoundingBox {
        point_bounds(&self.points)
    }

    /// Bounding box after mapping every point through `matrix`
    pub fn transformed_aabb(&self, matrix: &AffineMatrix) -> BoundingBox {
        point_bounds(&transform_points(matrix, &self.points))
    }
}

/// Component-wise min and max of a non-empty point set
fn point_bounds(points: &[Point3<f64>]) -> BoundingBox {
    let first = points[0];
    points[1..].iter().fold((first, first), |(min, max), p| {
        (min.coords.inf(&p.coords).into(), max.coords.sup(&p.coords).into())
    })
}
