//! Applying 3MF matrices to points

use nalgebra::{Point3, RowVector4};

use super::AffineMatrix;

/// Map one point through a 3MF matrix
///
/// The point is extended to the homogeneous row `[x y z 1]`, multiplied by
/// [`AffineMatrix::to_homogeneous`], and the fourth coordinate dropped.
pub fn transform_point(matrix: &AffineMatrix, point: &Point3<f64>) -> Point3<f64> {
    apply(&matrix.to_homogeneous(), point)
}

/// Map a batch of points through a 3MF matrix, preserving order
///
/// Equivalent to calling [`transform_point`] on each point.
pub fn transform_points(matrix: &AffineMatrix, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
    let h = matrix.to_homogeneous();
    points.iter().map(|p| apply(&h, p)).collect()
}

#[inline]
fn apply(h: &nalgebra::Matrix4<f64>, p: &Point3<f64>) -> Point3<f64> {
    let row = RowVector4::new(p.x, p.y, p.z, 1.0) * h;
    Point3::new(row[0], row[1], row[2])
}
