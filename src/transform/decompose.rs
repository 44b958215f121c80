//! Polar decomposition of 3MF matrices into X3D Transform fields
//!
//! X3D's Transform node can only express `translation`, a single axis-angle
//! `rotation` and a `scale`. Here the scale is restricted to isotropic
//! scaling, so any matrix whose linear part stretches axes differently is
//! rejected rather than approximated.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use super::AffineMatrix;
use crate::error::{Error, Result};

/// Threshold below which a scale offset or rotation angle is treated as absent
pub const TOLERANCE: f64 = 1.0e-6;

/// A rotation of `angle` radians about the unit vector `axis`
///
/// Produced angles lie in `[0, pi]`; the axis sign is chosen accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    /// Unit rotation axis
    pub axis: Vector3<f64>,
    /// Rotation angle in radians
    pub angle: f64,
}

impl AxisAngle {
    /// The rotation as a 3x3 matrix acting on column vectors
    pub fn to_rotation_matrix(&self) -> Matrix3<f64> {
        Rotation3::from_axis_angle(&Unit::new_normalize(self.axis), self.angle).into_inner()
    }
}

/// X3D Transform fields of a decomposed matrix
///
/// A field is `Some` only when it contributes to the transform: translation
/// when any component is non-zero, scale when it differs from 1 by more than
/// [`TOLERANCE`], rotation when its angle exceeds [`TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformAttributes {
    /// Translation vector
    pub translation: Option<Vector3<f64>>,
    /// Axis-angle rotation
    pub rotation: Option<AxisAngle>,
    /// Uniform scale factor
    pub scale: Option<f64>,
}

impl TransformAttributes {
    /// Number of fields present
    pub fn len(&self) -> usize {
        usize::from(self.translation.is_some())
            + usize::from(self.rotation.is_some())
            + usize::from(self.scale.is_some())
    }

    /// True when the decomposed transform is the identity
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recompose the fields into a 3MF matrix
    pub fn to_matrix(&self) -> AffineMatrix {
        let scale = self.scale.unwrap_or(1.0);
        let rotation = self
            .rotation
            .map(|r| r.to_rotation_matrix())
            .unwrap_or_else(Matrix3::identity);
        // Back to the row-vector convention
        let linear = (rotation * scale).transpose();
        let t = self.translation.unwrap_or_else(Vector3::zeros);

        AffineMatrix::from_rows([
            [linear[(0, 0)], linear[(0, 1)], linear[(0, 2)]],
            [linear[(1, 0)], linear[(1, 1)], linear[(1, 2)]],
            [linear[(2, 0)], linear[(2, 1)], linear[(2, 2)]],
            [t.x, t.y, t.z],
        ])
    }
}

/// Rejects non-isotropic, mirroring, singular and overflowing matrices
pub(super) fn decompose(matrix: &AffineMatrix) -> Result<TransformAttributes> {
    let mut attrs = TransformAttributes::default();

    let translation = matrix.translation();
    if translation.iter().any(|c| c.abs() > 0.0) {
        attrs.translation = Some(translation);
    }

    // Column-vector form of the linear part
    let linear = matrix.linear().transpose();
    let singular = linear.singular_values();
    // Large finite entries can overflow inside the SVD
    if !singular.iter().all(|s| s.is_finite()) {
        return Err(Error::unsupported_transform(
            "non-finite singular values",
            format!(
                "singular values {}, {}, {}",
                singular[0], singular[1], singular[2]
            ),
        ));
    }
    let (s_min, s_max) = (singular.min(), singular.max());
    if s_max - s_min > TOLERANCE {
        return Err(Error::unsupported_transform(
            "non-isotropic scaling",
            format!(
                "singular values {}, {}, {}",
                singular[0], singular[1], singular[2]
            ),
        ));
    }

    let scale = singular.mean();
    if scale <= TOLERANCE {
        return Err(Error::unsupported_transform(
            "singular transform",
            format!("scale {}", scale),
        ));
    }
    if linear.determinant() < 0.0 {
        return Err(Error::unsupported_transform(
            "mirroring transform",
            "negative determinant",
        ));
    }
    if (scale - 1.0).abs() > TOLERANCE {
        attrs.scale = Some(scale);
    }

    let rotation = linear / scale;
    // ||R - I|| bounds the angle from above, so a tiny offset cannot hide a rotation
    if (rotation - Matrix3::identity()).norm() > TOLERANCE {
        attrs.rotation = axis_angle(&rotation)?;
    }

    Ok(attrs)
}

/// Extract axis and angle from a proper rotation matrix
fn axis_angle(rotation: &Matrix3<f64>) -> Result<Option<AxisAngle>> {
    // The axis spans the null space of R - I: the right singular vector of
    // the smallest singular value, which nalgebra sorts last.
    let svd = (rotation - Matrix3::identity()).svd(false, true);
    let v_t = svd.v_t.ok_or_else(|| {
        Error::unsupported_transform("rotation", "singular value decomposition failed")
    })?;
    let frame = v_t * v_t.determinant();

    let mut axis: Vector3<f64> = frame.row(2).transpose();
    let k = frame * rotation * frame.transpose();
    let mut angle = (-k[(0, 1)]).atan2(k[(0, 0)]);

    if angle < 0.0 {
        angle = -angle;
        axis = -axis;
    }

    if angle.abs() > TOLERANCE {
        Ok(Some(AxisAngle { axis, angle }))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const NEARLY_EQUAL_TOLERANCE: f64 = 1.0e-8;

    fn cyclic_rotate() -> AffineMatrix {
        AffineMatrix::from_rows([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0; 3]])
    }

    fn translate_y() -> AffineMatrix {
        AffineMatrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 2.0, 0.0]])
    }

    fn assert_vec_near(actual: Vector3<f64>, expected: Vector3<f64>) {
        assert!(
            (actual - expected).amax() < NEARLY_EQUAL_TOLERANCE,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_cyclic_rotation_decomposes_to_single_rotation() {
        let attrs = cyclic_rotate().decompose().unwrap();
        assert_eq!(attrs.len(), 1);

        let rotation = attrs.rotation.expect("rotation present");
        let third = (1.0_f64 / 3.0).sqrt();
        assert_vec_near(rotation.axis, Vector3::new(third, third, third));
        assert!((rotation.angle - 2.0 * PI / 3.0).abs() < NEARLY_EQUAL_TOLERANCE);
    }

    #[test]
    fn test_translation_only() {
        let attrs = translate_y().decompose().unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.translation, Some(Vector3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_identity_is_empty() {
        let attrs = AffineMatrix::identity().decompose().unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_quarter_turn_about_z() {
        // (1,0,0) -> (0,1,0), (0,1,0) -> (-1,0,0)
        let m = AffineMatrix::parse("0 1 0 -1 0 0 0 0 1 0 0 0").unwrap();
        let rotation = m.decompose().unwrap().rotation.unwrap();
        assert_vec_near(rotation.axis, Vector3::z());
        assert!((rotation.angle - PI / 2.0).abs() < NEARLY_EQUAL_TOLERANCE);
    }

    #[test]
    fn test_clockwise_turn_flips_axis() {
        let m = AffineMatrix::parse("0 -1 0 1 0 0 0 0 1 0 0 0").unwrap();
        let rotation = m.decompose().unwrap().rotation.unwrap();
        assert_vec_near(rotation.axis, -Vector3::z());
        assert!((rotation.angle - PI / 2.0).abs() < NEARLY_EQUAL_TOLERANCE);
    }

    #[test]
    fn test_half_turn() {
        let m = AffineMatrix::parse("-1 0 0 0 -1 0 0 0 1 0 0 0").unwrap();
        let rotation = m.decompose().unwrap().rotation.unwrap();
        assert!((rotation.angle - PI).abs() < NEARLY_EQUAL_TOLERANCE);
        assert!((rotation.axis.z.abs() - 1.0).abs() < NEARLY_EQUAL_TOLERANCE);
    }

    #[test]
    fn test_uniform_scale_only() {
        let m = AffineMatrix::parse("2.5 0 0 0 2.5 0 0 0 2.5 0 0 0").unwrap();
        let attrs = m.decompose().unwrap();
        assert_eq!(attrs.len(), 1);
        assert!((attrs.scale.unwrap() - 2.5).abs() < NEARLY_EQUAL_TOLERANCE);
    }

    #[test]
    fn test_scale_within_tolerance_is_omitted() {
        let m = AffineMatrix::parse("1.0000001 0 0 0 1.0000001 0 0 0 1.0000001 0 0 0").unwrap();
        assert!(m.decompose().unwrap().scale.is_none());
    }

    #[test]
    fn test_scaled_rotation_with_translation() {
        let attrs = TransformAttributes {
            translation: Some(Vector3::new(10.0, -4.0, 3.0)),
            rotation: Some(AxisAngle {
                axis: Vector3::new(1.0, 2.0, 2.0) / 3.0,
                angle: 1.2,
            }),
            scale: Some(0.5),
        };
        let decomposed = attrs.to_matrix().decompose().unwrap();

        assert_eq!(decomposed.len(), 3);
        assert_vec_near(decomposed.translation.unwrap(), Vector3::new(10.0, -4.0, 3.0));
        assert!((decomposed.scale.unwrap() - 0.5).abs() < NEARLY_EQUAL_TOLERANCE);
        let rotation = decomposed.rotation.unwrap();
        assert_vec_near(rotation.axis, Vector3::new(1.0, 2.0, 2.0) / 3.0);
        assert!((rotation.angle - 1.2).abs() < NEARLY_EQUAL_TOLERANCE);
    }

    #[test]
    fn test_non_isotropic_scaling_rejected() {
        let m = AffineMatrix::parse("1 0 0 0 1 0 0 0 2 0 0 0").unwrap();
        let err = m.decompose().unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransform(_)));
        assert!(err.to_string().contains("non-isotropic scaling"));
    }

    #[test]
    fn test_non_isotropic_rotated_scaling_rejected() {
        // Singular values (1, 1, 2) hidden behind a rotation
        let m = AffineMatrix::parse("0 2 0 -1 0 0 0 0 1 0 0 0").unwrap();
        assert!(matches!(m.decompose(), Err(Error::UnsupportedTransform(_))));
    }

    #[test]
    fn test_singular_matrix_rejected() {
        let m = AffineMatrix::parse("0 0 0 0 0 0 0 0 0 1 2 3").unwrap();
        let err = m.decompose().unwrap_err();
        assert!(err.to_string().contains("singular transform"));
    }

    #[test]
    fn test_mirroring_rejected() {
        let m = AffineMatrix::parse("-1 0 0 0 1 0 0 0 1 0 0 0").unwrap();
        let err = m.decompose().unwrap_err();
        assert!(err.to_string().contains("mirroring"));
    }

    #[test]
    fn test_overflowing_scale_rejected() {
        for v in ["1e160", "1e200", "1e300"] {
            let m = AffineMatrix::parse(&format!("{v} 0 0 0 {v} 0 0 0 {v} 0 0 0")).unwrap();
            let err = m.decompose().unwrap_err();
            assert!(matches!(err, Error::UnsupportedTransform(_)), "{v}: {err}");
        }
    }

    #[test]
    fn test_negative_zero_translation_is_absent() {
        let m = AffineMatrix::parse("1 0 0 0 1 0 0 0 1 -0 0 -0").unwrap();
        assert!(m.decompose().unwrap().translation.is_none());
    }
}
