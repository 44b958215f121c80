//! 3MF affine matrices
//!
//! A 3MF transform (3MF Core, section 3.3) is a 4x3 matrix written as 12
//! whitespace-separated numbers in row-major order. Rows 0-2 hold the linear
//! part, row 3 the translation. Points are treated as row vectors, so a point
//! `p` maps to `p * L + t`.

mod decompose;
mod points;

pub use decompose::{AxisAngle, TOLERANCE, TransformAttributes};
pub use points::{transform_point, transform_points};

use std::str::FromStr;

use nalgebra::{Matrix3, Matrix4, Matrix4x3, Vector3};

use crate::error::{Error, Result};

/// Number of values in a 3MF transform attribute
pub const TRANSFORM_MATRIX_SIZE: usize = 12;

/// A 3MF build transform: 3x3 linear part plus translation row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    m: Matrix4x3<f64>,
}

impl AffineMatrix {
    /// The identity transform, used when a build item has no `transform`
    pub fn identity() -> Self {
        Self {
            m: Matrix4x3::new(
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 0.0,
            ),
        }
    }

    /// Build a matrix from its four rows
    pub fn from_rows(rows: [[f64; 3]; 4]) -> Self {
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self {
            m: Matrix4x3::from_row_slice(&flat),
        }
    }

    /// Parse the 12-value attribute encoding
    ///
    /// Fails with [`Error::Format`] unless there are exactly 12 tokens and
    /// every token is a finite real number. Nothing is truncated or padded.
    pub fn parse(s: &str) -> Result<Self> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    Error::Format(format!(
                        "cannot interpret '{}' as a floating-point value in '{}'",
                        token, s
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() != TRANSFORM_MATRIX_SIZE {
            return Err(Error::Format(format!(
                "matrix string must have exactly {} values (got {})",
                TRANSFORM_MATRIX_SIZE,
                values.len()
            )));
        }

        if let Some((idx, val)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Format(format!(
                "matrix value at index {} must be finite (got {})",
                idx, val
            )));
        }

        Ok(Self {
            m: Matrix4x3::from_row_slice(&values),
        })
    }

    /// The 3x3 linear part (rows 0-2) in 3MF row-vector convention
    pub fn linear(&self) -> Matrix3<f64> {
        self.m.fixed_rows::<3>(0).into_owned()
    }

    /// The translation row
    pub fn translation(&self) -> Vector3<f64> {
        self.m.row(3).transpose()
    }

    /// Element access by (row, column)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[(row, col)]
    }

    /// The 4x4 matrix acting on homogeneous row vectors `[x y z 1]`
    ///
    /// Columns 0-2 are this matrix; column 3 is `(0, 0, 0, 1)`.
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        let mut h = Matrix4::identity();
        h.fixed_view_mut::<4, 3>(0, 0).copy_from(&self.m);
        h
    }

    /// Split this matrix into X3D Transform fields
    ///
    /// See [`TransformAttributes`] for which fields are reported.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedTransform`] when the linear part is not a
    /// rotation times a uniform scale: non-isotropic scaling, mirroring
    /// (negative determinant), singular matrices (zero scale), and entries
    /// large enough that the singular values overflow.
    pub fn decompose(&self) -> Result<TransformAttributes> {
        decompose::decompose(self)
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl FromStr for AffineMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
