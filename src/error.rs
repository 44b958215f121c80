//! Error types for 3MF to X3D conversion
//!
//! Every failure aborts the conversion that raised it; no partially assembled
//! scene is ever returned. All errors carry an error code so callers can
//! categorize them without matching on message text.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: Malformed input values (transform strings, units, build items)
//! - **E2xxx**: Resource and mesh errors
//! - **E3xxx**: Scene-level errors
//! - **E4xxx**: Unsupported transforms
//! - **E5xxx**: Configuration errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: Malformed transform matrix string
//! - `E1002`: Unknown model unit
//! - `E1003`: Build item without an object id
//! - `E2001`: Build item references a missing resource
//! - `E2002`: Malformed mesh
//! - `E3001`: Empty scene
//! - `E4001`: Transform cannot be expressed as scale + rotation + translation
//! - `E5001`: Invalid conversion configuration

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling an X3D scene from a 3MF model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed transform matrix string
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Fewer or more than 12 values in the `transform` attribute
    /// - Non-numeric tokens (e.g. `"1,0"` instead of `"1.0"`)
    /// - `NaN` or infinite values
    #[error("[E1001] Invalid transform: {0}")]
    Format(String),

    /// The model declares a unit that has no conversion factor
    ///
    /// **Error Code**: E1002
    ///
    /// **Suggestions**:
    /// - Register the unit with `ConversionConfig::with_unit`
    #[error("[E1002] Unknown unit: '{0}'")]
    UnknownUnit(String),

    /// A build item does not name the object it places
    ///
    /// **Error Code**: E1003
    ///
    /// The payload is the zero-based position of the item in the build.
    #[error("[E1003] Build item {0} has no objectid")]
    MissingObjectId(usize),

    /// A build item references an object id with no matching resource
    ///
    /// **Error Code**: E2001
    #[error("[E2001] Resource not found for object id '{0}'")]
    ResourceNotFound(String),

    /// A referenced object's mesh is missing or unusable
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Object has no `<mesh>` (e.g. a components-only object)
    /// - Mesh has no vertices or no triangles
    /// - Triangle vertex index out of range
    #[error("[E2002] Malformed mesh: {0}")]
    MeshMalformed(String),

    /// No build item produced geometry, so no viewpoint can be derived
    ///
    /// **Error Code**: E3001
    #[error("[E3001] Empty scene: the build contains no items")]
    EmptyScene,

    /// The transform cannot be represented by an X3D Transform node
    ///
    /// **Error Code**: E4001
    ///
    /// **Common Causes**:
    /// - Non-isotropic (per-axis) scaling
    /// - Mirroring (negative determinant)
    /// - Singular matrix (zero scale)
    /// - Entries so large that the decomposition overflows
    #[error("[E4001] Unsupported transform: {0}")]
    UnsupportedTransform(String),

    /// Invalid conversion configuration
    ///
    /// **Error Code**: E5001
    #[error("[E5001] Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::Format(format!("Failed to parse floating-point number: {}", err))
    }
}

impl Error {
    /// Create an UnsupportedTransform error naming the offending matrix
    ///
    /// # Arguments
    /// * `reason` - Short description (e.g. "non-isotropic scaling")
    /// * `detail` - Supporting numbers, such as the singular values found
    pub fn unsupported_transform(reason: &str, detail: impl std::fmt::Display) -> Self {
        Error::UnsupportedTransform(format!("{} ({})", reason, detail))
    }

    /// Create a MeshMalformed error with the object id it belongs to
    ///
    /// # Example
    /// ```ignore
    /// Error::mesh_malformed("3", "mesh has no triangles")
    /// ```
    pub fn mesh_malformed(object_id: &str, message: &str) -> Self {
        Error::MeshMalformed(format!("object '{}': {}", object_id, message))
    }
}
