//! Conversion configuration
//!
//! Everything the converter would otherwise read from process-wide state is
//! passed in through a [`ConversionConfig`]: the unit table and the shape
//! colour. Logging goes through whatever `tracing` subscriber the caller has
//! installed.

use crate::error::{Error, Result};
use crate::units::UnitTable;

/// Default diffuse colour of every shape (light grey)
pub const DEFAULT_COLOR: [f64; 3] = [0.7, 0.7, 0.7];

/// Configuration for one or more conversions
///
/// # Example
///
/// ```
/// use threemf_x3d::ConversionConfig;
///
/// let config = ConversionConfig::new()
///     .with_color([0.6, 0.6, 0.9])
///     .with_unit("inch", 0.0254);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    color: [f64; 3],
    units: UnitTable,
}

impl ConversionConfig {
    /// Default configuration: grey shapes, millimeter and meter units
    pub fn new() -> Self {
        Self {
            color: DEFAULT_COLOR,
            units: UnitTable::default(),
        }
    }

    /// Set the diffuse colour shared by all shapes (RGB, each in `[0, 1]`)
    pub fn with_color(mut self, color: [f64; 3]) -> Self {
        self.color = color;
        self
    }

    /// Register an additional unit, or override a default one
    pub fn with_unit(mut self, name: impl Into<String>, conversion_factor: f64) -> Self {
        self.units = self.units.with_unit(name, conversion_factor);
        self
    }

    /// Replace the whole unit table
    pub fn with_units(mut self, units: UnitTable) -> Self {
        self.units = units;
        self
    }

    /// Diffuse colour
    pub fn color(&self) -> [f64; 3] {
        self.color
    }

    /// Unit table
    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Check colour range and unit factors
    pub fn validate(&self) -> Result<()> {
        if let Some(c) = self.color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(Error::InvalidConfig(format!(
                "color component {} is outside [0, 1]",
                c
            )));
        }
        if let Some(u) = self
            .units
            .units()
            .iter()
            .find(|u| !(u.conversion_factor.is_finite() && u.conversion_factor > 0.0))
        {
            return Err(Error::InvalidConfig(format!(
                "unit '{}' has invalid conversion factor {}",
                u.name, u.conversion_factor
            )));
        }
        Ok(())
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConversionConfig::default();
        assert_eq!(config.color(), DEFAULT_COLOR);
        assert!(config.units().lookup("millimeter").is_ok());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chaining() {
        let config = ConversionConfig::new()
            .with_color([0.1, 0.2, 0.3])
            .with_unit("centimeter", 0.01);
        assert_eq!(config.color(), [0.1, 0.2, 0.3]);
        assert_eq!(
            config.units().lookup("centimeter").unwrap().conversion_factor,
            0.01
        );
    }

    #[test]
    fn test_rejects_out_of_range_color() {
        let err = ConversionConfig::new()
            .with_color([0.5, 1.5, 0.5])
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_unit_factor() {
        let config = ConversionConfig::new().with_unit("bogus", 0.0);
        assert!(config.validate().is_err());
        let config = ConversionConfig::new().with_units(UnitTable::empty().with_unit("x", f64::NAN));
        assert!(config.validate().is_err());
    }
}
