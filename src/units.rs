//! Model units and their X3D conversion factors
//!
//! X3D's `UNIT category='length'` statement needs a name and a factor that
//! converts the unit to meters. Only units listed in the table are accepted;
//! an unknown unit is an error rather than a silent default.

use crate::error::{Error, Result};

/// A named length unit with its factor relative to meters
#[derive(Debug, Clone, PartialEq)]
pub struct UnitInfo {
    /// Unit name as used in the X3D `UNIT` statement
    pub name: String,
    /// Multiplier converting this unit to meters
    pub conversion_factor: f64,
}

/// Lookup table from 3MF `unit` attribute values to [`UnitInfo`]
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    entries: Vec<UnitInfo>,
}

impl UnitTable {
    /// An empty table
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace a unit
    pub fn with_unit(mut self, name: impl Into<String>, conversion_factor: f64) -> Self {
        let name = name.into();
        self.entries.retain(|u| u.name != name);
        self.entries.push(UnitInfo {
            name,
            conversion_factor,
        });
        self
    }

    /// Look up a unit by its 3MF name
    pub fn lookup(&self, name: &str) -> Result<&UnitInfo> {
        self.entries
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| Error::UnknownUnit(name.to_string()))
    }

    /// All known units
    pub fn units(&self) -> &[UnitInfo] {
        &self.entries
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::empty()
            .with_unit("millimeter", 0.001)
            .with_unit("meter", 1.0)
    }
}
