//! Global bounding box accumulation

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// Axis-aligned bounds of every placed item, in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalBounds {
    /// Minimum corner
    pub min: Point3<f64>,
    /// Maximum corner
    pub max: Point3<f64>,
}

impl GlobalBounds {
    /// Midpoint of the box
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge lengths along x, y, z
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }
}

/// Collects per-item extremal corners until all items are placed
///
/// Only each item's min and max corner are kept, not every transformed
/// point, so the accumulator grows with the number of items rather than the
/// amount of geometry.
#[derive(Debug, Clone, Default)]
pub struct BoundsAccumulator {
    corners: Vec<Point3<f64>>,
}

impl BoundsAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one item's transformed bounding box
    pub fn push(&mut self, min: Point3<f64>, max: Point3<f64>) {
        self.corners.push(min);
        self.corners.push(max);
    }

    /// True if no item has been recorded
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Component-wise min/max over all recorded corners
    ///
    /// Fails with [`Error::EmptyScene`] when nothing was recorded.
    pub fn finish(&self) -> Result<GlobalBounds> {
        let (first, rest) = self.corners.split_first().ok_or(Error::EmptyScene)?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Ok(GlobalBounds { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_componentwise() {
        let mut acc = BoundsAccumulator::new();
        acc.push(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 5.0, 1.0));
        acc.push(Point3::new(0.0, 1.0, 0.0), Point3::new(3.0, 2.0, 2.0));

        let bounds = acc.finish().unwrap();
        assert_eq!(bounds.min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(3.0, 5.0, 2.0));
        assert_eq!(bounds.center(), Point3::new(1.0, 2.5, 1.0));
        assert_eq!(bounds.size(), Vector3::new(4.0, 5.0, 2.0));
    }

    #[test]
    fn test_empty_is_error() {
        let acc = BoundsAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.finish().unwrap_err(), Error::EmptyScene);
    }
}
