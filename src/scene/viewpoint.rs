//! Camera placement from the global bounds

use nalgebra::Point3;
use tracing::debug;

use super::bounds::GlobalBounds;

/// Camera height above the model, in multiples of its horizontal extent
pub const VIEWPOINT_HEIGHT_FACTOR: f64 = 8.0;

/// Description given to the derived viewpoint
pub const OVERHEAD_DESCRIPTION: &str = "Printer Overhead";

/// An X3D `Viewpoint`
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    /// Point the viewer orbits around
    pub center_of_rotation: Point3<f64>,
    /// Camera position
    pub position: Point3<f64>,
    /// Human-readable description
    pub description: String,
}

/// Place a camera straight above the middle of the bounds
///
/// The extent is the larger of the x and y sizes; height is left out so a
/// tall model does not push the camera further away than a flat one of the
/// same footprint.
pub fn derive_viewpoint(bounds: &GlobalBounds) -> Viewpoint {
    let center = bounds.center();
    let size = bounds.size();
    let extent = size.x.max(size.y);
    debug!(extent, "Viewpoint extent");

    let height = bounds.max.z + VIEWPOINT_HEIGHT_FACTOR * extent;

    Viewpoint {
        center_of_rotation: center,
        position: Point3::new(center.x, center.y, height),
        description: OVERHEAD_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overhead_viewpoint() {
        let bounds = GlobalBounds {
            min: Point3::new(-1.0, 0.0, 0.0),
            max: Point3::new(3.0, 5.0, 2.0),
        };
        let vp = derive_viewpoint(&bounds);
        assert_eq!(vp.center_of_rotation, Point3::new(1.0, 2.5, 1.0));
        // extent = max(4, 5) = 5, height = 2 + 8 * 5
        assert_eq!(vp.position, Point3::new(1.0, 2.5, 42.0));
        assert_eq!(vp.description, OVERHEAD_DESCRIPTION);
    }

    #[test]
    fn test_height_ignores_z_extent() {
        let flat = GlobalBounds {
            min: Point3::new(0.0, 0.0, 0.0),
            max: Point3::new(2.0, 1.0, 0.0),
        };
        let tall = GlobalBounds {
            min: Point3::new(0.0, 0.0, -100.0),
            max: Point3::new(2.0, 1.0, 0.0),
        };
        assert_eq!(
            derive_viewpoint(&flat).position,
            derive_viewpoint(&tall).position
        );
        assert_eq!(derive_viewpoint(&flat).position.z, 16.0);
    }

    #[test]
    fn test_single_point_bounds() {
        let p = Point3::new(3.0, 4.0, 5.0);
        let vp = derive_viewpoint(&GlobalBounds { min: p, max: p });
        assert_eq!(vp.position, p);
    }
}
