use crate::constants::POLE_LATITUDE_LIMIT_DEG;
use crate::coords::GeoCoordinate;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Orientation a virtual camera must have to look outward from a point on the
/// sphere along the surface normal, with a consistent up vector. All angles
/// in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraOrientation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl CameraOrientation {
    /// Compute the outward-looking orientation for a geographic location.
    ///
    /// Latitude is clamped to [-90, 90] and longitude wrapped into
    /// (-180, 180] before use. The outward normal here follows the cube-map
    /// texture's east/west convention (`x = cos(lat)*sin(lon)`, no negation),
    /// which mirrors the picking convention in [`crate::coords`].
    ///
    /// Within 0.1 degrees of either pole `up x normal` collapses toward the
    /// zero vector, so a fixed fallback right vector (+X) is held there. The
    /// result is finite for every input.
    pub fn looking_out_from(geo: GeoCoordinate) -> Self {
        let geo = geo.normalized();
        let lat = geo.latitude.to_radians();
        let lon = geo.longitude.to_radians();

        let normal = DVec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos());

        let right = if geo.latitude.abs() > POLE_LATITUDE_LIMIT_DEG {
            DVec3::X
        } else {
            DVec3::Y.cross(normal).normalize()
        };
        let forward = normal.cross(right).normalize();

        // Yaw/pitch/roll extraction from the row basis [right, normal,
        // forward], written with named components rather than flat matrix
        // offsets.
        Self {
            yaw: right.z.atan2(forward.z),
            pitch: (-normal.z).atan2(normal.x.hypot(normal.y)),
            roll: normal.x.atan2(normal.y),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.yaw.is_finite() && self.pitch.is_finite() && self.roll.is_finite()
    }
}
