use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Wrap an angle in degrees into (-180, 180].
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// A geographic location on the unit sphere, in degrees.
///
/// Latitude is in [-90, 90], longitude in (-180, 180]. Values outside those
/// ranges are accepted by the constructors and brought back in range with
/// [`GeoCoordinate::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude clamped to [-90, 90], longitude wrapped (not clamped) into
    /// (-180, 180].
    pub fn normalized(self) -> Self {
        Self {
            latitude: self.latitude.clamp(-90.0, 90.0),
            longitude: wrap_degrees(self.longitude),
        }
    }

    /// Convert a point on (or near) the unit sphere to latitude/longitude.
    ///
    /// The caller is expected to normalize the vector first; the y component
    /// is still clamped to [-1, 1] so floating error upstream can never
    /// produce a NaN latitude.
    pub fn from_sphere_point(point: DVec3) -> Self {
        Self {
            latitude: point.y.clamp(-1.0, 1.0).asin().to_degrees(),
            longitude: (-point.x.atan2(point.z)).to_degrees(),
        }
    }

    /// The unit sphere point this coordinate was picked from.
    ///
    /// Exact inverse of [`GeoCoordinate::from_sphere_point`], which measures
    /// longitude as `-atan2(x, z)` - hence the negated sine on x. The camera
    /// basis in [`crate::camera`] uses the mirrored (`+sin`) convention of
    /// the cube-map texture instead.
    pub fn to_sphere_point(self) -> DVec3 {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        DVec3::new(-lon.sin() * lat.cos(), lat.sin(), lon.cos() * lat.cos())
    }
}
