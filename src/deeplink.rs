use crate::camera::CameraOrientation;
use crate::coords::GeoCoordinate;
use serde::{Deserialize, Serialize};

/// Numeric payload of a shareable bookmark link.
///
/// The host application assembles the final
/// `scheme://bookmarks?longitude=..&latitude=..&altitude=..&rotation=..`
/// URL; this struct only carries the numbers, all in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookmarkFields {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    /// Yaw, pitch, roll of the camera at the bookmarked location.
    pub rotation: [f64; 3],
}

impl BookmarkFields {
    pub fn for_location(
        geo: GeoCoordinate,
        orientation: CameraOrientation,
        altitude: f64,
    ) -> Self {
        let geo = geo.normalized();
        Self {
            longitude: geo.longitude.to_radians(),
            latitude: geo.latitude.to_radians(),
            altitude,
            rotation: [orientation.yaw, orientation.pitch, orientation.roll],
        }
    }

    /// The `rotation=` parameter value: yaw, pitch and roll joined by commas.
    /// The comma format is part of the link contract, so it lives here rather
    /// than in the host's URL glue.
    pub fn rotation_param(&self) -> String {
        format!(
            "{},{},{}",
            self.rotation[0], self.rotation[1], self.rotation[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_degrees_become_radians() {
        let geo = GeoCoordinate::new(45.0, -90.0);
        let orientation = CameraOrientation::looking_out_from(geo);
        let fields = BookmarkFields::for_location(geo, orientation, 2.5);

        assert!((fields.latitude - 45.0_f64.to_radians()).abs() < EPSILON);
        assert!((fields.longitude + 90.0_f64.to_radians()).abs() < EPSILON);
        assert_eq!(fields.altitude, 2.5);
        assert_eq!(
            fields.rotation,
            [orientation.yaw, orientation.pitch, orientation.roll]
        );
    }

    #[test]
    fn test_longitude_wrapped_before_encoding() {
        let geo = GeoCoordinate::new(0.0, 270.0);
        let orientation = CameraOrientation::looking_out_from(geo);
        let fields = BookmarkFields::for_location(geo, orientation, 1.0);
        assert!((fields.longitude + 90.0_f64.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_param_round_trips() {
        let fields = BookmarkFields {
            longitude: 0.1,
            latitude: 0.2,
            altitude: 2.5,
            rotation: [0.25, -1.5, 3.0e-7],
        };
        let parsed: Vec<f64> = fields
            .rotation_param()
            .split(',')
            .map(|part| part.parse().unwrap())
            .collect();
        assert_eq!(parsed, fields.rotation);
    }
}
