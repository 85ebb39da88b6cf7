use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_EPOCH_JD};
use crate::coords::wrap_degrees;
use chrono::{DateTime, Datelike, Timelike, Utc};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Julian date (UTC) for a given timestamp, day fraction included.
///
/// Standard Gregorian calendar to JD conversion; UT1 is taken equal to UTC,
/// which is fine for lighting a globe.
pub fn julian_date(instant: DateTime<Utc>) -> f64 {
    let mut year = instant.year();
    let mut month = instant.month() as i32;
    let day = instant.day() as i32;

    let hour = instant.hour() as f64;
    let minute = instant.minute() as f64;
    let second = instant.second() as f64 + instant.nanosecond() as f64 * 1e-9;
    let day_fraction = (hour + (minute + second / 60.0) / 60.0) / 24.0;

    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let century = (year as f64 / 100.0).floor();
    let gregorian_offset = 2.0 - century + (century / 4.0).floor();

    (365.25 * (year as f64 + 4716.0)).floor()
        + (30.6001 * ((month + 1) as f64)).floor()
        + day as f64
        + gregorian_offset
        - 1524.5
        + day_fraction
}

/// The geographic point directly facing the sun at some instant, in degrees.
///
/// Stateless function of time; recompute it every frame, it is a handful of
/// trig calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarEphemeris {
    pub sub_solar_longitude: f64,
    pub sub_solar_latitude: f64,
}

impl SolarEphemeris {
    /// Low-precision solar position, accurate to roughly 0.01 degrees.
    ///
    /// Mean anomaly and longitude give the sun's apparent ecliptic
    /// longitude; with the mean obliquity that yields right ascension and
    /// declination, and subtracting Greenwich mean sidereal time turns right
    /// ascension into a geographic longitude.
    pub fn at(instant: DateTime<Utc>) -> Self {
        let d = julian_date(instant) - J2000_EPOCH_JD;

        let mean_anomaly = wrap_degrees(357.529 + 0.98560028 * d).to_radians();
        let mean_longitude = wrap_degrees(280.459 + 0.98564736 * d);
        let ecliptic_longitude = wrap_degrees(
            mean_longitude + 1.915 * mean_anomaly.sin() + 0.020 * (2.0 * mean_anomaly).sin(),
        )
        .to_radians();
        let obliquity = (23.439 - 0.000_000_36 * d).to_radians();

        let right_ascension =
            (obliquity.cos() * ecliptic_longitude.sin()).atan2(ecliptic_longitude.cos());
        let declination = (obliquity.sin() * ecliptic_longitude.sin()).asin();

        let t = d / DAYS_PER_JULIAN_CENTURY;
        let gmst = wrap_degrees(
            280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38_710_000.0,
        );

        Self {
            sub_solar_longitude: wrap_degrees(right_ascension.to_degrees() - gmst),
            sub_solar_latitude: declination.to_degrees(),
        }
    }
}

/// Per-texture-asset offsets (degrees) that align the rendered texture's
/// prime meridian with geographic zero. Calibration data, not physics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LightCalibration {
    pub phi_offset: f64,
    pub theta_offset: f64,
}

/// Unit direction from the globe's center toward the sun, for orienting a
/// directional light. Azimuth is measured from +Z toward +X around the +Y
/// axis, matching the cube-map layout in [`crate::geometry`].
pub fn sun_light_direction(ephemeris: &SolarEphemeris, calibration: &LightCalibration) -> DVec3 {
    let theta = (ephemeris.sub_solar_longitude + calibration.theta_offset).to_radians();
    let phi = (90.0 - ephemeris.sub_solar_latitude + calibration.phi_offset).to_radians();

    DVec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn test_julian_date_j2000_noon() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_date(t) - 2451545.0).abs() < 1e-9);
    }

    #[test]
    fn test_julian_date_day_fraction() {
        let noon = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap();
        assert!((julian_date(evening) - julian_date(noon) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_julian_date_leap_day() {
        let feb_29 = Utc.with_ymd_and_hms(2000, 2, 29, 0, 0, 0).unwrap();
        let mar_01 = Utc.with_ymd_and_hms(2000, 3, 1, 0, 0, 0).unwrap();
        assert!((julian_date(mar_01) - julian_date(feb_29) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sub_solar_latitude_near_southern_solstice() {
        // Near J2000 the sun stands over the Tropic of Capricorn; cross-check
        // against ephemeris tables as a band, not an exact value.
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let ephemeris = SolarEphemeris::at(t);
        assert!(
            (-23.5..=-22.0).contains(&ephemeris.sub_solar_latitude),
            "sub-solar latitude {} outside solstice band",
            ephemeris.sub_solar_latitude
        );
        // Noon UTC: the sub-solar point sits close to the Greenwich meridian,
        // offset only by the equation of time.
        assert!(ephemeris.sub_solar_longitude.abs() < 5.0);
    }

    #[test]
    fn test_sub_solar_latitude_near_equinox() {
        let t = Utc.with_ymd_and_hms(2000, 3, 20, 7, 35, 0).unwrap();
        let ephemeris = SolarEphemeris::at(t);
        assert!(ephemeris.sub_solar_latitude.abs() < 1.0);
    }

    #[rstest]
    #[case(2000, 1, 1, 12)]
    #[case(2012, 7, 4, 0)]
    #[case(2026, 12, 21, 18)]
    fn test_ephemeris_in_range(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
    ) {
        let t = Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap();
        let ephemeris = SolarEphemeris::at(t);
        assert!((-90.0..=90.0).contains(&ephemeris.sub_solar_latitude));
        assert!((-180.0..=180.0).contains(&ephemeris.sub_solar_longitude));
    }

    #[test]
    fn test_ephemeris_is_deterministic() {
        let t = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
        assert_eq!(SolarEphemeris::at(t), SolarEphemeris::at(t));
    }

    #[test]
    fn test_light_direction_is_unit() {
        let t = Utc.with_ymd_and_hms(2024, 8, 1, 15, 30, 0).unwrap();
        let direction = sun_light_direction(&SolarEphemeris::at(t), &LightCalibration::default());
        assert!((direction.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_light_direction_axes() {
        let over_meridian = SolarEphemeris {
            sub_solar_longitude: 0.0,
            sub_solar_latitude: 0.0,
        };
        let direction = sun_light_direction(&over_meridian, &LightCalibration::default());
        assert!((direction - DVec3::Z).length() < 1e-9);

        let over_pole = SolarEphemeris {
            sub_solar_longitude: 0.0,
            sub_solar_latitude: 90.0,
        };
        let direction = sun_light_direction(&over_pole, &LightCalibration::default());
        assert!((direction - DVec3::Y).length() < 1e-9);
    }

    #[test]
    fn test_theta_offset_rotates_azimuth() {
        let ephemeris = SolarEphemeris {
            sub_solar_longitude: 0.0,
            sub_solar_latitude: 0.0,
        };
        let calibration = LightCalibration {
            phi_offset: 0.0,
            theta_offset: 90.0,
        };
        let direction = sun_light_direction(&ephemeris, &calibration);
        assert!((direction - DVec3::X).length() < 1e-9);
    }
}
