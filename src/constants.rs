/// Julian date of the J2000.0 epoch (2000-01-01 12:00:00).
pub const J2000_EPOCH_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Latitude (degrees) beyond which the camera basis degenerates and a fixed
/// fallback right vector is used instead of `up x normal`.
pub const POLE_LATITUDE_LIMIT_DEG: f64 = 89.9;

/// Default camera altitude encoded into deep links, in world units above the
/// unit sphere.
pub const DEEP_LINK_ALTITUDE: f64 = 2.5;
