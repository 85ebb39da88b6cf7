//! Computational core of an interactive 3D globe viewer.
//!
//! Three independent, stateless pieces: a coordinate mapper between unit
//! sphere points, latitude/longitude and deep-link camera orientations; an
//! area-preserving cube-to-sphere mesh builder; and a low-precision solar
//! ephemeris used to light the globe. The hosting renderer is expected to do
//! all windowing, picking and texture work itself and only consume the plain
//! numeric results from here.

pub mod camera;
pub mod config;
pub mod constants;
pub mod coords;
pub mod deeplink;
pub mod geometry;
pub mod mesh;
pub mod solar;

pub use camera::CameraOrientation;
pub use config::ViewerConfig;
pub use coords::GeoCoordinate;
pub use deeplink::BookmarkFields;
pub use mesh::{GeometryError, SphereMeshData};
pub use solar::{SolarEphemeris, sun_light_direction};
