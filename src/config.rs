use crate::constants::DEEP_LINK_ALTITUDE;
use crate::solar::LightCalibration;
use log::debug;
use serde::{Deserialize, Serialize};

/// Tunable parameters for the globe viewer core.
///
/// A plain value passed into call sites; there is deliberately no
/// process-wide config singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub geometry: GeometryConfig,
    pub lighting: LightingConfig,
    pub deep_link: DeepLinkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Subdivisions per cube face edge of the globe mesh.
    pub face_resolution: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Polar-angle calibration offset in degrees, tuned per texture asset.
    pub phi_offset: f64,
    /// Azimuthal calibration offset in degrees, tuned per texture asset.
    pub theta_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepLinkConfig {
    /// Camera altitude encoded into bookmark links.
    pub altitude: f64,
    pub planet_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig {
                face_resolution: 64,
            },
            lighting: LightingConfig {
                phi_offset: 0.0,
                theta_offset: 0.0,
            },
            deep_link: DeepLinkConfig {
                altitude: DEEP_LINK_ALTITUDE,
                planet_name: "earth".to_string(),
            },
        }
    }
}

impl ViewerConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ViewerConfig = toml::from_str(&content)?;
        debug!("loaded viewer config from {path}");
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl LightingConfig {
    pub fn calibration(&self) -> LightCalibration {
        LightCalibration {
            phi_offset: self.phi_offset,
            theta_offset: self.theta_offset,
        }
    }
}
