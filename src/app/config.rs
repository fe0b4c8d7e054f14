use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub area_update: AreaUpdateConfig,
    #[serde(default)]
    pub day_night: DayNightConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            area_update: AreaUpdateConfig::default(),
            day_night: DayNightConfig::default(),
            terrain: TerrainConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct AreaUpdateConfig {
    #[serde(default = "default_period_secs")]
    pub period_secs: f32,
    #[serde(default)]
    pub force_default_light: bool,
}
fn default_period_secs() -> f32 {
    strata_runtime::DEFAULT_UPDATE_PERIOD
}
impl Default for AreaUpdateConfig {
    fn default() -> Self {
        Self {
            period_secs: default_period_secs(),
            force_default_light: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DayNightConfig {
    #[serde(default = "default_start_seconds")]
    pub start_seconds: f32,
    /// Game seconds per real second.
    #[serde(default = "default_speed")]
    pub speed: f32,
}
fn default_start_seconds() -> f32 {
    43_200.0
}
fn default_speed() -> f32 {
    1.0
}
impl Default for DayNightConfig {
    fn default() -> Self {
        Self {
            start_seconds: default_start_seconds(),
            speed: default_speed(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TerrainConfig {
    #[serde(default = "default_map_id")]
    pub map_id: u16,
    #[serde(default = "default_seed")]
    pub seed: i32,
    /// Side length, in chunks, of the generated square around the map centre.
    #[serde(default = "default_chunks")]
    pub chunks: u16,
    #[serde(default = "default_base_height")]
    pub base_height: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    /// Area ids assigned to generated chunks in turn.
    #[serde(default = "default_area_ids")]
    pub area_ids: Vec<u16>,
}
fn default_map_id() -> u16 {
    0
}
fn default_seed() -> i32 {
    1337
}
fn default_chunks() -> u16 {
    4
}
fn default_base_height() -> f32 {
    40.0
}
fn default_amplitude() -> f32 {
    25.0
}
fn default_frequency() -> f32 {
    0.002
}
fn default_area_ids() -> Vec<u16> {
    vec![12]
}
impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            map_id: default_map_id(),
            seed: default_seed(),
            chunks: default_chunks(),
            base_height: default_base_height(),
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            area_ids: default_area_ids(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ClientConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: ClientConfig = toml::from_str(&s)?;
    Ok(cfg)
}
