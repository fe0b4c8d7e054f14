//! On-disk TOML layout for the tables file.
//!
//! ```toml
//! [[areas]]
//! id = 12
//! name = "Elwynn Forest"
//!
//! [[lights]]
//! id = 1
//! map_id = 0
//! position = [0.0, 0.0, 0.0]
//! falloff = [0.0, 0.0]
//! params_id = 1
//!
//! [[light_params]]
//! id = 1
//! name = "global"
//! [light_params.colors]
//! ambient = [[0, 0x202020], [43200, 0x808080]]
//! [light_params.floats]
//! fog_end = [[0, 600.0]]
//! ```

use serde::Deserialize;

use crate::rows::{ColorAttribute, FloatAttribute};

#[derive(Deserialize, Debug, Default)]
pub struct TablesConfig {
    #[serde(default)]
    pub areas: Vec<AreaDef>,
    #[serde(default)]
    pub lights: Vec<LightDef>,
    #[serde(default)]
    pub light_params: Vec<LightParamsDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AreaDef {
    pub id: u16,
    #[serde(default)]
    pub parent_id: u16,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LightDef {
    pub id: u16,
    #[serde(default)]
    pub map_id: u16,
    #[serde(default)]
    pub position: [f32; 3],
    /// `[inner, outer]`
    #[serde(default)]
    pub falloff: [f32; 2],
    pub params_id: u16,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LightParamsDef {
    pub id: u16,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub colors: ColorBandsDef,
    #[serde(default)]
    pub floats: FloatBandsDef,
}

/// `(seconds, 0xBBGGRR)` keyframes per colour attribute.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ColorBandsDef {
    pub ambient: Option<Vec<(u32, u32)>>,
    pub diffuse: Option<Vec<(u32, u32)>>,
    pub sky_top: Option<Vec<(u32, u32)>>,
    pub sky_middle: Option<Vec<(u32, u32)>>,
    pub sky_band1: Option<Vec<(u32, u32)>>,
    pub sky_band2: Option<Vec<(u32, u32)>>,
    pub sky_smog: Option<Vec<(u32, u32)>>,
}

impl ColorBandsDef {
    pub fn get(&self, attr: ColorAttribute) -> Option<&[(u32, u32)]> {
        let v = match attr {
            ColorAttribute::Ambient => &self.ambient,
            ColorAttribute::Diffuse => &self.diffuse,
            ColorAttribute::SkyTop => &self.sky_top,
            ColorAttribute::SkyMiddle => &self.sky_middle,
            ColorAttribute::SkyBand1 => &self.sky_band1,
            ColorAttribute::SkyBand2 => &self.sky_band2,
            ColorAttribute::SkySmog => &self.sky_smog,
        };
        v.as_deref()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct FloatBandsDef {
    pub fog_end: Option<Vec<(u32, f32)>>,
    pub fog_scalar: Option<Vec<(u32, f32)>>,
}

impl FloatBandsDef {
    pub fn get(&self, attr: FloatAttribute) -> Option<&[(u32, f32)]> {
        let v = match attr {
            FloatAttribute::FogEnd => &self.fog_end,
            FloatAttribute::FogScalar => &self.fog_scalar,
        };
        v.as_deref()
    }
}
