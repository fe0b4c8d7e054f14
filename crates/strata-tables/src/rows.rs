use strata_geom::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct AreaRow {
    pub id: u16,
    /// Owning zone, or 0 when this row is itself a zone.
    pub parent_id: u16,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRow {
    pub id: u16,
    pub map_id: u16,
    /// `(0, 0, 0)` marks the map's default light.
    pub position: Vec3,
    pub falloff_inner: f32,
    pub falloff_outer: f32,
    pub params_id: u16,
}

impl LightRow {
    #[inline]
    pub fn is_default(&self) -> bool {
        self.position == Vec3::ZERO
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightParamsRow {
    pub id: u16,
    pub name: String,
}

/// Colour attributes stored as integer bands, in band order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorAttribute {
    Ambient = 0,
    Diffuse = 1,
    SkyTop = 2,
    SkyMiddle = 3,
    SkyBand1 = 4,
    SkyBand2 = 5,
    SkySmog = 6,
}

impl ColorAttribute {
    pub const COUNT: usize = 7;
    pub const ALL: [ColorAttribute; Self::COUNT] = [
        ColorAttribute::Ambient,
        ColorAttribute::Diffuse,
        ColorAttribute::SkyTop,
        ColorAttribute::SkyMiddle,
        ColorAttribute::SkyBand1,
        ColorAttribute::SkyBand2,
        ColorAttribute::SkySmog,
    ];
    /// Int band slots reserved per light params row (not all are colours used here).
    pub const BANDS_PER_PARAMS: u32 = 18;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based id into the shared int band table.
    #[inline]
    pub fn band_id(self, params_id: u16) -> u32 {
        (params_id as u32).saturating_sub(1) * Self::BANDS_PER_PARAMS + 1 + self as u32
    }
}

/// Scalar attributes stored as float bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FloatAttribute {
    FogEnd = 0,
    FogScalar = 1,
}

impl FloatAttribute {
    pub const COUNT: usize = 2;
    pub const ALL: [FloatAttribute; Self::COUNT] =
        [FloatAttribute::FogEnd, FloatAttribute::FogScalar];
    pub const BANDS_PER_PARAMS: u32 = 6;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn band_id(self, params_id: u16) -> u32 {
        (params_id as u32).saturating_sub(1) * Self::BANDS_PER_PARAMS + 1 + self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_ids_are_one_based_blocks() {
        assert_eq!(ColorAttribute::Ambient.band_id(1), 1);
        assert_eq!(ColorAttribute::SkySmog.band_id(1), 7);
        assert_eq!(ColorAttribute::Ambient.band_id(2), 19);
        assert_eq!(FloatAttribute::FogEnd.band_id(1), 1);
        assert_eq!(FloatAttribute::FogScalar.band_id(3), 14);
    }
}
