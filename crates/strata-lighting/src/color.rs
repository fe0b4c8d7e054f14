/// Linear RGB in `0..=1`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a table colour stored as `0x00BBGGRR`.
    #[inline]
    pub fn from_bgr(v: u32) -> Self {
        Self {
            r: (v & 0xff) as f32 / 255.0,
            g: ((v >> 8) & 0xff) as f32 / 255.0,
            b: ((v >> 16) & 0xff) as f32 / 255.0,
        }
    }

    #[inline]
    pub fn mix(self, other: Color, t: f32) -> Color {
        Color {
            r: strata_geom::mix(self.r, other.r, t),
            g: strata_geom::mix(self.g, other.g, t),
            b: strata_geom::mix(self.b, other.b, t),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
