//! Sampling day-cycle bands at a time of day.

use strata_tables::{
    Band, ColorAttribute, FloatAttribute, Keyframe, LightRow, LightTables, SECONDS_PER_DAY,
};

use crate::color::Color;

/// The two keyframes bracketing `now` and the progress between them.
///
/// `None` before the first keyframe of the day. Past the last keyframe the segment runs to
/// the first keyframe of the next day.
fn segment<T: Copy>(band: &Band<T>, now: u32) -> Option<(Keyframe<T>, Keyframe<T>, f32)> {
    let frames = band.keyframes();
    let idx = frames.iter().rposition(|k| k.time <= now)?;
    let cur = frames[idx];
    let next_idx = (idx + 1) % frames.len();
    let next = frames[next_idx];
    let span = if next_idx > idx {
        next.time - cur.time
    } else {
        (SECONDS_PER_DAY - cur.time) + next.time
    };
    let t = if span == 0 {
        0.0
    } else {
        (now - cur.time) as f32 / span as f32
    };
    Some((cur, next, t))
}

/// Colour of an int band at `now` seconds since midnight. Black before the first keyframe.
pub fn sample_color(band: &Band<u32>, now: u32) -> Color {
    match segment(band, now) {
        Some((cur, next, t)) => Color::from_bgr(cur.value).mix(Color::from_bgr(next.value), t),
        None => Color::BLACK,
    }
}

/// Value of a float band at `now`; zero before the first keyframe.
pub fn sample_float(band: &Band<f32>, now: u32) -> f32 {
    match segment(band, now) {
        Some((cur, next, t)) => strata_geom::mix(cur.value, next.value, t),
        None => 0.0,
    }
}

/// Every blended attribute of one light at one time of day.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightSample {
    pub colors: [Color; ColorAttribute::COUNT],
    pub floats: [f32; FloatAttribute::COUNT],
}

impl LightSample {
    #[inline]
    pub fn color(&self, attr: ColorAttribute) -> Color {
        self.colors[attr.index()]
    }

    #[inline]
    pub fn float(&self, attr: FloatAttribute) -> f32 {
        self.floats[attr.index()]
    }

    pub fn mix(&self, other: &LightSample, t: f32) -> LightSample {
        let mut out = *self;
        for (c, o) in out.colors.iter_mut().zip(other.colors) {
            *c = c.mix(o, t);
        }
        for (f, o) in out.floats.iter_mut().zip(other.floats) {
            *f = strata_geom::mix(*f, o, t);
        }
        out
    }
}

/// Samples every band of `light`'s params row. Missing bands read as black / zero.
pub fn sample_light<T: LightTables + ?Sized>(
    tables: &T,
    light: &LightRow,
    now: u32,
) -> LightSample {
    let now = now % SECONDS_PER_DAY;
    let mut sample = LightSample::default();
    for attr in ColorAttribute::ALL {
        if let Some(band) = tables.int_band(attr.band_id(light.params_id)) {
            sample.colors[attr.index()] = sample_color(band, now);
        }
    }
    for attr in FloatAttribute::ALL {
        if let Some(band) = tables.float_band(attr.band_id(light.params_id)) {
            sample.floats[attr.index()] = sample_float(band, now);
        }
    }
    sample
}
