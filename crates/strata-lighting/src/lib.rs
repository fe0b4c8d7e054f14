//! Time-of-day light sampling and distance-weighted light blending.
#![forbid(unsafe_code)]

mod blend;
mod color;
mod keyframe;
mod sun;

pub use blend::{
    LightCandidate, falloff_weight, gather_candidates, lights_in_range, resolve_light,
};
pub use color::Color;
pub use keyframe::{LightSample, sample_color, sample_float, sample_light};
pub use sun::{SUN_PHI, SUN_THETA, sun_direction};
