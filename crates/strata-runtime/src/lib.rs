//! Periodic area/light resolution around the camera and the state it publishes.
#![forbid(unsafe_code)]

mod area;
mod clock;
mod context;
mod slot;

use strata_geom::Vec3;

pub use area::resolve_zone_area;
pub use clock::DayNightClock;
pub use context::{AreaUpdateContext, DEFAULT_UPDATE_PERIOD, LightState, TickEnv};
pub use slot::LightStateSlot;

pub trait CameraProvider {
    fn camera_position(&self) -> Vec3;
}

pub trait DayNightClockProvider {
    /// Seconds since midnight, `0..86400`.
    fn seconds_of_day(&self) -> f32;
}

pub trait ConfigFlags {
    fn force_default_light(&self) -> bool;
}

impl CameraProvider for Vec3 {
    fn camera_position(&self) -> Vec3 {
        *self
    }
}

impl ConfigFlags for bool {
    fn force_default_light(&self) -> bool {
        *self
    }
}
