//! The per-session area update state machine.

use strata_geom::Vec3;
use strata_lighting::{LightSample, resolve_light, sun_direction};
use strata_tables::{LightTables, SECONDS_PER_DAY};
use strata_terrain::Map;

use crate::area::resolve_zone_area;
use crate::{CameraProvider, ConfigFlags, DayNightClockProvider};

pub const DEFAULT_UPDATE_PERIOD: f32 = 1.0 / 30.0;

/// One tick's resolved environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightState {
    pub map_id: u16,
    pub zone_id: u16,
    pub area_id: u16,
    pub seconds_of_day: u32,
    pub light: LightSample,
    pub sun_direction: Vec3,
}

/// Outside collaborators read once per tick.
pub struct TickEnv<'a> {
    pub camera: &'a dyn CameraProvider,
    pub clock: &'a dyn DayNightClockProvider,
    pub flags: &'a dyn ConfigFlags,
}

pub struct AreaUpdateContext {
    period: f32,
    timer: f32,
    zone_id: u16,
    area_id: u16,
    last: Option<LightState>,
}

impl Default for AreaUpdateContext {
    fn default() -> Self {
        Self::new(DEFAULT_UPDATE_PERIOD)
    }
}

impl AreaUpdateContext {
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(f32::EPSILON),
            timer: 0.0,
            zone_id: 0,
            area_id: 0,
            last: None,
        }
    }

    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn set_period(&mut self, period: f32) {
        self.period = period.max(f32::EPSILON);
    }

    #[inline]
    pub fn zone_id(&self) -> u16 {
        self.zone_id
    }

    #[inline]
    pub fn area_id(&self) -> u16 {
        self.area_id
    }

    #[inline]
    pub fn last_state(&self) -> Option<&LightState> {
        self.last.as_ref()
    }

    /// Accumulates `dt`; once a full period has elapsed, consumes one period and resolves
    /// the environment at the camera. Returns the new state on ticks that ran.
    ///
    /// Negative or non-finite `dt` counts as zero elapsed time.
    pub fn tick<T: LightTables + ?Sized>(
        &mut self,
        dt: f32,
        map: &Map,
        tables: &T,
        env: &TickEnv<'_>,
    ) -> Option<&LightState> {
        if dt.is_finite() && dt > 0.0 {
            self.timer += dt;
        }
        if self.timer < self.period {
            return None;
        }
        self.timer -= self.period;

        let pos = env.camera.camera_position();
        let (zone_id, area_id) = resolve_zone_area(map, tables, pos);
        if (zone_id, area_id) != (self.zone_id, self.area_id) {
            log::info!(
                "entered zone {} area {} (was zone {} area {})",
                zone_id,
                area_id,
                self.zone_id,
                self.area_id
            );
            self.zone_id = zone_id;
            self.area_id = area_id;
        }

        let seconds = env.clock.seconds_of_day();
        let now = (seconds.max(0.0) as u32) % SECONDS_PER_DAY;
        let light = resolve_light(tables, map.id, pos, now, env.flags.force_default_light());
        let sun = sun_direction(seconds);
        log::trace!(
            target: "area",
            "tick at ({:.1}, {:.1}, {:.1}) t={} zone={} area={}",
            pos.x,
            pos.y,
            pos.z,
            now,
            zone_id,
            area_id
        );
        self.last = Some(LightState {
            map_id: map.id,
            zone_id,
            area_id,
            seconds_of_day: now,
            light,
            sun_direction: sun,
        });
        self.last.as_ref()
    }
}
