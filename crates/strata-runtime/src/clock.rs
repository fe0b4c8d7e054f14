use strata_tables::SECONDS_PER_DAY;

use crate::DayNightClockProvider;

const DAY: f32 = SECONDS_PER_DAY as f32;

// `rem_euclid` can round a tiny negative up to exactly `DAY`.
#[inline]
fn wrap_day(s: f32) -> f32 {
    let w = s.rem_euclid(DAY);
    if w >= DAY { 0.0 } else { w }
}

/// Game time of day, advanced by real time scaled by `speed`.
#[derive(Clone, Debug)]
pub struct DayNightClock {
    seconds: f32,
    speed: f32,
}

impl DayNightClock {
    pub fn new(start_seconds: f32, speed: f32) -> Self {
        Self {
            seconds: wrap_day(start_seconds),
            speed: speed.max(0.0),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.seconds = wrap_day(self.seconds + dt * self.speed);
    }

    pub fn set_seconds(&mut self, seconds: f32) {
        self.seconds = wrap_day(seconds);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Default for DayNightClock {
    fn default() -> Self {
        Self::new(DAY * 0.5, 1.0)
    }
}

impl DayNightClockProvider for DayNightClock {
    fn seconds_of_day(&self) -> f32 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_with_speed_and_wraps() {
        let mut c = DayNightClock::new(86_000.0, 10.0);
        c.advance(20.0);
        assert_eq!(c.seconds_of_day(), 86_200.0);
        c.advance(40.0);
        assert_eq!(c.seconds_of_day(), 200.0);
    }

    #[test]
    fn start_and_speed_are_normalised() {
        let c = DayNightClock::new(-3600.0, -2.0);
        assert_eq!(c.seconds_of_day(), 82_800.0);
        assert_eq!(c.speed(), 0.0);
    }
}
