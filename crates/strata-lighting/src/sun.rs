use strata_geom::Vec3;
use strata_tables::SECONDS_PER_DAY;

/// Polar angle at 00:00, 06:00, 12:00 and 18:00.
pub const SUN_PHI: [f32; 4] = [2.216_568_2, 1.919_862_3, 2.216_568_2, 1.919_862_3];
/// Fixed azimuth (5π/4).
pub const SUN_THETA: f32 = 3.926_991;

const QUADRANT_SECONDS: f32 = SECONDS_PER_DAY as f32 / 4.0;

/// Direction of the global light at `seconds` since midnight.
pub fn sun_direction(seconds: f32) -> Vec3 {
    let progress = seconds.rem_euclid(SECONDS_PER_DAY as f32) / QUADRANT_SECONDS;
    let seg = (progress.floor() as usize).min(3);
    let next = (seg + 1) % 4;
    let phi = strata_geom::mix(SUN_PHI[seg], SUN_PHI[next], progress - seg as f32);
    Vec3::from_spherical(SUN_THETA, phi)
}
