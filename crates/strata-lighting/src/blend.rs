//! Distance-weighted blending of the lights around a position.

use strata_geom::Vec3;
use strata_tables::{LightRow, LightTables};

use crate::keyframe::{LightSample, sample_light};

/// Blend weight of a light at distance `d`: full inside the inner radius, fading linearly
/// to zero at the outer radius, `None` beyond it.
#[inline]
pub fn falloff_weight(d: f32, inner: f32, outer: f32) -> Option<f32> {
    if d <= inner {
        Some(1.0)
    } else if d <= outer {
        Some((outer - d) / (outer - inner))
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightCandidate {
    pub light_id: u16,
    pub distance: f32,
    pub weight: f32,
    pub sample: LightSample,
}

/// Non-default lights of `map_id` that reach `pos`, farthest first. Equal distances keep
/// table order.
pub fn gather_candidates<T: LightTables + ?Sized>(
    tables: &T,
    map_id: u16,
    pos: Vec3,
    now: u32,
) -> Vec<LightCandidate> {
    let mut out: Vec<LightCandidate> = tables
        .lights_for_map(map_id)
        .iter()
        .filter(|l| !l.is_default())
        .filter_map(|l| {
            let distance = l.position.distance(pos);
            let weight = falloff_weight(distance, l.falloff_inner, l.falloff_outer)?;
            Some(LightCandidate {
                light_id: l.id,
                distance,
                weight,
                sample: sample_light(tables, l, now),
            })
        })
        .collect();
    // Stable sort keeps table order for ties.
    out.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    out
}

fn default_sample<T: LightTables + ?Sized>(tables: &T, map_id: u16, now: u32) -> LightSample {
    match tables.default_light(map_id) {
        Some(light) => sample_light(tables, light, now),
        None => {
            log::trace!(target: "area", "map {map_id} has no default light");
            LightSample::default()
        }
    }
}

/// Light at `pos`: the default light's sample with every reaching light mixed in, nearest
/// last so it dominates. With `force_default` only the default light is used.
pub fn resolve_light<T: LightTables + ?Sized>(
    tables: &T,
    map_id: u16,
    pos: Vec3,
    now: u32,
    force_default: bool,
) -> LightSample {
    let base = default_sample(tables, map_id, now);
    if force_default {
        return base;
    }
    gather_candidates(tables, map_id, pos, now)
        .iter()
        .fold(base, |acc, c| acc.mix(&c.sample, c.weight))
}

/// Lights for `map_id` whose outer radius contains `pos`, unsorted; convenience for tooling.
pub fn lights_in_range<'a, T: LightTables + ?Sized>(
    tables: &'a T,
    map_id: u16,
    pos: Vec3,
) -> impl Iterator<Item = &'a LightRow> + 'a {
    tables
        .lights_for_map(map_id)
        .iter()
        .filter(move |l| !l.is_default() && l.position.distance(pos) <= l.falloff_outer)
}
