use std::cell::Cell as StdCell;

use strata_geom::Vec3;
use strata_lighting::{Color, sun_direction};
use strata_runtime::{
    AreaUpdateContext, CameraProvider, DayNightClock, DayNightClockProvider, LightStateSlot,
    TickEnv, resolve_zone_area,
};
use strata_tables::{ColorAttribute, TableStore};
use strata_terrain::{Chunk, Map};

const CENTRE_CHUNK: u16 = 32 + 32 * 64;
const NEXT_CHUNK: u16 = 33 + 32 * 64;

const TABLES: &str = r#"
[[areas]]
id = 10
name = "Goldshire"

[[areas]]
id = 11
parent_id = 10
name = "Lion's Pride Inn"

[[light_params]]
id = 1
[light_params.colors]
ambient = [[0, 0xff0000]]

[[light_params]]
id = 2
[light_params.colors]
ambient = [[0, 0x0000ff]]

[[lights]]
id = 1
map_id = 3
position = [0.0, 0.0, 0.0]
params_id = 1

[[lights]]
id = 2
map_id = 3
position = [-10.0, -10.0, 0.0]
falloff = [5.0, 20.0]
params_id = 2
"#;

fn tables() -> TableStore {
    TableStore::from_toml_str(TABLES).unwrap()
}

fn map() -> Map {
    let mut map = Map::new(3);
    map.insert_chunk(CENTRE_CHUNK, Chunk::flat(0.0, 11));
    map.insert_chunk(NEXT_CHUNK, Chunk::flat(0.0, 10));
    map
}

// A camera whose position can be moved between ticks.
struct MovingCamera(StdCell<Vec3>);

impl CameraProvider for MovingCamera {
    fn camera_position(&self) -> Vec3 {
        self.0.get()
    }
}

#[test]
fn zone_and_area_follow_the_parent_chain() {
    let (map, t) = (map(), tables());
    // Inside the centre chunk: area 11 belongs to zone 10.
    assert_eq!(resolve_zone_area(&map, &t, Vec3::new(-10.0, -10.0, 0.0)), (10, 11));
    // One chunk over in ADT x is one chunk towards -Y in world space.
    let next = Vec3::new(-10.0, -540.0, 0.0);
    assert_eq!(resolve_zone_area(&map, &t, next), (10, 0));
    // No terrain
    assert_eq!(resolve_zone_area(&map, &t, Vec3::new(5000.0, 5000.0, 0.0)), (0, 0));
}

#[test]
fn unknown_area_rows_resolve_to_zero() {
    let mut map = Map::new(3);
    map.insert_chunk(CENTRE_CHUNK, Chunk::flat(0.0, 99));
    assert_eq!(resolve_zone_area(&map, &tables(), Vec3::new(-1.0, -1.0, 0.0)), (0, 0));
}

#[test]
fn sub_area_with_missing_parent_resolves_to_zero() {
    let t = TableStore::from_toml_str(
        r#"
[[areas]]
id = 11
parent_id = 500
name = "Orphaned Glade"
"#,
    )
    .unwrap();
    let mut map = Map::new(3);
    map.insert_chunk(CENTRE_CHUNK, Chunk::flat(0.0, 11));
    assert_eq!(resolve_zone_area(&map, &t, Vec3::new(-1.0, -1.0, 0.0)), (0, 0));
}

#[test]
fn tick_waits_for_a_full_period_and_carries_the_remainder() {
    let (map, t) = (map(), tables());
    let cam = Vec3::new(-10.0, -10.0, 0.0);
    let clock = DayNightClock::new(0.0, 1.0);
    let env = TickEnv {
        camera: &cam,
        clock: &clock,
        flags: &false,
    };
    let mut ctx = AreaUpdateContext::new(0.25);
    assert!(ctx.tick(0.125, &map, &t, &env).is_none());
    assert!(ctx.tick(0.25, &map, &t, &env).is_some());
    // 0.125 carried over from the previous tick.
    assert!(ctx.tick(0.125, &map, &t, &env).is_some());
    assert!(ctx.tick(0.125, &map, &t, &env).is_none());
}

#[test]
fn non_finite_steps_do_not_stall_the_timer() {
    let (map, t) = (map(), tables());
    let cam = Vec3::new(-10.0, -10.0, 0.0);
    let clock = DayNightClock::new(0.0, 1.0);
    let env = TickEnv {
        camera: &cam,
        clock: &clock,
        flags: &false,
    };
    let mut ctx = AreaUpdateContext::new(0.25);
    for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0] {
        assert!(ctx.tick(dt, &map, &t, &env).is_none());
    }
    assert!(ctx.tick(0.125, &map, &t, &env).is_none());
    assert!(ctx.tick(0.125, &map, &t, &env).is_some());
    assert!(ctx.tick(0.125, &map, &t, &env).is_none());
}

#[test]
fn tick_resolves_light_and_tracks_zone_changes() {
    let (map, t) = (map(), tables());
    let cam = MovingCamera(StdCell::new(Vec3::new(-10.0, -10.0, 0.0)));
    let clock = DayNightClock::new(21_600.0, 1.0);
    let env = TickEnv {
        camera: &cam,
        clock: &clock,
        flags: &false,
    };
    let mut ctx = AreaUpdateContext::default();
    let state = *ctx.tick(1.0, &map, &t, &env).unwrap();
    assert_eq!((state.zone_id, state.area_id), (10, 11));
    assert_eq!(state.map_id, 3);
    assert_eq!(state.seconds_of_day, 21_600);
    // Standing on the local light.
    assert_eq!(state.light.color(ColorAttribute::Ambient), Color::new(1.0, 0.0, 0.0));
    assert_eq!(state.sun_direction, sun_direction(21_600.0));

    cam.0.set(Vec3::new(-10.0, -540.0, 0.0));
    let state = *ctx.tick(1.0, &map, &t, &env).unwrap();
    assert_eq!((ctx.zone_id(), ctx.area_id()), (10, 0));
    assert_eq!(state.light.color(ColorAttribute::Ambient), Color::new(0.0, 0.0, 1.0));
    assert_eq!(ctx.last_state(), Some(&state));
}

#[test]
fn forced_default_light_skips_local_lights() {
    let (map, t) = (map(), tables());
    let cam = Vec3::new(-10.0, -10.0, 0.0);
    let clock = DayNightClock::default();
    let env = TickEnv {
        camera: &cam,
        clock: &clock,
        flags: &true,
    };
    let mut ctx = AreaUpdateContext::default();
    let state = ctx.tick(1.0, &map, &t, &env).unwrap();
    assert_eq!(state.light.color(ColorAttribute::Ambient), Color::new(0.0, 0.0, 1.0));
    assert_eq!(clock.seconds_of_day(), 43_200.0);
}

#[test]
fn slot_publishes_whole_states() {
    let (map, t) = (map(), tables());
    let cam = Vec3::new(-10.0, -10.0, 0.0);
    let clock = DayNightClock::default();
    let env = TickEnv {
        camera: &cam,
        clock: &clock,
        flags: &false,
    };
    let slot = LightStateSlot::new();
    assert!(slot.snapshot().is_none());
    let rx = slot.subscribe();

    let mut ctx = AreaUpdateContext::default();
    let state = *ctx.tick(1.0, &map, &t, &env).unwrap();
    slot.publish(state);
    assert_eq!(slot.snapshot().as_deref(), Some(&state));
    assert_eq!(rx.try_recv().ok().as_deref(), Some(&state));

    drop(rx);
    // Dropped subscribers are pruned on the next publish.
    slot.publish(state);
    assert_eq!(slot.snapshot().as_deref(), Some(&state));
}
