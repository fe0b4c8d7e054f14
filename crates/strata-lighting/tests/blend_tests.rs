use strata_geom::Vec3;
use strata_lighting::{Color, gather_candidates, lights_in_range, resolve_light, sample_light};
use strata_tables::{ColorAttribute, FloatAttribute, LightTables, TableStore};

// Default light is blue all day; light 2 is red, light 3 is green.
const TABLES: &str = r#"
[[light_params]]
id = 1
[light_params.colors]
ambient = [[0, 0xff0000]]
diffuse = [[0, 0x000000], [43200, 0xffffff]]
[light_params.floats]
fog_end = [[0, 100.0]]

[[light_params]]
id = 2
[light_params.colors]
ambient = [[0, 0x0000ff]]
[light_params.floats]
fog_end = [[0, 300.0]]

[[light_params]]
id = 3
[light_params.colors]
ambient = [[0, 0x00ff00]]

[[lights]]
id = 1
position = [0.0, 0.0, 0.0]
params_id = 1

[[lights]]
id = 2
position = [100.0, 0.0, 0.0]
falloff = [10.0, 30.0]
params_id = 2

[[lights]]
id = 3
position = [120.0, 0.0, 0.0]
falloff = [50.0, 60.0]
params_id = 3

[[lights]]
id = 4
map_id = 5
position = [0.0, 0.0, 0.0]
params_id = 3
"#;

fn tables() -> TableStore {
    TableStore::from_toml_str(TABLES).unwrap()
}

fn close(a: Color, b: Color) -> bool {
    (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
}

#[test]
fn far_from_every_light_uses_the_default() {
    let t = tables();
    let s = resolve_light(&t, 0, Vec3::new(-500.0, 0.0, 0.0), 0, false);
    assert_eq!(s.color(ColorAttribute::Ambient), Color::new(0.0, 0.0, 1.0));
    assert_eq!(s.float(FloatAttribute::FogEnd), 100.0);
}

#[test]
fn candidates_are_sorted_farthest_first() {
    let t = tables();
    // 15 from light 2, 5 from light 3.
    let pos = Vec3::new(115.0, 0.0, 0.0);
    let c = gather_candidates(&t, 0, pos, 0);
    let ids: Vec<u16> = c.iter().map(|c| c.light_id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert!((c[0].weight - 0.75).abs() < 1e-6);
    assert_eq!(c[1].weight, 1.0);
}

#[test]
fn nearest_full_weight_light_wins() {
    let t = tables();
    let s = resolve_light(&t, 0, Vec3::new(115.0, 0.0, 0.0), 0, false);
    // Light 3 is mixed last at weight 1.
    assert_eq!(s.color(ColorAttribute::Ambient), Color::new(0.0, 1.0, 0.0));
}

#[test]
fn partial_weight_blends_from_the_default() {
    let t = tables();
    // 20 from light 2 (weight 0.5), 40 from light 3 (weight 1.0 inside its inner radius).
    let pos = Vec3::new(80.0, 0.0, 0.0);
    let c = gather_candidates(&t, 0, pos, 0);
    assert_eq!(c.iter().map(|c| c.light_id).collect::<Vec<_>>(), vec![3, 2]);
    let s = resolve_light(&t, 0, pos, 0, false);
    let expected = Color::new(0.0, 0.0, 1.0)
        .mix(Color::new(0.0, 1.0, 0.0), 1.0)
        .mix(Color::new(1.0, 0.0, 0.0), 0.5);
    assert!(close(s.color(ColorAttribute::Ambient), expected));
    // Light 3 has no fog band, so it pulls fog towards zero.
    assert_eq!(s.float(FloatAttribute::FogEnd), 150.0);
}

#[test]
fn beyond_outer_radius_is_excluded() {
    let t = tables();
    let pos = Vec3::new(100.0, 31.0, 0.0);
    assert!(gather_candidates(&t, 0, pos, 0).iter().all(|c| c.light_id != 2));
}

#[test]
fn force_default_ignores_local_lights() {
    let t = tables();
    let s = resolve_light(&t, 0, Vec3::new(100.0, 0.0, 0.0), 0, true);
    assert_eq!(s.color(ColorAttribute::Ambient), Color::new(0.0, 0.0, 1.0));
}

#[test]
fn map_without_its_own_default_uses_map_zero() {
    let t = tables();
    let s = resolve_light(&t, 9, Vec3::ZERO, 0, false);
    assert_eq!(s.color(ColorAttribute::Ambient), Color::new(0.0, 0.0, 1.0));
    let s = resolve_light(&t, 5, Vec3::ZERO, 0, false);
    assert_eq!(s.color(ColorAttribute::Ambient), Color::new(0.0, 1.0, 0.0));
}

#[test]
fn samples_follow_time_of_day() {
    let t = tables();
    let light = t.light(1).unwrap();
    let noon = sample_light(&t, light, 43200);
    assert_eq!(noon.color(ColorAttribute::Diffuse), Color::new(1.0, 1.0, 1.0));
    let morning = sample_light(&t, light, 21600);
    assert!(close(morning.color(ColorAttribute::Diffuse), Color::new(0.5, 0.5, 0.5)));
    // Wraps past the end of the day.
    assert_eq!(sample_light(&t, light, 43200 + 86400), noon);
}

#[test]
fn lights_in_range_skip_the_default_and_distant_lights() {
    let t = tables();
    let near_both: Vec<u16> = lights_in_range(&t, 0, Vec3::new(110.0, 0.0, 0.0))
        .map(|l| l.id)
        .collect();
    assert_eq!(near_both, vec![2, 3]);
    let none: Vec<u16> = lights_in_range(&t, 0, Vec3::ZERO).map(|l| l.id).collect();
    assert!(none.is_empty());
}
