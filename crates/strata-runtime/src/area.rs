use strata_geom::Vec3;
use strata_tables::LightTables;
use strata_terrain::Map;

/// `(zone, area)` under `pos`.
///
/// An area row with a parent is a sub-area of that zone; a row without one is itself the
/// zone and the area is 0. A missing row at either level yields `(0, 0)`, as does unloaded
/// terrain.
pub fn resolve_zone_area<T: LightTables + ?Sized>(
    map: &Map,
    tables: &T,
    pos: Vec3,
) -> (u16, u16) {
    let Some(area_id) = map.area_id_at(pos) else {
        return (0, 0);
    };
    match tables.area(area_id) {
        Some(row) if row.parent_id != 0 => match tables.area(row.parent_id) {
            Some(zone) => (zone.id, row.id),
            None => (0, 0),
        },
        Some(row) => (row.id, 0),
        None => (0, 0),
    }
}
