//! In-memory table store and the accessor trait light resolution reads through.

use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use strata_geom::Vec3;

use crate::band::{FloatBand, IntBand};
use crate::config::{LightDef, LightParamsDef, TablesConfig};
use crate::error::TableError;
use crate::rows::{AreaRow, ColorAttribute, FloatAttribute, LightParamsRow, LightRow};

/// Read access to the area and light tables by integer id.
pub trait LightTables {
    fn area(&self, id: u16) -> Option<&AreaRow>;
    fn light(&self, id: u16) -> Option<&LightRow>;
    /// Every light of a map in table order, the default light included.
    fn lights_for_map(&self, map_id: u16) -> &[LightRow];
    fn light_params(&self, id: u16) -> Option<&LightParamsRow>;
    fn int_band(&self, id: u32) -> Option<&IntBand>;
    fn float_band(&self, id: u32) -> Option<&FloatBand>;

    /// The map's light at the origin, else map 0's.
    fn default_light(&self, map_id: u16) -> Option<&LightRow> {
        let find = |map: u16| self.lights_for_map(map).iter().find(|l| l.is_default());
        find(map_id).or_else(|| if map_id != 0 { find(0) } else { None })
    }
}

#[derive(Debug, Default)]
pub struct TableStore {
    areas: HashMap<u16, AreaRow>,
    lights_by_map: HashMap<u16, Vec<LightRow>>,
    // light id -> (map id, index in that map's list)
    light_index: HashMap<u16, (u16, usize)>,
    params: HashMap<u16, LightParamsRow>,
    int_bands: HashMap<u32, IntBand>,
    float_bands: HashMap<u32, FloatBand>,
}

impl TableStore {
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let s = fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let store = Self::from_toml_str(&s)?;
        log::info!("loaded tables from {}", path.display());
        Ok(store)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, TableError> {
        let cfg: TablesConfig = toml::from_str(s)?;
        Self::from_config(&cfg)
    }

    /// Validates and indexes a parsed tables file. Any malformed row rejects the whole file.
    pub fn from_config(cfg: &TablesConfig) -> Result<Self, TableError> {
        let mut store = TableStore::default();

        for def in &cfg.areas {
            match store.areas.entry(def.id) {
                Entry::Occupied(_) => {
                    return Err(TableError::DuplicateRow {
                        table: "area",
                        id: def.id as u32,
                    });
                }
                Entry::Vacant(v) => {
                    v.insert(AreaRow {
                        id: def.id,
                        parent_id: def.parent_id,
                        name: def.name.clone(),
                    });
                }
            }
        }
        for area in store.areas.values() {
            if area.parent_id != 0 && !store.areas.contains_key(&area.parent_id) {
                log::warn!(
                    "area {} ({}) has unknown parent {}",
                    area.id,
                    area.name,
                    area.parent_id
                );
            }
        }

        for def in &cfg.light_params {
            store.insert_params(def)?;
        }

        for def in &cfg.lights {
            store.insert_light(def)?;
        }

        log::debug!(
            "tables: {} area(s), {} light(s) over {} map(s), {} params, {} int/{} float band(s)",
            store.areas.len(),
            store.light_index.len(),
            store.lights_by_map.len(),
            store.params.len(),
            store.int_bands.len(),
            store.float_bands.len()
        );
        Ok(store)
    }

    fn insert_params(&mut self, def: &LightParamsDef) -> Result<(), TableError> {
        if def.id == 0 {
            return Err(TableError::ZeroParamsId);
        }
        if self.params.contains_key(&def.id) {
            return Err(TableError::DuplicateRow {
                table: "light_params",
                id: def.id as u32,
            });
        }
        for attr in ColorAttribute::ALL {
            if let Some(pairs) = def.colors.get(attr) {
                let id = attr.band_id(def.id);
                self.int_bands.insert(id, IntBand::from_pairs(id, pairs)?);
            }
        }
        for attr in FloatAttribute::ALL {
            if let Some(pairs) = def.floats.get(attr) {
                let id = attr.band_id(def.id);
                self.float_bands.insert(id, FloatBand::from_pairs(id, pairs)?);
            }
        }
        self.params.insert(
            def.id,
            LightParamsRow {
                id: def.id,
                name: def.name.clone(),
            },
        );
        Ok(())
    }

    fn insert_light(&mut self, def: &LightDef) -> Result<(), TableError> {
        if self.light_index.contains_key(&def.id) {
            return Err(TableError::DuplicateRow {
                table: "light",
                id: def.id as u32,
            });
        }
        let [inner, outer] = def.falloff;
        if inner > outer {
            return Err(TableError::BadFalloff {
                id: def.id,
                inner,
                outer,
            });
        }
        if def.params_id == 0 {
            return Err(TableError::ZeroParamsId);
        }
        if !self.params.contains_key(&def.params_id) {
            return Err(TableError::MissingRow {
                table: "light",
                id: def.id as u32,
                target: "light_params",
                target_id: def.params_id as u32,
            });
        }
        let [x, y, z] = def.position;
        let row = LightRow {
            id: def.id,
            map_id: def.map_id,
            position: Vec3::new(x, y, z),
            falloff_inner: inner,
            falloff_outer: outer,
            params_id: def.params_id,
        };
        let list = self.lights_by_map.entry(def.map_id).or_default();
        self.light_index.insert(def.id, (def.map_id, list.len()));
        list.push(row);
        Ok(())
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn light_count(&self) -> usize {
        self.light_index.len()
    }
}

impl LightTables for TableStore {
    fn area(&self, id: u16) -> Option<&AreaRow> {
        self.areas.get(&id)
    }

    fn light(&self, id: u16) -> Option<&LightRow> {
        let &(map, idx) = self.light_index.get(&id)?;
        self.lights_by_map.get(&map)?.get(idx)
    }

    fn lights_for_map(&self, map_id: u16) -> &[LightRow] {
        self.lights_by_map
            .get(&map_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn light_params(&self, id: u16) -> Option<&LightParamsRow> {
        self.params.get(&id)
    }

    fn int_band(&self, id: u32) -> Option<&IntBand> {
        self.int_bands.get(&id)
    }

    fn float_band(&self, id: u32) -> Option<&FloatBand> {
        self.float_bands.get(&id)
    }
}
