//! Noise-driven stand-in terrain for the CLI and benches.

use fastnoise_lite::{FastNoiseLite, NoiseType};
use strata_terrain::consts::{MAP_CELLS_PER_CHUNK, MAP_CHUNKS_PER_MAP_STRIDE};
use strata_terrain::coords::{adt_to_world, cell_adt_origin, chunk_id, vertex_cell_offset};
use strata_terrain::{Cell, Chunk, Map, align_borders};

use super::config::TerrainConfig;

pub struct TerrainGen {
    noise: FastNoiseLite,
    base_height: f32,
    amplitude: f32,
}

impl TerrainGen {
    pub fn new(cfg: &TerrainConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(cfg.seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(cfg.frequency));
        Self {
            noise,
            base_height: cfg.base_height,
            amplitude: cfg.amplitude,
        }
    }

    #[inline]
    pub fn height_at(&self, x: f32, y: f32) -> f32 {
        self.base_height + self.amplitude * self.noise.get_noise_2d(x, y)
    }

    fn cell(&self, chunk: u16, cell_id: u16, area_id: u16) -> Cell {
        let origin = cell_adt_origin(chunk, cell_id);
        let mut cell = Cell::flat(0.0, area_id);
        for (v, h) in cell.heights.iter_mut().enumerate() {
            let w = adt_to_world(origin + vertex_cell_offset(v as u16), 0.0);
            *h = self.height_at(w.x, w.y);
        }
        cell
    }

    pub fn chunk(&self, chunk: u16, area_id: u16) -> Chunk {
        Chunk::from_cells(
            (0..MAP_CELLS_PER_CHUNK as u16)
                .map(|c| self.cell(chunk, c, area_id))
                .collect(),
        )
    }
}

/// Generates a square of `cfg.chunks` chunks centred on the map and aligns its seams.
pub fn build_map(cfg: &TerrainConfig) -> Map {
    let terrain = TerrainGen::new(cfg);
    let side = cfg.chunks.clamp(1, MAP_CHUNKS_PER_MAP_STRIDE);
    let first = MAP_CHUNKS_PER_MAP_STRIDE / 2 - side / 2;
    let mut map = Map::new(cfg.map_id);
    let mut k = 0usize;
    for cy in first..first + side {
        for cx in first..first + side {
            let area_id = if cfg.area_ids.is_empty() {
                0
            } else {
                cfg.area_ids[k % cfg.area_ids.len()]
            };
            let id = chunk_id(cx, cy);
            map.insert_chunk(id, terrain.chunk(id, area_id));
            k += 1;
        }
    }
    let report = align_borders(&mut map);
    log::info!(
        "generated map {}: {}x{} chunk(s) from seed {}, {} seam sample(s) adjusted",
        map.id,
        side,
        side,
        cfg.seed,
        report.samples_changed
    );
    map
}
