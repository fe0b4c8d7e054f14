//! Loaded terrain: a sparse set of chunks, each a fixed 16×16 grid of height cells.

use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;
use strata_geom::Vec3;

use crate::consts::{CELL_TOTAL_GRID_SIZE, MAP_CELLS_PER_CHUNK};
use crate::coords::{self, GridLocation};
use crate::error::TerrainError;

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub heights: [f32; CELL_TOTAL_GRID_SIZE],
    pub area_id: u16,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            heights: [0.0; CELL_TOTAL_GRID_SIZE],
            area_id: 0,
        }
    }
}

impl Cell {
    pub fn flat(height: f32, area_id: u16) -> Self {
        Self {
            heights: [height; CELL_TOTAL_GRID_SIZE],
            area_id,
        }
    }

    #[inline]
    pub fn height(&self, vertex_id: u16) -> f32 {
        self.heights[vertex_id as usize]
    }
}

#[derive(Clone, Debug)]
pub struct Chunk {
    cells: Box<[Cell]>,
}

impl Chunk {
    /// Builds a chunk from row-major cells; missing cells are filled with flat zero cells and
    /// extras are dropped.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let mut c = cells;
        if c.len() != MAP_CELLS_PER_CHUNK {
            c.resize(MAP_CELLS_PER_CHUNK, Cell::default());
        }
        Chunk {
            cells: c.into_boxed_slice(),
        }
    }

    pub fn flat(height: f32, area_id: u16) -> Self {
        Self::from_cells(vec![Cell::flat(height, area_id); MAP_CELLS_PER_CHUNK])
    }

    #[inline]
    pub fn cell(&self, cell_id: u16) -> Option<&Cell> {
        self.cells.get(cell_id as usize)
    }

    #[inline]
    pub fn cell_mut(&mut self, cell_id: u16) -> Option<&mut Cell> {
        self.cells.get_mut(cell_id as usize)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[derive(Clone, Debug, Default)]
pub struct Map {
    pub id: u16,
    chunks: HashMap<u16, Chunk>,
}

impl Map {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            chunks: HashMap::new(),
        }
    }

    /// Inserts or replaces a chunk, returning the previous one.
    pub fn insert_chunk(&mut self, chunk_id: u16, chunk: Chunk) -> Option<Chunk> {
        self.chunks.insert(chunk_id, chunk)
    }

    #[inline]
    pub fn chunk(&self, chunk_id: u16) -> Option<&Chunk> {
        self.chunks.get(&chunk_id)
    }

    #[inline]
    pub fn chunk_mut(&mut self, chunk_id: u16) -> Option<&mut Chunk> {
        self.chunks.get_mut(&chunk_id)
    }

    #[inline]
    pub fn contains_chunk(&self, chunk_id: u16) -> bool {
        self.chunks.contains_key(&chunk_id)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Loaded chunk ids in ascending order.
    pub fn chunk_ids(&self) -> Vec<u16> {
        let mut ids: Vec<u16> = self.chunks.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Resolves a world position to its grid location and owning cell.
    pub fn locate(&self, pos: Vec3) -> Result<(GridLocation, &Cell), TerrainError> {
        let not_found = || {
            let (x, y) = coords::chunk_grid_coord(pos);
            TerrainError::ChunkNotFound { x, y }
        };
        let loc = GridLocation::from_world(pos).ok_or_else(not_found)?;
        let cell = self
            .chunk(loc.chunk_id)
            .and_then(|chunk| chunk.cell(loc.cell_id))
            .ok_or_else(not_found)?;
        Ok((loc, cell))
    }

    /// Area id of the cell under a world position.
    pub fn area_id_at(&self, pos: Vec3) -> Option<u16> {
        self.locate(pos).ok().map(|(_, cell)| cell.area_id)
    }
}

/// Shared slot holding the active map.
///
/// Queries clone the `Arc` and run against that snapshot; a load swaps the whole map in one
/// step so readers never observe a partially loaded map.
#[derive(Default)]
pub struct MapHandle {
    current: RwLock<Option<Arc<Map>>>,
}

impl MapHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fully loaded map, returning the one it replaces.
    pub fn install(&self, map: Map) -> Option<Arc<Map>> {
        log::info!(
            "installing map {} with {} chunk(s)",
            map.id,
            map.chunk_count()
        );
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        slot.replace(Arc::new(map))
    }

    pub fn unload(&self) -> Option<Arc<Map>> {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let prev = slot.take();
        if let Some(ref m) = prev {
            log::info!("unloaded map {}", m.id);
        }
        prev
    }

    pub fn current(&self) -> Option<Arc<Map>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self) -> Result<Arc<Map>, TerrainError> {
        self.current().ok_or(TerrainError::NoMap)
    }
}
