use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    /// No chunk is loaded at this chunk grid coordinate (which may lie outside the map).
    #[error("no chunk loaded at chunk grid ({x}, {y})")]
    ChunkNotFound { x: i32, y: i32 },
    #[error("no map is installed")]
    NoMap,
}
