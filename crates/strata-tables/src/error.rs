use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("band {id} is malformed: {reason}")]
    MalformedBand { id: u32, reason: String },
    #[error("{table} row {id} references missing {target} row {target_id}")]
    MissingRow {
        table: &'static str,
        id: u32,
        target: &'static str,
        target_id: u32,
    },
    #[error("{table} row {id} is defined more than once")]
    DuplicateRow { table: &'static str, id: u32 },
    #[error("light {id} has inner falloff {inner} beyond outer falloff {outer}")]
    BadFalloff { id: u16, inner: f32, outer: f32 },
    #[error("light params id must be at least 1")]
    ZeroParamsId,
    #[error("failed to parse tables: {0}")]
    Parse(String),
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl From<toml::de::Error> for TableError {
    fn from(e: toml::de::Error) -> Self {
        TableError::Parse(e.to_string())
    }
}
