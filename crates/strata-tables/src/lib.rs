//! Area and light tables: rows, keyframe bands, TOML loading, and the accessor trait the
//! light resolver reads through.
#![forbid(unsafe_code)]

pub mod band;
pub mod config;
pub mod error;
pub mod rows;
pub mod store;

pub use band::{Band, FloatBand, IntBand, Keyframe, SECONDS_PER_DAY};
pub use error::TableError;
pub use rows::{AreaRow, ColorAttribute, FloatAttribute, LightParamsRow, LightRow};
pub use store::{LightTables, TableStore};
