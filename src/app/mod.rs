pub mod assets;
pub mod commands;
pub mod config;
pub mod watchers;
pub mod worldgen;
