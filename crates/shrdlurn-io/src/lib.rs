//! # SHRDLURN I/O
//!
//! Reads and writes the JSON application configuration, and decodes the block lists,
//! command history and parser coverage the game server sends.

pub mod config;
pub mod error;
pub mod payload;

pub use config::{load_config, save_config, AppConfig};
pub use error::LoadError;
pub use payload::{read_blocks, read_coverage, read_history};
