//! # SHRDLURN Core
//!
//! Block model, immutable board configuration, colour palette, 3-D shape geometry and the
//! painter's-algorithm block sorter used by the SHRDLURN board renderer.
//!
//! Nothing in this crate touches a rendering surface or the DOM; it only describes what the
//! board looks like.

pub mod block;
pub mod config;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod history;
pub mod palette;
pub mod sort;

pub use block::{Block, NEW_TAG};
pub use config::BoardConfig;
pub use coverage::{CoverageCategory, CoverageSpan};
pub use error::ConfigError;
pub use geometry::{Face, Point3, Shape};
pub use history::{HistoryEntry, StepKind};
pub use palette::{Color, Palette};
pub use sort::{draw_order, sort_blocks, sort_blocks_in_place};
