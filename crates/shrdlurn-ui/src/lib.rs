//! # SHRDLURN UI
//!
//! Reflects game state into the page: status line, reaction glyph, command history, step
//! and skip counters, and the "teach a new command" dialog.
//!
//! Every reflector writes through a `ViewBinding`, which maps logical `UiTarget`s to real
//! elements. `MemoryView` keeps them in memory (tests, headless use); `DomView` (feature
//! `web`) writes to the browser document.

pub mod coverage;
pub mod define;
#[cfg(feature = "web")]
pub mod dom;
pub mod error;
pub mod history;
pub mod memory;
pub mod reaction;
pub mod settings;
pub mod status;
pub mod target;
pub mod view;

#[cfg(feature = "web")]
pub use dom::DomView;
pub use define::DefineRequest;
pub use error::UiError;
pub use memory::MemoryView;
pub use reaction::{Reaction, ReactionGlyphs};
pub use settings::UiSettings;
pub use target::{ElementIds, Selector, UiTarget};
pub use view::{ElementSpec, ViewBinding, HIDDEN};
