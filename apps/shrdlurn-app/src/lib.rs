//! # SHRDLURN App
//!
//! The object the game controller talks to. `Setting` owns the two board surfaces and the
//! page binding, and exposes every render and reflector operation behind one facade.

pub mod error;
pub mod render;
pub mod session;
pub mod setting;

pub use error::AppError;
pub use render::{render_file, BoardChoice};
pub use session::GameSession;
pub use setting::Setting;
