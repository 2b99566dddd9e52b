//! # SHRDLURN Renderer
//!
//! Lays the board grid and the stacked blocks out as 3-D shapes on a rendering surface.
//! Each render pass clears the surface and rebuilds it: board tiles first, then the blocks
//! in painter's order.
//!
//! The surface itself is a collaborator (`RenderSurface`). `Scene` is the in-memory
//! implementation; it can be projected into a JSON-serialisable `RenderFrame` that a
//! frontend canvas draws without any 3-D knowledge of its own.

pub mod board;
pub mod error;
pub mod painter;
pub mod projection;
pub mod render_data;
pub mod renderer;
pub mod surface;

pub use error::RenderError;
pub use projection::IsoProjection;
pub use render_data::{RenderFrame, RenderPolygon};
pub use renderer::BoardRenderer;
pub use surface::{RenderSurface, Scene, SceneItem};
