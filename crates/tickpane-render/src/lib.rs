//! Tickpane Render
//!
//! Backend-agnostic painting for the split widget:
//! - [`Color`]: RGBA color usable in GPU buffers
//! - [`PaintSurface`]: what a host toolkit's graphics context must offer
//! - [`DrawList`]: a surface that records [`PaintCommand`]s, used for
//!   retained rendering and for asserting paint output in tests

mod color;
mod draw_list;
mod paint;

pub use color::Color;
pub use draw_list::{DrawList, PaintCommand};
pub use paint::{PaintSurface, Stroke};
