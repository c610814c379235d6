//! Tickpane - split panes on a grid
//!
//! A two-pane split container whose divider only ever rests on multiples
//! of a per-axis tick, painted as a flat band with an accent line.
//!
//! - **Core**: logging, profiling, geometry and configuration
//! - **Render**: colors and a backend-agnostic paint surface
//! - **UI**: the split container, its divider and the theme lookup
//!
//! # Quick Start
//!
//! ```
//! use tickpane::prelude::*;
//!
//! tickpane::core::init(&Config::default());
//!
//! let mut split = SplitContainer::with_children(Orientation::Vertical, NodeId(1), NodeId(2), 1, 24);
//! split.set_bounds(640, 480);
//! split.set_divider_position(250);
//! assert_eq!(split.divider_position(), 240);
//! ```

// Re-export core types
pub use tickpane_core as core;
pub use tickpane_core::math;

#[cfg(feature = "render")]
pub use tickpane_render as render;

#[cfg(feature = "ui")]
pub use tickpane_ui as ui;

/// Prelude module for convenient imports
pub mod prelude {
    pub use tickpane_core::Config;
    pub use tickpane_core::geometry::{Pos, Rect, Size};

    #[cfg(feature = "render")]
    pub use tickpane_render::{Color, DrawList, PaintCommand, PaintSurface};

    #[cfg(feature = "ui")]
    pub use tickpane_ui::{
        Axis, NodeId, Orientation, PointerEvent, Quantum, SplitConfig, SplitContainer,
        SplitSurface, Theme, ThemeProvider,
    };
}
