//! Tickpane UI - a two-pane split container that snaps to a grid
//!
//! The container quantizes every divider location to a per-axis tick and
//! paints its divider as a flat band with a centered accent line.
//!
//! The host toolkit is reached through two small traits:
//! - [`SplitSurface`]: the split pane the host lays out (location, divider
//!   size, relayout requests)
//! - [`DragHandle`]: the divider sub-widget (paint, border, drag gestures)
//!
//! [`BasicSplitPane`] and [`BasicDivider`] are reference implementations of
//! those traits, so the widget works without a live window system.
//!
//! ## Quick Start
//!
//! ```
//! use tickpane_ui::{NodeId, Orientation, SplitContainer};
//! use tickpane_render::DrawList;
//!
//! let mut split = SplitContainer::with_children(
//!     Orientation::Horizontal,
//!     NodeId(1),
//!     NodeId(2),
//!     8,
//!     16,
//! );
//! split.set_bounds(800, 600);
//! split.set_divider_position(203);
//! assert_eq!(split.divider_position(), 200);
//!
//! let mut draw_list = DrawList::new();
//! split.paint_divider(&mut draw_list);
//! assert_eq!(draw_list.len(), 2);
//! ```

pub mod error;
pub mod event;
pub mod split;
pub mod theme;

pub use error::{SplitError, SplitResult};
pub use event::PointerEvent;
pub use split::{
    ACCENT_STROKE_WIDTH, Axis, BasicDivider, BasicSplitPane, DEFAULT_DIVIDER_SIZE,
    DEFAULT_DRAG_HANDLE_SIZE, DividerDrag, DividerMetrics, DragHandle, DragState, LayoutFlags,
    NodeId, Orientation, Quantum, QuantizedSplit, SplitConfig, SplitContainer,
    SplitDividerRenderer, SplitLayout, SplitRects, SplitSurface, quantize,
};
pub use theme::{Border, ColorPalette, ColorRole, Theme, ThemeBuilder, ThemeProvider, ThemeRegistry};
