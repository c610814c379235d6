//! Grid-snapping split container.
//!
//! - [`SplitContainer`]: the public widget, quantizes divider locations
//! - [`SplitLayout`]: layout delegate, recreated on every appearance refresh
//! - [`SplitDividerRenderer`]: flat two-tone divider installed by the delegate
//! - [`SplitSurface`] / [`DragHandle`]: seams to the host toolkit, with
//!   [`BasicSplitPane`] and [`BasicDivider`] as stock implementations
//!
//! # Quick Start
//!
//! ```
//! use tickpane_core::geometry::Pos;
//! use tickpane_ui::{NodeId, Orientation, PointerEvent, SplitContainer};
//!
//! let mut split = SplitContainer::with_children(
//!     Orientation::Horizontal,
//!     NodeId(1),
//!     NodeId(2),
//!     10,
//!     10,
//! );
//! split.set_bounds(400, 300);
//! split.set_divider_position(100);
//!
//! // Grab the divider and drop it 37px to the right.
//! split.handle_event(PointerEvent::Pressed(Pos::new(103, 50)));
//! split.handle_event(PointerEvent::Moved(Pos::new(140, 50)));
//! split.handle_event(PointerEvent::Released(Pos::new(140, 50)));
//! assert_eq!(split.divider_position(), 130);
//! ```

mod config;
mod container;
mod divider;
mod handle;
mod layout;
mod surface;
mod types;

pub use config::SplitConfig;
pub use container::SplitContainer;
pub use divider::SplitDividerRenderer;
pub use handle::{BasicDivider, DividerDrag, DividerMetrics, DragHandle, DragState};
pub use layout::SplitLayout;
pub use surface::{
    BasicSplitPane, LayoutFlags, QuantizedSplit, SplitRects, SplitSurface, calculate_split_rects,
};
pub use types::{
    ACCENT_STROKE_WIDTH, Axis, DEFAULT_DIVIDER_SIZE, DEFAULT_DRAG_HANDLE_SIZE, NodeId,
    Orientation, Quantum, quantize,
};
