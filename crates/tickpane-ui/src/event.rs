//! Pointer input delivered to a split container.

use tickpane_core::geometry::Pos;

/// Pointer events in the container's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Pressed(Pos<i32>),
    /// Pointer moved, with or without a button held.
    Moved(Pos<i32>),
    /// Primary button released.
    Released(Pos<i32>),
    /// The gesture was interrupted (focus loss, escape, grab stolen).
    Cancelled,
}
