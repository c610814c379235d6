//! Shared types for the split container.

use crate::error::{SplitError, SplitResult};

/// Visual divider thickness used when no tick is given.
pub const DEFAULT_DIVIDER_SIZE: i32 = 10;

/// Drag-handle thickness used when no tick is given.
pub const DEFAULT_DRAG_HANDLE_SIZE: i32 = 9;

/// Width of the accent line painted through the divider.
pub const ACCENT_STROKE_WIDTH: f32 = 3.0;

/// Node identifier of a child widget in the host's widget tree.
///
/// The container stores these as references; it never owns the children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Orientation of a split container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left/Right panes (vertical divider line)
    #[default]
    Horizontal,
    /// Top/Bottom panes (horizontal divider line)
    Vertical,
}

impl Orientation {
    /// Axis along which the divider moves.
    pub fn axis(&self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::X,
            Orientation::Vertical => Axis::Y,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// Screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Grid step in pixels, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantum(i32);

impl Quantum {
    /// Unconstrained: every pixel is a grid line.
    pub const ONE: Quantum = Quantum(1);

    /// Validate a tick for `axis`.
    pub fn new(axis: Axis, ticks: i32) -> SplitResult<Self> {
        if ticks >= 1 {
            Ok(Self(ticks))
        } else {
            Err(SplitError::InvalidQuantum { axis, value: ticks })
        }
    }

    pub fn get(&self) -> i32 {
        self.0
    }

    /// Snap `location` onto this grid. See [`quantize`].
    pub fn snap(&self, location: i32) -> i32 {
        quantize(location, self.0)
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::ONE
    }
}

/// Snap `location` to a multiple of `quantum`.
///
/// Uses truncating integer division, so the result moves toward zero:
/// `7 -> 5`, `4 -> 0`, `-3 -> 0` and `-7 -> -5` for a quantum of 5.
/// For non-negative locations the result never exceeds the input.
///
/// # Panics
///
/// Panics if `quantum` is below 1. A zero or negative tick is a caller bug,
/// not something to paper over with a default.
#[inline]
pub fn quantize(location: i32, quantum: i32) -> i32 {
    assert!(
        quantum >= 1,
        "divider quantum must be at least 1 pixel, got {quantum}"
    );
    location / quantum * quantum
}
