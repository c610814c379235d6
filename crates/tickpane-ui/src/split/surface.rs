//! The split pane as seen from the host toolkit.
//!
//! [`SplitSurface`] is the seam between the container and whatever native
//! split widget the host provides. [`BasicSplitPane`] is a self-contained
//! implementation that keeps its own bounds and invalidation flags, and
//! [`QuantizedSplit`] wraps any surface so that every location written to it
//! lands on the grid.

use bitflags::bitflags;
use tickpane_core::geometry::{Rect, Size};

use super::types::{Axis, Orientation, Quantum};

bitflags! {
    /// Pending work on a split pane, consumed by the host's next pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayoutFlags: u8 {
        /// Child bounds must be recomputed.
        const LAYOUT = 0b0000_0001;
        /// The divider must be repainted.
        const PAINT  = 0b0000_0010;
    }
}

impl LayoutFlags {
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.contains(Self::LAYOUT)
    }

    #[inline]
    pub fn needs_paint(&self) -> bool {
        self.contains(Self::PAINT)
    }
}

/// Bounds of the two panes and the divider between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRects {
    pub first: Rect<i32>,
    pub divider: Rect<i32>,
    pub second: Rect<i32>,
}

/// Calculate pane and divider bounds for a split of `size`.
///
/// The divider starts at `location` along the split axis and is
/// `divider_size` thick. Pane sizes never go negative, and coordinates
/// saturate instead of overflowing for locations set before layout.
pub fn calculate_split_rects(
    size: Size<i32>,
    orientation: Orientation,
    location: i32,
    divider_size: i32,
) -> SplitRects {
    match orientation {
        Orientation::Horizontal => {
            let second_x = location.saturating_add(divider_size);
            SplitRects {
                first: Rect::new(0, 0, location.max(0), size.height),
                divider: Rect::new(location, 0, divider_size, size.height),
                second: Rect::new(
                    second_x,
                    0,
                    size.width.saturating_sub(second_x).max(0),
                    size.height,
                ),
            }
        }
        Orientation::Vertical => {
            let second_y = location.saturating_add(divider_size);
            SplitRects {
                first: Rect::new(0, 0, size.width, location.max(0)),
                divider: Rect::new(0, location, size.width, divider_size),
                second: Rect::new(
                    0,
                    second_y,
                    size.width,
                    size.height.saturating_sub(second_y).max(0),
                ),
            }
        }
    }
}

/// Host-provided split pane.
pub trait SplitSurface {
    fn orientation(&self) -> Orientation;

    /// Current bounds of the whole split pane.
    fn size(&self) -> Size<i32>;

    fn set_size(&mut self, size: Size<i32>);

    fn divider_location(&self) -> i32;

    /// Move the divider. Implementations clamp out-of-range values.
    fn set_divider_location(&mut self, location: i32);

    /// Visual thickness of the divider.
    fn divider_size(&self) -> i32;

    fn set_divider_size(&mut self, size: i32);

    /// Whether child panes follow the divider while it is being dragged.
    fn is_continuous_layout(&self) -> bool;

    fn set_continuous_layout(&mut self, continuous: bool);

    /// Ask the host to re-measure and repaint on its next pass.
    fn request_relayout(&mut self);

    fn split_rects(&self) -> SplitRects {
        calculate_split_rects(
            self.size(),
            self.orientation(),
            self.divider_location(),
            self.divider_size(),
        )
    }
}

/// Reference [`SplitSurface`] that tracks its own state.
#[derive(Debug, Clone)]
pub struct BasicSplitPane {
    orientation: Orientation,
    size: Size<i32>,
    location: i32,
    divider_size: i32,
    continuous_layout: bool,
    flags: LayoutFlags,
}

impl BasicSplitPane {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            size: Size::default(),
            location: 0,
            divider_size: super::DEFAULT_DIVIDER_SIZE,
            continuous_layout: false,
            flags: LayoutFlags::LAYOUT | LayoutFlags::PAINT,
        }
    }

    /// Pending invalidation flags.
    pub fn layout_flags(&self) -> LayoutFlags {
        self.flags
    }

    /// Return and clear the pending flags. Called by the host after a pass.
    pub fn take_layout_flags(&mut self) -> LayoutFlags {
        std::mem::replace(&mut self.flags, LayoutFlags::empty())
    }

    fn extent(&self) -> i32 {
        match self.orientation.axis() {
            Axis::X => self.size.width,
            Axis::Y => self.size.height,
        }
    }

    /// Clamp into the range the divider can occupy. Before the first layout
    /// (zero extent) only negative values are corrected.
    fn clamp_location(&self, location: i32) -> i32 {
        let extent = self.extent();
        if extent <= 0 {
            return location.max(0);
        }
        location.clamp(0, (extent - self.divider_size).max(0))
    }
}

impl Default for BasicSplitPane {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl SplitSurface for BasicSplitPane {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn size(&self) -> Size<i32> {
        self.size
    }

    fn set_size(&mut self, size: Size<i32>) {
        if size != self.size {
            self.size = size;
            self.location = self.clamp_location(self.location);
            self.flags |= LayoutFlags::LAYOUT | LayoutFlags::PAINT;
        }
    }

    fn divider_location(&self) -> i32 {
        self.location
    }

    fn set_divider_location(&mut self, location: i32) {
        let clamped = self.clamp_location(location);
        if clamped != self.location {
            self.location = clamped;
            self.flags |= LayoutFlags::LAYOUT | LayoutFlags::PAINT;
        }
    }

    fn divider_size(&self) -> i32 {
        self.divider_size
    }

    fn set_divider_size(&mut self, size: i32) {
        if size != self.divider_size {
            self.divider_size = size.max(0);
            self.location = self.clamp_location(self.location);
            self.flags |= LayoutFlags::LAYOUT | LayoutFlags::PAINT;
        }
    }

    fn is_continuous_layout(&self) -> bool {
        self.continuous_layout
    }

    fn set_continuous_layout(&mut self, continuous: bool) {
        self.continuous_layout = continuous;
    }

    fn request_relayout(&mut self) {
        self.flags |= LayoutFlags::LAYOUT | LayoutFlags::PAINT;
    }
}

/// A [`SplitSurface`] whose divider only rests on grid lines.
///
/// Every location written through [`SplitSurface::set_divider_location`] is
/// snapped with the quantum of the axis the divider moves along before it
/// reaches the wrapped surface. The other axis' quantum is kept but unused.
#[derive(Debug, Clone)]
pub struct QuantizedSplit<S> {
    inner: S,
    x_quantum: Quantum,
    y_quantum: Quantum,
}

impl<S: SplitSurface> QuantizedSplit<S> {
    pub fn new(inner: S, x_quantum: Quantum, y_quantum: Quantum) -> Self {
        Self {
            inner,
            x_quantum,
            y_quantum,
        }
    }

    pub fn quantum(&self, axis: Axis) -> Quantum {
        match axis {
            Axis::X => self.x_quantum,
            Axis::Y => self.y_quantum,
        }
    }

    /// Quantum of the axis the divider moves along.
    pub fn active_quantum(&self) -> Quantum {
        self.quantum(self.inner.orientation().axis())
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SplitSurface> SplitSurface for QuantizedSplit<S> {
    fn orientation(&self) -> Orientation {
        self.inner.orientation()
    }

    fn size(&self) -> Size<i32> {
        self.inner.size()
    }

    fn set_size(&mut self, size: Size<i32>) {
        self.inner.set_size(size);
    }

    fn divider_location(&self) -> i32 {
        self.inner.divider_location()
    }

    fn set_divider_location(&mut self, location: i32) {
        let snapped = self.active_quantum().snap(location);
        tracing::trace!(location, snapped, "quantized divider location");
        self.inner.set_divider_location(snapped);
    }

    fn divider_size(&self) -> i32 {
        self.inner.divider_size()
    }

    fn set_divider_size(&mut self, size: i32) {
        self.inner.set_divider_size(size);
    }

    fn is_continuous_layout(&self) -> bool {
        self.inner.is_continuous_layout()
    }

    fn set_continuous_layout(&mut self, continuous: bool) {
        self.inner.set_continuous_layout(continuous);
    }

    fn request_relayout(&mut self) {
        self.inner.request_relayout();
    }
}
