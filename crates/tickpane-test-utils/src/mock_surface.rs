//! Recording split surface.

use parking_lot::Mutex;
use tickpane_core::geometry::Size;
use tickpane_ui::{Orientation, SplitSurface};

/// A call made on a [`MockSplitSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCall {
    SetSize(Size<i32>),
    SetDividerLocation(i32),
    SetDividerSize(i32),
    SetContinuousLayout(bool),
    RequestRelayout,
}

/// Split surface that stores values verbatim and logs every mutation.
///
/// No clamping is applied, so tests see exactly what the container sent.
/// The log sits behind a `Mutex` so it can be read through `&self` while
/// the surface is owned by a container.
#[derive(Debug)]
pub struct MockSplitSurface {
    orientation: Orientation,
    size: Size<i32>,
    location: i32,
    divider_size: i32,
    continuous_layout: bool,
    calls: Mutex<Vec<SurfaceCall>>,
}

impl MockSplitSurface {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            size: Size::default(),
            location: 0,
            divider_size: tickpane_ui::DEFAULT_DIVIDER_SIZE,
            continuous_layout: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Locations written through `set_divider_location`, in order.
    pub fn locations_set(&self) -> Vec<i32> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::SetDividerLocation(location) => Some(*location),
                _ => None,
            })
            .collect()
    }

    pub fn count_relayouts(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::RequestRelayout))
            .count()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().push(call);
    }
}

impl SplitSurface for MockSplitSurface {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn size(&self) -> Size<i32> {
        self.size
    }

    fn set_size(&mut self, size: Size<i32>) {
        self.record(SurfaceCall::SetSize(size));
        self.size = size;
    }

    fn divider_location(&self) -> i32 {
        self.location
    }

    fn set_divider_location(&mut self, location: i32) {
        self.record(SurfaceCall::SetDividerLocation(location));
        self.location = location;
    }

    fn divider_size(&self) -> i32 {
        self.divider_size
    }

    fn set_divider_size(&mut self, size: i32) {
        self.record(SurfaceCall::SetDividerSize(size));
        self.divider_size = size;
    }

    fn is_continuous_layout(&self) -> bool {
        self.continuous_layout
    }

    fn set_continuous_layout(&mut self, continuous: bool) {
        self.record(SurfaceCall::SetContinuousLayout(continuous));
        self.continuous_layout = continuous;
    }

    fn request_relayout(&mut self) {
        self.record(SurfaceCall::RequestRelayout);
    }
}
