//! The divider sub-widget and its drag gesture.

use tickpane_core::geometry::{Rect, Size};
use tickpane_render::{Color, PaintSurface};

use super::surface::SplitSurface;
use super::types::Orientation;
use crate::theme::{Border, ColorRole, ThemeProvider};

/// What a divider needs to know to paint itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerMetrics {
    pub orientation: Orientation,
    /// Interactive thickness of the divider.
    pub handle_size: i32,
    /// Size of the divider widget as laid out by the host.
    pub size: Size<i32>,
}

/// State of the divider drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Location held when the press started, restored on cancel.
        origin: i32,
        /// Distance between the pointer and the divider's leading edge.
        offset: i32,
        /// Unquantized location following the pointer.
        current: i32,
    },
}

/// Drag behaviour shared by every divider.
///
/// Idle → Dragging on press, Dragging → Idle on release (commit) or cancel
/// (restore). Calls that do not fit the current state are ignored.
#[derive(Debug, Clone, Default)]
pub struct DividerDrag {
    state: DragState,
}

impl DividerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Location the divider would have if released now.
    pub fn preview_location(&self) -> Option<i32> {
        match self.state {
            DragState::Dragging { current, .. } => Some(current),
            DragState::Idle => None,
        }
    }

    /// Convert a pointer coordinate on the split axis into a divider location.
    pub fn location_for_pointer(&self, pointer: i32) -> Option<i32> {
        match self.state {
            DragState::Dragging { offset, .. } => Some(pointer.saturating_sub(offset)),
            DragState::Idle => None,
        }
    }

    /// Start a drag with the pointer at `pointer` on the split axis.
    pub fn begin(&mut self, pointer: i32, split: &dyn SplitSurface) {
        let origin = split.divider_location();
        self.state = DragState::Dragging {
            origin,
            offset: pointer.saturating_sub(origin),
            current: origin,
        };
    }

    pub fn drag_to(&mut self, location: i32, split: &mut dyn SplitSurface) {
        if let DragState::Dragging { current, .. } = &mut self.state {
            *current = location;
            if split.is_continuous_layout() {
                split.set_divider_location(location);
            }
        }
    }

    /// Commit `location`. Returns false when no drag was in progress.
    pub fn finish(&mut self, location: i32, split: &mut dyn SplitSurface) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { .. } => {
                split.set_divider_location(location);
                true
            }
            DragState::Idle => false,
        }
    }

    /// Abort and put the divider back where the drag started.
    pub fn cancel(&mut self, split: &mut dyn SplitSurface) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { origin, .. } => {
                split.set_divider_location(origin);
                true
            }
            DragState::Idle => false,
        }
    }
}

/// A divider that can be painted and dragged.
///
/// The provided drag methods are the host's stock behaviour; implementors
/// override the ones they need to customize.
pub trait DragHandle {
    fn border(&self) -> Option<Border>;

    fn set_border(&mut self, border: Option<Border>);

    fn paint(&self, metrics: &DividerMetrics, surface: &mut dyn PaintSurface);

    fn drag(&self) -> &DividerDrag;

    fn drag_mut(&mut self) -> &mut DividerDrag;

    fn begin_drag(&mut self, pointer: i32, split: &dyn SplitSurface) {
        self.drag_mut().begin(pointer, split);
    }

    fn drag_divider_to(&mut self, location: i32, split: &mut dyn SplitSurface) {
        self.drag_mut().drag_to(location, split);
    }

    fn finish_dragging_to(&mut self, location: i32, split: &mut dyn SplitSurface) -> bool {
        self.drag_mut().finish(location, split)
    }

    fn cancel_drag(&mut self, split: &mut dyn SplitSurface) -> bool {
        self.drag_mut().cancel(split)
    }
}

/// Stock divider: a filled bar with a beveled border.
#[derive(Debug, Clone)]
pub struct BasicDivider {
    background: Color,
    border: Option<Border>,
    drag: DividerDrag,
}

impl BasicDivider {
    pub fn new(theme: &dyn ThemeProvider) -> Self {
        Self {
            background: theme.color(ColorRole::Background),
            border: Some(Border::bevel(theme)),
            drag: DividerDrag::new(),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }
}

impl DragHandle for BasicDivider {
    fn border(&self) -> Option<Border> {
        self.border
    }

    fn set_border(&mut self, border: Option<Border>) {
        self.border = border;
    }

    fn paint(&self, metrics: &DividerMetrics, surface: &mut dyn PaintSurface) {
        let bounds = Rect::new(0, 0, metrics.size.width, metrics.size.height);
        surface.fill_rect(bounds, self.background);
        if let Some(border) = self.border {
            surface.stroke_rect(bounds, border.color, border.width);
        }
    }

    fn drag(&self) -> &DividerDrag {
        &self.drag
    }

    fn drag_mut(&mut self) -> &mut DividerDrag {
        &mut self.drag
    }
}
