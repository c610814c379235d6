//! SplitContainer - two panes and a divider that snaps to a grid.

use std::rc::Rc;

use tickpane_core::geometry::{Pos, Rect, Size};
use tickpane_core::profiling::profile_function;
use tickpane_render::PaintSurface;

use super::config::SplitConfig;
use super::handle::{DividerMetrics, DragHandle};
use super::layout::SplitLayout;
use super::surface::{BasicSplitPane, QuantizedSplit, SplitRects, SplitSurface};
use super::types::{Axis, DEFAULT_DRAG_HANDLE_SIZE, NodeId, Orientation, Quantum};
use crate::error::SplitResult;
use crate::event::PointerEvent;
use crate::theme::{Border, Theme, ThemeProvider};

/// A split container whose divider rests on multiples of a per-axis tick.
///
/// Locations are snapped by truncating toward zero, so a divider dragged
/// to 7px on a 5px grid lands on 5, never on 10. While a drag is in
/// progress the divider follows the pointer freely; the snap happens when
/// the location is committed.
pub struct SplitContainer<S = BasicSplitPane> {
    split: QuantizedSplit<S>,
    first: Option<NodeId>,
    second: Option<NodeId>,
    drag_handle_size: i32,
    theme: Rc<dyn ThemeProvider>,
    layout: SplitLayout,
}

impl SplitContainer {
    /// Horizontal split, unconstrained grid, 10px divider.
    ///
    /// Continuous layout starts off: the divider follows the pointer and
    /// snaps on release. Turn it on with [`SplitContainer::set_continuous_layout`]
    /// to snap on every drag step.
    pub fn new() -> Self {
        Self::with_orientation(Orientation::Horizontal)
    }

    /// Same defaults as [`SplitContainer::new`], continuous layout off.
    pub fn with_orientation(orientation: Orientation) -> Self {
        Self::from_surface(
            BasicSplitPane::new(orientation),
            Quantum::ONE,
            Quantum::ONE,
            Rc::new(Theme::default()),
        )
    }

    /// Split with both children and a tick per axis.
    ///
    /// The divider and its drag handle are both as thick as the tick of the
    /// axis the divider moves along.
    ///
    /// # Panics
    ///
    /// Panics if either tick is below 1. Use [`SplitContainer::from_config`]
    /// to get an error instead.
    ///
    /// Continuous layout starts off; see [`SplitConfig::continuous_layout()`].
    pub fn with_children(
        orientation: Orientation,
        first: NodeId,
        second: NodeId,
        x_tick: i32,
        y_tick: i32,
    ) -> Self {
        let config = SplitConfig::new(orientation).ticks(x_tick, y_tick);
        match Self::from_config(&config, first, second, Rc::new(Theme::default())) {
            Ok(container) => container,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn from_config(
        config: &SplitConfig,
        first: NodeId,
        second: NodeId,
        theme: Rc<dyn ThemeProvider>,
    ) -> SplitResult<Self> {
        let (x_quantum, y_quantum) = config.quanta()?;

        let mut surface = BasicSplitPane::new(config.orientation);
        surface.set_divider_size(config.resolved_divider_size());
        surface.set_continuous_layout(config.continuous_layout);

        let mut container = Self::from_surface(surface, x_quantum, y_quantum, theme);
        container.first = Some(first);
        container.second = Some(second);
        container.drag_handle_size = config.resolved_drag_handle_size();
        Ok(container)
    }
}

impl Default for SplitContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SplitSurface> SplitContainer<S> {
    /// Wrap a host split pane. Its orientation and divider size are kept.
    pub fn from_surface(
        surface: S,
        x_quantum: Quantum,
        y_quantum: Quantum,
        theme: Rc<dyn ThemeProvider>,
    ) -> Self {
        let layout = SplitLayout::install(theme.as_ref(), 0);
        let mut split = QuantizedSplit::new(surface, x_quantum, y_quantum);
        split.request_relayout();

        Self {
            split,
            first: None,
            second: None,
            drag_handle_size: DEFAULT_DRAG_HANDLE_SIZE,
            theme,
            layout,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.split.orientation()
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first
    }

    pub fn second_child(&self) -> Option<NodeId> {
        self.second
    }

    pub fn set_children(&mut self, first: Option<NodeId>, second: Option<NodeId>) {
        self.first = first;
        self.second = second;
        self.split.request_relayout();
    }

    pub fn quantum(&self, axis: Axis) -> Quantum {
        self.split.quantum(axis)
    }

    /// Move the divider to the grid line at or before `location`.
    ///
    /// Values outside the pane are clamped by the host surface.
    pub fn set_divider_position(&mut self, location: i32) {
        self.split.set_divider_location(location);
    }

    pub fn divider_position(&self) -> i32 {
        self.split.divider_location()
    }

    /// Visual divider thickness.
    pub fn divider_size(&self) -> i32 {
        self.split.divider_size()
    }

    pub fn set_divider_size(&mut self, size: i32) {
        self.split.set_divider_size(size);
    }

    /// Interactive divider thickness, used for hit testing and painting.
    pub fn drag_handle_size(&self) -> i32 {
        self.drag_handle_size
    }

    pub fn set_drag_handle_size(&mut self, size: i32) {
        tracing::trace!(size, "drag handle resized");
        self.drag_handle_size = size;
        self.split.request_relayout();
    }

    pub fn is_continuous_layout(&self) -> bool {
        self.split.is_continuous_layout()
    }

    pub fn set_continuous_layout(&mut self, continuous: bool) {
        self.split.set_continuous_layout(continuous);
    }

    /// Called by the host when it lays the container out.
    pub fn set_bounds(&mut self, width: i32, height: i32) {
        self.split.set_size(Size::new(width, height));
    }

    pub fn size(&self) -> Size<i32> {
        self.split.size()
    }

    pub fn split_rects(&self) -> SplitRects {
        self.split.split_rects()
    }

    pub fn surface(&self) -> &S {
        self.split.inner()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.split.inner_mut()
    }

    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    pub fn theme(&self) -> &Rc<dyn ThemeProvider> {
        &self.theme
    }

    /// Switch theme. The new colors show up through a fresh layout delegate.
    pub fn set_theme(&mut self, theme: Rc<dyn ThemeProvider>) {
        self.theme = theme;
        self.refresh_appearance();
    }

    /// Reinstall the layout delegate and divider renderer, then relayout.
    ///
    /// Children, orientation, quanta and sizes are untouched. A drag in
    /// progress is dropped along with the old divider.
    pub fn refresh_appearance(&mut self) {
        let generation = self.layout.generation() + 1;
        self.layout = SplitLayout::install(self.theme.as_ref(), generation);
        self.split.request_relayout();
        tracing::debug!(generation, "split layout delegate reinstalled");
    }

    /// Forward a host border request to the divider, which ignores it.
    pub fn set_divider_border(&mut self, border: Option<Border>) {
        self.layout.divider_mut().set_border(border);
    }

    pub fn divider_metrics(&self) -> DividerMetrics {
        DividerMetrics {
            orientation: self.orientation(),
            handle_size: self.drag_handle_size,
            size: self.split_rects().divider.size(),
        }
    }

    /// Paint the divider in its own local coordinates.
    ///
    /// Hosts translate `surface` to [`SplitRects::divider`] first.
    pub fn paint_divider(&self, surface: &mut dyn PaintSurface) {
        self.layout.paint_divider(&self.divider_metrics(), surface);
    }

    /// Region that starts a drag when pressed.
    pub fn handle_bounds(&self) -> Rect<i32> {
        let location = self.divider_position();
        let size = self.size();
        match self.orientation() {
            Orientation::Horizontal => Rect::new(location, 0, self.drag_handle_size, size.height),
            Orientation::Vertical => Rect::new(0, location, size.width, self.drag_handle_size),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.layout.divider().drag().is_dragging()
    }

    /// Where the divider currently follows the pointer, before snapping.
    pub fn drag_preview_location(&self) -> Option<i32> {
        self.layout.divider().drag().preview_location()
    }

    /// Drive the divider drag gesture. Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        profile_function!();

        let axis = self.orientation().axis();
        let along = |pos: Pos<i32>| match axis {
            Axis::X => pos.x,
            Axis::Y => pos.y,
        };

        match event {
            PointerEvent::Pressed(pos) => {
                if self.is_dragging() || !self.handle_bounds().contains(pos) {
                    return false;
                }
                self.layout
                    .divider_mut()
                    .begin_drag(along(pos), &self.split);
                tracing::debug!(location = self.divider_position(), "divider drag started");
                true
            }
            PointerEvent::Moved(pos) => {
                let divider = self.layout.divider_mut();
                let Some(location) = divider.drag().location_for_pointer(along(pos)) else {
                    return false;
                };
                divider.drag_divider_to(location, &mut self.split);
                true
            }
            PointerEvent::Released(pos) => {
                let divider = self.layout.divider_mut();
                let Some(location) = divider.drag().location_for_pointer(along(pos)) else {
                    return false;
                };
                divider.finish_dragging_to(location, &mut self.split);
                tracing::debug!(
                    requested = location,
                    committed = self.divider_position(),
                    "divider drag finished"
                );
                true
            }
            PointerEvent::Cancelled => {
                let cancelled = self.layout.divider_mut().cancel_drag(&mut self.split);
                if cancelled {
                    tracing::debug!(
                        restored = self.divider_position(),
                        "divider drag cancelled"
                    );
                }
                cancelled
            }
        }
    }
}
