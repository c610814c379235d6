//! Drag a grid-snapping divider with synthetic pointer events.
//!
//! Run with `RUST_LOG=trace` to see every snapped location.

use std::rc::Rc;

use tickpane_core::config::{Config, ProfilingMode};
use tickpane_core::profiling;
use tickpane_core::geometry::Pos;
use tickpane_render::{DrawList, PaintCommand};
use tickpane_ui::{
    NodeId, Orientation, PointerEvent, SplitConfig, SplitContainer, SplitResult, Theme,
};

fn main() -> SplitResult<()> {
    tickpane_core::init(&Config::default().profiling(ProfilingMode::On));

    let config = SplitConfig::new(Orientation::Horizontal)
        .ticks(32, 8)
        .drag_handle_size(12);
    let mut split = SplitContainer::from_config(&config, NodeId(1), NodeId(2), Rc::new(Theme::dark()))?;
    split.set_bounds(800, 600);
    split.set_divider_position(250);
    tracing::info!(position = split.divider_position(), "initial divider");

    split.handle_event(PointerEvent::Pressed(Pos::new(230, 300)));
    for x in [260, 301, 333, 410, 477] {
        profiling::new_frame();
        split.handle_event(PointerEvent::Moved(Pos::new(x, 300)));
        tracing::info!(
            preview = split.drag_preview_location(),
            position = split.divider_position(),
            "pointer moved"
        );
    }
    split.handle_event(PointerEvent::Released(Pos::new(477, 300)));
    tracing::info!(position = split.divider_position(), "released");

    split.set_theme(Rc::new(Theme::light()));

    let mut list = DrawList::new();
    split.paint_divider(&mut list);
    for command in list.commands() {
        match command {
            PaintCommand::FillRect { rect, color } => {
                tracing::info!(?rect, ?color, "divider band");
            }
            PaintCommand::Line { from, to, stroke, .. } => {
                tracing::info!(%from, %to, width = stroke.width, "accent line");
            }
        }
    }

    Ok(())
}
