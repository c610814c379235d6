//! Paint output of the container's divider.

use std::rc::Rc;

use tickpane_core::geometry::{Pos, Rect};
use tickpane_core::math::IVec2;
use tickpane_render::{Color, DrawList, PaintCommand, Stroke};
use tickpane_ui::{
    Border, ColorRole, DragHandle, NodeId, Orientation, SplitConfig, SplitContainer, Theme,
    ThemeProvider,
};

fn painted(split: &SplitContainer) -> Vec<PaintCommand> {
    let mut list = DrawList::new();
    split.paint_divider(&mut list);
    list.take()
}

#[test]
fn test_horizontal_divider_paint() {
    let theme = Theme::dark();
    let mut split = SplitContainer::with_children(Orientation::Horizontal, NodeId(1), NodeId(2), 9, 9);
    split.set_bounds(400, 100);
    split.set_divider_position(100);

    assert_eq!(
        painted(&split),
        vec![
            PaintCommand::FillRect {
                rect: Rect::new(0, 0, 9, 100),
                color: theme.colors.divider_background,
            },
            PaintCommand::Line {
                from: IVec2::new(4, 0),
                to: IVec2::new(4, 99),
                color: theme.colors.divider_foreground,
                stroke: Stroke::new(3.0),
            },
        ]
    );
}

#[test]
fn test_vertical_divider_paint() {
    let theme = Theme::dark();
    let mut split = SplitContainer::with_children(Orientation::Vertical, NodeId(1), NodeId(2), 1, 9);
    split.set_bounds(200, 300);

    assert_eq!(
        painted(&split),
        vec![
            PaintCommand::FillRect {
                rect: Rect::new(0, 0, 200, 9),
                color: theme.colors.divider_background,
            },
            PaintCommand::Line {
                from: IVec2::new(0, 4),
                to: IVec2::new(199, 4),
                color: theme.colors.divider_foreground,
                stroke: Stroke::new(3.0),
            },
        ]
    );
}

#[test]
fn test_wide_handle_paints_past_visual_divider() {
    let config = SplitConfig::new(Orientation::Horizontal)
        .divider_size(2)
        .drag_handle_size(14);
    let mut split =
        SplitContainer::from_config(&config, NodeId(1), NodeId(2), Rc::new(Theme::dark())).unwrap();
    split.set_bounds(300, 50);

    let metrics = split.divider_metrics();
    assert_eq!(metrics.size.width, 2);
    assert_eq!(metrics.handle_size, 14);

    let commands = painted(&split);
    assert!(matches!(
        commands[0],
        PaintCommand::FillRect { rect, .. } if rect == Rect::new(0, 0, 14, 50)
    ));
    assert!(matches!(
        commands[1],
        PaintCommand::Line { from, .. } if from == IVec2::new(7, 0)
    ));
}

#[test]
fn test_border_requests_never_change_paint() {
    let theme = Theme::light();
    let mut split = SplitContainer::new();
    split.set_theme(Rc::new(theme.clone()));
    split.set_bounds(640, 480);
    split.set_divider_position(320);
    let before = painted(&split);

    for _ in 0..3 {
        split.set_divider_border(Some(Border::bevel(&theme)));
        split.set_divider_border(Some(Border::new(Color::WHITE, 5.0)));
        split.set_divider_border(None);
    }

    assert_eq!(painted(&split), before);
    assert_eq!(split.layout().divider().border(), None);
}

#[test]
fn test_unlaid_out_container_paints_degenerate_shapes() {
    let split = SplitContainer::new();

    let commands = painted(&split);
    assert_eq!(commands.len(), 2);
    assert!(commands.iter().all(PaintCommand::is_degenerate));
}

#[test]
fn test_far_position_before_layout_paints_and_clamps_later() {
    let mut split = SplitContainer::new();
    split.set_divider_position(i32::MAX);
    assert_eq!(split.divider_position(), i32::MAX);

    let commands = painted(&split);
    assert_eq!(commands.len(), 2);
    assert!(commands.iter().all(PaintCommand::is_degenerate));
    assert_eq!(split.split_rects().second.width, 0);
    assert!(!split.handle_bounds().contains(Pos::new(i32::MAX - 3, 0)));

    split.set_bounds(400, 100);
    assert_eq!(split.divider_position(), 390);
    assert!(matches!(
        painted(&split)[0],
        PaintCommand::FillRect { rect, .. } if rect == Rect::new(0, 0, 9, 100)
    ));
}

#[test]
fn test_replay_into_window_space() {
    let mut split = SplitContainer::with_children(Orientation::Horizontal, NodeId(1), NodeId(2), 10, 10);
    split.set_bounds(500, 80);
    split.set_divider_position(250);

    let mut local = DrawList::new();
    split.paint_divider(&mut local);

    let divider = split.split_rects().divider;
    let mut window = DrawList::new();
    local.replay(&mut window, IVec2::new(divider.x, divider.y));

    assert!(matches!(
        window.commands()[0],
        PaintCommand::FillRect { rect, .. } if rect == Rect::new(250, 0, 10, 80)
    ));
    assert_eq!(
        window.commands()[1].color(),
        Theme::dark().color(ColorRole::DividerForeground)
    );
}
