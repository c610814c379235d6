//! Flat two-tone divider.
//!
//! Replaces the stock beveled divider with a band in the theme's divider
//! background color and an accent line through its middle. Border requests
//! from the host are swallowed so the bevel never comes back.

use tickpane_core::geometry::Rect;
use tickpane_core::math::IVec2;
use tickpane_core::profiling::profile_function;
use tickpane_render::{Color, PaintSurface, Stroke};

use super::handle::{BasicDivider, DividerDrag, DividerMetrics, DragHandle};
use super::surface::SplitSurface;
use super::types::{ACCENT_STROKE_WIDTH, Orientation};
use crate::theme::{Border, ColorRole, ThemeProvider};

#[derive(Debug, Clone)]
pub struct SplitDividerRenderer {
    base: BasicDivider,
    background: Color,
    foreground: Color,
}

impl SplitDividerRenderer {
    /// Resolve colors from `theme`. They stay fixed until the layout
    /// delegate is replaced.
    pub fn new(theme: &dyn ThemeProvider) -> Self {
        let mut base = BasicDivider::new(theme);
        base.set_border(None);
        base.set_background(theme.color(ColorRole::Shadow));

        Self {
            base,
            background: theme.color(ColorRole::DividerBackground),
            foreground: theme.color(ColorRole::DividerForeground),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Fill color of the underlying stock divider (the theme shadow).
    pub fn base_background(&self) -> Color {
        self.base.background()
    }
}

impl DragHandle for SplitDividerRenderer {
    fn border(&self) -> Option<Border> {
        self.base.border()
    }

    fn set_border(&mut self, _border: Option<Border>) {}

    /// The band and the accent line are both sized from the handle
    /// thickness, not the visual divider size, so a handle wider than the
    /// divider paints past the divider's laid-out bounds.
    fn paint(&self, metrics: &DividerMetrics, surface: &mut dyn PaintSurface) {
        profile_function!();

        let thickness = metrics.handle_size;
        let width = metrics.size.width;
        let height = metrics.size.height;
        let stroke = Stroke::new(ACCENT_STROKE_WIDTH);
        let mid = thickness / 2;
        tracing::trace!(
            orientation = ?metrics.orientation,
            thickness,
            width,
            height,
            "painting divider"
        );

        match metrics.orientation {
            Orientation::Horizontal => {
                surface.fill_rect(Rect::new(0, 0, thickness, height), self.background);
                surface.draw_line(
                    IVec2::new(mid, 0),
                    IVec2::new(mid, height.saturating_sub(1)),
                    self.foreground,
                    stroke,
                );
            }
            Orientation::Vertical => {
                surface.fill_rect(Rect::new(0, 0, width, thickness), self.background);
                surface.draw_line(
                    IVec2::new(0, mid),
                    IVec2::new(width.saturating_sub(1), mid),
                    self.foreground,
                    stroke,
                );
            }
        }
    }

    fn drag(&self) -> &DividerDrag {
        self.base.drag()
    }

    fn drag_mut(&mut self) -> &mut DividerDrag {
        self.base.drag_mut()
    }

    // No snapping here: the divider follows the pointer and the quantizing
    // surface snaps whatever gets committed.
    fn drag_divider_to(&mut self, location: i32, split: &mut dyn SplitSurface) {
        self.base.drag_divider_to(location, split);
    }

    fn finish_dragging_to(&mut self, location: i32, split: &mut dyn SplitSurface) -> bool {
        self.base.finish_dragging_to(location, split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use tickpane_core::geometry::Size;
    use tickpane_render::{DrawList, PaintCommand};

    fn metrics(orientation: Orientation, handle_size: i32, width: i32, height: i32) -> DividerMetrics {
        DividerMetrics {
            orientation,
            handle_size,
            size: Size::new(width, height),
        }
    }

    fn painted(renderer: &SplitDividerRenderer, metrics: &DividerMetrics) -> Vec<PaintCommand> {
        let mut list = DrawList::new();
        renderer.paint(metrics, &mut list);
        list.take()
    }

    #[test]
    fn test_paint_horizontal() {
        let theme = Theme::dark();
        let renderer = SplitDividerRenderer::new(&theme);

        let commands = painted(&renderer, &metrics(Orientation::Horizontal, 9, 9, 100));
        assert_eq!(
            commands,
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
    fn test_paint_vertical() {
        let theme = Theme::light();
        let renderer = SplitDividerRenderer::new(&theme);

        let commands = painted(&renderer, &metrics(Orientation::Vertical, 9, 200, 9));
        assert_eq!(
            commands,
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
    fn test_accent_centers_on_handle_not_visual_size() {
        let renderer = SplitDividerRenderer::new(&Theme::dark());

        // Visual divider is 2px wide, handle is 12px.
        let commands = painted(&renderer, &metrics(Orientation::Horizontal, 12, 2, 40));
        assert_eq!(
            commands[0],
            PaintCommand::FillRect {
                rect: Rect::new(0, 0, 12, 40),
                color: renderer.background(),
            }
        );
        let PaintCommand::Line { from, .. } = commands[1] else {
            panic!("expected accent line");
        };
        assert_eq!(from.x, 6);
    }

    #[test]
    fn test_zero_size_paints_degenerate_shapes() {
        let renderer = SplitDividerRenderer::new(&Theme::dark());

        for m in [
            metrics(Orientation::Horizontal, 9, 0, 0),
            metrics(Orientation::Vertical, 0, 0, 0),
            metrics(Orientation::Vertical, 9, 0, 9),
        ] {
            let commands = painted(&renderer, &m);
            assert_eq!(commands.len(), 2);
            assert!(commands.iter().all(PaintCommand::is_degenerate), "{m:?}");
        }
    }

    #[test]
    fn test_set_border_is_ignored() {
        let theme = Theme::dark();
        let mut renderer = SplitDividerRenderer::new(&theme);
        let m = metrics(Orientation::Horizontal, 9, 9, 100);
        let before = painted(&renderer, &m);

        for border in [Some(Border::bevel(&theme)), None, Some(Border::new(Color::WHITE, 4.0))] {
            renderer.set_border(border);
            assert_eq!(renderer.border(), None);
            assert_eq!(painted(&renderer, &m), before);
        }
    }

    #[test]
    fn test_base_divider_uses_shadow() {
        let theme = Theme::builder().shadow(Color::from_hex(0x202020)).build();
        let renderer = SplitDividerRenderer::new(&theme);
        assert_eq!(renderer.base_background(), Color::from_hex(0x202020));
    }
}
