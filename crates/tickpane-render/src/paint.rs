use tickpane_core::geometry::Rect;
use tickpane_core::math::IVec2;

use crate::Color;

/// Line stroke settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line width in pixels, centered on the line.
    pub width: f32,
}

impl Stroke {
    pub const fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Graphics context handed to widgets during a paint pass.
///
/// Coordinates are whole pixels in the painted widget's local space.
/// Implementations must accept degenerate input (zero or negative sizes,
/// lines whose end lies before their start) and draw nothing visible for it
/// rather than failing.
pub trait PaintSurface {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect<i32>, color: Color);

    /// Draw a line between two points, both endpoints inclusive.
    fn draw_line(&mut self, from: IVec2, to: IVec2, color: Color, stroke: Stroke);

    /// Outline `rect` with a border of `width` pixels drawn inside it.
    ///
    /// Edges are emitted top, right, bottom, left, each from its lower
    /// coordinate to its higher one.
    fn stroke_rect(&mut self, rect: Rect<i32>, color: Color, width: f32) {
        let inset = (width / 2.0) as i32;
        let left = rect.x + inset;
        let top = rect.y + inset;
        let right = rect.x + rect.width - 1 - inset;
        let bottom = rect.y + rect.height - 1 - inset;
        let stroke = Stroke::new(width);

        self.draw_line(IVec2::new(left, top), IVec2::new(right, top), color, stroke);
        self.draw_line(IVec2::new(right, top), IVec2::new(right, bottom), color, stroke);
        self.draw_line(IVec2::new(left, bottom), IVec2::new(right, bottom), color, stroke);
        self.draw_line(IVec2::new(left, top), IVec2::new(left, bottom), color, stroke);
    }
}
