//! Recording paint surface.
//!
//! The draw list is API-agnostic: a host backend replays the commands with
//! whatever graphics API it uses. Tests compare command lists directly.

use tickpane_core::geometry::Rect;
use tickpane_core::math::IVec2;

use crate::{Color, PaintSurface, Stroke};

/// A single recorded paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect<i32>,
        color: Color,
    },
    Line {
        from: IVec2,
        to: IVec2,
        color: Color,
        stroke: Stroke,
    },
}

impl PaintCommand {
    pub fn color(&self) -> Color {
        match self {
            PaintCommand::FillRect { color, .. } | PaintCommand::Line { color, .. } => *color,
        }
    }

    /// True when replaying the command would touch no pixels.
    pub fn is_degenerate(&self) -> bool {
        match self {
            PaintCommand::FillRect { rect, .. } => rect.is_empty(),
            PaintCommand::Line { from, to, stroke, .. } => {
                stroke.width <= 0.0 || to.x < from.x || to.y < from.y
            }
        }
    }
}

/// A [`PaintSurface`] that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<PaintCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Move the recorded commands out, leaving the list empty.
    pub fn take(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replay every recorded command onto another surface, shifted by `offset`.
    pub fn replay(&self, target: &mut dyn PaintSurface, offset: IVec2) {
        for command in &self.commands {
            match *command {
                PaintCommand::FillRect { rect, color } => target.fill_rect(
                    Rect::new(
                        rect.x.saturating_add(offset.x),
                        rect.y.saturating_add(offset.y),
                        rect.width,
                        rect.height,
                    ),
                    color,
                ),
                PaintCommand::Line {
                    from,
                    to,
                    color,
                    stroke,
                } => target.draw_line(
                    from.saturating_add(offset),
                    to.saturating_add(offset),
                    color,
                    stroke,
                ),
            }
        }
    }
}

impl PaintSurface for DrawList {
    fn fill_rect(&mut self, rect: Rect<i32>, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2, color: Color, stroke: Stroke) {
        self.commands.push(PaintCommand::Line {
            from,
            to,
            color,
            stroke,
        });
    }
}
