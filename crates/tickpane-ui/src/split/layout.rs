use tickpane_render::PaintSurface;

use super::divider::SplitDividerRenderer;
use super::handle::{DividerMetrics, DragHandle};
use crate::theme::ThemeProvider;

/// Layout delegate of a split container.
///
/// Owns the divider renderer. The container replaces the whole delegate
/// whenever the appearance is refreshed, which is how a theme switch
/// reaches the divider.
#[derive(Debug, Clone)]
pub struct SplitLayout {
    divider: SplitDividerRenderer,
    generation: u64,
}

impl SplitLayout {
    /// Build a delegate with a fresh divider renderer bound to `theme`.
    pub fn install(theme: &dyn ThemeProvider, generation: u64) -> Self {
        Self {
            divider: SplitDividerRenderer::new(theme),
            generation,
        }
    }

    /// Increases by one with every reinstall.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn divider(&self) -> &SplitDividerRenderer {
        &self.divider
    }

    pub fn divider_mut(&mut self) -> &mut SplitDividerRenderer {
        &mut self.divider
    }

    pub fn paint_divider(&self, metrics: &DividerMetrics, surface: &mut dyn PaintSurface) {
        self.divider.paint(metrics, surface);
    }
}
