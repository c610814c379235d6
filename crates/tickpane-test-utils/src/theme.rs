use std::cell::Cell;

use tickpane_render::Color;
use tickpane_ui::{ColorRole, Theme, ThemeProvider};

/// Theme provider that counts how often it is asked for a color.
#[derive(Debug, Default)]
pub struct CountingTheme {
    theme: Theme,
    lookups: Cell<usize>,
}

impl CountingTheme {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            lookups: Cell::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    pub fn reset(&self) {
        self.lookups.set(0);
    }
}

impl ThemeProvider for CountingTheme {
    fn color(&self, role: ColorRole) -> Color {
        self.lookups.set(self.lookups.get() + 1);
        self.theme.color(role)
    }
}
