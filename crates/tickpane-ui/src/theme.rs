//! Theme system for the split widget.
//!
//! Colors are looked up through the [`ThemeProvider`] trait instead of a
//! process-wide registry, so a container can be painted against any theme
//! (including test doubles) without a live toolkit.
//!
//! # Example
//!
//! ```
//! use tickpane_ui::{ColorRole, Theme, ThemeProvider, ThemeRegistry};
//! use tickpane_render::Color;
//!
//! let theme = Theme::builder()
//!     .divider_background(Color::from_rgb_u8(40, 40, 48))
//!     .build();
//! assert_eq!(theme.color(ColorRole::DividerBackground), Color::from_rgb_u8(40, 40, 48));
//!
//! // Per-name overrides on top of a base theme
//! let mut registry = ThemeRegistry::new(Theme::light());
//! registry.set("SplitDivider.foreground", Color::BLACK);
//! assert_eq!(registry.color(ColorRole::DividerForeground), Color::BLACK);
//! ```

use tickpane_core::alloc::HashMap;
use tickpane_render::Color;

/// Color role for semantic color assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Window background
    Background,
    /// Panel surface
    Surface,
    /// Border and bevel color
    Border,
    /// Shadow tone used as the divider's base fill
    Shadow,
    /// Band color of the split divider
    DividerBackground,
    /// Accent line color of the split divider
    DividerForeground,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Border,
        ColorRole::Shadow,
        ColorRole::DividerBackground,
        ColorRole::DividerForeground,
    ];

    /// Symbolic resource name hosts use for this role.
    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::Background => "control",
            ColorRole::Surface => "Panel.background",
            ColorRole::Border => "controlDkShadow",
            ColorRole::Shadow => "controlShadow",
            ColorRole::DividerBackground => "SplitDivider.background",
            ColorRole::DividerForeground => "SplitDivider.foreground",
        }
    }

    /// Resolve a symbolic resource name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub shadow: Color,
    pub divider_background: Color,
    pub divider_foreground: Color,
}

impl ColorPalette {
    /// Get a color by its role.
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Border => self.border,
            ColorRole::Shadow => self.shadow,
            ColorRole::DividerBackground => self.divider_background,
            ColorRole::DividerForeground => self.divider_foreground,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb_u8(18, 18, 18),
            surface: Color::from_rgb_u8(30, 30, 30),
            border: Color::from_rgb_u8(60, 60, 60),
            shadow: Color::from_rgb_u8(10, 10, 10),
            divider_background: Color::from_rgb_u8(40, 40, 40),
            divider_foreground: Color::from_rgb_u8(90, 120, 200),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::from_rgb_u8(250, 250, 250),
            surface: Color::from_rgb_u8(255, 255, 255),
            border: Color::from_rgb_u8(200, 200, 200),
            shadow: Color::from_rgb_u8(160, 160, 160),
            divider_background: Color::from_rgb_u8(230, 230, 230),
            divider_foreground: Color::from_rgb_u8(50, 100, 200),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

/// Border decoration a host toolkit may try to put around the divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f32,
}

impl Border {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// One pixel bevel in the theme's border color.
    pub fn bevel(theme: &dyn ThemeProvider) -> Self {
        Self::new(theme.color(ColorRole::Border), 1.0)
    }
}

/// Source of theme colors.
pub trait ThemeProvider {
    /// Get a color by role.
    fn color(&self, role: ColorRole) -> Color;

    /// Get a color by symbolic resource name.
    fn named_color(&self, name: &str) -> Option<Color> {
        ColorRole::from_name(name).map(|role| self.color(role))
    }
}

/// A complete theme definition.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub colors: ColorPalette,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            colors: ColorPalette::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            colors: ColorPalette::light(),
        }
    }

    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }
}

impl ThemeProvider for Theme {
    fn color(&self, role: ColorRole) -> Color {
        self.colors.get(role)
    }
}

/// Builder for creating custom themes.
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    pub fn light() -> Self {
        Self {
            theme: Theme::light(),
        }
    }

    pub fn shadow(mut self, color: Color) -> Self {
        self.theme.colors.shadow = color;
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.theme.colors.border = color;
        self
    }

    pub fn divider_background(mut self, color: Color) -> Self {
        self.theme.colors.divider_background = color;
        self
    }

    pub fn divider_foreground(mut self, color: Color) -> Self {
        self.theme.colors.divider_foreground = color;
        self
    }

    pub fn colors(mut self, colors: ColorPalette) -> Self {
        self.theme.colors = colors;
        self
    }

    pub fn build(self) -> Theme {
        self.theme
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme with per-name color overrides.
///
/// Mirrors the key/value defaults table desktop toolkits expose: any name
/// set here wins over the base theme, unknown names fall through to it.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    base: Theme,
    overrides: HashMap<String, Color>,
}

impl ThemeRegistry {
    pub fn new(base: Theme) -> Self {
        Self {
            base,
            overrides: HashMap::new(),
        }
    }

    /// Override a named color. Returns the previous override, if any.
    pub fn set(&mut self, name: impl Into<String>, color: Color) -> Option<Color> {
        self.overrides.insert(name.into(), color)
    }

    pub fn remove(&mut self, name: &str) -> Option<Color> {
        self.overrides.remove(name)
    }

    pub fn base(&self) -> &Theme {
        &self.base
    }
}

impl ThemeProvider for ThemeRegistry {
    fn color(&self, role: ColorRole) -> Color {
        self.overrides
            .get(role.name())
            .copied()
            .unwrap_or_else(|| self.base.color(role))
    }

    fn named_color(&self, name: &str) -> Option<Color> {
        self.overrides
            .get(name)
            .copied()
            .or_else(|| self.base.named_color(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_name(role.name()), Some(role));
        }
        assert_eq!(ColorRole::from_name("SplitDivider.border"), None);
    }

    #[test]
    fn test_named_lookup() {
        let theme = Theme::light();
        assert_eq!(
            theme.named_color("SplitDivider.background"),
            Some(theme.colors.divider_background)
        );
        assert_eq!(theme.named_color("controlShadow"), Some(theme.colors.shadow));
        assert_eq!(theme.named_color("nope"), None);
    }

    #[test]
    fn test_theme_builder() {
        let theme = Theme::builder()
            .divider_background(Color::BLACK)
            .divider_foreground(Color::WHITE)
            .build();

        assert_eq!(theme.color(ColorRole::DividerBackground), Color::BLACK);
        assert_eq!(theme.color(ColorRole::DividerForeground), Color::WHITE);
        assert_eq!(theme.color(ColorRole::Shadow), ColorPalette::dark().shadow);
    }

    #[test]
    fn test_registry_overrides() {
        let mut registry = ThemeRegistry::new(Theme::dark());
        let custom = Color::from_hex(0x123456);

        assert_eq!(registry.set("controlShadow", custom), None);
        assert_eq!(registry.color(ColorRole::Shadow), custom);
        assert_eq!(registry.named_color("controlShadow"), Some(custom));

        // Names outside the known roles are still stored and served.
        registry.set("Custom.accent", Color::WHITE);
        assert_eq!(registry.named_color("Custom.accent"), Some(Color::WHITE));

        assert_eq!(registry.remove("controlShadow"), Some(custom));
        assert_eq!(registry.color(ColorRole::Shadow), ColorPalette::dark().shadow);
    }

    #[test]
    fn test_bevel_uses_border_color() {
        let theme = Theme::light();
        let bevel = Border::bevel(&theme);
        assert_eq!(bevel.color, theme.colors.border);
        assert_eq!(bevel.width, 1.0);
    }
}
