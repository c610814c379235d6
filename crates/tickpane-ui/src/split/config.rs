use super::types::{Axis, Orientation, Quantum};
use crate::error::SplitResult;

/// Construction parameters for a [`SplitContainer`](super::SplitContainer).
///
/// ```
/// use tickpane_ui::{Orientation, SplitConfig};
///
/// let config = SplitConfig::new(Orientation::Vertical)
///     .ticks(8, 16)
///     .drag_handle_size(24)
///     .continuous_layout(true);
/// assert_eq!(config.resolved_divider_size(), 16);
/// assert_eq!(config.resolved_drag_handle_size(), 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub orientation: Orientation,
    /// Grid step along x, in pixels.
    pub x_tick: i32,
    /// Grid step along y, in pixels.
    pub y_tick: i32,
    /// Visual divider size. Defaults to the active tick.
    pub divider_size: Option<i32>,
    /// Hit-test thickness. Defaults to the active tick.
    pub drag_handle_size: Option<i32>,
    /// Commit the divider on every drag step instead of only on release.
    /// Off by default.
    pub continuous_layout: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl SplitConfig {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            x_tick: 1,
            y_tick: 1,
            divider_size: None,
            drag_handle_size: None,
            continuous_layout: false,
        }
    }

    pub fn ticks(mut self, x_tick: i32, y_tick: i32) -> Self {
        self.x_tick = x_tick;
        self.y_tick = y_tick;
        self
    }

    pub fn divider_size(mut self, size: i32) -> Self {
        self.divider_size = Some(size);
        self
    }

    pub fn drag_handle_size(mut self, size: i32) -> Self {
        self.drag_handle_size = Some(size);
        self
    }

    /// Snap on every drag step rather than on release.
    pub fn continuous_layout(mut self, continuous: bool) -> Self {
        self.continuous_layout = continuous;
        self
    }

    /// Tick of the axis the divider moves along.
    pub fn active_tick(&self) -> i32 {
        match self.orientation.axis() {
            Axis::X => self.x_tick,
            Axis::Y => self.y_tick,
        }
    }

    pub fn resolved_divider_size(&self) -> i32 {
        self.divider_size.unwrap_or_else(|| self.active_tick())
    }

    pub fn resolved_drag_handle_size(&self) -> i32 {
        self.drag_handle_size.unwrap_or_else(|| self.active_tick())
    }

    /// Validate both ticks.
    pub fn quanta(&self) -> SplitResult<(Quantum, Quantum)> {
        Ok((
            Quantum::new(Axis::X, self.x_tick)?,
            Quantum::new(Axis::Y, self.y_tick)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;

    #[test]
    fn test_defaults_follow_active_tick() {
        let config = SplitConfig::new(Orientation::Horizontal).ticks(12, 30);
        assert_eq!(config.active_tick(), 12);
        assert_eq!(config.resolved_divider_size(), 12);
        assert_eq!(config.resolved_drag_handle_size(), 12);
        assert!(!config.continuous_layout);
    }

    #[test]
    fn test_quanta_validation() {
        let config = SplitConfig::default().ticks(4, 0);
        assert_eq!(
            config.quanta(),
            Err(SplitError::InvalidQuantum {
                axis: Axis::Y,
                value: 0
            })
        );

        let (x, y) = SplitConfig::default().ticks(4, 6).quanta().unwrap();
        assert_eq!((x.get(), y.get()), (4, 6));
    }
}
