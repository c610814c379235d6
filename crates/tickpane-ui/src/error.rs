use crate::split::Axis;

/// Errors reported while configuring a split container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// A grid quantum must be at least one pixel.
    InvalidQuantum { axis: Axis, value: i32 },
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitError::InvalidQuantum { axis, value } => write!(
                f,
                "Invalid {} quantum {}: divider ticks must be at least 1 pixel",
                axis, value
            ),
        }
    }
}

impl std::error::Error for SplitError {}

/// Result type for split configuration.
pub type SplitResult<T> = Result<T, SplitError>;
