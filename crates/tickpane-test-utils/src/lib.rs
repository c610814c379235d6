//! Test utilities for tickpane.
//!
//! - [`MockSplitSurface`]: a [`SplitSurface`](tickpane_ui::SplitSurface)
//!   that records every call, to check what the container forwards to the
//!   host
//! - [`CountingTheme`]: a theme provider that counts lookups, to check when
//!   colors are resolved
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use tickpane_test_utils::{MockSplitSurface, SurfaceCall};
//! use tickpane_ui::{Orientation, Quantum, SplitContainer, Theme};
//!
//! let surface = MockSplitSurface::new(Orientation::Horizontal);
//! let mut split = SplitContainer::from_surface(
//!     surface,
//!     Quantum::ONE,
//!     Quantum::ONE,
//!     Rc::new(Theme::dark()),
//! );
//! split.set_divider_position(42);
//! assert!(split.surface().calls().contains(&SurfaceCall::SetDividerLocation(42)));
//! ```

mod mock_surface;
mod theme;

pub use mock_surface::{MockSplitSurface, SurfaceCall};
pub use theme::CountingTheme;
