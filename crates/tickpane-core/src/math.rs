//! Math types re-exported from [`glam`].
//!
//! The split widget works in whole pixels, so only the integer vector
//! ([`IVec2`]) is used.
//!
//! ```
//! use tickpane_core::math::IVec2;
//!
//! let from = IVec2::new(4, 0);
//! let to = IVec2::new(4, 99);
//! assert_eq!((to - from).y, 99);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::IVec2;
