//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are cheap no-ops until [`set_enabled`] turns recording on.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Turn scope recording on or off.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
    tracing::debug!(enabled, "puffin scopes toggled");
}

pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Mark the start of a new frame for profiling.
///
/// Hosts call this once per paint pass so scopes are grouped by frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
