//! Tickpane Core
//!
//! Shared plumbing for the tickpane crates: logging bootstrap, profiling
//! scopes, math re-exports, integer geometry and hash collections.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::Config;

/// Initialize logging and profiling from a [`Config`].
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(config: &Config) {
    logging::init_with_filter(&config.log_filter);
    profiling::set_enabled(config.profiling.is_enabled());
    tracing::debug!(profiling = ?config.profiling, "tickpane core initialized");
}
