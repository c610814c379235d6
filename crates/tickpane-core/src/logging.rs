use tracing_subscriber::EnvFilter;

/// Filter used by [`init`] when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,tickpane_ui=debug";

pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a fmt subscriber. `RUST_LOG` takes precedence over `filter`.
pub fn init_with_filter(filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // A second call (tests, embedding hosts) keeps the existing subscriber.
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("global subscriber already installed");
    }
}
