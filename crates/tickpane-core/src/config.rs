/// Runtime configuration for the tickpane crates.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: crate::logging::DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Replace the default log filter.
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the profiling mode.
    pub fn profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not recorded
    #[default]
    Off,
    /// Scopes are recorded and can be inspected with `puffin_viewer`
    On,
}

impl ProfilingMode {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ProfilingMode::On)
    }
}
