//! Build-time configuration.
//!
//! Values are baked in with `option_env!` when the wasm bundle is built,
//! e.g. `UI_LOG_FILTER=debug trunk build`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive for the console logger.
    pub log_filter: &'static str,
}

impl Config {
    pub const DEFAULT_LOG_FILTER: &'static str = "error,ui=debug,content=debug";

    pub fn from_build_env() -> Self {
        Self {
            log_filter: option_env!("UI_LOG_FILTER")
                .unwrap_or(Self::DEFAULT_LOG_FILTER),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_build_env()
    }
}
