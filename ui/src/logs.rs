//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

use crate::config::Config;

/// Initialize logging. Call once, before rendering.
pub fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_new(config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(Config::DEFAULT_LOG_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    match installed {
        Ok(()) => tracing::info!(filter = config.log_filter, "Initialized logs"),
        Err(e) => web_sys::console::warn_1(&e.to_string().into()),
    }
}
