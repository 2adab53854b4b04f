//! Logging infrastructure for diagnostic console output.
//!
//! All output goes to stderr; stdout is reserved for the generated script.

mod logger;
mod subscriber;

pub use logger::Logger;
pub use subscriber::{init_subscriber, report_error};

/// Environment variable holding an [`EnvFilter`](tracing_subscriber::EnvFilter)
/// directive that overrides the `--verbose` level.
pub const LOG_ENV: &str = "SHELLRC_LOG";
