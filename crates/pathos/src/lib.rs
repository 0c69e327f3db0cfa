pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod ui;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

/// Install file logging; see [`infra::logging`]. Keep the guard alive until exit.
pub fn init(log_file: Option<&Path>) -> Option<WorkerGuard> {
    infra::logging::init(log_file)
}
