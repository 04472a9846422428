use std::process::ExitCode;

use inkboard_engine::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    if let Err(err) = inkboard::triangle::run() {
        log::error!("triangle: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
