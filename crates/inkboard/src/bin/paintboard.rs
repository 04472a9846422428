use std::process::ExitCode;

use inkboard::BoardConfig;
use inkboard_engine::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match inkboard::app::run(BoardConfig::paintboard()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("paintboard: {err:#}");
            ExitCode::FAILURE
        }
    }
}
