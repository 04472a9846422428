use std::process::ExitCode;

use inkboard::BoardConfig;
use inkboard_engine::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match inkboard::app::run(BoardConfig::whiteboard()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("whiteboard: {err:#}");
            ExitCode::FAILURE
        }
    }
}
