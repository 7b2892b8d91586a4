//! # Warehouse Register
//!
//! Binary entry point.
//!
//! ## Startup Sequence
//! ```text
//! 1. Load ConsoleConfig from WAREHOUSE_* variables
//! 2. Initialize logging (stderr, RUST_LOG or WAREHOUSE_LOG)
//! 3. Run the menu session on stdin/stdout
//! ```

use std::process::ExitCode;

use tracing::{error, info};
use warehouse_console::{logging, ConsoleConfig};

fn main() -> ExitCode {
    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            logging::init(&ConsoleConfig::default().log_filter);
            error!(%err, "invalid configuration");
            eprintln!("warehouse: {err}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.log_filter);
    info!(
        capacity = config.capacity,
        currency = %config.currency_symbol,
        "Configuration loaded"
    );

    match warehouse_console::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("warehouse: {err}");
            ExitCode::FAILURE
        }
    }
}
