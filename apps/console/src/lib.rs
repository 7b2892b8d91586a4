//! # Warehouse Console
//!
//! Interactive text-menu front end for `warehouse-core`.
//!
//! ## Module Organization
//! ```text
//! warehouse_console/
//! ├── lib.rs       ◄─── You are here (wiring stdin/stdout to a session)
//! ├── config.rs    ◄─── ConsoleConfig from WAREHOUSE_* variables
//! ├── logging.rs   ◄─── tracing subscriber on stderr
//! ├── session.rs   ◄─── Menu loop and dispatch
//! ├── prompt.rs    ◄─── Ask-again input helpers
//! ├── menu.rs      ◄─── Menu entries and selectors
//! ├── render.rs    ◄─── Item text layout
//! └── error.rs     ◄─── ConsoleError
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;

use std::io;

pub use config::{ConfigError, ConsoleConfig};
pub use error::{ConsoleError, ConsoleResult};
pub use session::Session;

/// Runs a session on the process's stdin and stdout.
pub fn run(config: ConsoleConfig) -> ConsoleResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()
}
