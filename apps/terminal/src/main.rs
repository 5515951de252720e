//! # SplitTrip Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from the environment
//! 3. Start a fresh bill session
//! 4. Read commands from stdin until `quit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match splittrip_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
