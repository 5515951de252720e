//! # SplitTrip Terminal Library
//!
//! Terminal front end for SplitTrip. It plays the part of the mobile screen:
//! it keeps the session, feeds `splittrip-core` and draws the results.
//!
//! ## Module Organization
//! ```text
//! splittrip_terminal_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Bill session (inputs + derived summary)
//! │   └── config.rs   ◄─── Currency display configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & dispatch
//! │   └── bill.rs     ◄─── Bill session handlers
//! ├── render.rs       ◄─── Screen drawing
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## Example Session
//! ```text
//! > bill 200
//! > submit
//! > tip 0.5
//! > +
//! > +
//! > +
//! Total per Person
//! $ 75.00
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{Command, Outcome};
use error::{AppError, AppResult};
use state::{BillSession, ConfigState};

/// Runs the terminal app on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, INFO for splittrip crates; override with RUST_LOG  │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • SPLITTRIP_CURRENCY_SYMBOL, SPLITTRIP_CURRENCY_DECIMALS            │
/// │                                                                         │
/// │  3. Run Session Loop                                                    │
/// │     • One command per line until `quit` or end of input                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(
        currency_symbol = %config.currency_symbol,
        currency_decimals = config.currency_decimals,
        "Starting SplitTrip"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &config)
}

/// Reads commands from `input` and draws the screen to `output`.
///
/// Bad commands and rejected input print an `error:` line and the loop goes
/// on; I/O failures end it.
pub fn run_session<R, W>(input: R, mut output: W, config: &ConfigState) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = BillSession::new();
    render::write_screen(&mut output, &session, config)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<Command>()
            .map_err(AppError::from)
            .and_then(|command| commands::dispatch(&mut session, config, command));

        match outcome {
            Ok(Outcome::Render) => render::write_screen(&mut output, &session, config)?,
            Ok(Outcome::Print(text)) => writeln!(output, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(err) if err.is_recoverable() => {
                warn!(code = ?err.code, "{}", err.message);
                writeln!(output, "error: {}", err.message)?;
            }
            Err(err) => return Err(err),
        }
    }

    info!("Session ended");
    output.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=splittrip=trace` - Trace for splittrip crates only
/// - Default: WARN, INFO for splittrip crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,splittrip=info"));

    // stdout is the screen, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run_session(Cursor::new(script), &mut out, &ConfigState::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Last rendered frame (frames end with a blank line).
    fn last_frame(screen: &str) -> &str {
        screen
            .trim_end()
            .rsplit("\n\n")
            .next()
            .unwrap_or_default()
    }

    #[test]
    fn test_split_four_ways_with_half_tip() {
        let screen = run_script("bill 200\nsubmit\ntip 0.5\n+\n+\n+\n");
        let frame = last_frame(&screen);
        assert!(frame.contains("$ 75.00"));
        assert!(frame.contains("Split: [-] 4 [+]"));
        assert!(frame.contains("Tip Added: $ 100.00"));
        assert!(frame.contains("Tip: 50 %"));
    }

    #[test]
    fn test_invalid_bill_shows_empty_state_and_error() {
        let screen = run_script("bill 12.5\nsubmit\n");
        assert!(screen.contains("error: bill has invalid format: must contain only digits"));
        assert!(screen.contains("(enter a whole-number bill)"));
        assert!(!screen.contains("Split:"));
    }

    #[test]
    fn test_oversized_bill_rejected() {
        let script = format!("bill {}\nsubmit\n", "9".repeat(400));
        let screen = run_script(&script);
        assert!(screen.contains("error: bill must be between 0 and 10000000000000"));
        assert!(!screen.contains("NaN"));
        assert!(screen.contains("Total per Person\n$ 0.00\n"));
        assert!(!screen.contains("Split:"));

        let screen = run_script("bill 100000000000000000000\nsubmit\n");
        assert!(screen.contains("error: bill must be between 0 and 10000000000000"));
    }

    #[test]
    fn test_unknown_command_does_not_stop_loop() {
        let screen = run_script("dance\nbill 100\nsubmit\n");
        assert!(screen.contains("error: Unknown command 'dance'"));
        assert!(last_frame(&screen).contains("$ 100.00"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let screen = run_script("bill 100\nquit\nsubmit\n");
        assert!(!screen.contains("$ 100.00"));
    }

    #[test]
    fn test_json_command() {
        let screen = run_script("bill 50\nsubmit\njson\n");
        assert!(screen.contains("\"totalPerPersonDisplay\": \"$ 50.00\""));
    }

    #[test]
    fn test_custom_currency() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            currency_decimals: 2,
        };
        let mut out = Vec::new();
        run_session(Cursor::new("bill 30\nsubmit\n-\n"), &mut out, &config).unwrap();
        let screen = String::from_utf8(out).unwrap();
        assert!(last_frame(&screen).contains("€ 30.00"));
        assert!(last_frame(&screen).contains("Split: [-] 1 [+]"));
    }
}
