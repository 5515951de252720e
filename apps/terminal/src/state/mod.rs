//! # State Module
//!
//! Application state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │        BillSession           │   │        ConfigState           │   │
//! │  │                              │   │                              │   │
//! │  │  bill_text                   │   │  currency_symbol             │   │
//! │  │  split, slider               │   │  currency_decimals           │   │
//! │  │  summary (derived)           │   │                              │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  The session loop is single-threaded: each field has one writer (its   │
//! │  command handler), so neither type needs a lock.                       │
//! │  ConfigState is read-only after initialization.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState, ENV_CURRENCY_DECIMALS, ENV_CURRENCY_SYMBOL};
pub use session::BillSession;
