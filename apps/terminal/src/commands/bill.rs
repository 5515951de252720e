//! # Bill Commands
//!
//! Handlers that change or read the bill session.
//!
//! ## Screen Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  bill <valid>  ┌──────────┐  submit / + / - / tip         │
//! │  │  Empty   │───────────────►│ Controls │──────────────┐               │
//! │  │  state   │◄───────────────│  shown   │◄─────────────┘ (recompute)   │
//! │  └──────────┘  bill <invalid>└──────────┘                               │
//! │        ▲                           │                                    │
//! │        └────────── reset ──────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use splittrip_core::{BillSummary, SplitCount, TipPercent};
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::state::{BillSession, ConfigState};

/// Snapshot of the session for the `json` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub bill_text: String,
    pub bill_valid: bool,
    pub split: SplitCount,
    pub summary: BillSummary,
    /// Tip formatted with the configured currency.
    pub tip_display: String,
    /// Per-person total formatted with the configured currency.
    pub total_per_person_display: String,
    pub started_at: DateTime<Utc>,
}

impl SummaryResponse {
    pub fn new(session: &BillSession, config: &ConfigState) -> Self {
        let summary = session.summary();
        SummaryResponse {
            bill_text: session.bill_text().to_string(),
            bill_valid: session.is_bill_valid(),
            split: session.split(),
            summary,
            tip_display: config.format_computed(summary.tip_money()),
            total_per_person_display: config.format_computed(summary.total_per_person_money()),
            started_at: session.started_at(),
        }
    }
}

/// Stores typed bill text.
pub fn set_bill_text(session: &mut BillSession, text: String) -> bool {
    let valid = session.set_bill_text(text);
    debug!(bill_text = %session.bill_text(), valid, "set_bill_text command");
    valid
}

/// Commits the bill text and recomputes.
pub fn submit_bill(session: &mut BillSession) -> AppResult<BillSummary> {
    debug!(bill_text = %session.bill_text(), "submit_bill command");

    match session.submit_bill() {
        Ok(summary) => {
            info!(
                tip = ?summary.tip_money(),
                total_per_person = ?summary.total_per_person_money(),
                "bill submitted"
            );
            Ok(summary)
        }
        Err(err) => {
            warn!(error = %err, "bill rejected");
            Err(err.into())
        }
    }
}

/// Adds one person to the split.
pub fn increment_split(session: &mut BillSession) -> SplitCount {
    let split = session.increment_split();
    debug!(split = split.get(), "increment_split command");
    split
}

/// Removes one person from the split.
pub fn decrement_split(session: &mut BillSession) -> SplitCount {
    let split = session.decrement_split();
    debug!(split = split.get(), "decrement_split command");
    split
}

/// Moves the tip slider.
pub fn move_tip_slider(session: &mut BillSession, raw: f32) -> TipPercent {
    let percent = session.move_slider(raw);
    debug!(raw, tip_percent = percent.get(), "move_tip_slider command");
    percent
}

/// Starts a fresh screen.
pub fn reset_session(session: &mut BillSession) {
    debug!("reset_session command");
    session.reset();
}

/// Serializes the current state for the `json` command.
pub fn summary_json(session: &BillSession, config: &ConfigState) -> AppResult<String> {
    debug!("summary_json command");
    let response = SummaryResponse::new(session, config);
    Ok(serde_json::to_string_pretty(&response)?)
}
