//! # Screen Rendering
//!
//! Turns the session into the text the user sees.
//!
//! ```text
//! Valid bill                          Invalid or empty bill
//! ┌────────────────────────────┐      ┌────────────────────────────┐
//! │ Total per Person           │      │ Total per Person           │
//! │ $ 75.00                    │      │ $ 0.00                     │
//! ├────────────────────────────┤      ├────────────────────────────┤
//! │ Bill: 200                  │      │ Bill: 12.5                 │
//! │ Split: [-] 4 [+]           │      │ (enter a whole-number bill)│
//! │ Tip Added: $ 100.00        │      └────────────────────────────┘
//! │ Tip: 50 %                  │
//! └────────────────────────────┘
//! ```

use std::io::Write;

use serde::Serialize;

use crate::state::{BillSession, ConfigState};

/// Everything one frame of the screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillView {
    pub total_per_person: String,
    pub bill_text: String,
    /// Split, tip and slider rows are only drawn for a usable bill.
    pub show_controls: bool,
    pub split: u32,
    pub tip_amount: String,
    pub tip_percent: u8,
}

impl BillView {
    pub fn new(session: &BillSession, config: &ConfigState) -> Self {
        let summary = session.summary();
        BillView {
            total_per_person: config.format_computed(summary.total_per_person_money()),
            bill_text: session.bill_text().to_string(),
            show_controls: session.is_bill_valid(),
            split: session.split().get(),
            tip_amount: config.format_computed(summary.tip_money()),
            tip_percent: session.tip_percent().get(),
        }
    }

    /// Screen lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Total per Person".to_string(),
            self.total_per_person.clone(),
            "-".repeat(28),
            format!("Bill: {}", self.bill_text),
        ];

        if self.show_controls {
            lines.push(format!("Split: [-] {} [+]", self.split));
            lines.push(format!("Tip Added: {}", self.tip_amount));
            lines.push(format!("Tip: {} %", self.tip_percent));
        } else {
            lines.push("(enter a whole-number bill)".to_string());
        }

        lines
    }
}

/// Draws the current session.
pub fn write_screen<W: Write>(
    out: &mut W,
    session: &BillSession,
    config: &ConfigState,
) -> std::io::Result<()> {
    for line in BillView::new(session, config).lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}
