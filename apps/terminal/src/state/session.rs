//! # Bill Session
//!
//! The state of one screen load: what the user has typed and picked, and the
//! last summary derived from it.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  User Action              Session Method          Recompute?            │
//! │  ───────────              ──────────────          ──────────            │
//! │                                                                         │
//! │  Type in bill field ─────► set_bill_text() ─────► no (validity only)   │
//! │                                                                         │
//! │  Press done ─────────────► submit_bill() ───────► yes                  │
//! │                                                                         │
//! │  Tap [+] / [-] ──────────► increment_split()     yes                   │
//! │                            decrement_split()                            │
//! │                                                                         │
//! │  Drag tip slider ────────► move_slider() ───────► yes                  │
//! │                                                                         │
//! │  Reopen screen ──────────► reset() ─────────────► outputs zeroed       │
//! │                                                                         │
//! │  Inputs ──► BillInput ──► calculator::calculate ──► summary            │
//! │  (nothing is ever written back into the inputs)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invalid Bill Text
//! While the bill text is invalid, split and slider changes are still stored
//! but the summary is left untouched. The screen hides those controls in
//! that state anyway.

use chrono::{DateTime, Utc};
use serde::Serialize;
use splittrip_core::validation::{is_valid_bill, validate_bill_text};
use splittrip_core::{
    calculator, BillAmount, BillInput, BillSummary, CoreError, CoreResult, SliderPosition,
    SplitCount, TipPercent,
};

/// One screen load's worth of state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSession {
    bill_text: String,
    split: SplitCount,
    slider: SliderPosition,
    summary: BillSummary,
    started_at: DateTime<Utc>,
}

impl BillSession {
    /// Creates a fresh session: empty bill, one person, no tip.
    pub fn new() -> Self {
        BillSession {
            bill_text: String::new(),
            split: SplitCount::one(),
            slider: SliderPosition::start(),
            summary: BillSummary::zero(),
            started_at: Utc::now(),
        }
    }

    /// Discards everything, as if the screen was opened again.
    pub fn reset(&mut self) {
        *self = BillSession::new();
    }

    /// The bill text exactly as typed.
    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    pub fn split(&self) -> SplitCount {
        self.split
    }

    pub fn slider(&self) -> SliderPosition {
        self.slider
    }

    /// Tip percentage selected by the current slider position.
    pub fn tip_percent(&self) -> TipPercent {
        self.slider.tip_percent()
    }

    /// Last derived outputs.
    pub fn summary(&self) -> BillSummary {
        self.summary
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whether the split and tip controls should be shown.
    pub fn is_bill_valid(&self) -> bool {
        is_valid_bill(&self.bill_text)
    }

    /// Captures the current inputs, if the bill text is usable.
    pub fn current_input(&self) -> Option<BillInput> {
        BillAmount::parse(&self.bill_text)
            .ok()
            .map(|bill| BillInput::new(bill, self.split, self.tip_percent()))
    }

    /// Stores new bill text. Returns whether it is valid.
    pub fn set_bill_text(&mut self, text: impl Into<String>) -> bool {
        self.bill_text = text.into();
        self.is_bill_valid()
    }

    /// Commits the bill text and recomputes.
    ///
    /// ## Behavior
    /// - Invalid text: error, nothing changes
    /// - Valid text: stored trimmed, summary recomputed
    pub fn submit_bill(&mut self) -> CoreResult<BillSummary> {
        let bill = validate_bill_text(&self.bill_text).map_err(|source| {
            CoreError::UnusableBill {
                text: self.bill_text.clone(),
                source,
            }
        })?;

        self.bill_text = self.bill_text.trim().to_string();
        self.summary = calculator::calculate(&BillInput::new(
            bill,
            self.split,
            self.tip_percent(),
        ));
        Ok(self.summary)
    }

    /// Adds one person and recomputes.
    pub fn increment_split(&mut self) -> SplitCount {
        self.split = self.split.increment();
        self.recompute();
        self.split
    }

    /// Removes one person (never below one) and recomputes.
    pub fn decrement_split(&mut self) -> SplitCount {
        self.split = self.split.decrement();
        self.recompute();
        self.split
    }

    /// Moves the tip slider to the stop nearest `raw` and recomputes with the
    /// new percentage.
    pub fn move_slider(&mut self, raw: f32) -> TipPercent {
        self.slider = SliderPosition::from_drag(raw);
        self.recompute();
        self.tip_percent()
    }

    /// Re-derives the summary from the current inputs. Returns `false` and
    /// leaves the summary alone when the bill text is invalid.
    fn recompute(&mut self) -> bool {
        match self.current_input() {
            Some(input) => {
                self.summary = calculator::calculate(&input);
                true
            }
            None => false,
        }
    }
}

impl Default for BillSession {
    fn default() -> Self {
        Self::new()
    }
}
