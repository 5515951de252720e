//! # Calculator Module
//!
//! Tip and per-person arithmetic.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  bill = 200, split = 4, tip = 50%                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_tip(200, 50)            = 200 × 0.50       = 100.00           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_total_per_person(...)   = (200 + 100) / 4  =  75.00           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are plain `f64` arithmetic with no rounding. Rounding to
//! cents happens only when a value is displayed (see [`crate::money`]).

use crate::types::{BillInput, BillSummary};

/// Tip on the whole bill: `total_bill * (tip_percentage / 100)`.
///
/// ## Example
/// ```rust
/// use splittrip_core::calculator::compute_tip;
///
/// assert_eq!(compute_tip(200.0, 50), 100.0);
/// assert_eq!(compute_tip(100.0, 0), 0.0);
/// ```
pub fn compute_tip(total_bill: f64, tip_percentage: u8) -> f64 {
    total_bill * (f64::from(tip_percentage) / 100.0)
}

/// What each person pays: `(total_bill + tip) / split_by`.
///
/// `split_by` must be at least 1; [`calculate`] guarantees that through
/// [`crate::SplitCount`].
///
/// ## Example
/// ```rust
/// use splittrip_core::calculator::compute_total_per_person;
///
/// assert_eq!(compute_total_per_person(200.0, 4, 50), 75.0);
/// ```
pub fn compute_total_per_person(total_bill: f64, split_by: u32, tip_percentage: u8) -> f64 {
    let tip = compute_tip(total_bill, tip_percentage);
    (total_bill + tip) / f64::from(split_by)
}

/// Runs both calculations for a captured input.
pub fn calculate(input: &BillInput) -> BillSummary {
    let bill = input.bill.value();
    let percent = input.tip_percent.get();

    BillSummary {
        tip_percent: input.tip_percent,
        tip_amount: compute_tip(bill, percent),
        total_per_person: compute_total_per_person(bill, input.split.get(), percent),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BillAmount, SliderPosition, SplitCount, TipPercent};

    fn input(bill: &str, split: u32, tip: u8) -> BillInput {
        BillInput::new(
            BillAmount::parse(bill).unwrap(),
            SplitCount::new(split).unwrap(),
            TipPercent::new(tip).unwrap(),
        )
    }

    #[test]
    fn test_no_tip_single_payer() {
        let summary = calculate(&input("100", 1, 0));
        assert_eq!(summary.tip_amount, 0.0);
        assert_eq!(summary.total_per_person, 100.0);
    }

    #[test]
    fn test_half_tip_four_ways() {
        let summary = calculate(&input("200", 4, 50));
        assert_eq!(summary.tip_amount, 100.0);
        assert_eq!(summary.total_per_person, 75.0);
        assert_eq!(summary.tip_percent.get(), 50);
    }

    #[test]
    fn test_tip_matches_formula() {
        for bill in [0.0, 1.0, 37.0, 120.0, 9_999.0] {
            for pct in [0u8, 16, 33, 50, 66, 83, 100] {
                let expected = bill * f64::from(pct) / 100.0;
                let tip = compute_tip(bill, pct);
                assert!((tip - expected).abs() < 1e-9, "bill={bill} pct={pct}");
            }
        }
    }

    #[test]
    fn test_total_per_person_matches_formula_and_is_non_negative() {
        for bill in [0.0, 15.0, 250.0] {
            for split in [1u32, 2, 3, 7] {
                for pct in [0u8, 33, 100] {
                    let total = compute_total_per_person(bill, split, pct);
                    let expected = (bill + compute_tip(bill, pct)) / f64::from(split);
                    assert_eq!(total, expected);
                    assert!(total >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_full_tip_doubles_bill() {
        assert_eq!(compute_total_per_person(60.0, 2, 100), 60.0);
    }

    #[test]
    fn test_uneven_split_is_unrounded() {
        let total = compute_total_per_person(100.0, 3, 0);
        assert!((total - 33.333_333_333).abs() < 1e-6);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let captured = BillInput::new(
            BillAmount::parse("87").unwrap(),
            SplitCount::new(3).unwrap(),
            SliderPosition::from_drag(5.0 / 6.0).tip_percent(),
        );
        let first = calculate(&captured);
        let second = calculate(&captured);
        assert_eq!(first, second);
        assert_eq!(compute_tip(87.0, 83), compute_tip(87.0, 83));
    }
}
