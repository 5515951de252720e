//! # Domain Types
//!
//! Core domain types used throughout SplitTrip.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Inputs (set by the user)                                               │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BillAmount    │   │   SplitCount    │   │ SliderPosition  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  f64, >= 0      │   │  u32, >= 1      │   │  f32, 0.0..=1.0 │       │
//! │  │  digits only    │   │  +1 / -1 steps  │   │  7 stops        │       │
//! │  └────────┬────────┘   └────────┬────────┘   └────────┬────────┘       │
//! │           │                     │                     ▼                 │
//! │           │                     │            ┌─────────────────┐        │
//! │           │                     │            │   TipPercent    │        │
//! │           │                     │            │  u8, 0..=100    │        │
//! │           │                     │            └────────┬────────┘        │
//! │           └─────────────────────┼─────────────────────┘                 │
//! │                                 ▼                                       │
//! │                        ┌─────────────────┐                              │
//! │                        │   BillInput     │  (immutable)                 │
//! │                        └────────┬────────┘                              │
//! │                                 ▼ calculator::calculate                 │
//! │                        ┌─────────────────┐                              │
//! │                        │  BillSummary    │  (derived)                   │
//! │                        │  tip_amount     │                              │
//! │                        │  total_per_pers │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_bill_text, validate_bill_value, validate_slider_position, validate_split_count,
    validate_tip_percent, ValidationResult,
};
use crate::{MIN_SPLIT, SLIDER_STEPS};

// =============================================================================
// Bill Amount
// =============================================================================

/// The total bill, as a non-negative number.
///
/// Only ever built through [`validate_bill_text`] or [`validate_bill_value`]
/// (deserialization included), so the value is always a finite whole number
/// between 0 and [`crate::MAX_BILL`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64", into = "f64")]
#[ts(export)]
pub struct BillAmount(f64);

impl BillAmount {
    /// Parses user-typed bill text.
    ///
    /// ## Example
    /// ```rust
    /// use splittrip_core::BillAmount;
    ///
    /// assert_eq!(BillAmount::parse(" 125 ").unwrap().value(), 125.0);
    /// assert!(BillAmount::parse("12.5").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Self> {
        validate_bill_text(text)
    }

    /// Wraps an already-validated amount.
    pub(crate) const fn from_parsed(value: f64) -> Self {
        BillAmount(value)
    }

    /// Returns the amount as a number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for BillAmount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        validate_bill_value(value)
    }
}

impl From<BillAmount> for f64 {
    fn from(bill: BillAmount) -> Self {
        bill.0
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the bill. Never below [`MIN_SPLIT`].
///
/// ## User Workflow
/// ```text
/// Split   [-]  1  [+]
///          │       │
///          │       └──► increment(): 1 → 2 → 3 ...
///          └──────────► decrement(): 3 → 2 → 1 → 1 (floored)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct SplitCount(u32);

impl SplitCount {
    /// Creates a split count, rejecting zero.
    pub fn new(count: u32) -> ValidationResult<Self> {
        validate_split_count(count)?;
        Ok(SplitCount(count))
    }

    /// A bill paid by one person.
    #[inline]
    pub const fn one() -> Self {
        SplitCount(MIN_SPLIT)
    }

    /// Returns the count.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// One more person. There is no upper bound beyond the integer range.
    #[inline]
    pub const fn increment(self) -> Self {
        SplitCount(self.0.saturating_add(1))
    }

    /// One fewer person, floored at [`MIN_SPLIT`].
    ///
    /// ## Example
    /// ```rust
    /// use splittrip_core::SplitCount;
    ///
    /// assert_eq!(SplitCount::one().decrement(), SplitCount::one());
    /// ```
    #[inline]
    pub const fn decrement(self) -> Self {
        if self.0 > MIN_SPLIT {
            SplitCount(self.0 - 1)
        } else {
            SplitCount(MIN_SPLIT)
        }
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::one()
    }
}

impl TryFrom<u32> for SplitCount {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        SplitCount::new(count)
    }
}

impl From<SplitCount> for u32 {
    fn from(split: SplitCount) -> Self {
        split.0
    }
}

// =============================================================================
// Slider Position
// =============================================================================

/// Position of the tip slider, snapped to one of `SLIDER_STEPS + 2` stops.
///
/// ## Stops
/// ```text
///  0.0    1/6    2/6    3/6    4/6    5/6    1.0
///   ●──────●──────●──────●──────●──────●──────●
///   0%    16%    33%    50%    66%    83%   100%
/// ```
///
/// Positions are `f32` and the percentage is truncated, which is why the
/// second and fifth stops read 16% and 66% rather than 17% and 67%.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f32", into = "f32")]
#[ts(export)]
pub struct SliderPosition(f32);

impl SliderPosition {
    /// Creates a position from an exact value in `[0.0, 1.0]`.
    ///
    /// The value is snapped to the nearest stop. Out-of-range and non-finite
    /// values are rejected; use [`SliderPosition::from_drag`] for raw
    /// pointer input.
    pub fn new(position: f32) -> ValidationResult<Self> {
        validate_slider_position(position)?;
        Ok(Self::snap(position))
    }

    /// Converts a raw drag value into a stop, clamping it into range first.
    ///
    /// ## Example
    /// ```rust
    /// use splittrip_core::SliderPosition;
    ///
    /// assert_eq!(SliderPosition::from_drag(0.49).tip_percent().get(), 50);
    /// assert_eq!(SliderPosition::from_drag(7.0).tip_percent().get(), 100);
    /// ```
    pub fn from_drag(raw: f32) -> Self {
        if raw.is_nan() {
            return Self::start();
        }
        Self::snap(raw.clamp(0.0, 1.0))
    }

    /// The slider's resting position (no tip).
    #[inline]
    pub const fn start() -> Self {
        SliderPosition(0.0)
    }

    /// Returns the snapped position.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Index of the stop this position sits on, `0..=SLIDER_STEPS + 1`.
    pub fn stop_index(&self) -> u32 {
        (self.0 * Self::intervals()).round() as u32
    }

    /// Tip percentage selected by this position.
    #[inline]
    pub fn tip_percent(&self) -> TipPercent {
        TipPercent::from_slider(*self)
    }

    fn intervals() -> f32 {
        (SLIDER_STEPS + 1) as f32
    }

    fn snap(position: f32) -> Self {
        let intervals = Self::intervals();
        let index = (position * intervals).round();
        SliderPosition(index / intervals)
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        SliderPosition::start()
    }
}

impl TryFrom<f32> for SliderPosition {
    type Error = ValidationError;

    fn try_from(position: f32) -> Result<Self, Self::Error> {
        SliderPosition::new(position)
    }
}

impl From<SliderPosition> for f32 {
    fn from(position: SliderPosition) -> Self {
        position.0
    }
}

// =============================================================================
// Tip Percent
// =============================================================================

/// Tip as a whole percentage of the bill, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct TipPercent(u8);

impl TipPercent {
    /// Creates a tip percentage, rejecting values above 100.
    pub fn new(percent: u8) -> ValidationResult<Self> {
        validate_tip_percent(percent)?;
        Ok(TipPercent(percent))
    }

    /// No tip.
    #[inline]
    pub const fn zero() -> Self {
        TipPercent(0)
    }

    /// Derives the percentage from a slider position: `(position * 100)`
    /// truncated toward zero.
    pub fn from_slider(position: SliderPosition) -> Self {
        // A snapped position is within 0.0..=1.0, so this stays within 0..=100.
        TipPercent((position.value() * 100.0) as u8)
    }

    /// Returns the percentage.
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for TipPercent {
    fn default() -> Self {
        TipPercent::zero()
    }
}

impl TryFrom<u8> for TipPercent {
    type Error = ValidationError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        TipPercent::new(percent)
    }
}

impl From<TipPercent> for u8 {
    fn from(percent: TipPercent) -> Self {
        percent.0
    }
}

// =============================================================================
// Bill Input
// =============================================================================

/// Everything the calculator needs, captured at one instant.
///
/// The caller rebuilds this from its stored state on every input change and
/// hands it to [`crate::calculator::calculate`]; nothing flows back into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillInput {
    pub bill: BillAmount,
    pub split: SplitCount,
    pub tip_percent: TipPercent,
}

impl BillInput {
    /// Bundles the three inputs.
    pub const fn new(bill: BillAmount, split: SplitCount, tip_percent: TipPercent) -> Self {
        BillInput {
            bill,
            split,
            tip_percent,
        }
    }
}

// =============================================================================
// Bill Summary
// =============================================================================

/// Derived outputs shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillSummary {
    /// Percentage the amounts were computed with.
    pub tip_percent: TipPercent,

    /// Tip on the whole bill.
    pub tip_amount: f64,

    /// (bill + tip) / split.
    pub total_per_person: f64,
}

impl BillSummary {
    /// Summary before anything has been calculated.
    pub const fn zero() -> Self {
        BillSummary {
            tip_percent: TipPercent::zero(),
            tip_amount: 0.0,
            total_per_person: 0.0,
        }
    }

    /// Tip rounded to cents for display, `None` if it cannot be represented.
    #[inline]
    pub fn tip_money(&self) -> Option<Money> {
        Money::from_amount(self.tip_amount)
    }

    /// Per-person total rounded to cents for display, `None` if it cannot
    /// be represented.
    #[inline]
    pub fn total_per_person_money(&self) -> Option<Money> {
        Money::from_amount(self.total_per_person)
    }
}

impl Default for BillSummary {
    fn default() -> Self {
        BillSummary::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_count_floor() {
        let one = SplitCount::one();
        assert_eq!(one.decrement().get(), 1);
        assert_eq!(one.increment().get(), 2);
        assert_eq!(one.increment().increment().decrement().get(), 2);
    }

    #[test]
    fn test_split_count_new() {
        assert!(SplitCount::new(0).is_err());
        assert_eq!(SplitCount::new(3).unwrap().get(), 3);
        assert_eq!(SplitCount::default(), SplitCount::one());
    }

    #[test]
    fn test_split_count_saturates() {
        let max = SplitCount::new(u32::MAX).unwrap();
        assert_eq!(max.increment().get(), u32::MAX);
    }

    #[test]
    fn test_slider_stops_to_tip_percent() {
        let percents: Vec<u8> = (0..=SLIDER_STEPS + 1)
            .map(|i| {
                let raw = i as f32 / (SLIDER_STEPS + 1) as f32;
                SliderPosition::from_drag(raw).tip_percent().get()
            })
            .collect();
        assert_eq!(percents, vec![0, 16, 33, 50, 66, 83, 100]);
    }

    #[test]
    fn test_slider_snaps_to_nearest_stop() {
        assert_eq!(SliderPosition::from_drag(0.05).stop_index(), 0);
        assert_eq!(SliderPosition::from_drag(0.1).stop_index(), 1);
        assert_eq!(SliderPosition::from_drag(0.45).stop_index(), 3);
        assert_eq!(SliderPosition::from_drag(0.95).stop_index(), 6);
    }

    #[test]
    fn test_slider_clamps_drag() {
        assert_eq!(SliderPosition::from_drag(-0.5), SliderPosition::start());
        assert_eq!(SliderPosition::from_drag(f32::NAN), SliderPosition::start());
        assert_eq!(SliderPosition::from_drag(3.0).value(), 1.0);
    }

    #[test]
    fn test_slider_new_is_strict() {
        assert!(SliderPosition::new(1.5).is_err());
        assert!(SliderPosition::new(-0.1).is_err());
        assert!(SliderPosition::new(f32::INFINITY).is_err());
        assert_eq!(SliderPosition::new(0.5).unwrap().tip_percent().get(), 50);
    }

    #[test]
    fn test_tip_percent_range() {
        assert!(TipPercent::new(100).is_ok());
        assert!(TipPercent::new(101).is_err());
        assert_eq!(TipPercent::default().get(), 0);
    }

    #[test]
    fn test_bill_amount_parse() {
        assert_eq!(BillAmount::parse("200").unwrap().value(), 200.0);
        assert!(BillAmount::parse("").is_err());
        assert!(BillAmount::parse("abc").is_err());
    }

    #[test]
    fn test_bill_input_deserialize_validates() {
        let input: BillInput =
            serde_json::from_str(r#"{"bill":200.0,"split":4,"tipPercent":50}"#).unwrap();
        assert_eq!(input.split.get(), 4);
        assert_eq!(input.tip_percent.get(), 50);

        let rejected = [
            r#"{"bill":-5.0,"split":0,"tipPercent":250}"#,
            r#"{"bill":-5.0,"split":1,"tipPercent":0}"#,
            r#"{"bill":12.5,"split":1,"tipPercent":0}"#,
            r#"{"bill":1e300,"split":1,"tipPercent":0}"#,
            r#"{"bill":100.0,"split":0,"tipPercent":0}"#,
            r#"{"bill":100.0,"split":1,"tipPercent":250}"#,
        ];
        for json in rejected {
            assert!(serde_json::from_str::<BillInput>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_newtypes_round_trip_through_json() {
        let input = BillInput::new(
            BillAmount::parse("87").unwrap(),
            SplitCount::new(3).unwrap(),
            TipPercent::new(33).unwrap(),
        );
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"bill":87.0,"split":3,"tipPercent":33}"#);
        assert_eq!(serde_json::from_str::<BillInput>(&json).unwrap(), input);
    }

    #[test]
    fn test_slider_deserialize_validates() {
        assert!(serde_json::from_str::<SliderPosition>("1.5").is_err());
        assert_eq!(
            serde_json::from_str::<SliderPosition>("0.5")
                .unwrap()
                .tip_percent()
                .get(),
            50
        );
    }

    #[test]
    fn test_bill_summary_serializes_camel_case() {
        let summary = BillSummary {
            tip_percent: TipPercent::new(50).unwrap(),
            tip_amount: 100.0,
            total_per_person: 75.0,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["tipPercent"], 50);
        assert_eq!(json["tipAmount"], 100.0);
        assert_eq!(json["totalPerPerson"], 75.0);
    }
}
