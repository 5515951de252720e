//! # Money Module
//!
//! Provides the `Money` type used to *display* calculated amounts.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The calculator works on plain f64 values and never rounds:             │
//! │                                                                         │
//! │    100 / 3 = 33.333333...                                               │
//! │                                                                         │
//! │  Rounding to cents happens once, at the display edge:                   │
//! │                                                                         │
//! │    Money::from_amount(33.333333...) → 3333 cents → "$33.33"            │
//! │                                                                         │
//! │  Halves round away from zero: 0.125 → 13 cents.                         │
//! │  Amounts that cannot be held in i64 cents give `None`, never a guess.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use splittrip_core::money::Money;
//!
//! let per_person = Money::from_amount(75.0).unwrap();
//! assert_eq!(per_person.cents(), 7500);
//! assert_eq!(per_person.to_string(), "$75.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Fraction digits Money always shows (it counts cents).
pub const MIN_DECIMALS: u8 = 2;

/// A display amount in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a calculated amount to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and amounts whose cents fall
    /// outside `i64`. Bills capped at [`crate::MAX_BILL`] never get there.
    ///
    /// ## Example
    /// ```rust
    /// use splittrip_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(33.333).unwrap().cents(), 3333);
    /// assert_eq!(Money::from_amount(0.125).unwrap().cents(), 13);
    /// assert_eq!(Money::from_amount(f64::NAN), None);
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if !(i64::MIN as f64..i64::MAX as f64).contains(&cents) {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats the amount with `decimals` fraction digits and no symbol.
    ///
    /// Money already holds whole cents, so it is never shown with fewer
    /// than [`MIN_DECIMALS`] digits (rounding it again would round twice);
    /// more than that pads with zeros.
    ///
    /// ## Example
    /// ```rust
    /// use splittrip_core::money::Money;
    ///
    /// let m = Money::from_cents(1234);
    /// assert_eq!(m.format_amount(2), "12.34");
    /// assert_eq!(m.format_amount(0), "12.34");
    /// assert_eq!(m.format_amount(3), "12.340");
    /// ```
    pub fn format_amount(&self, decimals: u8) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let padding = "0".repeat(decimals.saturating_sub(MIN_DECIMALS) as usize);
        format!(
            "{sign}{}.{:02}{padding}",
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented display with a fixed `$` symbol.
///
/// Screens should use the configured symbol via the front end's formatter.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
