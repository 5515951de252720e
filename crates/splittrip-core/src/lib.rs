//! # splittrip-core: Pure Bill-Splitting Logic for SplitTrip
//!
//! This crate is the **heart** of SplitTrip. It turns a bill, a split count
//! and a tip percentage into a tip amount and a per-person total, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SplitTrip Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (terminal app)                     │   │
//! │  │    Bill Input ──► Split +/- ──► Tip Slider ──► Header Total     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BillInput (immutable)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ splittrip-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ calculator │  │   money   │  │ validation│  │   │
//! │  │   │ SplitCount│  │ compute_tip│  │   Money   │  │ is_valid_ │  │   │
//! │  │   │ TipPercent│  │ per person │  │  (cents)  │  │   bill    │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO STATE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BillSummary                            │
//! │                                ▼                                        │
//! │                        rendered by the caller                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BillAmount, SplitCount, TipPercent, ...)
//! - [`calculator`] - Tip and per-person arithmetic
//! - [`money`] - Two-decimal display value for computed amounts
//! - [`error`] - Domain error types
//! - [`validation`] - Bill text and range validation
//!
//! ## Example Usage
//!
//! ```rust
//! use splittrip_core::{calculator, BillAmount, BillInput, SplitCount, TipPercent};
//!
//! let input = BillInput::new(
//!     BillAmount::parse("200").unwrap(),
//!     SplitCount::new(4).unwrap(),
//!     TipPercent::new(50).unwrap(),
//! );
//!
//! let summary = calculator::calculate(&input);
//! assert_eq!(summary.tip_amount, 100.0);
//! assert_eq!(summary.total_per_person, 75.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest number of people a bill can be split between.
pub const MIN_SPLIT: u32 = 1;

/// Largest bill accepted, in whole currency units.
///
/// ## Business Reason
/// Bill plus a 100% tip, in cents, must stay exactly representable as an
/// `f64` (below 2^53) and fit comfortably in `Money`'s `i64`.
pub const MAX_BILL: u64 = 10_000_000_000_000;

/// Largest tip percentage the slider can produce.
pub const MAX_TIP_PERCENT: u8 = 100;

/// Intermediate steps on the tip slider.
///
/// Five steps between the two end points give seven stops in total.
pub const SLIDER_STEPS: u32 = 5;
