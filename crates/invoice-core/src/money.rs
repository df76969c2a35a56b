//! # Money Module
//!
//! Provides the `Amount` type for rupee values on a tax invoice.
//!
//! ## Why Not Integer Paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRECISION CONTRACT                                                     │
//! │                                                                         │
//! │  Catalog rates carry paise and beyond:  4285.72, 166.67, 238.10        │
//! │  Quantities may be fractional:          2.5 Lt, 0.75 Kg                 │
//! │                                                                         │
//! │  Line amounts, taxable total and GST total keep FULL precision.        │
//! │  Only two places round:                                                 │
//! │    • grand total  → whole rupees        (round_half_up)                 │
//! │    • display      → two fraction digits (format_inr)                    │
//! │                                                                         │
//! │  Halving GST for CGST/SGST is exact in binary floating point, so the   │
//! │  two halves always add back to the IGST figure bit-for-bit.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::money::Amount;
//!
//! let taxable = Amount::line_total(200.0, 2.0);
//! let gst = taxable.gst_at(18.0);
//! assert_eq!(gst.value(), 72.0);
//! assert_eq!(gst.half().value(), 36.0);
//! assert_eq!((taxable + gst).round_half_up(), 472);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use ts_rs::TS;

use crate::format::format_inr;

// =============================================================================
// Amount Type
// =============================================================================

/// A rupee value with full floating precision.
///
/// Serialized as a bare JSON number so persisted records stay readable
/// by the web editor.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Amount(f64);

impl Amount {
    /// Creates an amount from a rupee value.
    #[inline]
    pub const fn new(rupees: f64) -> Self {
        Amount(rupees)
    }

    /// Zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Returns the raw rupee value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Taxable value of a line: `unit_rate × quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Amount;
    ///
    /// assert_eq!(Amount::line_total(350.0, 3.0).value(), 1050.0);
    /// ```
    #[inline]
    pub fn line_total(unit_rate: f64, quantity: f64) -> Self {
        Amount(unit_rate * quantity)
    }

    /// GST on this amount at `rate_percent` (18.0 = 18%).
    ///
    /// Evaluated as `amount × rate / 100`, the same operand order the
    /// printed invoice has always used, so totals match to the last bit.
    #[inline]
    pub fn gst_at(&self, rate_percent: f64) -> Self {
        Amount(self.0 * rate_percent / 100.0)
    }

    /// Exactly one half of this amount (CGST or SGST share).
    #[inline]
    pub fn half(&self) -> Self {
        Amount(self.0 / 2.0)
    }

    /// Rounds to whole rupees.
    ///
    /// ## Rounding Rule
    /// ```text
    /// Ties go toward +∞ (floor(x + 0.5)), which is round-half-away-from-zero
    /// for every positive total:
    ///
    ///    471.5 →  472       -2.5 →  -2
    ///    471.4 →  471       -2.6 →  -3
    /// ```
    ///
    /// Non-finite values collapse to 0 so the words line always has an
    /// integer to spell.
    pub fn round_half_up(&self) -> i64 {
        if !self.0.is_finite() {
            return 0;
        }
        if self.0 >= 0.0 {
            self.0.round() as i64
        } else {
            (self.0 + 0.5).floor() as i64
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the printed-invoice currency format (`₹1,23,456.70`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_inr(self.0))
    }
}

impl From<f64> for Amount {
    fn from(rupees: f64) -> Self {
        Amount(rupees)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Amount(-self.0)
    }
}

/// Left-to-right summation, starting from zero.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
