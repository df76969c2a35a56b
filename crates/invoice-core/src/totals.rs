//! # Totals Engine
//!
//! Computes the taxable subtotal, GST, and rounded grand total of an
//! invoice from its line items and flat adjustments.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► Σ unit_rate × qty                     = taxable_total        │
//! │        ──► Σ unit_rate × qty × gst% / 100        = gst_total            │
//! │                                                                         │
//! │  round_half_up(taxable + gst + freight − discount) = grand_total (₹)   │
//! │                                                                         │
//! │  Display split (same gst_total, never re-derived from lines):          │
//! │    Central ──► IGST  = gst_total                                       │
//! │    Local   ──► CGST  = gst_total / 2,  SGST = gst_total / 2            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and total: any numeric input (negative, fractional, empty item
//! list) produces a result. Sums run left to right in item order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Amount;
use crate::types::{Adjustments, LineItem, SaleType};

/// Derived totals. Recomputed on every render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComputedTotals {
    /// Σ unit_rate × quantity, full precision.
    pub taxable_total: Amount,
    /// Σ taxable × gst% / 100, full precision.
    pub gst_total: Amount,
    /// Whole rupees.
    pub grand_total: i64,
}

/// Computes [`ComputedTotals`] for a sequence of items and adjustments.
///
/// ## Example
/// ```rust
/// use invoice_core::totals::compute_totals;
/// use invoice_core::types::{Adjustments, LineItem};
///
/// let item = LineItem { unit_rate: 200.0, quantity: 2.0, gst_rate_percent: 18.0, ..LineItem::default() };
/// let totals = compute_totals(&[item], &Adjustments::default());
///
/// assert_eq!(totals.taxable_total.value(), 400.0);
/// assert_eq!(totals.gst_total.value(), 72.0);
/// assert_eq!(totals.grand_total, 472);
/// ```
pub fn compute_totals(items: &[LineItem], adjustments: &Adjustments) -> ComputedTotals {
    let taxable_total: Amount = items.iter().map(LineItem::taxable_amount).sum();
    let gst_total: Amount = items.iter().map(LineItem::gst_amount).sum();

    let unrounded = taxable_total + gst_total + Amount::new(adjustments.freight_charges)
        - Amount::new(adjustments.discount);

    ComputedTotals {
        taxable_total,
        gst_total,
        grand_total: unrounded.round_half_up(),
    }
}

impl ComputedTotals {
    /// Splits `gst_total` for display according to the sale type.
    pub fn tax_breakdown(&self, sale_type: SaleType) -> TaxBreakdown {
        match sale_type {
            SaleType::Central => TaxBreakdown::Integrated {
                igst: self.gst_total,
            },
            SaleType::Local => TaxBreakdown::Split {
                cgst: self.gst_total.half(),
                sgst: self.gst_total.half(),
            },
        }
    }

    /// Grand total as an [`Amount`] for currency display.
    pub fn grand_total_amount(&self) -> Amount {
        Amount::new(self.grand_total as f64)
    }
}

// =============================================================================
// Tax Breakdown
// =============================================================================

/// How GST is presented. Exactly one shape exists per invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxBreakdown {
    /// Inter-state: one IGST line.
    Integrated { igst: Amount },
    /// Intra-state: CGST and SGST, each exactly half.
    Split { cgst: Amount, sgst: Amount },
}

/// A labelled tax line in the totals panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxLine {
    pub label: &'static str,
    pub amount: Amount,
}

impl TaxBreakdown {
    /// Lines in print order.
    pub fn lines(&self) -> Vec<TaxLine> {
        match *self {
            TaxBreakdown::Integrated { igst } => vec![TaxLine {
                label: "IGST Output",
                amount: igst,
            }],
            TaxBreakdown::Split { cgst, sgst } => vec![
                TaxLine {
                    label: "CGST Output",
                    amount: cgst,
                },
                TaxLine {
                    label: "SGST Output",
                    amount: sgst,
                },
            ],
        }
    }

    /// Sum of the displayed lines.
    pub fn total(&self) -> Amount {
        match *self {
            TaxBreakdown::Integrated { igst } => igst,
            TaxBreakdown::Split { cgst, sgst } => cgst + sgst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(unit_rate: f64, quantity: f64, gst_rate_percent: f64) -> LineItem {
        LineItem {
            unit_rate,
            quantity,
            gst_rate_percent,
            ..LineItem::default()
        }
    }

    fn adjustments(discount: f64, freight_charges: f64) -> Adjustments {
        Adjustments {
            discount,
            freight_charges,
        }
    }

    #[test]
    fn test_single_line_local_sale() {
        let totals = compute_totals(&[item(200.0, 2.0, 18.0)], &Adjustments::default());
        assert_eq!(totals.taxable_total.value(), 400.0);
        assert_eq!(totals.gst_total.value(), 72.0);
        assert_eq!(totals.grand_total, 472);

        let lines = totals.tax_breakdown(SaleType::Local).lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "CGST Output");
        assert_eq!(lines[0].amount.value(), 36.0);
        assert_eq!(lines[1].label, "SGST Output");
        assert_eq!(lines[1].amount.value(), 36.0);
    }

    #[test]
    fn test_central_sale_has_one_line() {
        let totals = compute_totals(&[item(200.0, 2.0, 18.0)], &Adjustments::default());
        let lines = totals.tax_breakdown(SaleType::Central).lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "IGST Output");
        assert_eq!(lines[0].amount.value(), 72.0);
    }

    #[test]
    fn test_empty_items_only_adjustments() {
        let totals = compute_totals(&[], &adjustments(10.0, 150.4));
        assert!(totals.taxable_total.is_zero());
        assert!(totals.gst_total.is_zero());
        assert_eq!(totals.grand_total, 140);
    }

    #[test]
    fn test_discount_and_freight() {
        let totals = compute_totals(&[item(1000.0, 1.0, 5.0)], &adjustments(50.0, 120.0));
        // 1000 + 50 + 120 - 50
        assert_eq!(totals.grand_total, 1120);
    }

    #[test]
    fn test_fractional_rates_keep_precision_until_grand_total() {
        // 4285.72 × 3 = 12857.16, 5% = 642.858
        let totals = compute_totals(&[item(4285.72, 3.0, 5.0)], &Adjustments::default());
        assert!((totals.taxable_total.value() - 12857.16).abs() < 1e-9);
        assert!((totals.gst_total.value() - 642.858).abs() < 1e-9);
        assert_eq!(totals.grand_total, 13500);
    }

    #[test]
    fn test_half_rupee_rounds_up() {
        // 100.5 exactly
        let totals = compute_totals(&[item(100.5, 1.0, 0.0)], &Adjustments::default());
        assert_eq!(totals.grand_total, 101);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let totals = compute_totals(&[item(-100.0, 2.0, 18.0)], &Adjustments::default());
        assert_eq!(totals.taxable_total.value(), -200.0);
        assert_eq!(totals.gst_total.value(), -36.0);
        assert_eq!(totals.grand_total, -236);
    }

    #[test]
    fn test_discount_exceeding_charges_goes_negative() {
        let totals = compute_totals(&[item(100.0, 1.0, 0.0)], &adjustments(500.0, 0.0));
        assert_eq!(totals.grand_total, -400);
    }

    proptest! {
        #[test]
        fn taxable_total_is_sum_of_independent_lines(
            lines in prop::collection::vec((0.0f64..10_000.0, 0.0f64..500.0, 0.0f64..28.0), 0..30)
        ) {
            let items: Vec<LineItem> = lines.iter().map(|&(r, q, g)| item(r, q, g)).collect();
            let totals = compute_totals(&items, &Adjustments::default());

            let mut expected = 0.0;
            for &(r, q, _) in &lines {
                expected += r * q;
            }
            prop_assert_eq!(totals.taxable_total.value(), expected);
        }

        #[test]
        fn reordering_items_does_not_change_totals(
            lines in prop::collection::vec((0.0f64..10_000.0, 0.0f64..500.0, 0.0f64..28.0), 1..30)
        ) {
            let items: Vec<LineItem> = lines.iter().map(|&(r, q, g)| item(r, q, g)).collect();
            let mut reversed = items.clone();
            reversed.reverse();

            let a = compute_totals(&items, &Adjustments::default());
            let b = compute_totals(&reversed, &Adjustments::default());

            let tolerance = 1e-9 * a.taxable_total.value().abs().max(1.0);
            prop_assert!((a.taxable_total.value() - b.taxable_total.value()).abs() <= tolerance);
            prop_assert!((a.gst_total.value() - b.gst_total.value()).abs() <= tolerance);
        }

        #[test]
        fn local_halves_sum_exactly_to_central_total(
            lines in prop::collection::vec((0.0f64..10_000.0, 0.0f64..500.0, 0.0f64..28.0), 0..30)
        ) {
            let items: Vec<LineItem> = lines.iter().map(|&(r, q, g)| item(r, q, g)).collect();
            let totals = compute_totals(&items, &Adjustments::default());

            let local = totals.tax_breakdown(SaleType::Local).total();
            let central = totals.tax_breakdown(SaleType::Central).total();
            prop_assert_eq!(local, central);
        }

        #[test]
        fn grand_total_matches_rounded_sum(
            lines in prop::collection::vec((0.0f64..5_000.0, 0.0f64..100.0, 0.0f64..28.0), 0..10),
            discount in 0.0f64..100.0,
            freight in 0.0f64..1_000.0,
        ) {
            let items: Vec<LineItem> = lines.iter().map(|&(r, q, g)| item(r, q, g)).collect();
            let totals = compute_totals(&items, &adjustments(discount, freight));
            let raw = totals.taxable_total.value() + totals.gst_total.value() + freight - discount;
            prop_assert!((totals.grand_total as f64 - raw).abs() <= 0.5);
        }
    }
}
