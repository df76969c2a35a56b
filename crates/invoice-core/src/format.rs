//! # Display Formatting
//!
//! How amounts, rates, quantities and dates look on the printed invoice.
//!
//! ## Indian Digit Grouping
//! ```text
//!   12345678.9  ──►  ₹1,23,45,678.90
//!                     │  │  │  └── last three digits
//!                     └──┴──┴───── then groups of two
//! ```
//!
//! Every amount is rounded to whole paise (half away from zero) before it
//! is split into rupees and paise, so the two fraction digits are always
//! exact regardless of the float underneath.

use chrono::NaiveDate;

/// Shown for a missing phone, GSTIN or amount.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown for a missing PO number or vehicle number.
pub const NO_REFERENCE: &str = "-";

/// Rule line for a party name or address left blank.
pub const BLANK_RULE: &str = "________________";

/// Bank account type when none is recorded.
pub const DEFAULT_ACCOUNT_TYPE: &str = "Current Account";

// =============================================================================
// Amounts
// =============================================================================

/// Rupees with Indian grouping and exactly two fraction digits.
///
/// ## Example
/// ```rust
/// use invoice_core::format::format_inr;
///
/// assert_eq!(format_inr(1234.56), "₹1,234.56");
/// assert_eq!(format_inr(12345678.9), "₹1,23,45,678.90");
/// assert_eq!(format_inr(-472.0), "-₹472.00");
/// ```
pub fn format_inr(amount: f64) -> String {
    let Some((negative, rupees, paise)) = split_paise(amount) else {
        return NOT_AVAILABLE.to_string();
    };
    format!(
        "{}₹{}.{:02}",
        if negative { "-" } else { "" },
        group_indian(rupees),
        paise
    )
}

/// Plain two-decimal rendering used in table cells (`466.11`, `1250.00`).
///
/// NaN and infinities print as `0.00`; finite amounts too large to count
/// in paise print as `N/A`.
pub fn format_rate(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }
    let Some((negative, rupees, paise)) = split_paise(amount) else {
        return NOT_AVAILABLE.to_string();
    };
    format!("{}{}.{:02}", if negative { "-" } else { "" }, rupees, paise)
}

/// GST rate as printed in the table: `18%`, `2.5%`.
pub fn format_percent(rate: f64) -> String {
    format!("{}%", rate)
}

/// Quantity cell; zero quantity prints as an empty cell.
pub fn format_quantity(quantity: f64) -> String {
    if quantity == 0.0 || !quantity.is_finite() {
        String::new()
    } else {
        format!("{}", quantity)
    }
}

/// Inserts Indian grouping separators into a whole number.
///
/// ```rust
/// use invoice_core::format::group_indian;
///
/// assert_eq!(group_indian(999), "999");
/// assert_eq!(group_indian(100000), "1,00,000");
/// ```
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Returns `(is_negative, rupees, paise)` with paise rounded half away
/// from zero. A value that rounds to zero is never negative.
///
/// `None` for non-finite amounts and for amounts whose paise do not fit
/// in a `u64`.
fn split_paise(amount: f64) -> Option<(bool, u64, u64)> {
    let scaled = (amount.abs() * 100.0).round();
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return None;
    }
    let total_paise = scaled as u64;
    let negative = amount < 0.0 && total_paise > 0;
    Some((negative, total_paise / 100, total_paise % 100))
}

// =============================================================================
// Dates
// =============================================================================

/// `2025-01-05` → `05 Jan 2025`. Anything unparseable is shown as given.
///
/// ## Example
/// ```rust
/// use invoice_core::format::format_invoice_date;
///
/// assert_eq!(format_invoice_date("2025-01-05"), "05 Jan 2025");
/// assert_eq!(format_invoice_date("next week"), "next week");
/// ```
pub fn format_invoice_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d %b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

// =============================================================================
// Placeholders
// =============================================================================

/// `value`, or `placeholder` when `value` is blank.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
