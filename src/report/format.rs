//! Number formatting and column headings for the rendered statements

use chrono::{Datelike, NaiveDate};

use crate::ledger::HISTORICAL_YEARS;

/// Rupees per lakh
pub const LAKH: f64 = 100_000.0;

/// Token shown for a ratio with a zero denominator
pub const NOT_AVAILABLE: &str = "N/A";

/// Rupee amount in lakhs to two decimals; NaN and infinities become "0.00"
pub fn format_lakhs(amount: f64) -> String {
    format_two_places(amount / LAKH)
}

/// Ratio to two decimals, or "N/A"
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_two_places(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn format_two_places(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    // + 0.0 folds -0.0 into 0.0 so tiny negatives do not print as "-0.00"
    format!("{:.2}", rounded + 0.0)
}

/// Column heading for a ledger year
///
/// With a first balance sheet date the heading names the financial year
/// (`FY 2022-23`, or `CY 2023` for December year ends); otherwise it is a
/// plain ordinal.
pub fn year_label(first_year_end: Option<NaiveDate>, year: usize) -> String {
    let status = if year < HISTORICAL_YEARS { "Audited" } else { "Projected" };
    match first_year_end {
        Some(date) => {
            let end_year = date.year() + year as i32;
            if date.month() == 12 {
                format!("CY {} ({})", end_year, status)
            } else {
                format!("FY {}-{:02} ({})", end_year - 1, end_year.rem_euclid(100), status)
            }
        }
        None => format!("Year {} ({})", year + 1, status),
    }
}
