//! Maximum Permissible Bank Finance under the two Tandon methods

use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, LineItem};

/// Working-capital assessment for one year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MpbfYear {
    pub total_current_assets: f64,
    pub other_current_liabilities: f64,
    /// Total current assets less current liabilities other than bank finance
    pub working_capital_gap: f64,
    /// Borrower's margin on the gap (Method I)
    pub margin_on_gap: f64,
    pub method_one: f64,
    /// Borrower's margin on total current assets (Method II)
    pub margin_on_current_assets: f64,
    pub method_two: f64,
    /// Lower of the two methods
    pub assessed_finance: f64,
    /// Working-capital gap left over after the Method II margin
    pub surplus_over_margin: f64,
}

impl MpbfYear {
    pub fn from_ledger(ledger: &Ledger, year: usize, margin: f64) -> Self {
        let total_current_assets = ledger.get(LineItem::TotalCurrentAssets, year);
        let other_current_liabilities = ledger.get(LineItem::OtherCurrentLiabilities, year);
        let working_capital_gap = total_current_assets - other_current_liabilities;

        let margin_on_gap = working_capital_gap * margin;
        let method_one = working_capital_gap - margin_on_gap;

        let margin_on_current_assets = total_current_assets * margin;
        let method_two = total_current_assets - margin_on_current_assets - other_current_liabilities;

        Self {
            total_current_assets,
            other_current_liabilities,
            working_capital_gap,
            margin_on_gap,
            method_one,
            margin_on_current_assets,
            method_two,
            assessed_finance: method_one.min(method_two),
            surplus_over_margin: working_capital_gap - margin_on_current_assets,
        }
    }
}

/// MPBF for every year of the ledger
pub fn analyse_mpbf(ledger: &Ledger, margin: f64) -> Vec<MpbfYear> {
    (0..ledger.year_count())
        .map(|year| MpbfYear::from_ledger(ledger, year, margin))
        .collect()
}
