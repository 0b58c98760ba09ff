//! Values carried from one projected year to the next

use crate::ledger::{Ledger, LineItem, HISTORICAL_YEARS};
use crate::loan::LoanYear;

/// Carry-forward state of a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Ledger year about to be projected
    pub year: usize,

    /// Balance of debt that predates the projection, after any paydown
    pub existing_loan: f64,

    /// Years whose cash plug came out negative
    pub shortfall_years: Vec<usize>,
}

impl ProjectionState {
    /// Start from the last audited year
    pub fn from_history(ledger: &Ledger) -> Self {
        Self {
            year: HISTORICAL_YEARS,
            existing_loan: ledger.get(LineItem::TermLoan, HISTORICAL_YEARS - 1),
            shortfall_years: Vec::new(),
        }
    }

    /// Record the outcome of the year just projected and move on
    pub fn advance(&mut self, loan: &LoanYear, closing_cash: f64) {
        self.existing_loan = loan.existing_balance;
        if closing_cash < 0.0 {
            self.shortfall_years.push(self.year);
        }
        self.year += 1;
    }
}
