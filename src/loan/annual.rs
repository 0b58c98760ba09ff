//! Annual debt view used by the projector
//!
//! Two pieces of debt are tracked: the balance already on the books at the
//! last audited year end, and the new facility drawn in the first projected
//! year. The new facility amortizes straight-line, not on a reducing balance.

use crate::assumptions::LoanAssumptions;
use crate::ledger::HISTORICAL_YEARS;

/// Debt position for one projected year
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoanYear {
    /// Carried-forward balance of debt that predates the projection
    pub existing_balance: f64,
    /// Outstanding balance of the new facility
    pub new_balance: f64,
    /// Interest on both pieces of debt
    pub interest: f64,
    /// Scheduled principal of the new facility falling due this year
    pub principal_due: f64,
}

impl LoanYear {
    /// Term loan line of the balance sheet
    pub fn total_balance(&self) -> f64 {
        self.existing_balance + self.new_balance
    }
}

/// Computes [`LoanYear`] figures from the loan assumptions
#[derive(Debug, Clone)]
pub struct LoanAmortizer<'a> {
    loan: &'a LoanAssumptions,
    existing_interest_percent: f64,
    existing_paydown_percent: f64,
}

impl<'a> LoanAmortizer<'a> {
    pub fn new(
        loan: &'a LoanAssumptions,
        existing_interest_percent: f64,
        existing_paydown_percent: f64,
    ) -> Self {
        Self {
            loan,
            existing_interest_percent,
            existing_paydown_percent,
        }
    }

    /// Whole years since the new facility was drawn (0 in the draw year)
    fn years_since_disbursement(year: usize) -> Option<usize> {
        year.checked_sub(HISTORICAL_YEARS)
    }

    /// Outstanding balance of the new facility during a year
    pub fn new_balance(&self, year: usize) -> f64 {
        match Self::years_since_disbursement(year) {
            Some(elapsed) => {
                let repaid = self.loan.annual_repayment() * elapsed as f64;
                (self.loan.principal_amount - repaid).max(0.0)
            }
            None => 0.0,
        }
    }

    /// Straight-line principal due in a year, limited to what is still owed
    pub fn principal_due(&self, year: usize) -> f64 {
        self.loan.annual_repayment().min(self.new_balance(year))
    }

    /// Debt position for a projected year
    ///
    /// `prior_existing` is last year's balance of the pre-projection debt. It is
    /// part-repaid once, in the first projected year, and otherwise carried.
    pub fn year(&self, year: usize, prior_existing: f64) -> LoanYear {
        let existing_balance = if year == HISTORICAL_YEARS && prior_existing > 0.0 {
            prior_existing * (1.0 - self.existing_paydown_percent / 100.0)
        } else {
            prior_existing
        };

        let new_balance = self.new_balance(year);
        let interest = prior_existing * self.existing_interest_percent / 100.0
            + new_balance * self.loan.annual_interest_rate_percent / 100.0;

        LoanYear {
            existing_balance,
            new_balance,
            interest,
            principal_due: self.principal_due(year),
        }
    }
}
