//! Loan structure supplied by the borrower

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Longest repayment period accepted for a term loan
pub const MAX_REPAYMENT_YEARS: u32 = 50;

/// Type of the new facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanKind {
    /// Amortizing term loan with scheduled repayment
    #[default]
    TermLoan,
    /// Running overdraft, no scheduled repayment
    Overdraft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanAssumptions {
    pub kind: LoanKind,
    pub principal_amount: f64,
    pub annual_interest_rate_percent: f64,
    #[serde(default)]
    pub repayment_years: u32,
}

impl Default for LoanAssumptions {
    fn default() -> Self {
        Self {
            kind: LoanKind::TermLoan,
            principal_amount: 0.0,
            annual_interest_rate_percent: 0.0,
            repayment_years: 0,
        }
    }
}

impl LoanAssumptions {
    pub fn term_loan(principal_amount: f64, annual_interest_rate_percent: f64, repayment_years: u32) -> Self {
        Self {
            kind: LoanKind::TermLoan,
            principal_amount,
            annual_interest_rate_percent,
            repayment_years,
        }
    }

    pub fn overdraft(principal_amount: f64, annual_interest_rate_percent: f64) -> Self {
        Self {
            kind: LoanKind::Overdraft,
            principal_amount,
            annual_interest_rate_percent,
            repayment_years: 0,
        }
    }

    pub fn is_term_loan(&self) -> bool {
        matches!(self.kind, LoanKind::TermLoan)
    }

    /// Straight-line principal repaid each year
    ///
    /// Zero for overdrafts and for term loans without a repayment period.
    pub fn annual_repayment(&self) -> f64 {
        if self.is_term_loan() && self.repayment_years > 0 {
            self.principal_amount / self.repayment_years as f64
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !self.principal_amount.is_finite() || self.principal_amount < 0.0 {
            return Err(EngineError::invalid(
                "loanAssumptions.principalAmount",
                "must be a non-negative number",
            ));
        }
        if !self.annual_interest_rate_percent.is_finite() || self.annual_interest_rate_percent < 0.0 {
            return Err(EngineError::invalid(
                "loanAssumptions.annualInterestRatePercent",
                "must be a non-negative number",
            ));
        }
        if self.repayment_years > MAX_REPAYMENT_YEARS {
            return Err(EngineError::invalid(
                "loanAssumptions.repaymentYears",
                format!("must not exceed {} years", MAX_REPAYMENT_YEARS),
            ));
        }
        Ok(())
    }
}
