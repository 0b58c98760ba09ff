//! Monthly EMI repayment schedule for a term loan
//!
//! Produced for disclosure alongside the projections; the annual projector
//! keeps its own straight-line view and does not read this schedule.

use serde::{Deserialize, Serialize};

use crate::assumptions::{LoanAssumptions, MAX_REPAYMENT_YEARS};

/// One month of the amortization table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentRow {
    pub month: u32,
    pub emi: f64,
    pub principal: f64,
    pub interest: f64,
    pub closing_balance: f64,
}

/// Full month-by-month amortization of a term loan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    pub emi: f64,
    pub rows: Vec<RepaymentRow>,
}

/// Equated monthly instalment for a principal, monthly rate and month count
///
/// `EMI = P·r·(1+r)^n / ((1+r)^n − 1)`, falling back to `P / n` at a zero rate.
pub fn calculate_emi(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate.abs() < 1e-12 {
        return principal / months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

impl RepaymentSchedule {
    /// Build the schedule; empty unless the loan is a term loan with a
    /// repayment period and a positive principal
    pub fn for_loan(loan: &LoanAssumptions) -> Self {
        if !loan.is_term_loan()
            || loan.repayment_years == 0
            || loan.repayment_years > MAX_REPAYMENT_YEARS
            || loan.principal_amount <= 0.0
        {
            return Self::default();
        }
        let Some(months) = loan.repayment_years.checked_mul(12) else {
            return Self::default();
        };
        let monthly_rate = loan.annual_interest_rate_percent / 100.0 / 12.0;
        let emi = calculate_emi(loan.principal_amount, monthly_rate, months);

        let mut balance = loan.principal_amount;
        let mut rows = Vec::with_capacity(months as usize);

        for month in 1..=months {
            let interest = balance * monthly_rate;
            // Final instalment clears whatever rounding has left behind
            let (principal, instalment) = if month == months {
                (balance, balance + interest)
            } else {
                (emi - interest, emi)
            };
            balance -= principal;

            rows.push(RepaymentRow {
                month,
                emi: instalment,
                principal,
                interest,
                closing_balance: if month == months { 0.0 } else { balance },
            });
        }

        Self { emi, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.emi).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_emi_known_value() {
        // 10 lakh at 12% over 12 months: EMI ≈ 88,848.79
        let emi = calculate_emi(1_000_000.0, 0.01, 12);
        assert_abs_diff_eq!(emi, 88_848.79, epsilon = 0.01);
    }

    #[test]
    fn test_principal_sums_to_loan_and_closes_at_zero() {
        let loan = LoanAssumptions::term_loan(8_000_000.0, 10.0, 5);
        let schedule = RepaymentSchedule::for_loan(&loan);

        assert_eq!(schedule.rows.len(), 60);
        assert_abs_diff_eq!(schedule.total_principal(), 8_000_000.0, epsilon = 0.01);
        assert_eq!(schedule.rows.last().unwrap().closing_balance, 0.0);
        assert_relative_eq!(
            schedule.total_paid(),
            schedule.total_principal() + schedule.total_interest(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_balance_declines_every_month() {
        let loan = LoanAssumptions::term_loan(500_000.0, 9.5, 3);
        let schedule = RepaymentSchedule::for_loan(&loan);
        for pair in schedule.rows.windows(2) {
            assert!(pair[1].closing_balance < pair[0].closing_balance);
            assert!(pair[1].interest < pair[0].interest);
        }
    }

    #[test]
    fn test_zero_rate_splits_evenly() {
        let loan = LoanAssumptions::term_loan(120_000.0, 0.0, 1);
        let schedule = RepaymentSchedule::for_loan(&loan);
        assert_relative_eq!(schedule.emi, 10_000.0);
        assert!(schedule.rows.iter().all(|r| r.interest == 0.0));
        assert_abs_diff_eq!(schedule.total_principal(), 120_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_for_overdraft_and_zero_years() {
        assert!(RepaymentSchedule::for_loan(&LoanAssumptions::overdraft(1_000_000.0, 12.0)).is_empty());
        assert!(RepaymentSchedule::for_loan(&LoanAssumptions::term_loan(1_000_000.0, 12.0, 0)).is_empty());
    }

    #[test]
    fn test_out_of_range_period_gives_empty_schedule() {
        let loan = LoanAssumptions::term_loan(1_000_000.0, 10.0, 400_000_000);
        assert!(RepaymentSchedule::for_loan(&loan).is_empty());

        let longest = LoanAssumptions::term_loan(1_000_000.0, 10.0, MAX_REPAYMENT_YEARS);
        assert_eq!(RepaymentSchedule::for_loan(&longest).rows.len(), 600);
    }
}
