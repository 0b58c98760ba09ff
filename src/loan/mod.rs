//! Loan amortization: annual interest and repayment for the projector, and
//! the monthly EMI schedule disclosed to the lender

mod annual;
mod emi;

pub use annual::{LoanAmortizer, LoanYear};
pub use emi::{calculate_emi, RepaymentRow, RepaymentSchedule};
