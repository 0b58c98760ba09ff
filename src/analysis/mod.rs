//! Credit analysis over a completed ledger: ratios, MPBF, cash and fund flow

mod flows;
mod mpbf;
mod ratios;

pub use flows::{build_cash_flow, build_fund_flow, CashFlowYear, FundFlowYear};
pub use mpbf::{analyse_mpbf, MpbfYear};
pub use ratios::{analyse_ratios, ratio, RatioYear};
