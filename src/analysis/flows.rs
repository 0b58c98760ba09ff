//! Cash flow (indirect method) and fund flow from year-on-year movements
//!
//! Both statements start at ledger year 1: year 0 has no prior year to diff
//! against.

use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, LineItem};

/// Indirect-method cash flow for one year transition
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowYear {
    pub year: usize,
    pub change_in_pat: f64,
    pub depreciation: f64,
    pub increase_in_debtors: f64,
    pub increase_in_inventory: f64,
    pub increase_in_creditors: f64,
    pub operating: f64,
    pub fixed_asset_purchases: f64,
    pub investing: f64,
    pub change_in_term_loan: f64,
    pub financing: f64,
    pub net_change: f64,
    pub opening_cash: f64,
    pub closing_cash: f64,
}

/// Cash flow for ledger years `1..`, closing cash accumulated from zero
pub fn build_cash_flow(ledger: &Ledger) -> Vec<CashFlowYear> {
    let mut rows = Vec::with_capacity(ledger.year_count().saturating_sub(1));
    let mut opening_cash = 0.0;

    for year in 1..ledger.year_count() {
        let change_in_pat = ledger.delta(LineItem::Pat, year);
        let depreciation = ledger.get(LineItem::Depreciation, year);
        let increase_in_debtors = ledger.delta(LineItem::SundryDebtors, year);
        let increase_in_inventory = ledger.delta(LineItem::Inventory, year);
        let increase_in_creditors = ledger.delta(LineItem::SundryCreditors, year);

        let operating = change_in_pat + depreciation - increase_in_debtors - increase_in_inventory
            + increase_in_creditors;

        let fixed_asset_purchases = ledger.delta(LineItem::GrossFixedAssets, year);
        let investing = -fixed_asset_purchases;

        let change_in_term_loan = ledger.delta(LineItem::TermLoan, year);
        let financing = change_in_term_loan;

        let net_change = operating + investing + financing;
        let closing_cash = opening_cash + net_change;

        rows.push(CashFlowYear {
            year,
            change_in_pat,
            depreciation,
            increase_in_debtors,
            increase_in_inventory,
            increase_in_creditors,
            operating,
            fixed_asset_purchases,
            investing,
            change_in_term_loan,
            financing,
            net_change,
            opening_cash,
            closing_cash,
        });

        opening_cash = closing_cash;
    }

    rows
}

/// Sources and uses of funds for one year transition
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FundFlowYear {
    pub year: usize,

    // Sources
    pub net_profit: f64,
    pub depreciation: f64,
    /// Reserve and depreciation movements not explained by PAT and the charge
    pub other_adjustments: f64,
    pub increase_in_capital: f64,
    pub increase_in_term_loan: f64,
    pub increase_in_unsecured_loans: f64,
    pub total_sources: f64,

    // Uses
    pub fixed_asset_purchases: f64,
    pub increase_in_investments: f64,
    pub increase_in_working_capital: f64,
    pub term_loan_repayment: f64,
    pub unsecured_loan_repayment: f64,
    pub capital_reduction: f64,
    pub total_uses: f64,
}

/// Fund flow for ledger years `1..`
///
/// Sources equal uses whenever both balance sheets of a transition balance.
pub fn build_fund_flow(ledger: &Ledger) -> Vec<FundFlowYear> {
    (1..ledger.year_count())
        .map(|year| {
            let net_profit = ledger.get(LineItem::Pat, year);
            let depreciation = ledger.get(LineItem::Depreciation, year);
            let other_adjustments = (ledger.delta(LineItem::Reserves, year) - net_profit)
                + (ledger.delta(LineItem::AccumulatedDepreciation, year) - depreciation);

            let capital = ledger.delta(LineItem::ShareCapital, year);
            let term_loan = ledger.delta(LineItem::TermLoan, year);
            let unsecured = ledger.delta(LineItem::UnsecuredLoan, year);

            let increase_in_capital = capital.max(0.0);
            let increase_in_term_loan = term_loan.max(0.0);
            let increase_in_unsecured_loans = unsecured.max(0.0);
            let total_sources = net_profit
                + depreciation
                + other_adjustments
                + increase_in_capital
                + increase_in_term_loan
                + increase_in_unsecured_loans;

            let fixed_asset_purchases = ledger.delta(LineItem::GrossFixedAssets, year);
            let increase_in_investments = ledger.delta(LineItem::Investments, year);
            let increase_in_working_capital = ledger.delta(LineItem::TotalCurrentAssets, year)
                - ledger.delta(LineItem::OtherCurrentLiabilities, year);
            let term_loan_repayment = (-term_loan).max(0.0);
            let unsecured_loan_repayment = (-unsecured).max(0.0);
            let capital_reduction = (-capital).max(0.0);
            let total_uses = fixed_asset_purchases
                + increase_in_investments
                + increase_in_working_capital
                + term_loan_repayment
                + unsecured_loan_repayment
                + capital_reduction;

            FundFlowYear {
                year,
                net_profit,
                depreciation,
                other_adjustments,
                increase_in_capital,
                increase_in_term_loan,
                increase_in_unsecured_loans,
                total_sources,
                fixed_asset_purchases,
                increase_in_investments,
                increase_in_working_capital,
                term_loan_repayment,
                unsecured_loan_repayment,
                capital_reduction,
                total_uses,
            }
        })
        .collect()
}
