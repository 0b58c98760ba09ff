//! Solvency, liquidity, profitability and coverage ratios

use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, LineItem};

/// `numerator / denominator`, or `None` when the denominator is exactly zero
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Ratios for a single year; `None` renders as "N/A"
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatioYear {
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub debt_equity: Option<f64>,
    pub tol_tnw: Option<f64>,
    pub sales_to_total_assets: Option<f64>,
    pub pbt_to_sales_percent: Option<f64>,
    pub pat_to_sales_percent: Option<f64>,
    pub roce_percent: Option<f64>,
    pub dscr: Option<f64>,
}

impl RatioYear {
    /// Compute every ratio from one year of the ledger
    pub fn from_ledger(ledger: &Ledger, year: usize) -> Self {
        let get = |item| ledger.get(item, year);

        let current_assets = get(LineItem::TotalCurrentAssets);
        let current_liabilities = get(LineItem::OtherCurrentLiabilities);
        let net_worth = get(LineItem::NetWorth);
        let long_term_debt = get(LineItem::TermLoan) + get(LineItem::UnsecuredLoan);
        let outside_liabilities = get(LineItem::TotalLiabilities) - net_worth;
        let net_sales = get(LineItem::NetSales);
        let interest = get(LineItem::Interest);

        let cash_accruals = get(LineItem::Pat) + interest + get(LineItem::Depreciation);
        let debt_service = interest + get(LineItem::PrincipalRepayment);

        Self {
            current_ratio: ratio(current_assets, current_liabilities),
            quick_ratio: ratio(current_assets - get(LineItem::Inventory), current_liabilities),
            debt_equity: ratio(long_term_debt, net_worth),
            tol_tnw: ratio(outside_liabilities, net_worth),
            sales_to_total_assets: ratio(net_sales, get(LineItem::TotalAssets)),
            pbt_to_sales_percent: ratio(get(LineItem::Pbt), net_sales).map(|r| r * 100.0),
            pat_to_sales_percent: ratio(get(LineItem::Pat), net_sales).map(|r| r * 100.0),
            roce_percent: ratio(get(LineItem::Pbit), net_worth + long_term_debt).map(|r| r * 100.0),
            dscr: ratio(cash_accruals, debt_service),
        }
    }
}

/// Ratios for every year of the ledger
pub fn analyse_ratios(ledger: &Ledger) -> Vec<RatioYear> {
    (0..ledger.year_count())
        .map(|year| RatioYear::from_ledger(ledger, year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::YearRecord;
    use approx::assert_relative_eq;

    fn single_year(setup: impl FnOnce(&mut YearRecord)) -> Ledger {
        let mut record = YearRecord::new(0);
        setup(&mut record);
        let mut ledger = Ledger::new();
        ledger.push_year(record);
        ledger
    }

    #[test]
    fn test_zero_denominator_is_none() {
        assert_eq!(ratio(5.0, 0.0), None);
        assert_eq!(ratio(0.0, 0.0), None);
        assert_eq!(ratio(5.0, 2.0), Some(2.5));
    }

    #[test]
    fn test_liquidity_and_leverage() {
        let ledger = single_year(|r| {
            r.set(LineItem::TotalCurrentAssets, 300.0);
            r.set(LineItem::Inventory, 100.0);
            r.set(LineItem::OtherCurrentLiabilities, 150.0);
            r.set(LineItem::NetWorth, 200.0);
            r.set(LineItem::TermLoan, 80.0);
            r.set(LineItem::UnsecuredLoan, 20.0);
            r.set(LineItem::TotalLiabilities, 450.0);
        });
        let ratios = RatioYear::from_ledger(&ledger, 0);

        assert_relative_eq!(ratios.current_ratio.unwrap(), 2.0);
        assert_relative_eq!(ratios.quick_ratio.unwrap(), 200.0 / 150.0);
        assert_relative_eq!(ratios.debt_equity.unwrap(), 0.5);
        assert_relative_eq!(ratios.tol_tnw.unwrap(), 1.25);
    }

    #[test]
    fn test_dscr() {
        let ledger = single_year(|r| {
            r.set(LineItem::Pat, 300.0);
            r.set(LineItem::Interest, 100.0);
            r.set(LineItem::Depreciation, 50.0);
            r.set(LineItem::PrincipalRepayment, 200.0);
        });
        let ratios = RatioYear::from_ledger(&ledger, 0);
        assert_relative_eq!(ratios.dscr.unwrap(), 1.5);
    }

    #[test]
    fn test_dscr_without_debt_service_is_none() {
        let ledger = single_year(|r| {
            r.set(LineItem::Pat, 300.0);
            r.set(LineItem::Depreciation, 50.0);
        });
        let ratios = RatioYear::from_ledger(&ledger, 0);
        assert_eq!(ratios.dscr, None);
    }

    #[test]
    fn test_margins_as_percent_of_sales() {
        let ledger = single_year(|r| {
            r.set(LineItem::NetSales, 1_000.0);
            r.set(LineItem::Pbt, 150.0);
            r.set(LineItem::Pat, 105.0);
            r.set(LineItem::Pbit, 250.0);
            r.set(LineItem::NetWorth, 1_000.0);
            r.set(LineItem::TotalAssets, 2_000.0);
        });
        let ratios = RatioYear::from_ledger(&ledger, 0);
        assert_relative_eq!(ratios.pbt_to_sales_percent.unwrap(), 15.0);
        assert_relative_eq!(ratios.pat_to_sales_percent.unwrap(), 10.5);
        assert_relative_eq!(ratios.roce_percent.unwrap(), 25.0);
        assert_relative_eq!(ratios.sales_to_total_assets.unwrap(), 0.5);
    }
}
