//! Balance sheet roll-forward with cash as the balancing figure

use crate::assumptions::GrowthAssumptions;
use crate::depreciation::DepreciationSchedule;
use crate::ledger::{Ledger, LineItem, YearRecord};
use crate::loan::LoanYear;

use super::ProjectionConfig;

/// Every line on the liabilities side
const LIABILITIES: [LineItem; 6] = [
    LineItem::ShareCapital,
    LineItem::Reserves,
    LineItem::UnsecuredLoan,
    LineItem::TermLoan,
    LineItem::SundryCreditors,
    LineItem::OtherLiabilities,
];

/// Assets other than cash and the fixed-asset block
const OTHER_NON_CASH_ASSETS: [LineItem; 4] = [
    LineItem::Investments,
    LineItem::Inventory,
    LineItem::SundryDebtors,
    LineItem::OtherCurrentAssets,
];

/// Roll every balance sheet line forward one year
///
/// Must run after the operating statement for the same year is on `record`:
/// reserves take this year's PAT and working-capital lines are sized from
/// this year's sales and purchases.
pub fn project_year(
    ledger: &Ledger,
    record: &mut YearRecord,
    growth: &GrowthAssumptions,
    loan: &LoanYear,
    depreciation: &DepreciationSchedule,
    config: &ProjectionConfig,
) {
    let year = record.year();
    let prior = year - 1;
    let expense_factor = growth.expense_factor(year);

    // Equity and debt
    record.set(LineItem::ShareCapital, ledger.get(LineItem::ShareCapital, prior));
    record.set(
        LineItem::Reserves,
        ledger.get(LineItem::Reserves, prior) + record.get(LineItem::Pat),
    );
    record.set(LineItem::UnsecuredLoan, ledger.get(LineItem::UnsecuredLoan, prior));
    record.set(LineItem::TermLoan, loan.total_balance());
    record.set(LineItem::PrincipalRepayment, loan.principal_due);

    // Working capital by turnover months
    let monthly_purchases = record.get(LineItem::RawMaterials) / 12.0;
    let monthly_sales = record.get(LineItem::NetSales) / 12.0;
    record.set(LineItem::SundryCreditors, monthly_purchases * config.creditor_months);
    record.set(LineItem::Inventory, monthly_purchases * config.inventory_months);
    record.set(LineItem::SundryDebtors, monthly_sales * config.debtor_months);
    record.set(
        LineItem::OtherLiabilities,
        ledger.get(LineItem::OtherLiabilities, prior) * expense_factor,
    );
    record.set(
        LineItem::OtherCurrentAssets,
        ledger.get(LineItem::OtherCurrentAssets, prior) * expense_factor,
    );

    // Fixed assets
    let additions = depreciation.additions(year);
    record.set(LineItem::AssetAdditions, additions);
    record.set(
        LineItem::GrossFixedAssets,
        ledger.get(LineItem::GrossFixedAssets, prior) + additions,
    );
    record.set(
        LineItem::AccumulatedDepreciation,
        ledger.get(LineItem::AccumulatedDepreciation, prior) + record.get(LineItem::Depreciation),
    );
    record.set(LineItem::Investments, ledger.get(LineItem::Investments, prior));

    // Cash closes the gap; a negative plug is a funding shortfall, not an error
    let net_fixed_assets =
        record.get(LineItem::GrossFixedAssets) - record.get(LineItem::AccumulatedDepreciation);
    let cash = record.sum(&LIABILITIES) - net_fixed_assets - record.sum(&OTHER_NON_CASH_ASSETS);
    record.set(LineItem::Cash, cash);
    compute_totals(record);
}

/// Fill in net worth, current liability/asset and grand totals
///
/// Totals already on the record (reported audited figures) are kept.
pub fn compute_totals(record: &mut YearRecord) {
    let net_worth = record.or_insert(
        LineItem::NetWorth,
        record.get(LineItem::ShareCapital) + record.get(LineItem::Reserves),
    );

    let current_liabilities = record.or_insert(
        LineItem::OtherCurrentLiabilities,
        record.get(LineItem::SundryCreditors) + record.get(LineItem::OtherLiabilities),
    );

    let borrowings = record.get(LineItem::UnsecuredLoan) + record.get(LineItem::TermLoan);
    record.or_insert(
        LineItem::TotalLiabilities,
        net_worth + borrowings + current_liabilities,
    );

    let net_fixed_assets = record.or_insert(
        LineItem::NetFixedAssets,
        record.get(LineItem::GrossFixedAssets) - record.get(LineItem::AccumulatedDepreciation),
    );

    let current_assets = record.or_insert(
        LineItem::TotalCurrentAssets,
        record.sum(&[
            LineItem::Inventory,
            LineItem::SundryDebtors,
            LineItem::OtherCurrentAssets,
            LineItem::Cash,
        ]),
    );

    record.or_insert(
        LineItem::TotalAssets,
        net_fixed_assets + record.get(LineItem::Investments) + current_assets,
    );
}

/// Liabilities side minus assets side
pub fn imbalance(ledger: &Ledger, year: usize) -> f64 {
    ledger.get(LineItem::TotalLiabilities, year) - ledger.get(LineItem::TotalAssets, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn history() -> Ledger {
        let mut ledger = Ledger::new();
        for year in 0..2 {
            let mut record = YearRecord::new(year);
            record.set(LineItem::NetSales, 60_000_000.0);
            record.set(LineItem::RawMaterials, 30_000_000.0);
            record.set(LineItem::ShareCapital, 5_000_000.0);
            record.set(LineItem::Reserves, 3_000_000.0);
            record.set(LineItem::TermLoan, 2_000_000.0);
            record.set(LineItem::SundryCreditors, 5_000_000.0);
            record.set(LineItem::GrossFixedAssets, 10_000_000.0);
            record.set(LineItem::AccumulatedDepreciation, 4_000_000.0);
            record.set(LineItem::Inventory, 3_000_000.0);
            record.set(LineItem::SundryDebtors, 5_000_000.0);
            record.set(LineItem::Cash, 1_000_000.0);
            compute_totals(&mut record);
            ledger.push_year(record);
        }
        ledger
    }

    #[test]
    fn test_history_fixture_balances() {
        let ledger = history();
        assert_relative_eq!(imbalance(&ledger, 1), 0.0);
    }

    #[test]
    fn test_cash_plug_balances_the_sheet() {
        let ledger = history();
        let growth = GrowthAssumptions::flat(1, 10.0, 10.0);
        let schedule = DepreciationSchedule::default();
        let loan = LoanYear {
            existing_balance: 1_800_000.0,
            new_balance: 8_000_000.0,
            interest: 1_000_000.0,
            principal_due: 1_600_000.0,
        };

        let mut record = YearRecord::new(2);
        record.set(LineItem::NetSales, 66_000_000.0);
        record.set(LineItem::RawMaterials, 33_000_000.0);
        record.set(LineItem::Pat, 2_500_000.0);

        project_year(&ledger, &mut record, &growth, &loan, &schedule, &ProjectionConfig::default());

        assert_relative_eq!(record.get(LineItem::Reserves), 5_500_000.0);
        assert_relative_eq!(record.get(LineItem::TermLoan), 9_800_000.0);
        assert_relative_eq!(record.get(LineItem::SundryCreditors), 5_500_000.0, epsilon = 1e-6);
        assert_relative_eq!(record.get(LineItem::Inventory), 4_125_000.0, epsilon = 1e-6);
        assert_relative_eq!(record.get(LineItem::SundryDebtors), 11_000_000.0, epsilon = 1e-6);
        assert_relative_eq!(
            record.get(LineItem::TotalLiabilities),
            record.get(LineItem::TotalAssets),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_reported_totals_are_kept() {
        let mut record = YearRecord::new(0);
        record.set(LineItem::ShareCapital, 100.0);
        record.set(LineItem::Reserves, 50.0);
        record.set(LineItem::NetWorth, 140.0);
        record.set(LineItem::Cash, 140.0);
        compute_totals(&mut record);

        assert_relative_eq!(record.get(LineItem::NetWorth), 140.0);
        assert_relative_eq!(record.get(LineItem::TotalLiabilities), 140.0);
        assert_relative_eq!(record.get(LineItem::TotalAssets), 140.0);
    }

    #[test]
    fn test_negative_cash_is_kept() {
        let ledger = history();
        let growth = GrowthAssumptions::flat(1, 0.0, 0.0);
        let mut record = YearRecord::new(2);
        // Huge receivables with nothing funding them
        record.set(LineItem::NetSales, 600_000_000.0);
        project_year(
            &ledger,
            &mut record,
            &growth,
            &LoanYear::default(),
            &DepreciationSchedule::default(),
            &ProjectionConfig::default(),
        );
        assert!(record.get(LineItem::Cash) < 0.0);
        assert_relative_eq!(
            record.get(LineItem::TotalLiabilities),
            record.get(LineItem::TotalAssets),
            epsilon = 1e-6
        );
    }
}
