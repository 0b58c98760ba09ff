//! Operating statement projection and profit waterfall

use crate::assumptions::GrowthAssumptions;
use crate::ledger::{Ledger, LineItem, YearRecord};

/// Grow revenue and cost lines from the prior year and close the waterfall
///
/// Depreciation and interest come from the depreciation scheduler and the
/// loan amortizer; they are not grown by a rate.
pub fn project_year(
    ledger: &Ledger,
    record: &mut YearRecord,
    growth: &GrowthAssumptions,
    depreciation: f64,
    interest: f64,
    tax_rate: f64,
) {
    let year = record.year();
    let prior = year - 1;

    let revenue_factor = growth.revenue_factor(year);
    for item in LineItem::REVENUE {
        record.set(item, ledger.get(item, prior) * revenue_factor);
    }

    let expense_factor = growth.expense_factor(year);
    for item in LineItem::EXPENSES {
        record.set(item, ledger.get(item, prior) * expense_factor);
    }

    record.set(LineItem::Depreciation, depreciation);
    record.set(LineItem::Interest, interest);

    apply_waterfall(record, tax_rate);
}

/// PBDIT → PBIT → PBT → PAT, in order, from lines already on the record
///
/// A subtotal already on the record (a reported audited figure) is kept and
/// the lines below it are derived from it. Missing tax is the flat rate on
/// positive PBT with no loss carry-forward.
pub fn apply_waterfall(record: &mut YearRecord, tax_rate: f64) {
    let revenue = record.sum(&LineItem::REVENUE);
    let gross_operating_income = record.or_insert(LineItem::GrossOperatingIncome, revenue);

    let direct_costs = record.sum(&[
        LineItem::RawMaterials,
        LineItem::DirectWages,
        LineItem::PowerFuel,
    ]);
    let cost_of_sales = record.or_insert(LineItem::CostOfSales, direct_costs);

    let overheads = record.sum(&[
        LineItem::AdminSalary,
        LineItem::Rent,
        LineItem::SellingExpenses,
        LineItem::OtherExpenses,
    ]);
    let pbdit = record.or_insert(
        LineItem::Pbdit,
        gross_operating_income - cost_of_sales - overheads,
    );

    let pbit = record.or_insert(LineItem::Pbit, pbdit - record.get(LineItem::Depreciation));
    let pbt = record.or_insert(LineItem::Pbt, pbit - record.get(LineItem::Interest));

    let tax = record.or_insert(LineItem::Tax, pbt.max(0.0) * tax_rate);
    record.or_insert(LineItem::Pat, pbt - tax);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        for (year, (sales, materials)) in [(50_000_000.0, 25_000_000.0), (60_000_000.0, 30_000_000.0)]
            .into_iter()
            .enumerate()
        {
            let mut record = YearRecord::new(year);
            record.set(LineItem::NetSales, sales);
            record.set(LineItem::RawMaterials, materials);
            record.set(LineItem::Rent, 1_000_000.0);
            ledger.push_year(record);
        }
        ledger
    }

    #[test]
    fn test_lines_grow_by_their_own_rate() {
        let ledger = base_ledger();
        let growth = GrowthAssumptions {
            revenue_growth_percent: vec![10.0],
            expense_change_percent: vec![5.0],
        };
        let mut record = YearRecord::new(2);
        project_year(&ledger, &mut record, &growth, 0.0, 0.0, 0.30);

        assert_relative_eq!(record.get(LineItem::NetSales), 66_000_000.0, epsilon = 1e-6);
        assert_relative_eq!(record.get(LineItem::RawMaterials), 31_500_000.0, epsilon = 1e-6);
        assert_relative_eq!(record.get(LineItem::Rent), 1_050_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_waterfall_order() {
        let mut record = YearRecord::new(2);
        record.set(LineItem::NetSales, 1_000.0);
        record.set(LineItem::OtherOperatingIncome, 50.0);
        record.set(LineItem::RawMaterials, 400.0);
        record.set(LineItem::DirectWages, 100.0);
        record.set(LineItem::PowerFuel, 50.0);
        record.set(LineItem::AdminSalary, 100.0);
        record.set(LineItem::SellingExpenses, 50.0);
        record.set(LineItem::Depreciation, 100.0);
        record.set(LineItem::Interest, 100.0);

        apply_waterfall(&mut record, 0.30);

        assert_relative_eq!(record.get(LineItem::GrossOperatingIncome), 1_050.0);
        assert_relative_eq!(record.get(LineItem::CostOfSales), 550.0);
        assert_relative_eq!(record.get(LineItem::Pbdit), 350.0);
        assert_relative_eq!(record.get(LineItem::Pbit), 250.0);
        assert_relative_eq!(record.get(LineItem::Pbt), 150.0);
        assert_relative_eq!(record.get(LineItem::Tax), 45.0);
        assert_relative_eq!(record.get(LineItem::Pat), 105.0);
    }

    #[test]
    fn test_loss_attracts_no_tax() {
        let mut record = YearRecord::new(2);
        record.set(LineItem::NetSales, 100.0);
        record.set(LineItem::OtherExpenses, 300.0);
        apply_waterfall(&mut record, 0.30);

        assert_eq!(record.get(LineItem::Tax), 0.0);
        assert_relative_eq!(record.get(LineItem::Pat), -200.0);
    }

    #[test]
    fn test_reported_tax_overrides_flat_rate() {
        let mut record = YearRecord::new(0);
        record.set(LineItem::NetSales, 1_000.0);
        record.set(LineItem::Tax, 120.0);
        apply_waterfall(&mut record, 0.30);
        assert_relative_eq!(record.get(LineItem::Pat), 880.0);
    }

    #[test]
    fn test_reported_subtotals_are_kept() {
        let mut record = YearRecord::new(1);
        record.set(LineItem::NetSales, 1_000.0);
        record.set(LineItem::RawMaterials, 400.0);
        // Audited PBDIT reflects costs outside the modelled lines
        record.set(LineItem::Pbdit, 500.0);
        record.set(LineItem::Depreciation, 100.0);
        record.set(LineItem::Pat, 250.0);

        apply_waterfall(&mut record, 0.30);

        assert_relative_eq!(record.get(LineItem::Pbdit), 500.0);
        assert_relative_eq!(record.get(LineItem::Pbit), 400.0);
        assert_relative_eq!(record.get(LineItem::Pbt), 400.0);
        assert_relative_eq!(record.get(LineItem::Tax), 120.0);
        assert_relative_eq!(record.get(LineItem::Pat), 250.0);
    }
}
