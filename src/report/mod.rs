//! Report bundle: every statement rendered as a table of strings in lakhs

mod format;
mod table;

pub use format::{format_lakhs, format_ratio, year_label, LAKH, NOT_AVAILABLE};
pub use table::Table;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::analysis::{analyse_mpbf, analyse_ratios, build_cash_flow, build_fund_flow, RatioYear};
use crate::error::EngineResult;
use crate::ledger::{Ledger, LineItem};
use crate::loan::RepaymentSchedule;
use crate::projection::Projection;

const OPERATING_STATEMENT: [LineItem; 18] = [
    LineItem::NetSales,
    LineItem::OtherOperatingIncome,
    LineItem::GrossOperatingIncome,
    LineItem::RawMaterials,
    LineItem::DirectWages,
    LineItem::PowerFuel,
    LineItem::CostOfSales,
    LineItem::AdminSalary,
    LineItem::Rent,
    LineItem::SellingExpenses,
    LineItem::OtherExpenses,
    LineItem::Pbdit,
    LineItem::Depreciation,
    LineItem::Pbit,
    LineItem::Interest,
    LineItem::Pbt,
    LineItem::Tax,
    LineItem::Pat,
];

const BALANCE_SHEET: [LineItem; 18] = [
    LineItem::ShareCapital,
    LineItem::Reserves,
    LineItem::NetWorth,
    LineItem::UnsecuredLoan,
    LineItem::TermLoan,
    LineItem::SundryCreditors,
    LineItem::OtherLiabilities,
    LineItem::TotalLiabilities,
    LineItem::GrossFixedAssets,
    LineItem::AccumulatedDepreciation,
    LineItem::NetFixedAssets,
    LineItem::Investments,
    LineItem::Inventory,
    LineItem::SundryDebtors,
    LineItem::OtherCurrentAssets,
    LineItem::Cash,
    LineItem::TotalCurrentAssets,
    LineItem::TotalAssets,
];

/// All tables produced for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmaReport {
    pub operating_statement: Table,
    pub balance_sheet: Table,
    pub cash_flow: Table,
    pub ratio_analysis: Table,
    pub fund_flow: Table,
    pub mpbf: Table,
    pub repayment_schedule: Table,
}

impl CmaReport {
    pub fn build(projection: &Projection) -> Self {
        let ledger = &projection.ledger;
        let first_year_end = projection.config.first_year_end;
        let all_years = headers(first_year_end, 0..ledger.year_count());
        let transitions = headers(first_year_end, 1..ledger.year_count());

        Self {
            operating_statement: line_item_table(ledger, &OPERATING_STATEMENT, all_years.clone()),
            balance_sheet: line_item_table(ledger, &BALANCE_SHEET, all_years.clone()),
            cash_flow: cash_flow_table(ledger, transitions.clone()),
            ratio_analysis: ratio_table(&analyse_ratios(ledger), all_years.clone()),
            fund_flow: fund_flow_table(ledger, transitions),
            mpbf: mpbf_table(ledger, projection.config.mpbf_margin, all_years),
            repayment_schedule: repayment_table(&projection.repayment_schedule),
        }
    }

    /// Tables paired with a file-friendly name, in presentation order
    pub fn tables(&self) -> [(&'static str, &Table); 7] {
        [
            ("operating_statement", &self.operating_statement),
            ("balance_sheet", &self.balance_sheet),
            ("cash_flow", &self.cash_flow),
            ("ratio_analysis", &self.ratio_analysis),
            ("fund_flow", &self.fund_flow),
            ("mpbf", &self.mpbf),
            ("repayment_schedule", &self.repayment_schedule),
        ]
    }

    /// Write one CSV per table into a directory
    pub fn write_csv_dir(&self, dir: &Path) -> EngineResult<()> {
        std::fs::create_dir_all(dir)?;
        for (name, table) in self.tables() {
            let file = File::create(dir.join(format!("{}.csv", name)))?;
            table.write_csv(file)?;
        }
        Ok(())
    }
}

fn headers(first_year_end: Option<chrono::NaiveDate>, years: std::ops::Range<usize>) -> Vec<String> {
    std::iter::once("Particulars".to_string())
        .chain(years.map(|year| year_label(first_year_end, year)))
        .collect()
}

fn lakhs<I: IntoIterator<Item = f64>>(values: I) -> Vec<String> {
    values.into_iter().map(format_lakhs).collect()
}

fn line_item_table(ledger: &Ledger, items: &[LineItem], headers: Vec<String>) -> Table {
    let mut table = Table::new(headers);
    for &item in items {
        table.push_row(item.label(), lakhs(ledger.series(item).iter().copied()));
    }
    table
}

fn ratio_table(ratios: &[RatioYear], headers: Vec<String>) -> Table {
    let rows: [(&str, fn(&RatioYear) -> Option<f64>); 9] = [
        ("Current Ratio", |r| r.current_ratio),
        ("Quick Ratio", |r| r.quick_ratio),
        ("Debt-Equity Ratio", |r| r.debt_equity),
        ("TOL/TNW", |r| r.tol_tnw),
        ("Net Sales / Total Assets", |r| r.sales_to_total_assets),
        ("PBT % of Net Sales", |r| r.pbt_to_sales_percent),
        ("PAT % of Net Sales", |r| r.pat_to_sales_percent),
        ("ROCE %", |r| r.roce_percent),
        ("DSCR", |r| r.dscr),
    ];

    let mut table = Table::new(headers);
    for (label, pick) in rows {
        table.push_row(label, ratios.iter().map(|r| format_ratio(pick(r))));
    }
    table
}

fn cash_flow_table(ledger: &Ledger, headers: Vec<String>) -> Table {
    let flows = build_cash_flow(ledger);
    let column = |pick: fn(&crate::analysis::CashFlowYear) -> f64| lakhs(flows.iter().map(pick));

    let mut table = Table::new(headers);
    table.push_row("Change in Net Profit", column(|f| f.change_in_pat));
    table.push_row("Add: Depreciation", column(|f| f.depreciation));
    table.push_row("Less: Increase in Sundry Debtors", column(|f| f.increase_in_debtors));
    table.push_row("Less: Increase in Inventory", column(|f| f.increase_in_inventory));
    table.push_row("Add: Increase in Sundry Creditors", column(|f| f.increase_in_creditors));
    table.push_row("Cash from Operating Activities", column(|f| f.operating));
    table.push_row("Purchase of Fixed Assets", column(|f| f.fixed_asset_purchases));
    table.push_row("Cash from Investing Activities", column(|f| f.investing));
    table.push_row("Change in Term Loan", column(|f| f.change_in_term_loan));
    table.push_row("Cash from Financing Activities", column(|f| f.financing));
    table.push_row("Net Change in Cash", column(|f| f.net_change));
    table.push_row("Opening Cash", column(|f| f.opening_cash));
    table.push_row("Closing Cash", column(|f| f.closing_cash));
    table
}

fn fund_flow_table(ledger: &Ledger, headers: Vec<String>) -> Table {
    let flows = build_fund_flow(ledger);
    let column = |pick: fn(&crate::analysis::FundFlowYear) -> f64| lakhs(flows.iter().map(pick));

    let mut table = Table::new(headers);
    table.push_row("Net Profit (PAT)", column(|f| f.net_profit));
    table.push_row("Depreciation", column(|f| f.depreciation));
    table.push_row("Other Adjustments", column(|f| f.other_adjustments));
    table.push_row("Increase in Share Capital", column(|f| f.increase_in_capital));
    table.push_row("Increase in Term Loan", column(|f| f.increase_in_term_loan));
    table.push_row("Increase in Unsecured Loans", column(|f| f.increase_in_unsecured_loans));
    table.push_row("TOTAL SOURCES", column(|f| f.total_sources));
    table.push_row("Purchase of Fixed Assets", column(|f| f.fixed_asset_purchases));
    table.push_row("Increase in Investments", column(|f| f.increase_in_investments));
    table.push_row("Increase in Working Capital", column(|f| f.increase_in_working_capital));
    table.push_row("Repayment of Term Loan", column(|f| f.term_loan_repayment));
    table.push_row("Repayment of Unsecured Loans", column(|f| f.unsecured_loan_repayment));
    table.push_row("Reduction in Share Capital", column(|f| f.capital_reduction));
    table.push_row("TOTAL USES", column(|f| f.total_uses));
    table
}

fn mpbf_table(ledger: &Ledger, margin: f64, headers: Vec<String>) -> Table {
    let years = analyse_mpbf(ledger, margin);
    let column = |pick: fn(&crate::analysis::MpbfYear) -> f64| lakhs(years.iter().map(pick));
    let margin_percent = margin * 100.0;

    let mut table = Table::new(headers);
    table.push_row("Total Current Assets", column(|m| m.total_current_assets));
    table.push_row("Other Current Liabilities", column(|m| m.other_current_liabilities));
    table.push_row("Working Capital Gap", column(|m| m.working_capital_gap));
    table.push_row(format!("Margin: {:.0}% of WCG", margin_percent), column(|m| m.margin_on_gap));
    table.push_row("MPBF - Method I", column(|m| m.method_one));
    table.push_row(format!("Margin: {:.0}% of Total Current Assets", margin_percent), column(|m| m.margin_on_current_assets));
    table.push_row("MPBF - Method II", column(|m| m.method_two));
    table.push_row("Surplus / (Deficit) over Method II Margin", column(|m| m.surplus_over_margin));
    table.push_row("Assessed Bank Finance", column(|m| m.assessed_finance));
    table
}

fn repayment_table(schedule: &RepaymentSchedule) -> Table {
    let headers = ["Month", "EMI", "Principal", "Interest", "Outstanding Balance"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut table = Table::new(headers);

    for row in &schedule.rows {
        table.push_row(
            row.month.to_string(),
            lakhs([row.emi, row.principal, row.interest, row.closing_balance]),
        );
    }

    if !schedule.is_empty() {
        table.push_row(
            "Total",
            lakhs([schedule.total_paid(), schedule.total_principal(), schedule.total_interest(), 0.0]),
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{CmaInput, GrowthAssumptions, LoanAssumptions};
    use crate::ledger::HistoricalLedger;
    use crate::projection::{ProjectionConfig, ProjectionEngine};

    fn input(loan: LoanAssumptions) -> CmaInput {
        CmaInput {
            historical_ledger: HistoricalLedger::new()
                .with(LineItem::NetSales, [50_000_000.0, 60_000_000.0])
                .with(LineItem::RawMaterials, [25_000_000.0, 30_000_000.0]),
            projected_year_count: 1,
            growth_assumptions: GrowthAssumptions::flat(1, 10.0, 10.0),
            loan_assumptions: loan,
            fixed_assets: Vec::new(),
        }
    }

    fn report(loan: LoanAssumptions) -> CmaReport {
        ProjectionEngine::new(ProjectionConfig::default())
            .run(&input(loan))
            .unwrap()
            .report()
    }

    #[test]
    fn test_operating_statement_in_lakhs() {
        let report = report(LoanAssumptions::term_loan(8_000_000.0, 10.0, 5));
        let statement = &report.operating_statement;

        assert_eq!(statement.headers.len(), 4);
        assert_eq!(statement.headers[3], "Year 3 (Projected)");
        assert_eq!(statement.value("Net Sales", 2), Some("660.00"));
        assert_eq!(statement.value("Raw Materials Consumed", 2), Some("330.00"));
        assert_eq!(statement.body.first().map(|r| r[0].as_str()), Some("Net Sales"));
    }

    #[test]
    fn test_flow_tables_skip_first_year() {
        let report = report(LoanAssumptions::default());
        assert_eq!(report.cash_flow.headers.len(), 3);
        assert_eq!(report.fund_flow.headers[1], "Year 2 (Audited)");
        assert!(report.fund_flow.row("TOTAL SOURCES").is_some());
        assert!(report.fund_flow.row("TOTAL USES").is_some());
    }

    #[test]
    fn test_dscr_without_debt_is_not_available() {
        let report = report(LoanAssumptions::default());
        assert_eq!(report.ratio_analysis.value("DSCR", 2), Some(NOT_AVAILABLE));
        assert!(report.repayment_schedule.body.is_empty());
    }

    #[test]
    fn test_repayment_table_has_total_row() {
        let report = report(LoanAssumptions::term_loan(1_200_000.0, 0.0, 1));
        let table = &report.repayment_schedule;

        assert_eq!(table.body.len(), 13);
        assert_eq!(table.value("1", 0), Some("1.00"));
        assert_eq!(table.value("Total", 1), Some("12.00"));
        assert_eq!(table.value("12", 3), Some("0.00"));
    }

    #[test]
    fn test_table_names_cover_every_statement() {
        let report = report(LoanAssumptions::default());
        let names: Vec<_> = report.tables().iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"mpbf"));
    }
}
