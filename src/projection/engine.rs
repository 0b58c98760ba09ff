//! Core projection engine: history in, `2 + N` year ledger out

use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::balance_sheet;
use super::pnl;
use super::result::Projection;
use super::state::ProjectionState;
use crate::assumptions::CmaInput;
use crate::depreciation::DepreciationScheduler;
use crate::error::EngineResult;
use crate::ledger::{Ledger, LineItem, YearRecord, HISTORICAL_YEARS};
use crate::loan::{LoanAmortizer, RepaymentSchedule};

/// Tolerance, in rupees, for an audited balance sheet to count as balanced
const BALANCE_TOLERANCE: f64 = 1.0;

/// Configuration for a projection run
///
/// Defaults reproduce the standard CMA conventions: 30% flat tax, 10% on
/// pre-existing debt, two months' creditors and debtors, six weeks' stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionConfig {
    /// Flat tax rate on positive PBT (0.30 = 30%)
    pub tax_rate: f64,

    /// Interest rate, in percent, on debt carried from the audited years
    pub existing_loan_interest_percent: f64,

    /// One-time part-repayment, in percent, of that debt in the first projected year
    pub existing_loan_paydown_percent: f64,

    /// Months of purchases held as creditors
    pub creditor_months: f64,

    /// Months of purchases held as stock
    pub inventory_months: f64,

    /// Months of sales held as debtors
    pub debtor_months: f64,

    /// Borrower's margin under the Tandon methods (0.25 = 25%)
    pub mpbf_margin: f64,

    /// Balance sheet date of the first audited year, for column headings
    pub first_year_end: Option<NaiveDate>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.30,
            existing_loan_interest_percent: 10.0,
            existing_loan_paydown_percent: 10.0,
            creditor_months: 2.0,
            inventory_months: 1.5,
            debtor_months: 2.0,
            mpbf_margin: 0.25,
            first_year_end: None,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the full pipeline for one input record
    ///
    /// Validates the input, lays down the audited years, then projects each
    /// year in order: P&L, debt, balance sheet.
    pub fn run(&self, input: &CmaInput) -> EngineResult<Projection> {
        input.validate()?;

        let year_count = HISTORICAL_YEARS + input.projected_year_count;
        let loan = &input.loan_assumptions;

        info!(
            "Projecting {} years: {} fixed assets, {:?} of {:.2} at {}% over {} years",
            input.projected_year_count,
            input.fixed_assets.len(),
            loan.kind,
            loan.principal_amount,
            loan.annual_interest_rate_percent,
            loan.repayment_years,
        );
        if loan.is_term_loan() && loan.repayment_years == 0 && loan.principal_amount > 0.0 {
            warn!("Term loan has no repayment period; treating scheduled repayment as zero");
        }

        let depreciation = DepreciationScheduler::new(&input.fixed_assets).schedule(year_count);
        let amortizer = LoanAmortizer::new(
            loan,
            self.config.existing_loan_interest_percent,
            self.config.existing_loan_paydown_percent,
        );

        let mut ledger = self.audited_years(input);
        let mut state = ProjectionState::from_history(&ledger);

        while state.year < year_count {
            let year = state.year;
            let loan_year = amortizer.year(year, state.existing_loan);

            let mut record = YearRecord::new(year);
            pnl::project_year(
                &ledger,
                &mut record,
                &input.growth_assumptions,
                depreciation.charge(year),
                loan_year.interest,
                self.config.tax_rate,
            );
            balance_sheet::project_year(
                &ledger,
                &mut record,
                &input.growth_assumptions,
                &loan_year,
                &depreciation,
                &self.config,
            );

            let cash = record.get(LineItem::Cash);
            debug!(
                "Year {}: sales {:.2}, PAT {:.2}, term loan {:.2}, cash {:.2}",
                year,
                record.get(LineItem::NetSales),
                record.get(LineItem::Pat),
                record.get(LineItem::TermLoan),
                cash,
            );
            if cash < 0.0 {
                warn!("Year {}: cash balance is negative ({:.2}), funding shortfall", year, cash);
            }

            ledger.push_year(record);
            state.advance(&loan_year, cash);
        }

        Ok(Projection {
            ledger,
            repayment_schedule: RepaymentSchedule::for_loan(loan),
            shortfall_years: state.shortfall_years,
            config: self.config.clone(),
        })
    }

    /// Audited years with missing subtotals and totals filled in
    ///
    /// Reported figures are never recomputed, including subtotals such as PAT
    /// or net worth.
    fn audited_years(&self, input: &CmaInput) -> Ledger {
        let reported: Vec<_> = input
            .historical_ledger
            .items()
            .filter(|(item, _)| item.is_derived())
            .map(|(item, _)| item.key())
            .collect();
        if !reported.is_empty() {
            debug!("Using reported audited subtotals: {}", reported.join(", "));
        }

        let mut ledger = Ledger::new();
        for year in 0..HISTORICAL_YEARS {
            let mut record = input.historical_ledger.year_record(year);
            pnl::apply_waterfall(&mut record, self.config.tax_rate);
            balance_sheet::compute_totals(&mut record);
            ledger.push_year(record);

            let gap = balance_sheet::imbalance(&ledger, year);
            if gap.abs() > BALANCE_TOLERANCE {
                warn!("Audited year {} does not balance: liabilities exceed assets by {:.2}", year, gap);
            }
        }
        ledger
    }
}
