//! Projection output and summary figures

use serde::{Deserialize, Serialize};

use super::engine::ProjectionConfig;
use crate::analysis::{analyse_mpbf, analyse_ratios};
use crate::ledger::{Ledger, LineItem};
use crate::loan::RepaymentSchedule;
use crate::report::CmaReport;

/// Complete result of one projection run
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    /// Audited and projected figures, `2 + N` years per line
    pub ledger: Ledger,

    /// Monthly EMI table, empty unless the new facility is a term loan
    pub repayment_schedule: RepaymentSchedule,

    /// Ledger years whose cash balance came out negative
    pub shortfall_years: Vec<usize>,

    /// Configuration the run used
    pub config: ProjectionConfig,
}

impl Projection {
    /// Render every statement into the report bundle
    pub fn report(&self) -> CmaReport {
        CmaReport::build(self)
    }

    /// Headline numbers for the projected years
    pub fn summary(&self) -> ProjectionSummary {
        let ratios = analyse_ratios(&self.ledger);
        let mpbf = analyse_mpbf(&self.ledger, self.config.mpbf_margin);
        let projected = self.ledger.projected_years();

        let dscrs: Vec<f64> = projected
            .clone()
            .filter_map(|year| ratios[year].dscr)
            .collect();
        let average_dscr = if dscrs.is_empty() {
            None
        } else {
            Some(dscrs.iter().sum::<f64>() / dscrs.len() as f64)
        };
        let minimum_dscr = dscrs.iter().copied().reduce(f64::min);

        let peak_assessed_finance = projected
            .clone()
            .map(|year| mpbf[year].assessed_finance)
            .fold(f64::NEG_INFINITY, f64::max);

        let last = self.ledger.year_count().saturating_sub(1);

        ProjectionSummary {
            projected_years: self.ledger.projected_year_count(),
            average_dscr,
            minimum_dscr,
            peak_assessed_finance: if peak_assessed_finance.is_finite() {
                peak_assessed_finance
            } else {
                0.0
            },
            funding_shortfall_years: self.shortfall_years.clone(),
            final_net_worth: self.ledger.get(LineItem::NetWorth, last),
            final_term_loan: self.ledger.get(LineItem::TermLoan, last),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub projected_years: usize,
    /// Mean DSCR across projected years with debt service
    pub average_dscr: Option<f64>,
    pub minimum_dscr: Option<f64>,
    /// Highest assessed bank finance across projected years
    pub peak_assessed_finance: f64,
    pub funding_shortfall_years: Vec<usize>,
    pub final_net_worth: f64,
    pub final_term_loan: f64,
}
