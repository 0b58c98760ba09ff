//! Borrower assumptions: growth, loan structure and fixed-asset additions

mod asset;
mod growth;
mod loan;
pub mod loader;

pub use asset::FixedAsset;
pub use growth::GrowthAssumptions;
pub use loan::{LoanAssumptions, LoanKind, MAX_REPAYMENT_YEARS};
pub use loader::{load_fixed_assets, load_input};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::ledger::HistoricalLedger;

/// Everything the engine needs for one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmaInput {
    pub historical_ledger: HistoricalLedger,
    pub projected_year_count: usize,
    pub growth_assumptions: GrowthAssumptions,
    #[serde(default)]
    pub loan_assumptions: LoanAssumptions,
    #[serde(default)]
    pub fixed_assets: Vec<FixedAsset>,
}

impl CmaInput {
    /// Numeric sanity checks; business plausibility is left to the caller
    pub fn validate(&self) -> EngineResult<()> {
        if self.projected_year_count == 0 {
            return Err(EngineError::invalid(
                "projectedYearCount",
                "at least one projected year is required",
            ));
        }
        self.historical_ledger.validate()?;
        self.growth_assumptions.validate(self.projected_year_count)?;
        self.loan_assumptions.validate()?;
        for asset in &self.fixed_assets {
            asset.validate()?;
        }
        Ok(())
    }
}
