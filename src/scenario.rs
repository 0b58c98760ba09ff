//! Scenario runner for batch projections
//!
//! Holds one borrower's audited history and runs many assumption sets against
//! it. Every run builds its own input record, so runs never share a ledger.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::{CmaInput, FixedAsset, GrowthAssumptions, LoanAssumptions};
use crate::error::EngineResult;
use crate::ledger::HistoricalLedger;
use crate::projection::{Projection, ProjectionConfig, ProjectionEngine};

/// One set of forward-looking assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    pub projected_year_count: usize,
    pub growth: GrowthAssumptions,
    #[serde(default)]
    pub loan: LoanAssumptions,
    #[serde(default)]
    pub assets: Vec<FixedAsset>,
}

impl Scenario {
    /// Flat growth over `years` with no new loan or assets
    pub fn flat(
        name: impl Into<String>,
        years: usize,
        revenue_growth_percent: f64,
        expense_change_percent: f64,
    ) -> Self {
        Self {
            name: name.into(),
            projected_year_count: years,
            growth: GrowthAssumptions::flat(years, revenue_growth_percent, expense_change_percent),
            loan: LoanAssumptions::default(),
            assets: Vec::new(),
        }
    }

    pub fn with_loan(mut self, loan: LoanAssumptions) -> Self {
        self.loan = loan;
        self
    }

    pub fn with_assets(mut self, assets: Vec<FixedAsset>) -> Self {
        self.assets = assets;
        self
    }
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(history, ProjectionConfig::default());
///
/// let scenarios: Vec<_> = [5.0, 10.0, 15.0]
///     .iter()
///     .map(|&g| Scenario::flat(format!("growth {}%", g), 3, g, g))
///     .collect();
/// let results = runner.run_batch(&scenarios);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    history: HistoricalLedger,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new(history: HistoricalLedger, config: ProjectionConfig) -> Self {
        Self { history, config }
    }

    /// Input record for one scenario on a fresh copy of the history
    pub fn input_for(&self, scenario: &Scenario) -> CmaInput {
        CmaInput {
            historical_ledger: self.history.clone(),
            projected_year_count: scenario.projected_year_count,
            growth_assumptions: scenario.growth.clone(),
            loan_assumptions: scenario.loan.clone(),
            fixed_assets: scenario.assets.clone(),
        }
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> EngineResult<Projection> {
        debug!("Running scenario '{}'", scenario.name);
        ProjectionEngine::new(self.config.clone()).run(&self.input_for(scenario))
    }

    /// Run scenarios in parallel; results keep the input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<EngineResult<Projection>> {
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    pub fn history(&self) -> &HistoricalLedger {
        &self.history
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ProjectionConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::ledger::LineItem;
    use approx::assert_relative_eq;

    fn history() -> HistoricalLedger {
        HistoricalLedger::new()
            .with(LineItem::NetSales, [50_000_000.0, 60_000_000.0])
            .with(LineItem::RawMaterials, [25_000_000.0, 30_000_000.0])
            .with(LineItem::ShareCapital, [10_000_000.0, 10_000_000.0])
            .with(LineItem::Cash, [10_000_000.0, 10_000_000.0])
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_runs() {
        let runner = ScenarioRunner::new(history(), ProjectionConfig::default());
        let scenarios: Vec<_> = [5.0, 10.0, 20.0]
            .iter()
            .map(|&g| Scenario::flat(format!("growth {}", g), 2, g, 0.0))
            .collect();

        let results: Vec<_> = runner
            .run_batch(&scenarios)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(results.len(), 3);

        let sales: Vec<f64> = results.iter().map(|p| p.ledger.get(LineItem::NetSales, 2)).collect();
        assert_relative_eq!(sales[0], 63_000_000.0, epsilon = 1e-6);
        assert_relative_eq!(sales[1], 66_000_000.0, epsilon = 1e-6);
        assert_relative_eq!(sales[2], 72_000_000.0, epsilon = 1e-6);

        // History is untouched by the runs
        assert_eq!(runner.history().get(LineItem::NetSales, 1), 60_000_000.0);
    }

    #[test]
    fn test_loan_scenario_raises_interest() {
        let runner = ScenarioRunner::new(history(), ProjectionConfig::default());
        let base = Scenario::flat("base", 1, 10.0, 10.0);
        let funded = base
            .clone()
            .with_loan(LoanAssumptions::term_loan(8_000_000.0, 10.0, 5));

        let base = runner.run(&base).unwrap();
        let funded = runner.run(&funded).unwrap();
        assert_eq!(base.ledger.get(LineItem::Interest, 2), 0.0);
        assert_relative_eq!(funded.ledger.get(LineItem::Interest, 2), 800_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_scenario_reports_error() {
        let runner = ScenarioRunner::new(history(), ProjectionConfig::default());
        let broken = Scenario::flat("broken", 0, 10.0, 10.0);
        assert!(matches!(runner.run(&broken), Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_config_override_applies_to_runs() {
        let mut runner = ScenarioRunner::new(history(), ProjectionConfig::default());
        runner.config_mut().tax_rate = 0.0;
        let projection = runner.run(&Scenario::flat("untaxed", 1, 10.0, 10.0)).unwrap();
        assert_eq!(projection.ledger.get(LineItem::Tax, 2), 0.0);
    }
}
