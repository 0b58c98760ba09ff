//! Revenue and expense growth assumptions

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::ledger::HISTORICAL_YEARS;

/// Percentage growth per projected year
///
/// Index 0 applies to ledger year 2 (the first projected year).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAssumptions {
    pub revenue_growth_percent: Vec<f64>,
    pub expense_change_percent: Vec<f64>,
}

impl GrowthAssumptions {
    /// Same growth every year
    pub fn flat(years: usize, revenue_growth_percent: f64, expense_change_percent: f64) -> Self {
        Self {
            revenue_growth_percent: vec![revenue_growth_percent; years],
            expense_change_percent: vec![expense_change_percent; years],
        }
    }

    /// Revenue multiplier for a ledger year (1.0 for historical years)
    pub fn revenue_factor(&self, year: usize) -> f64 {
        1.0 + Self::percent_for(&self.revenue_growth_percent, year) / 100.0
    }

    /// Expense multiplier for a ledger year (1.0 for historical years)
    pub fn expense_factor(&self, year: usize) -> f64 {
        1.0 + Self::percent_for(&self.expense_change_percent, year) / 100.0
    }

    fn percent_for(rates: &[f64], year: usize) -> f64 {
        year.checked_sub(HISTORICAL_YEARS)
            .and_then(|idx| rates.get(idx))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn validate(&self, projected_years: usize) -> EngineResult<()> {
        for (field, rates) in [
            ("growthAssumptions.revenueGrowthPercent", &self.revenue_growth_percent),
            ("growthAssumptions.expenseChangePercent", &self.expense_change_percent),
        ] {
            if rates.len() != projected_years {
                return Err(EngineError::LengthMismatch {
                    field: field.to_string(),
                    expected: projected_years,
                    actual: rates.len(),
                });
            }
            if rates.iter().any(|r| !r.is_finite()) {
                return Err(EngineError::invalid(field, "rates must be finite"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factors_start_at_first_projected_year() {
        let growth = GrowthAssumptions {
            revenue_growth_percent: vec![10.0, 20.0],
            expense_change_percent: vec![5.0, -5.0],
        };
        assert_relative_eq!(growth.revenue_factor(0), 1.0);
        assert_relative_eq!(growth.revenue_factor(1), 1.0);
        assert_relative_eq!(growth.revenue_factor(2), 1.10);
        assert_relative_eq!(growth.revenue_factor(3), 1.20);
        assert_relative_eq!(growth.expense_factor(3), 0.95);
    }

    #[test]
    fn test_length_must_match_projected_years() {
        let growth = GrowthAssumptions::flat(2, 10.0, 10.0);
        assert!(growth.validate(2).is_ok());
        assert!(matches!(
            growth.validate(3),
            Err(EngineError::LengthMismatch { expected: 3, actual: 2, .. })
        ));
    }
}
