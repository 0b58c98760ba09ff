//! Fixed assets depreciated on the written-down-value basis

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub depreciation_rate_percent: f64,
    /// Ledger year in which the asset is first owned (0 = owned from the start)
    #[serde(default)]
    pub addition_year_index: usize,
}

impl FixedAsset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: f64,
        depreciation_rate_percent: f64,
        addition_year_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            depreciation_rate_percent,
            addition_year_index,
        }
    }

    /// Owned during the given ledger year
    pub fn is_owned_in(&self, year: usize) -> bool {
        self.addition_year_index <= year
    }

    pub fn validate(&self) -> EngineResult<()> {
        let field = format!("fixedAssets[{}]", self.id);
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(EngineError::invalid(format!("{}.cost", field), "must be a non-negative number"));
        }
        if !self.depreciation_rate_percent.is_finite()
            || !(0.0..=100.0).contains(&self.depreciation_rate_percent)
        {
            return Err(EngineError::invalid(
                format!("{}.depreciationRatePercent", field),
                "must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_by_year() {
        let asset = FixedAsset::new("m1", "Lathe", 100_000.0, 15.0, 3);
        assert!(!asset.is_owned_in(2));
        assert!(asset.is_owned_in(3));
        assert!(asset.is_owned_in(4));
    }

    #[test]
    fn test_rate_above_hundred_rejected() {
        let asset = FixedAsset::new("v1", "Van", 100_000.0, 140.0, 0);
        assert!(asset.validate().is_err());
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let asset = FixedAsset::new("l1", "Land", 2_500_000.0, 0.0, 0);
        assert!(asset.validate().is_ok());
    }
}
