//! Written-down-value depreciation across the fixed-asset register
//!
//! Each asset depreciates on its own reducing balance from the year it is
//! added. Years before the addition contribute nothing.

use crate::assumptions::FixedAsset;

/// Depreciation charge and new capital expenditure for every ledger year
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepreciationSchedule {
    charges: Vec<f64>,
    additions: Vec<f64>,
}

impl DepreciationSchedule {
    /// Total depreciation charge for a year
    pub fn charge(&self, year: usize) -> f64 {
        self.charges.get(year).copied().unwrap_or(0.0)
    }

    /// Cost of assets first owned in a year
    pub fn additions(&self, year: usize) -> f64 {
        self.additions.get(year).copied().unwrap_or(0.0)
    }

    pub fn charges(&self) -> &[f64] {
        &self.charges
    }
}

/// Builds a [`DepreciationSchedule`] from a set of assets
#[derive(Debug, Clone)]
pub struct DepreciationScheduler<'a> {
    assets: &'a [FixedAsset],
}

impl<'a> DepreciationScheduler<'a> {
    pub fn new(assets: &'a [FixedAsset]) -> Self {
        Self { assets }
    }

    /// Written-down value at the start of a year
    ///
    /// Compounds `(1 - rate)` once for every earlier year the asset was owned.
    pub fn opening_wdv(asset: &FixedAsset, year: usize) -> f64 {
        if !asset.is_owned_in(year) {
            return 0.0;
        }
        let retained = 1.0 - asset.depreciation_rate_percent / 100.0;
        let years_owned = (year - asset.addition_year_index) as i32;
        asset.cost * retained.powi(years_owned)
    }

    /// One asset's charge for a year
    pub fn asset_charge(asset: &FixedAsset, year: usize) -> f64 {
        Self::opening_wdv(asset, year) * asset.depreciation_rate_percent / 100.0
    }

    /// Charge and additions for ledger years `0..year_count`
    pub fn schedule(&self, year_count: usize) -> DepreciationSchedule {
        let charges = (0..year_count)
            .map(|year| self.assets.iter().map(|a| Self::asset_charge(a, year)).sum())
            .collect();

        let additions = (0..year_count)
            .map(|year| {
                self.assets
                    .iter()
                    .filter(|a| a.addition_year_index == year)
                    .map(|a| a.cost)
                    .sum()
            })
            .collect();

        DepreciationSchedule { charges, additions }
    }
}
