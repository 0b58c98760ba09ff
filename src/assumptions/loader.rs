//! Load projection inputs from disk
//!
//! The full input record is JSON; the fixed-asset register can also be kept
//! as a CSV export with columns `id,name,cost,rate,year`.

use csv::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{CmaInput, FixedAsset};
use crate::error::EngineResult;

/// Raw CSV row of the fixed-asset register
#[derive(Debug, serde::Deserialize)]
struct AssetRow {
    id: String,
    name: String,
    cost: f64,
    #[serde(rename = "rate")]
    depreciation_rate_percent: f64,
    #[serde(rename = "year", default)]
    addition_year_index: usize,
}

impl AssetRow {
    fn into_asset(self) -> FixedAsset {
        FixedAsset::new(
            self.id,
            self.name,
            self.cost,
            self.depreciation_rate_percent,
            self.addition_year_index,
        )
    }
}

/// Load a complete input record from a JSON file
pub fn load_input<P: AsRef<Path>>(path: P) -> EngineResult<CmaInput> {
    let file = File::open(path)?;
    let input = serde_json::from_reader(BufReader::new(file))?;
    Ok(input)
}

/// Load the fixed-asset register from a CSV file
pub fn load_fixed_assets<P: AsRef<Path>>(path: P) -> EngineResult<Vec<FixedAsset>> {
    let file = File::open(path)?;
    load_fixed_assets_from_reader(file)
}

/// Load the fixed-asset register from any reader
pub fn load_fixed_assets_from_reader<R: Read>(reader: R) -> EngineResult<Vec<FixedAsset>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut assets = Vec::new();

    for result in csv_reader.deserialize() {
        let row: AssetRow = result?;
        assets.push(row.into_asset());
    }

    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_assets_from_reader() {
        let data = "id,name,cost,rate,year\nm1,CNC Machine,1500000,15,2\nb1,Building,4000000,10,0\n";
        let assets = load_fixed_assets_from_reader(data.as_bytes()).unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].name, "CNC Machine");
        assert_eq!(assets[0].addition_year_index, 2);
        assert_eq!(assets[1].depreciation_rate_percent, 10.0);
    }

    #[test]
    fn test_malformed_cost_is_error() {
        let data = "id,name,cost,rate,year\nm1,Press,lots,15,2\n";
        assert!(load_fixed_assets_from_reader(data.as_bytes()).is_err());
    }
}
