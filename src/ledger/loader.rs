//! Load audited figures from CSV
//!
//! Expected layout, one row per line item:
//!
//! ```text
//! item,year1,year2
//! netSales,50000000,60000000
//! rawMaterials,25000000,30000000
//! ```

use csv::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{HistoricalLedger, LineItem};
use crate::error::{EngineError, EngineResult};

/// Load a historical ledger from a CSV file
pub fn load_historical<P: AsRef<Path>>(path: P) -> EngineResult<HistoricalLedger> {
    let file = File::open(path)?;
    load_historical_from_reader(file)
}

/// Load a historical ledger from any reader (string buffer, request body)
pub fn load_historical_from_reader<R: Read>(reader: R) -> EngineResult<HistoricalLedger> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut ledger = HistoricalLedger::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = idx + 2;

        if record.len() < 3 {
            return Err(EngineError::LengthMismatch {
                field: format!("line {}", line),
                expected: 3,
                actual: record.len(),
            });
        }

        let item: LineItem = record[0].parse()?;
        let first = parse_amount(&record[1], line)?;
        let second = parse_amount(&record[2], line)?;
        ledger.set(item, [first, second]);
    }

    Ok(ledger)
}

/// Amounts may carry thousands separators ("5,00,000" or "500,000")
fn parse_amount(raw: &str, line: usize) -> EngineResult<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    cleaned.parse::<f64>().map_err(|_| EngineError::Parse {
        line,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "item,year1,year2\nnetSales,50000000,60000000\nrawMaterials,25000000,30000000\n";
        let ledger = load_historical_from_reader(data.as_bytes()).unwrap();

        assert_eq!(ledger.get(LineItem::NetSales, 0), 50_000_000.0);
        assert_eq!(ledger.get(LineItem::RawMaterials, 1), 30_000_000.0);
        assert_eq!(ledger.get(LineItem::Cash, 1), 0.0);
    }

    #[test]
    fn test_blank_cell_is_zero() {
        let data = "item,year1,year2\nrent,,120000\n";
        let ledger = load_historical_from_reader(data.as_bytes()).unwrap();
        assert_eq!(ledger.get(LineItem::Rent, 0), 0.0);
        assert_eq!(ledger.get(LineItem::Rent, 1), 120_000.0);
    }

    #[test]
    fn test_unknown_item_is_error() {
        let data = "item,year1,year2\ngoodwill,1,2\n";
        let err = load_historical_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownLineItem(name) if name == "goodwill"));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let data = "item,year1,year2\nnetSales,100,200\ncash,abc,5\n";
        let err = load_historical_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 3, .. }));
    }
}
