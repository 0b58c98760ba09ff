//! Year-indexed ledger of line items
//!
//! Years 0 and 1 are the audited history; every later year is projected.
//! A year is assembled in a [`YearRecord`] and appended whole, so the ledger
//! never holds a partially computed year.

mod items;
pub mod loader;

pub use items::LineItem;
pub use loader::{load_historical, load_historical_from_reader};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{EngineError, EngineResult};

/// Number of audited years supplied as input
pub const HISTORICAL_YEARS: usize = 2;

/// Audited figures keyed by line item, two values each
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoricalLedger {
    items: BTreeMap<LineItem, Vec<f64>>,
}

impl HistoricalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both audited values of a line item
    pub fn set(&mut self, item: LineItem, values: [f64; 2]) {
        self.items.insert(item, values.to_vec());
    }

    /// Builder form of [`HistoricalLedger::set`]
    pub fn with(mut self, item: LineItem, values: [f64; 2]) -> Self {
        self.set(item, values);
        self
    }

    /// Audited value for a year, zero if the item was not supplied
    pub fn get(&self, item: LineItem, year: usize) -> f64 {
        self.items
            .get(&item)
            .and_then(|values| values.get(year))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn items(&self) -> impl Iterator<Item = (&LineItem, &Vec<f64>)> {
        self.items.iter()
    }

    /// Every item must carry exactly two finite values
    pub fn validate(&self) -> EngineResult<()> {
        for (item, values) in &self.items {
            if values.len() != HISTORICAL_YEARS {
                return Err(EngineError::LengthMismatch {
                    field: format!("historicalLedger.{}", item),
                    expected: HISTORICAL_YEARS,
                    actual: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(EngineError::invalid(
                    format!("historicalLedger.{}", item),
                    "values must be finite",
                ));
            }
        }
        Ok(())
    }

    /// Every supplied line of one audited year as a fresh record
    ///
    /// Reported subtotals are carried as-is; the engine only fills the ones
    /// left out.
    pub fn year_record(&self, year: usize) -> YearRecord {
        let mut record = YearRecord::new(year);
        for (item, values) in &self.items {
            if let Some(&value) = values.get(year) {
                record.set(*item, value);
            }
        }
        record
    }
}

/// Values of every line item for a single year, built before being appended
#[derive(Debug, Clone)]
pub struct YearRecord {
    year: usize,
    values: HashMap<LineItem, f64>,
}

impl YearRecord {
    pub fn new(year: usize) -> Self {
        Self {
            year,
            values: HashMap::with_capacity(LineItem::ALL.len()),
        }
    }

    pub fn year(&self) -> usize {
        self.year
    }

    pub fn set(&mut self, item: LineItem, value: f64) {
        self.values.insert(item, value);
    }

    /// Set a line only if it is not already on the record; returns the value kept
    pub fn or_insert(&mut self, item: LineItem, value: f64) -> f64 {
        *self.values.entry(item).or_insert(value)
    }

    pub fn contains(&self, item: LineItem) -> bool {
        self.values.contains_key(&item)
    }

    /// Value set so far, zero if the line has not been computed
    pub fn get(&self, item: LineItem) -> f64 {
        self.values.get(&item).copied().unwrap_or(0.0)
    }

    /// Sum of several lines
    pub fn sum(&self, items: &[LineItem]) -> f64 {
        items.iter().map(|&item| self.get(item)).sum()
    }
}

/// The full `2 + N` year ledger
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    values: BTreeMap<LineItem, Vec<f64>>,
    years: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed year; lines missing from the record are zero
    pub fn push_year(&mut self, record: YearRecord) {
        debug_assert_eq!(record.year(), self.years, "years must be appended in order");
        for item in LineItem::ALL {
            self.values.entry(item).or_default().push(record.get(item));
        }
        self.years += 1;
    }

    pub fn year_count(&self) -> usize {
        self.years
    }

    pub fn projected_year_count(&self) -> usize {
        self.years.saturating_sub(HISTORICAL_YEARS)
    }

    pub fn is_historical(&self, year: usize) -> bool {
        year < HISTORICAL_YEARS
    }

    /// Value of a line in a year, zero outside the ledger
    pub fn get(&self, item: LineItem, year: usize) -> f64 {
        self.values
            .get(&item)
            .and_then(|values| values.get(year))
            .copied()
            .unwrap_or(0.0)
    }

    /// Change in a line from the previous year
    pub fn delta(&self, item: LineItem, year: usize) -> f64 {
        if year == 0 {
            return 0.0;
        }
        self.get(item, year) - self.get(item, year - 1)
    }

    /// All values of a line, oldest first
    pub fn series(&self, item: LineItem) -> &[f64] {
        self.values.get(&item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Index range of the projected years
    pub fn projected_years(&self) -> std::ops::Range<usize> {
        HISTORICAL_YEARS.min(self.years)..self.years
    }
}
