//! Rendered statement table: headings plus `[label, values...]` rows

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::EngineResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub body: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            body: Vec::new(),
        }
    }

    /// Append a row whose first cell is the label
    pub fn push_row(&mut self, label: impl Into<String>, values: impl IntoIterator<Item = String>) {
        let mut row = vec![label.into()];
        row.extend(values);
        self.body.push(row);
    }

    /// First row with the given label
    pub fn row(&self, label: &str) -> Option<&[String]> {
        self.body
            .iter()
            .find(|row| row.first().map(String::as_str) == Some(label))
            .map(|row| &row[1..])
    }

    /// Cell of a labelled row by value column (0 = first value after the label)
    pub fn value(&self, label: &str, column: usize) -> Option<&str> {
        self.row(label)?.get(column).map(String::as_str)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> EngineResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.body {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
