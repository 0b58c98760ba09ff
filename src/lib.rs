//! CMA Engine - multi-year financial projection for bank credit appraisal
//!
//! This library provides:
//! - Operating statement and balance sheet projection from two audited years
//! - Term loan and overdraft servicing, WDV depreciation
//! - Ratio analysis, MPBF assessment, cash flow and fund flow statements
//! - Report tables in lakhs for JSON or CSV output
//! - Batch scenario runs over a shared history

pub mod analysis;
pub mod assumptions;
pub mod depreciation;
pub mod error;
pub mod ledger;
pub mod loan;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{CmaInput, FixedAsset, GrowthAssumptions, LoanAssumptions, LoanKind};
pub use error::{EngineError, EngineResult};
pub use ledger::{HistoricalLedger, Ledger, LineItem};
pub use projection::{Projection, ProjectionConfig, ProjectionEngine, ProjectionSummary};
pub use report::CmaReport;
pub use scenario::{Scenario, ScenarioRunner};
