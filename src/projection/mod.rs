//! Projection engine: operating statement and balance sheet, year by year

mod balance_sheet;
mod engine;
mod pnl;
mod result;
mod state;

pub use balance_sheet::imbalance;
pub use engine::{ProjectionConfig, ProjectionEngine};
pub use result::{Projection, ProjectionSummary};
pub use state::ProjectionState;
