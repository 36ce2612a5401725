//! Refinance Comparison - cumulative cost projections for mortgage refinance decisions
//!
//! This library provides:
//! - Fixed-rate amortization formulas (payment, remaining balance, cumulative cost)
//! - Refinance plans derived from a loan and a refinance quote
//! - Monthly cumulative cost series for the original loan and each refinance
//! - Breakeven and savings summaries, CSV/JSON export for charting
//! - Scenario loading from JSON files and CSV quote sheets

pub mod error;
pub mod loan;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{LoadError, RefinanceError, Result};
pub use loan::{Loan, PaymentMonth, RefinanceOption, Scenario};
pub use projection::{ComparisonResult, CostSeries, ProjectionConfig, ProjectionEngine, RefinancePlan, ScenarioSummary};
pub use scenario::ScenarioRunner;
