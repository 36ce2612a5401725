//! Amortization math and the cumulative cost projection engine

pub mod amortization;
mod breakeven;
mod engine;
mod refinance;
mod series;

pub use amortization::{cumulative_cost, monthly_payment, remaining_balance};
pub use breakeven::breakeven_month;
pub use engine::{ProjectionConfig, ProjectionEngine, DEFAULT_HORIZON_MONTHS, ORIGINAL_LABEL};
pub use refinance::RefinancePlan;
pub use series::{ComparisonResult, CostPoint, CostSeries, ScenarioResult, ScenarioSummary};
