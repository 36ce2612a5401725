//! Scenario runner for single and batch comparisons
//!
//! Holds one projection configuration and applies it to any number of
//! scenarios. Scenarios are independent, so batches run in parallel.

use rayon::prelude::*;

use crate::error::Result;
use crate::loan::Scenario;
use crate::projection::{ComparisonResult, ProjectionConfig, ProjectionEngine};

/// Runs comparisons with a shared projection configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let result = runner.run(&Scenario::sample())?;
/// for row in result.summary() {
///     println!("{}: {:.2}", row.label, row.total_cost);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Overrides each scenario's own horizon when set
    horizon_override: Option<u32>,
}

impl ScenarioRunner {
    /// Runner that honours each scenario's horizon
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that projects every scenario over `horizon_months`
    pub fn with_horizon(horizon_months: u32) -> Self {
        Self {
            horizon_override: Some(horizon_months),
        }
    }

    /// Configuration used for `scenario`
    pub fn config_for(&self, scenario: &Scenario) -> ProjectionConfig {
        ProjectionConfig::with_horizon(self.horizon_override.unwrap_or(scenario.horizon_months))
    }

    /// Run a single comparison
    pub fn run(&self, scenario: &Scenario) -> Result<ComparisonResult> {
        let engine = ProjectionEngine::new(self.config_for(scenario));
        engine.compare(&scenario.loan, &scenario.refinance_options)
    }

    /// Run many comparisons in parallel, one result per scenario in input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Result<ComparisonResult>> {
        scenarios.par_iter().map(|scenario| self.run(scenario)).collect()
    }
}
