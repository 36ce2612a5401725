//! Projection engine building cumulative cost series per scenario

use std::collections::HashSet;

use log::{debug, info, warn};

use super::amortization::cumulative_cost;
use super::breakeven::breakeven_month;
use super::refinance::RefinancePlan;
use super::series::{ComparisonResult, CostSeries, ScenarioResult};
use crate::error::{RefinanceError, Result};
use crate::loan::{Loan, RefinanceOption};

/// Default projection horizon: 30 years of monthly payments
pub const DEFAULT_HORIZON_MONTHS: u32 = 360;

/// Label of the unrefinanced loan's scenario
pub const ORIGINAL_LABEL: &str = "Original Loan";

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Number of months to project
    pub horizon_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl ProjectionConfig {
    pub fn with_horizon(horizon_months: u32) -> Self {
        Self { horizon_months }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Cumulative cost of keeping the original loan
    pub fn project_original(&self, loan: &Loan) -> Result<ScenarioResult> {
        self.validate_horizon()?;
        loan.validate()?;

        let payment = loan.monthly_payment();
        let series = CostSeries::from_fn(self.config.horizon_months, |m| cumulative_cost(payment, 0.0, m));

        debug!(
            "{}: payment {:.2}, cost at horizon {:.2}",
            ORIGINAL_LABEL,
            payment,
            series.final_cost()
        );

        Ok(ScenarioResult {
            label: ORIGINAL_LABEL.to_string(),
            original_payment: payment,
            refinance: None,
            series,
            breakeven_month: None,
        })
    }

    /// Cumulative cost of paying the original loan until `option` takes effect
    /// and the refinanced loan afterwards
    pub fn project_refinance(&self, loan: &Loan, option: &RefinanceOption, label: &str) -> Result<ScenarioResult> {
        let original = self.project_original(loan)?;
        self.project_against(loan, option, label, &original.series)
    }

    /// Project the original loan and every refinance option over the horizon
    pub fn compare(&self, loan: &Loan, options: &[RefinanceOption]) -> Result<ComparisonResult> {
        let original = self.project_original(loan)?;

        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(original.label.clone());

        let mut refinances = Vec::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            let label = option.label_or_default(index);
            if !seen.insert(label.clone()) {
                return Err(RefinanceError::DuplicateLabel { label });
            }
            refinances.push(self.project_against(loan, option, &label, &original.series)?);
        }

        info!(
            "Projected {} refinance scenario(s) over {} months",
            refinances.len(),
            self.config.horizon_months
        );

        Ok(ComparisonResult {
            horizon_months: self.config.horizon_months,
            original,
            refinances,
        })
    }

    /// Build one refinance path and its breakeven against an already projected
    /// original series
    fn project_against(
        &self,
        loan: &Loan,
        option: &RefinanceOption,
        label: &str,
        original: &CostSeries,
    ) -> Result<ScenarioResult> {
        let payment = loan.monthly_payment();
        let plan = RefinancePlan::build(loan, option, label)?;
        let series = CostSeries::from_fn(self.config.horizon_months, |m| plan.cumulative_cost_at(payment, m));

        debug!(
            "{}: refinance after {} payments, balance {:.2} -> principal {:.2} over {} years, payment {:.2}",
            label,
            plan.months_paid,
            plan.remaining_balance,
            plan.new_principal,
            plan.new_term_years,
            plan.new_payment
        );
        if plan.months_paid >= self.config.horizon_months {
            warn!(
                "{}: refinance month {} is beyond the {}-month horizon",
                label, plan.months_paid, self.config.horizon_months
            );
        }

        let breakeven = breakeven_month(original, &series, plan.months_paid);
        if breakeven.is_none() {
            warn!(
                "{}: does not break even within {} months",
                label, self.config.horizon_months
            );
        }

        Ok(ScenarioResult {
            label: label.to_string(),
            original_payment: payment,
            refinance: Some(plan),
            series,
            breakeven_month: breakeven,
        })
    }

    fn validate_horizon(&self) -> Result<()> {
        if self.config.horizon_months == 0 {
            return Err(RefinanceError::InvalidHorizon {
                months: self.config.horizon_months,
            });
        }
        Ok(())
    }
}
