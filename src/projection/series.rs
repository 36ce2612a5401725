//! Cumulative cost series and comparison output structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::refinance::RefinancePlan;

/// Cumulative cash paid through one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    /// Month index (0-based, months since the first payment)
    pub month: u32,
    pub cumulative_cost: f64,
}

/// Cumulative cost for every month of the horizon, in month order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostSeries {
    points: Vec<CostPoint>,
}

impl CostSeries {
    /// Evaluate `cost_at` for months `0..horizon_months`
    pub fn from_fn(horizon_months: u32, cost_at: impl Fn(u32) -> f64) -> Self {
        let points = (0..horizon_months)
            .map(|month| CostPoint {
                month,
                cumulative_cost: cost_at(month),
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CostPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &CostPoint> {
        self.points.iter()
    }

    /// Cumulative cost at `month`, if inside the horizon
    pub fn cost_at(&self, month: u32) -> Option<f64> {
        self.points.get(month as usize).map(|p| p.cumulative_cost)
    }

    pub fn final_cost(&self) -> f64 {
        self.points.last().map(|p| p.cumulative_cost).unwrap_or(0.0)
    }

    pub fn costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.cumulative_cost).collect()
    }
}

/// One projected path: the original loan or a refinance of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub label: String,

    /// Level payment before any refinance
    pub original_payment: f64,

    /// New loan terms; `None` for the original loan
    pub refinance: Option<RefinancePlan>,

    pub series: CostSeries,

    /// First month at or after the refinance where this path is no costlier
    /// than the original; `None` for the original loan or if never reached
    pub breakeven_month: Option<u32>,
}

impl ScenarioResult {
    /// Payment in force at the end of the horizon
    pub fn final_payment(&self) -> f64 {
        self.refinance
            .as_ref()
            .map(|plan| plan.new_payment)
            .unwrap_or(self.original_payment)
    }

    /// Month the refinance takes effect (0 for the original loan)
    pub fn months_paid(&self) -> u32 {
        self.refinance.as_ref().map(|plan| plan.months_paid).unwrap_or(0)
    }
}

/// Original loan and all refinance scenarios over a shared horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub horizon_months: u32,
    pub original: ScenarioResult,
    pub refinances: Vec<ScenarioResult>,
}

impl ComparisonResult {
    /// Original first, then refinances in input order
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioResult> {
        std::iter::once(&self.original).chain(self.refinances.iter())
    }

    pub fn get(&self, label: &str) -> Option<&ScenarioResult> {
        self.scenarios().find(|s| s.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.scenarios().map(|s| s.label.as_str()).collect()
    }

    /// Series keyed by scenario label
    pub fn series_by_label(&self) -> BTreeMap<&str, &CostSeries> {
        self.scenarios().map(|s| (s.label.as_str(), &s.series)).collect()
    }

    /// Per-scenario summary rows, original first
    pub fn summary(&self) -> Vec<ScenarioSummary> {
        let original_final = self.original.series.final_cost();
        let original_payment = self.original.original_payment;

        self.scenarios()
            .map(|scenario| {
                let total_cost = scenario.series.final_cost();

                ScenarioSummary {
                    label: scenario.label.clone(),
                    months_paid: scenario.months_paid(),
                    monthly_payment: scenario.final_payment(),
                    payment_reduction: original_payment - scenario.final_payment(),
                    total_cost,
                    savings: original_final - total_cost,
                    breakeven_month: scenario.breakeven_month,
                }
            })
            .collect()
    }
}

/// Headline numbers for one scenario at the end of the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub label: String,
    pub months_paid: u32,
    pub monthly_payment: f64,
    pub payment_reduction: f64,
    pub total_cost: f64,
    /// Original total less this scenario's total (positive = cheaper)
    pub savings: f64,
    pub breakeven_month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_covers_horizon() {
        let series = CostSeries::from_fn(360, |m| 100.0 * m as f64);
        assert_eq!(series.len(), 360);
        assert_eq!(series.points()[0].month, 0);
        assert_eq!(series.points()[359].month, 359);
        assert_eq!(series.cost_at(10), Some(1000.0));
        assert_eq!(series.cost_at(360), None);
        assert_eq!(series.final_cost(), 35_900.0);
    }

    #[test]
    fn test_empty_series() {
        let series = CostSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.final_cost(), 0.0);
    }

    #[test]
    fn test_series_serializes_as_array() {
        let series = CostSeries::from_fn(2, |m| m as f64);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(
            json,
            r#"[{"month":0,"cumulative_cost":0.0},{"month":1,"cumulative_cost":1.0}]"#
        );
    }
}
