//! Breakeven month of a refinance against the original loan
//!
//! A refinance starts behind by its closing costs and catches up through a
//! lower payment. Breakeven is the first month from the refinance onward at
//! which its cumulative cost is no higher than the original's.

use super::series::CostSeries;

/// Costs within this distance are treated as equal
const COST_TOLERANCE: f64 = 1e-9;

/// First month at or after `from_month` where `refinance` has caught up with
/// `original`, or `None` if it never does inside the shared horizon
pub fn breakeven_month(original: &CostSeries, refinance: &CostSeries, from_month: u32) -> Option<u32> {
    original
        .iter()
        .zip(refinance.iter())
        .skip(from_month as usize)
        .find(|(orig, refi)| refi.cumulative_cost <= orig.cumulative_cost + COST_TOLERANCE)
        .map(|(orig, _)| orig.month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catches_up_after_closing_costs() {
        // $100/month cheaper with $1,000 closing costs at month 12
        let original = CostSeries::from_fn(120, |m| 1000.0 * m as f64);
        let refinance = CostSeries::from_fn(120, |m| {
            if m < 12 {
                1000.0 * m as f64
            } else {
                12_000.0 + 1000.0 + 900.0 * (m - 12) as f64
            }
        });

        assert_eq!(breakeven_month(&original, &refinance, 12), Some(22));
    }

    #[test]
    fn test_free_refinance_breaks_even_immediately() {
        let original = CostSeries::from_fn(24, |m| 10.0 * m as f64);
        let refinance = original.clone();
        assert_eq!(breakeven_month(&original, &refinance, 6), Some(6));
    }

    #[test]
    fn test_never_breaks_even() {
        let original = CostSeries::from_fn(60, |m| 1000.0 * m as f64);
        let refinance = CostSeries::from_fn(60, |m| 500.0 + 1000.0 * m as f64);
        assert_eq!(breakeven_month(&original, &refinance, 0), None);
    }

    #[test]
    fn test_start_beyond_horizon() {
        let original = CostSeries::from_fn(10, |m| m as f64);
        assert_eq!(breakeven_month(&original, &original, 10), None);
    }
}
