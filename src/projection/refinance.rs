//! Terms of the replacement loan at the moment of refinance

use serde::{Deserialize, Serialize};

use super::amortization::{cumulative_cost, monthly_payment};
use crate::error::{RefinanceError, Result};
use crate::loan::{Loan, RefinanceOption};

/// Derived terms of a refinance, computed once per option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinancePlan {
    /// Payments made on the original loan before the refinance (k)
    pub months_paid: u32,

    /// Original loan balance after `months_paid` payments
    pub remaining_balance: f64,

    /// Discount points in currency (balance * points fraction)
    pub points_cost: f64,

    /// Closing costs charged at the refinance month
    pub closing_costs: f64,

    /// Balance financed by the new loan: balance + points + closing costs
    pub new_principal: f64,

    /// Annual rate of the new loan in percent
    pub new_rate: f64,

    /// Original term less whole years already elapsed (k / 12, floored)
    pub new_term_years: u32,

    /// Level payment on the new loan
    pub new_payment: f64,
}

impl RefinancePlan {
    /// Validate `option` against `loan` and derive the new loan's terms
    pub fn build(loan: &Loan, option: &RefinanceOption, label: &str) -> Result<Self> {
        option.validate(label)?;

        let months_paid = loan.months_paid_at(option.effective_month);
        if months_paid < 0 {
            return Err(RefinanceError::InvalidRefinanceDate {
                label: label.to_string(),
                effective: option.effective_month,
                first_payment: loan.first_payment_month,
            });
        }

        let term_months = loan.term_months();
        if months_paid >= term_months as i64 {
            return Err(RefinanceError::RefinanceAfterPayoff {
                label: label.to_string(),
                months_paid: months_paid.min(u32::MAX as i64) as u32,
                term_months,
            });
        }
        let months_paid = months_paid as u32;

        let remaining_balance = loan.remaining_balance(months_paid);
        let points_cost = remaining_balance * option.discount_points;
        let new_principal = remaining_balance + points_cost + option.closing_costs;

        // Partial years are truncated, so the new term can outlast the original payoff
        let new_term_years = loan.term_years - months_paid / 12;
        let new_payment = monthly_payment(new_principal, option.new_rate, new_term_years);
        if !new_principal.is_finite() || !new_payment.is_finite() {
            return Err(RefinanceError::InvalidRefinanceTerms {
                label: label.to_string(),
                message: format!(
                    "new loan is not representable: principal {}, payment {}",
                    new_principal, new_payment
                ),
            });
        }

        Ok(Self {
            months_paid,
            remaining_balance,
            points_cost,
            closing_costs: option.closing_costs,
            new_principal,
            new_rate: option.new_rate,
            new_term_years,
            new_payment,
        })
    }

    /// Cumulative cost at `month` of a path that pays `original_payment` until
    /// the refinance and the new payment afterwards
    pub fn cumulative_cost_at(&self, original_payment: f64, month: u32) -> f64 {
        let before = cumulative_cost(original_payment, 0.0, month.min(self.months_paid));
        if month < self.months_paid {
            return before;
        }
        let after = cumulative_cost(
            self.new_payment,
            self.closing_costs,
            month.saturating_sub(self.months_paid),
        );
        before + after
    }
}
