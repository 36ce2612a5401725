//! Loan and refinance option records

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RefinanceError, Result};
use crate::projection::amortization;

/// A calendar month, the granularity at which payments are made
///
/// Ordered chronologically. Parsed from and displayed as `YYYY-MM`; a full
/// `YYYY-MM-DD` date is also accepted and the day discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentMonth {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl PaymentMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(RefinanceError::InvalidMonth {
                value: format!("{}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whole months from `earlier` to `self`; negative if `self` comes first
    pub fn months_since(&self, earlier: PaymentMonth) -> i64 {
        (self.year as i64 - earlier.year as i64) * 12 + (self.month as i64 - earlier.month as i64)
    }
}

impl fmt::Display for PaymentMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PaymentMonth {
    type Err = RefinanceError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
            .map_err(|_| RefinanceError::InvalidMonth { value: s.to_string() })?;
        Ok(Self::from_date(date))
    }
}

impl TryFrom<String> for PaymentMonth {
    type Error = RefinanceError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PaymentMonth> for String {
    fn from(month: PaymentMonth) -> Self {
        month.to_string()
    }
}

/// Longest amortization term accepted, in years
pub const MAX_TERM_YEARS: u32 = 100;

/// Original fixed-rate mortgage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate in percent (6.25 for 6.25%)
    pub annual_rate: f64,

    /// Amortization term in whole years
    pub term_years: u32,

    /// Month of the first scheduled payment
    pub first_payment_month: PaymentMonth,
}

impl Loan {
    pub fn new(principal: f64, annual_rate: f64, term_years: u32, first_payment_month: PaymentMonth) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
            first_payment_month,
        }
    }

    /// Reject terms that would make the amortization formulas meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(RefinanceError::InvalidLoanTerms {
                message: format!("principal must be positive, got {}", self.principal),
            });
        }
        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(RefinanceError::InvalidLoanTerms {
                message: format!("annual rate must be non-negative, got {}", self.annual_rate),
            });
        }
        if self.term_years == 0 || self.term_years > MAX_TERM_YEARS {
            return Err(RefinanceError::InvalidLoanTerms {
                message: format!(
                    "term must be between 1 and {} years, got {}",
                    MAX_TERM_YEARS, self.term_years
                ),
            });
        }
        let payment = self.monthly_payment();
        if !payment.is_finite() {
            return Err(RefinanceError::InvalidLoanTerms {
                message: format!("monthly payment is not representable, got {}", payment),
            });
        }
        Ok(())
    }

    pub fn term_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    pub fn monthly_payment(&self) -> f64 {
        amortization::monthly_payment(self.principal, self.annual_rate, self.term_years)
    }

    /// Outstanding principal after `months_paid` payments, clamped at payoff
    pub fn remaining_balance(&self, months_paid: u32) -> f64 {
        amortization::remaining_balance(self.principal, self.annual_rate, self.term_years, months_paid)
    }

    /// Payments made before `month`, negative if it precedes the first payment
    pub fn months_paid_at(&self, month: PaymentMonth) -> i64 {
        month.months_since(self.first_payment_month)
    }
}

/// A refinance quote applied to the original loan at a given month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinanceOption {
    /// Display label; scenarios without one are numbered by position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Annual rate of the new loan in percent
    pub new_rate: f64,

    /// Points as a fraction of the refinanced balance (0.0175 for 1.75 points)
    pub discount_points: f64,

    /// One-time closing costs
    pub closing_costs: f64,

    /// Month the new loan takes over
    pub effective_month: PaymentMonth,
}

impl RefinanceOption {
    pub fn new(new_rate: f64, discount_points: f64, closing_costs: f64, effective_month: PaymentMonth) -> Self {
        Self {
            label: None,
            new_rate,
            discount_points,
            closing_costs,
            effective_month,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label for the option at zero-based `index` in an option list
    pub fn label_or_default(&self, index: usize) -> String {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label.clone(),
            _ => format!("Refi Option {}", index + 1),
        }
    }

    /// Check the quote's own terms; timing against a loan is checked by the plan
    pub fn validate(&self, label: &str) -> Result<()> {
        let invalid = |message: String| RefinanceError::InvalidRefinanceTerms {
            label: label.to_string(),
            message,
        };

        if !self.new_rate.is_finite() || self.new_rate < 0.0 {
            return Err(invalid(format!("rate must be non-negative, got {}", self.new_rate)));
        }
        if !self.discount_points.is_finite() || self.discount_points < 0.0 {
            return Err(invalid(format!(
                "discount points must be non-negative, got {}",
                self.discount_points
            )));
        }
        if !self.closing_costs.is_finite() || self.closing_costs < 0.0 {
            return Err(invalid(format!(
                "closing costs must be non-negative, got {}",
                self.closing_costs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> PaymentMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_payment_month_parsing() {
        assert_eq!(month("2023-05"), PaymentMonth::new(2023, 5).unwrap());
        assert_eq!(month("2024-11-01"), PaymentMonth::new(2024, 11).unwrap());
        assert_eq!(month(" 2025-12 ").to_string(), "2025-12");

        assert!("2023-13".parse::<PaymentMonth>().is_err());
        assert!("May 2023".parse::<PaymentMonth>().is_err());
        assert!(PaymentMonth::new(2023, 0).is_err());
    }

    #[test]
    fn test_months_since() {
        let first = month("2023-05");
        assert_eq!(month("2024-11").months_since(first), 18);
        assert_eq!(month("2025-12").months_since(first), 31);
        assert_eq!(month("2023-05").months_since(first), 0);
        assert_eq!(month("2023-01").months_since(first), -4);
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(month("2023-12") < month("2024-01"));
        assert!(month("2024-02") > month("2024-01"));
    }

    #[test]
    fn test_loan_validation() {
        let first = month("2023-05");
        assert!(Loan::new(920_000.0, 6.25, 30, first).validate().is_ok());
        assert!(Loan::new(920_000.0, 0.0, 30, first).validate().is_ok());

        for loan in [
            Loan::new(0.0, 6.25, 30, first),
            Loan::new(-1.0, 6.25, 30, first),
            Loan::new(f64::NAN, 6.25, 30, first),
            Loan::new(920_000.0, -0.5, 30, first),
            Loan::new(920_000.0, 6.25, 0, first),
            Loan::new(920_000.0, 6.25, MAX_TERM_YEARS + 1, first),
            Loan::new(100_000.0, 6.25, 400_000_000, first),
            Loan::new(f64::MAX, 1_000_000.0, 30, first),
            Loan::new(920_000.0, f64::INFINITY, 30, first),
        ] {
            assert!(matches!(
                loan.validate(),
                Err(RefinanceError::InvalidLoanTerms { .. })
            ));
        }
    }

    #[test]
    fn test_refinance_option_validation() {
        let effective = month("2024-11");
        assert!(RefinanceOption::new(5.5, 0.0175, 5000.0, effective).validate("a").is_ok());
        assert!(RefinanceOption::new(5.5, 0.0, 0.0, effective).validate("a").is_ok());
        assert!(RefinanceOption::new(-1.0, 0.0, 0.0, effective).validate("a").is_err());
        assert!(RefinanceOption::new(5.5, -0.01, 0.0, effective).validate("a").is_err());
        assert!(RefinanceOption::new(5.5, 0.0, -100.0, effective).validate("a").is_err());

        for option in [
            RefinanceOption::new(f64::NAN, 0.0, 0.0, effective),
            RefinanceOption::new(f64::INFINITY, 0.0, 0.0, effective),
            RefinanceOption::new(5.5, f64::NAN, 0.0, effective),
            RefinanceOption::new(5.5, f64::INFINITY, 0.0, effective),
            RefinanceOption::new(5.5, 0.0, f64::NAN, effective),
            RefinanceOption::new(5.5, 0.0, f64::INFINITY, effective),
        ] {
            assert!(matches!(
                option.validate("a"),
                Err(RefinanceError::InvalidRefinanceTerms { .. })
            ));
        }
    }

    #[test]
    fn test_default_labels() {
        let effective = month("2024-11");
        let option = RefinanceOption::new(5.5, 0.0175, 5000.0, effective);
        assert_eq!(option.label_or_default(0), "Refi Option 1");
        assert_eq!(option.clone().with_label("  ").label_or_default(1), "Refi Option 2");
        assert_eq!(option.with_label("Credit union").label_or_default(1), "Credit union");
    }

    #[test]
    fn test_month_serializes_as_string() {
        let loan = Loan::new(100_000.0, 5.0, 15, month("2023-05"));
        let json = serde_json::to_string(&loan).unwrap();
        assert!(json.contains("\"first_payment_month\":\"2023-05\""));

        let back: Loan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loan);
    }
}
