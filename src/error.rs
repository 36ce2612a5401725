//! Error types for loan validation and scenario loading

use thiserror::Error;

use crate::loan::PaymentMonth;

/// Input validation failures, raised before any series is computed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RefinanceError {
    #[error("invalid loan terms: {message}")]
    InvalidLoanTerms {
        message: String,
    },

    #[error("invalid refinance terms for {label}: {message}")]
    InvalidRefinanceTerms {
        label: String,
        message: String,
    },

    #[error("invalid refinance date for {label}: {effective} precedes first payment {first_payment}")]
    InvalidRefinanceDate {
        label: String,
        effective: PaymentMonth,
        first_payment: PaymentMonth,
    },

    #[error("refinance after payoff for {label}: {months_paid} payments made on a {term_months}-month loan")]
    RefinanceAfterPayoff {
        label: String,
        months_paid: u32,
        term_months: u32,
    },

    #[error("invalid horizon: {months} months")]
    InvalidHorizon {
        months: u32,
    },

    #[error("invalid month: {value}")]
    InvalidMonth {
        value: String,
    },

    #[error("duplicate scenario label: {label}")]
    DuplicateLabel {
        label: String,
    },
}

pub type Result<T> = std::result::Result<T, RefinanceError>;

/// Failures while reading scenario files or quote sheets
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] RefinanceError),
}
