//! Loan records and scenario loading

mod data;
pub mod loader;

pub use data::{Loan, PaymentMonth, RefinanceOption, MAX_TERM_YEARS};
pub use loader::{load_refinance_options, load_refinance_options_from_reader, load_scenario, load_scenario_from_reader, Scenario};
