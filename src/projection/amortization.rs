//! Closed-form fixed-rate amortization formulas
//!
//! Rates are annual percentages (6.25 for 6.25%) compounded monthly. Callers
//! validate inputs first: principal must be non-negative and the term positive.

/// Monthly rates below this are treated as zero to avoid a 0/0 annuity factor
const ZERO_RATE_TOLERANCE: f64 = 1e-10;

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 12.0 / 100.0
}

/// Level monthly payment that fully amortizes `principal` over `years`
///
/// payment = P * r / (1 - (1+r)^-n), or P / n when r = 0. The discounted form
/// stays finite for rates and terms where (1+r)^n overflows.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let n_payments = years.saturating_mul(12);
    let r = monthly_rate(annual_rate_pct);

    if r.abs() < ZERO_RATE_TOLERANCE {
        return principal / n_payments as f64;
    }

    let discount_n = discount_factor(r, n_payments as i64);
    principal * r / (1.0 - discount_n)
}

/// Outstanding principal after `months_paid` scheduled payments
///
/// balance = P * (1 - (1+r)^(m-n)) / (1 - (1+r)^-n), or P * (n - m) / n when
/// r = 0. `months_paid` beyond the term is clamped to the term, so a paid-off
/// loan reports a zero balance.
pub fn remaining_balance(principal: f64, annual_rate_pct: f64, years: u32, months_paid: u32) -> f64 {
    let n_payments = years.saturating_mul(12);
    let m = months_paid.min(n_payments);
    let r = monthly_rate(annual_rate_pct);

    if r.abs() < ZERO_RATE_TOLERANCE {
        return principal * (n_payments - m) as f64 / n_payments as f64;
    }

    let discount_n = discount_factor(r, n_payments as i64);
    let discount_remaining = discount_factor(r, n_payments as i64 - m as i64);
    principal * (1.0 - discount_remaining) / (1.0 - discount_n)
}

/// (1+r)^-periods, underflowing to zero instead of overflowing
fn discount_factor(r: f64, periods: i64) -> f64 {
    let exponent = periods.clamp(i32::MIN as i64 + 1, i32::MAX as i64) as i32;
    (1.0 + r).powi(-exponent)
}

/// Cash paid after `months_elapsed` payments plus any one-time costs
pub fn cumulative_cost(monthly_payment: f64, one_time_costs: f64, months_elapsed: u32) -> f64 {
    monthly_payment * months_elapsed as f64 + one_time_costs
}
