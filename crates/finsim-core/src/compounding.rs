//! Shared periodic-compounding primitive.
//!
//! Every projector in this crate runs the same monthly recurrence: grow the
//! balance by one month of interest, then apply a fixed periodic cash flow.
//! The cash flow may be negative (withdrawal) or positive (deposit).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent, ProjectionPoint, Rate};

pub const MONTHS_PER_YEAR: u32 = 12;

/// Hard cap on projection length. Requests beyond this are clamped by the
/// calculators rather than rejected, so a result is always produced.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Monthly equivalent of the projection cap, for month-denominated inputs.
pub const MAX_FORECAST_MONTHS: u32 = MAX_PROJECTION_YEARS * MONTHS_PER_YEAR;

/// Convert a user-entered annual percentage (5 = 5%) to a monthly
/// fractional rate: `pct / 100 / 12`.
pub fn monthly_rate(annual_pct: Percent) -> Rate {
    annual_pct / dec!(100) / dec!(12)
}

/// One month of the shared recurrence:
/// `balance * (1 + monthly_rate) + periodic_flow`.
pub fn compound_step(balance: Money, monthly_rate: Rate, periodic_flow: Money) -> Money {
    balance * (Decimal::ONE + monthly_rate) + periodic_flow
}

/// Compute (1 + rate)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound_factor(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Run the monthly recurrence for `months` periods starting from `initial`,
/// recording an annual snapshot at month 0 and at every month index
/// divisible by 12. Returns the final balance and the snapshot series.
pub fn project_growth(
    initial: Money,
    monthly_flow: Money,
    monthly_rate: Rate,
    months: u32,
) -> (Money, Vec<ProjectionPoint>) {
    let mut balance = initial;
    let mut projection = Vec::with_capacity((months / MONTHS_PER_YEAR + 1) as usize);

    for i in 0..=months {
        if i > 0 {
            balance = compound_step(balance, monthly_rate, monthly_flow);
        }
        if i % MONTHS_PER_YEAR == 0 {
            projection.push(ProjectionPoint {
                period: i / MONTHS_PER_YEAR,
                balance,
            });
        }
    }

    (balance, projection)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
