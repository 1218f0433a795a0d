//! Monthly family quotient (QFM) and the cafeteria meal tariff derived from it.

use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts a declared annual income into the monthly family quotient.
///
/// Missing, non-finite or non-positive inputs yield 0, which every income
/// threshold accepts.
pub fn compute_monthly_quotient(annual_income: Option<f64>, fiscal_shares: Option<f64>) -> u32 {
    let (Some(income), Some(shares)) = (annual_income, fiscal_shares) else {
        return 0;
    };
    if !income.is_finite() || !shares.is_finite() || income <= 0.0 || shares <= 0.0 {
        return 0;
    }

    let quotient = (income / MONTHS_PER_YEAR / shares).round();
    if quotient >= u32::MAX as f64 {
        u32::MAX
    } else {
        quotient as u32
    }
}

/// Meal tariff at the default schedule.
pub fn compute_meal_tariff(quotient: u32) -> f64 {
    MealTariffSchedule::default().tariff_for(quotient)
}

/// Clamped piecewise-linear schedule mapping a quotient to the price of one meal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTariffSchedule {
    pub floor_quotient: u32,
    pub floor_tariff: f64,
    pub ceiling_quotient: u32,
    pub ceiling_tariff: f64,
}

impl Default for MealTariffSchedule {
    fn default() -> Self {
        Self {
            floor_quotient: 280,
            floor_tariff: 0.64,
            ceiling_quotient: 2000,
            ceiling_tariff: 7.00,
        }
    }
}

impl MealTariffSchedule {
    /// Slope and intercept of the line through the two anchor points.
    pub fn coefficients(&self) -> (f64, f64) {
        let span = f64::from(self.ceiling_quotient) - f64::from(self.floor_quotient);
        let slope = (self.ceiling_tariff - self.floor_tariff) / span;
        let intercept = self.ceiling_tariff - f64::from(self.ceiling_quotient) * slope;
        (slope, intercept)
    }

    pub fn tariff_for(&self, quotient: u32) -> f64 {
        if quotient <= self.floor_quotient {
            return self.floor_tariff;
        }
        if quotient > self.ceiling_quotient {
            return self.ceiling_tariff;
        }

        let (slope, intercept) = self.coefficients();
        round_cents(slope * f64::from(quotient) + intercept)
    }
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
