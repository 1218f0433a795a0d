use crate::reference::{is_target_region, DEFAULT_TARGET_REGION};
use crate::simulation::quotient::MealTariffSchedule;
use serde::{Deserialize, Serialize};

/// Programme parameters: covered region, amounts and income thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub target_region: String,
    pub direct_aid_amount: u32,
    pub bonus_amount: u32,
    pub cafeteria_quotient_threshold: u32,
    pub computer_quotient_threshold: u32,
    pub meal_tariff: MealTariffSchedule,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            target_region: DEFAULT_TARGET_REGION.to_string(),
            direct_aid_amount: 80,
            bonus_amount: 20,
            cafeteria_quotient_threshold: 2000,
            computer_quotient_threshold: 880,
            meal_tariff: MealTariffSchedule::default(),
        }
    }
}

impl EligibilityPolicy {
    pub fn is_target_region(&self, code: &str) -> bool {
        is_target_region(code, &self.target_region)
    }
}
