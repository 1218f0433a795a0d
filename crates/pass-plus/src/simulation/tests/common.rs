use chrono::NaiveDate;

use crate::reference::OTHER_SCHOOL;
use crate::simulation::domain::{
    Child, FamilySituation, Household, SchoolingLevel, SpecialCircumstance,
};
use crate::simulation::eligibility::{AggregateResult, EligibilityEngine, EligibilityPolicy};

pub(super) fn policy() -> EligibilityPolicy {
    EligibilityPolicy::default()
}

pub(super) fn evaluated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

/// Single parent living in the programme region, quotient 1000.
pub(super) fn target_household() -> Household {
    Household {
        region: "92".to_string(),
        family_situation: FamilySituation::SingleParent,
        special_circumstance: SpecialCircumstance::None,
        annual_income: Some(24_000.0),
        fiscal_shares: Some(2.0),
    }
}

pub(super) fn household_with_quotient(region: &str, quotient: u32) -> Household {
    Household {
        region: region.to_string(),
        family_situation: FamilySituation::TwoParents,
        special_circumstance: SpecialCircumstance::None,
        annual_income: Some(f64::from(quotient) * 12.0),
        fiscal_shares: Some(1.0),
    }
}

pub(super) fn declared_household(circumstance: SpecialCircumstance) -> Household {
    Household {
        region: "92".to_string(),
        family_situation: FamilySituation::AlternatingCustody,
        special_circumstance: circumstance,
        annual_income: None,
        fiscal_shares: None,
    }
}

/// Secondary pupil living with the guardian at the given school.
pub(super) fn secondary_child(school: &str) -> Child {
    let mut child = Child::blank(1);
    child.schooling_level = Some(SchoolingLevel::Secondary);
    child.school = Some(school.to_string());
    child
}

pub(super) fn pupil_of_other_school(schooling_region: &str) -> Child {
    let mut child = secondary_child(OTHER_SCHOOL);
    child.schooling_region = Some(schooling_region.to_string());
    child
}

pub(super) fn evaluate(child: &Child, household: &Household) -> AggregateResult {
    EligibilityEngine::new(policy()).evaluate(child, household, household.monthly_quotient())
}
