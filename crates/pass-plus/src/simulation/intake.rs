//! Completeness checks run before a household or child record is accepted.
//!
//! The eligibility engine itself is total; these checks only guard the
//! answers collected by the simulator so that required follow-up questions
//! are never skipped.

use super::domain::{Child, Household};
use super::eligibility::EligibilityPolicy;
use super::session::MAX_CHILDREN;
use crate::reference::{is_approved_school, is_known_region, OTHER_SCHOOL};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("unknown region code '{0}'")]
    UnknownRegion(String),
    #[error("annual income is required when no special circumstance is declared")]
    MissingIncome,
    #[error("fiscal shares are required when no special circumstance is declared")]
    MissingFiscalShares,
    #[error("annual income and fiscal shares must be declared together")]
    IncomeWithoutShares,
    #[error("annual income must be positive (found {0})")]
    NonPositiveIncome(f64),
    #[error("fiscal shares must be positive (found {0})")]
    NonPositiveFiscalShares(f64),
    #[error("fiscal shares must be a multiple of 0.5 (found {0})")]
    FiscalSharesNotHalfStep(f64),
    #[error("child {child}: schooling level is required")]
    MissingSchoolingLevel { child: u8 },
    #[error("child {child}: school is required for secondary pupils")]
    MissingSchool { child: u8 },
    #[error("child {child}: school '{school}' is neither an approved school nor 'other'")]
    UnknownSchool { child: u8, school: String },
    #[error("child {child}: schooling region is required for schools outside the approved list")]
    MissingSchoolingRegion { child: u8 },
    #[error("child {child}: residence region is required when not living with the guardian")]
    MissingResidenceRegion { child: u8 },
    #[error("child {child}: cafeteria school is required when eating at an approved cafeteria")]
    MissingCafeteriaSchool { child: u8 },
    #[error("child {child}: cafeteria answers only apply to pupils schooled in the programme region outside the approved list")]
    UnexpectedCafeteriaAnswer { child: u8 },
    #[error("a simulation covers 1 to {max} children (found {count})", max = MAX_CHILDREN)]
    ChildCountOutOfRange { count: usize },
}

pub fn validate_child_count(count: usize) -> Result<(), IntakeViolation> {
    if (1..=usize::from(MAX_CHILDREN)).contains(&count) {
        Ok(())
    } else {
        Err(IntakeViolation::ChildCountOutOfRange { count })
    }
}

pub fn validate_household(household: &Household) -> Result<(), IntakeViolation> {
    if !is_known_region(&household.region) {
        return Err(IntakeViolation::UnknownRegion(household.region.clone()));
    }

    let declared = household.special_circumstance.is_declared();
    match (household.annual_income, household.fiscal_shares) {
        (None, None) if declared => Ok(()),
        (None, None) => Err(IntakeViolation::MissingIncome),
        (None, Some(_)) | (Some(_), None) if declared => {
            Err(IntakeViolation::IncomeWithoutShares)
        }
        (None, Some(_)) => Err(IntakeViolation::MissingIncome),
        (Some(_), None) => Err(IntakeViolation::MissingFiscalShares),
        (Some(income), Some(shares)) => {
            if !(income.is_finite() && income > 0.0) {
                return Err(IntakeViolation::NonPositiveIncome(income));
            }
            if !(shares.is_finite() && shares > 0.0) {
                return Err(IntakeViolation::NonPositiveFiscalShares(shares));
            }
            if (shares * 2.0).fract() != 0.0 {
                return Err(IntakeViolation::FiscalSharesNotHalfStep(shares));
            }
            Ok(())
        }
    }
}

pub fn validate_child(child: &Child, policy: &EligibilityPolicy) -> Result<(), IntakeViolation> {
    let number = child.number;

    if child.schooling_level.is_none() {
        return Err(IntakeViolation::MissingSchoolingLevel { child: number });
    }

    if !child.resides_with_guardian {
        match child.residence_region.as_deref() {
            None => return Err(IntakeViolation::MissingResidenceRegion { child: number }),
            Some(region) if !is_known_region(region) => {
                return Err(IntakeViolation::UnknownRegion(region.to_string()))
            }
            Some(_) => {}
        }
    }

    // Pupils outside secondary school are never eligible; the remaining
    // questions are not asked.
    if !child.is_secondary_student() {
        return Ok(());
    }

    let Some(school) = child.school.as_deref() else {
        return Err(IntakeViolation::MissingSchool { child: number });
    };
    if school != OTHER_SCHOOL && !is_approved_school(school) {
        return Err(IntakeViolation::UnknownSchool {
            child: number,
            school: school.to_string(),
        });
    }

    let mut cafeteria_question_asked = false;
    if school == OTHER_SCHOOL {
        let Some(region) = child.schooling_region.as_deref() else {
            return Err(IntakeViolation::MissingSchoolingRegion { child: number });
        };
        if !is_known_region(region) {
            return Err(IntakeViolation::UnknownRegion(region.to_string()));
        }
        cafeteria_question_asked = policy.is_target_region(region);
    }

    if !cafeteria_question_asked {
        if child.eats_at_listed_cafeteria.is_some() || child.cafeteria_school.is_some() {
            return Err(IntakeViolation::UnexpectedCafeteriaAnswer { child: number });
        }
        return Ok(());
    }

    match (child.eats_at_listed_cafeteria, child.cafeteria_school.as_deref()) {
        (Some(true), None) => Err(IntakeViolation::MissingCafeteriaSchool { child: number }),
        (Some(true), Some(cafeteria))
            if cafeteria != OTHER_SCHOOL && !is_approved_school(cafeteria) =>
        {
            Err(IntakeViolation::UnknownSchool {
                child: number,
                school: cafeteria.to_string(),
            })
        }
        (Some(false) | None, Some(_)) => {
            Err(IntakeViolation::UnexpectedCafeteriaAnswer { child: number })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::domain::{FamilySituation, SchoolingLevel, SpecialCircumstance};

    fn household(income: Option<f64>, shares: Option<f64>) -> Household {
        Household {
            region: "92".to_string(),
            family_situation: FamilySituation::TwoParents,
            special_circumstance: SpecialCircumstance::None,
            annual_income: income,
            fiscal_shares: shares,
        }
    }

    fn secondary_child(school: &str) -> Child {
        let mut child = Child::blank(1);
        child.schooling_level = Some(SchoolingLevel::Secondary);
        child.school = Some(school.to_string());
        child
    }

    #[test]
    fn household_without_circumstance_needs_income_and_shares() {
        assert_eq!(
            validate_household(&household(None, None)),
            Err(IntakeViolation::MissingIncome)
        );
        assert_eq!(
            validate_household(&household(Some(24_000.0), None)),
            Err(IntakeViolation::MissingFiscalShares)
        );
        assert_eq!(
            validate_household(&household(Some(0.0), Some(2.0))),
            Err(IntakeViolation::NonPositiveIncome(0.0))
        );
        assert_eq!(
            validate_household(&household(Some(24_000.0), Some(2.3))),
            Err(IntakeViolation::FiscalSharesNotHalfStep(2.3))
        );
        assert!(validate_household(&household(Some(24_000.0), Some(2.5))).is_ok());
    }

    #[test]
    fn declared_circumstance_skips_income() {
        let mut declared = household(None, None);
        declared.special_circumstance = SpecialCircumstance::AsylumSeeker;
        assert!(validate_household(&declared).is_ok());

        declared.annual_income = Some(12_000.0);
        assert_eq!(
            validate_household(&declared),
            Err(IntakeViolation::IncomeWithoutShares)
        );
    }

    #[test]
    fn rejects_unknown_household_region() {
        let mut unknown = household(Some(24_000.0), Some(2.0));
        unknown.region = "2A".to_string();
        assert_eq!(
            validate_household(&unknown),
            Err(IntakeViolation::UnknownRegion("2A".to_string()))
        );
    }

    #[test]
    fn child_count_must_fit_the_questionnaire() {
        assert_eq!(
            validate_child_count(0),
            Err(IntakeViolation::ChildCountOutOfRange { count: 0 })
        );
        assert!(validate_child_count(1).is_ok());
        assert!(validate_child_count(usize::from(MAX_CHILDREN)).is_ok());
        assert_eq!(
            validate_child_count(300),
            Err(IntakeViolation::ChildCountOutOfRange { count: 300 })
        );
    }

    #[test]
    fn non_secondary_child_needs_only_a_level() {
        let policy = EligibilityPolicy::default();
        let mut child = Child::blank(2);
        assert_eq!(
            validate_child(&child, &policy),
            Err(IntakeViolation::MissingSchoolingLevel { child: 2 })
        );

        child.schooling_level = Some(SchoolingLevel::UpperSecondary);
        assert!(validate_child(&child, &policy).is_ok());
    }

    #[test]
    fn other_school_requires_schooling_region() {
        let policy = EligibilityPolicy::default();
        let mut child = secondary_child(OTHER_SCHOOL);
        assert_eq!(
            validate_child(&child, &policy),
            Err(IntakeViolation::MissingSchoolingRegion { child: 1 })
        );

        child.schooling_region = Some("75".to_string());
        assert!(validate_child(&child, &policy).is_ok());
    }

    #[test]
    fn cafeteria_school_required_after_yes() {
        let policy = EligibilityPolicy::default();
        let mut child = secondary_child(OTHER_SCHOOL);
        child.schooling_region = Some("92".to_string());
        child.eats_at_listed_cafeteria = Some(true);
        assert_eq!(
            validate_child(&child, &policy),
            Err(IntakeViolation::MissingCafeteriaSchool { child: 1 })
        );

        child.cafeteria_school = Some(OTHER_SCHOOL.to_string());
        assert!(validate_child(&child, &policy).is_ok());
    }

    #[test]
    fn cafeteria_answers_outside_context_are_rejected() {
        let policy = EligibilityPolicy::default();
        let mut child = secondary_child("college-1");
        child.eats_at_listed_cafeteria = Some(true);
        child.cafeteria_school = Some("college-2".to_string());
        assert_eq!(
            validate_child(&child, &policy),
            Err(IntakeViolation::UnexpectedCafeteriaAnswer { child: 1 })
        );
    }

    #[test]
    fn residence_region_required_when_living_elsewhere() {
        let policy = EligibilityPolicy::default();
        let mut child = secondary_child("college-4");
        child.resides_with_guardian = false;
        assert_eq!(
            validate_child(&child, &policy),
            Err(IntakeViolation::MissingResidenceRegion { child: 1 })
        );

        child.residence_region = Some("93".to_string());
        assert!(validate_child(&child, &policy).is_ok());
    }
}
