use super::config::EligibilityPolicy;
use super::verdict::{BenefitVerdict, Criterion, IneligibilityReason};
use crate::reference::{is_approved_school, school_by_id};
use crate::simulation::domain::{Child, Household};

pub fn is_secondary_student(child: &Child) -> bool {
    child.is_secondary_student()
}

/// Children living with the guardian inherit the household region.
pub fn resides_in_target_region(
    child: &Child,
    household_region: &str,
    policy: &EligibilityPolicy,
) -> bool {
    if child.resides_with_guardian {
        return policy.is_target_region(household_region);
    }
    child
        .residence_region
        .as_deref()
        .map(|region| policy.is_target_region(region))
        .unwrap_or(false)
}

/// Approved schools count through their own département, other schools
/// through the declared schooling region.
pub fn schooled_in_target_region(child: &Child, policy: &EligibilityPolicy) -> bool {
    if let Some(school) = child.school.as_deref().and_then(school_by_id) {
        return policy.is_target_region(school.region);
    }
    child
        .schooling_region
        .as_deref()
        .map(|region| policy.is_target_region(region))
        .unwrap_or(false)
}

/// Pupils of an approved school are assumed to eat there; others only count
/// when the declared cafeteria is itself on the approved list.
pub fn eats_at_listed_cafeteria(child: &Child) -> bool {
    if attends_approved_school(child) {
        return true;
    }
    child.eats_at_listed_cafeteria == Some(true)
        && child
            .cafeteria_school
            .as_deref()
            .map(is_approved_school)
            .unwrap_or(false)
}

pub(crate) fn attends_approved_school(child: &Child) -> bool {
    child
        .school
        .as_deref()
        .map(is_approved_school)
        .unwrap_or(false)
}

/// Inputs shared by the five benefit rules for a single child.
pub(crate) struct RuleInputs<'a> {
    pub child: &'a Child,
    pub household: &'a Household,
    pub quotient: u32,
    pub policy: &'a EligibilityPolicy,
}

impl RuleInputs<'_> {
    fn resident(&self) -> bool {
        resides_in_target_region(self.child, &self.household.region, self.policy)
    }

    fn schooled(&self) -> bool {
        schooled_in_target_region(self.child, self.policy)
    }

    fn special_circumstance(&self) -> bool {
        self.household.special_circumstance.is_declared()
    }

    fn quotient_compatible(&self, threshold: u32) -> bool {
        self.special_circumstance() || self.quotient < threshold
    }

    fn presence_criteria(&self, resident: bool, schooled: bool) -> Vec<Criterion> {
        let mut criteria = Vec::new();
        if resident {
            criteria.push(Criterion::ResidentInTargetRegion);
        }
        if schooled {
            criteria.push(Criterion::SchooledInTargetRegion);
        }
        criteria
    }
}

pub(crate) fn direct_financial_aid(inputs: &RuleInputs<'_>) -> BenefitVerdict {
    if !is_secondary_student(inputs.child) {
        return BenefitVerdict::ineligible(IneligibilityReason::NotSecondaryStudent);
    }

    let resident = inputs.resident();
    let schooled = inputs.schooled();
    if !resident && !schooled {
        return BenefitVerdict::ineligible(IneligibilityReason::OutsideTargetRegion);
    }

    BenefitVerdict::Eligible {
        amount: Some(inputs.policy.direct_aid_amount),
        criteria: inputs.presence_criteria(resident, schooled),
        meal_tariff: None,
    }
}

/// Only consults the direct-aid verdict; residency is never re-derived here.
pub(crate) fn scholarship_bonus(
    inputs: &RuleInputs<'_>,
    direct_aid: &BenefitVerdict,
) -> BenefitVerdict {
    if !direct_aid.is_eligible() {
        return BenefitVerdict::ineligible(IneligibilityReason::BaseAidNotMet);
    }

    let child = inputs.child;
    if !child.scholarship_recipient && !child.under_welfare_care {
        return BenefitVerdict::ineligible(IneligibilityReason::NoScholarshipOrWelfareCare);
    }

    let mut criteria = Vec::new();
    if child.scholarship_recipient {
        criteria.push(Criterion::ScholarshipRecipient);
    }
    if child.under_welfare_care {
        criteria.push(Criterion::UnderWelfareCare);
    }

    BenefitVerdict::Eligible {
        amount: Some(inputs.policy.bonus_amount),
        criteria,
        meal_tariff: None,
    }
}

/// Residency-gated: being schooled in the region is not enough.
pub(crate) fn cafeteria_reduction(inputs: &RuleInputs<'_>) -> BenefitVerdict {
    let child = inputs.child;
    if !is_secondary_student(child) {
        return BenefitVerdict::ineligible(IneligibilityReason::NotSecondaryStudent);
    }
    if !inputs.resident() {
        return BenefitVerdict::ineligible(IneligibilityReason::NotResident);
    }
    if !eats_at_listed_cafeteria(child) {
        return BenefitVerdict::ineligible(IneligibilityReason::NoListedCafeteria);
    }

    let threshold = inputs.policy.cafeteria_quotient_threshold;
    if !inputs.quotient_compatible(threshold) && !child.under_welfare_care {
        return BenefitVerdict::ineligible(IneligibilityReason::QuotientAboveThreshold {
            quotient: inputs.quotient,
            threshold,
            scholarship_considered: false,
        });
    }

    let mut criteria = vec![
        Criterion::ResidentInTargetRegion,
        Criterion::ApprovedCafeteria,
    ];
    if child.under_welfare_care {
        criteria.push(Criterion::UnderWelfareCare);
    } else if inputs.special_circumstance() {
        criteria.push(Criterion::SpecialCircumstance);
    } else {
        criteria.push(Criterion::QuotientBelowThreshold {
            quotient: inputs.quotient,
            threshold,
        });
    }

    let tariff_quotient = if inputs.special_circumstance() || child.under_welfare_care {
        0
    } else {
        inputs.quotient
    };

    BenefitVerdict::Eligible {
        amount: None,
        criteria,
        meal_tariff: Some(inputs.policy.meal_tariff.tariff_for(tariff_quotient)),
    }
}

pub(crate) fn transit_reimbursement(inputs: &RuleInputs<'_>) -> BenefitVerdict {
    let child = inputs.child;
    if !is_secondary_student(child) {
        return BenefitVerdict::ineligible(IneligibilityReason::NotSecondaryStudent);
    }
    if !inputs.resident() {
        return BenefitVerdict::ineligible(IneligibilityReason::NotResident);
    }
    if !child.scholarship_recipient {
        return BenefitVerdict::ineligible(IneligibilityReason::NotScholarshipRecipient);
    }
    if !child.wants_transit_pass {
        return BenefitVerdict::ineligible(IneligibilityReason::NoTransitPass);
    }

    BenefitVerdict::eligible(vec![
        Criterion::ResidentInTargetRegion,
        Criterion::ScholarshipRecipient,
        Criterion::UsesTransitPass,
    ])
}

pub(crate) fn computer_donation(inputs: &RuleInputs<'_>) -> BenefitVerdict {
    let child = inputs.child;
    if !is_secondary_student(child) {
        return BenefitVerdict::ineligible(IneligibilityReason::NotSecondaryStudent);
    }

    let resident = inputs.resident();
    let schooled = inputs.schooled();
    if !resident && !schooled {
        return BenefitVerdict::ineligible(IneligibilityReason::OutsideTargetRegion);
    }

    let threshold = inputs.policy.computer_quotient_threshold;
    if !inputs.quotient_compatible(threshold)
        && !child.scholarship_recipient
        && !child.under_welfare_care
    {
        return BenefitVerdict::ineligible(IneligibilityReason::QuotientAboveThreshold {
            quotient: inputs.quotient,
            threshold,
            scholarship_considered: true,
        });
    }

    let mut criteria = inputs.presence_criteria(resident, schooled);
    if child.under_welfare_care {
        criteria.push(Criterion::UnderWelfareCare);
    } else if child.scholarship_recipient {
        criteria.push(Criterion::ScholarshipRecipient);
    } else if inputs.special_circumstance() {
        criteria.push(Criterion::SpecialCircumstance);
    } else {
        criteria.push(Criterion::QuotientBelowThreshold {
            quotient: inputs.quotient,
            threshold,
        });
    }

    BenefitVerdict::eligible(criteria)
}
