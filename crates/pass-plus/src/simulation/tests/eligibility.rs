use super::common::*;
use crate::reference::OTHER_SCHOOL;
use crate::simulation::domain::{Child, SchoolingLevel, SpecialCircumstance};
use crate::simulation::eligibility::{
    eats_at_listed_cafeteria, evaluate_all_benefits, resides_in_target_region,
    schooled_in_target_region, BenefitKind, BenefitVerdict, Criterion, EligibilityEngine,
    EligibilityPolicy, IneligibilityReason,
};

#[test]
fn resident_pupil_receives_direct_aid_only() {
    let household = household_with_quotient("92", 2100);
    let child = secondary_child("college-1");

    let result = evaluate(&child, &household);

    assert_eq!(result.direct_aid.amount(), Some(80));
    assert_eq!(
        result.scholarship_bonus.reason(),
        Some(&IneligibilityReason::NoScholarshipOrWelfareCare)
    );
    assert_eq!(
        result.transit_reimbursement.reason(),
        Some(&IneligibilityReason::NotScholarshipRecipient)
    );
    match result.computer_donation {
        BenefitVerdict::Ineligible {
            reason:
                IneligibilityReason::QuotientAboveThreshold {
                    quotient,
                    threshold,
                    scholarship_considered,
                },
        } => {
            assert_eq!(quotient, 2100);
            assert_eq!(threshold, 880);
            assert!(scholarship_considered);
        }
        other => panic!("expected quotient rejection, got {other:?}"),
    }
    match result.cafeteria_reduction {
        BenefitVerdict::Ineligible {
            reason: IneligibilityReason::QuotientAboveThreshold { threshold, .. },
        } => assert_eq!(threshold, 2000),
        other => panic!("expected cafeteria quotient rejection, got {other:?}"),
    }
    assert_eq!(result.total_amount, 80);
    assert!(result.at_least_one_eligible);
}

#[test]
fn non_secondary_pupils_are_refused_everything() {
    let household = target_household();
    for level in [None, Some(SchoolingLevel::UpperSecondary), Some(SchoolingLevel::Other)] {
        let mut child = secondary_child("college-1");
        child.schooling_level = level;
        child.scholarship_recipient = true;
        child.under_welfare_care = true;
        child.wants_transit_pass = true;

        let result = evaluate(&child, &household);

        assert!(!result.at_least_one_eligible);
        assert_eq!(result.total_amount, 0);
        assert_eq!(
            result.scholarship_bonus.reason(),
            Some(&IneligibilityReason::BaseAidNotMet)
        );
        for kind in [
            BenefitKind::DirectFinancialAid,
            BenefitKind::CafeteriaReduction,
            BenefitKind::TransitReimbursement,
            BenefitKind::ComputerDonation,
        ] {
            assert_eq!(
                result.verdict(kind).reason(),
                Some(&IneligibilityReason::NotSecondaryStudent),
                "{kind:?}"
            );
        }
        assert!(IneligibilityReason::NotSecondaryStudent
            .summary()
            .starts_with("non-secondary"));
    }
}

#[test]
fn schooling_in_region_is_enough_for_direct_aid_but_not_cafeteria() {
    let household = household_with_quotient("75", 500);
    let child = secondary_child("college-2");

    let result = evaluate(&child, &household);

    assert!(result.direct_aid.is_eligible());
    assert_eq!(
        result.direct_aid.criteria(),
        &[Criterion::SchooledInTargetRegion]
    );
    assert_eq!(
        result.cafeteria_reduction.reason(),
        Some(&IneligibilityReason::NotResident)
    );
    assert!(result.computer_donation.is_eligible());
    assert!(result
        .computer_donation
        .criteria()
        .contains(&Criterion::QuotientBelowThreshold {
            quotient: 500,
            threshold: 880
        }));
}

#[test]
fn approved_schools_follow_the_configured_target_region() {
    let policy = EligibilityPolicy {
        target_region: "93".to_string(),
        ..EligibilityPolicy::default()
    };
    let child = secondary_child("college-2");
    assert!(!schooled_in_target_region(&child, &policy));
    assert!(schooled_in_target_region(&child, &EligibilityPolicy::default()));

    let household = household_with_quotient("75", 500);
    let result = EligibilityEngine::new(policy).evaluate(&child, &household, 500);
    assert_eq!(
        result.direct_aid.reason(),
        Some(&IneligibilityReason::OutsideTargetRegion)
    );
    assert!(!result.at_least_one_eligible);
}

#[test]
fn pupil_outside_region_is_refused_direct_aid() {
    let household = household_with_quotient("75", 500);
    let child = pupil_of_other_school("75");

    let result = evaluate(&child, &household);

    assert_eq!(
        result.direct_aid.reason(),
        Some(&IneligibilityReason::OutsideTargetRegion)
    );
    assert_eq!(
        result.scholarship_bonus.reason(),
        Some(&IneligibilityReason::BaseAidNotMet)
    );
    assert!(!result.at_least_one_eligible);
}

#[test]
fn child_residence_overrides_household_region_when_living_elsewhere() {
    let policy = policy();
    let mut child = pupil_of_other_school("75");
    child.resides_with_guardian = false;
    child.residence_region = Some("92".to_string());

    assert!(resides_in_target_region(&child, "75", &policy));
    assert!(!schooled_in_target_region(&child, &policy));

    child.resides_with_guardian = true;
    assert!(!resides_in_target_region(&child, "75", &policy));
    assert!(resides_in_target_region(&child, "92", &policy));
}

#[test]
fn cafeteria_of_other_school_only_counts_when_listed() {
    let mut child = pupil_of_other_school("92");
    assert!(!eats_at_listed_cafeteria(&child));

    child.eats_at_listed_cafeteria = Some(true);
    child.cafeteria_school = Some(OTHER_SCHOOL.to_string());
    assert!(!eats_at_listed_cafeteria(&child));

    child.cafeteria_school = Some("college-5".to_string());
    assert!(eats_at_listed_cafeteria(&child));

    child.eats_at_listed_cafeteria = Some(false);
    assert!(!eats_at_listed_cafeteria(&child));

    assert!(eats_at_listed_cafeteria(&secondary_child("college-3")));
}

#[test]
fn cafeteria_tariff_follows_quotient() {
    let household = target_household();
    let child = secondary_child("college-1");

    let result = evaluate(&child, &household);

    let tariff = result
        .cafeteria_reduction
        .meal_tariff()
        .expect("tariff computed");
    assert!((tariff - 3.30).abs() < 1e-9, "tariff was {tariff}");
    assert_eq!(result.cafeteria_reduction.amount(), None);
    assert_eq!(
        result.cafeteria_reduction.criteria(),
        &[
            Criterion::ResidentInTargetRegion,
            Criterion::ApprovedCafeteria,
            Criterion::QuotientBelowThreshold {
                quotient: 1000,
                threshold: 2000
            },
        ]
    );
}

#[test]
fn welfare_care_and_special_circumstance_use_floor_tariff() {
    let mut child = secondary_child("college-1");
    child.under_welfare_care = true;
    let result = evaluate(&child, &household_with_quotient("92", 2500));
    assert_eq!(result.cafeteria_reduction.meal_tariff(), Some(0.64));
    assert!(result
        .cafeteria_reduction
        .criteria()
        .contains(&Criterion::UnderWelfareCare));

    let child = secondary_child("college-1");
    let declared = declared_household(SpecialCircumstance::AsylumSeeker);
    let result = evaluate(&child, &declared);
    assert_eq!(result.cafeteria_reduction.meal_tariff(), Some(0.64));
    assert!(result
        .cafeteria_reduction
        .criteria()
        .contains(&Criterion::SpecialCircumstance));
    assert!(result.computer_donation.is_eligible());
}

#[test]
fn quotient_thresholds_are_strict() {
    let child = secondary_child("college-1");

    let at_threshold = evaluate(&child, &household_with_quotient("92", 880));
    assert!(!at_threshold.computer_donation.is_eligible());
    let below = evaluate(&child, &household_with_quotient("92", 879));
    assert!(below.computer_donation.is_eligible());

    let at_cafeteria_threshold = evaluate(&child, &household_with_quotient("92", 2000));
    assert!(!at_cafeteria_threshold.cafeteria_reduction.is_eligible());
    let below_cafeteria = evaluate(&child, &household_with_quotient("92", 1999));
    assert!(below_cafeteria.cafeteria_reduction.is_eligible());
}

#[test]
fn scholarship_unlocks_bonus_transit_and_computer() {
    let mut child = secondary_child("college-4");
    child.scholarship_recipient = true;
    child.wants_transit_pass = true;

    let result = evaluate(&child, &household_with_quotient("92", 1500));

    assert_eq!(result.scholarship_bonus.amount(), Some(20));
    assert_eq!(result.total_amount, 100);
    assert_eq!(
        result.transit_reimbursement.criteria(),
        &[
            Criterion::ResidentInTargetRegion,
            Criterion::ScholarshipRecipient,
            Criterion::UsesTransitPass,
        ]
    );
    assert!(result
        .computer_donation
        .criteria()
        .contains(&Criterion::ScholarshipRecipient));
}

#[test]
fn transit_reasons_follow_condition_order() {
    let household = household_with_quotient("75", 500);
    let mut child = secondary_child("college-4");
    child.wants_transit_pass = true;
    assert_eq!(
        evaluate(&child, &household).transit_reimbursement.reason(),
        Some(&IneligibilityReason::NotResident)
    );

    let household = target_household();
    assert_eq!(
        evaluate(&child, &household).transit_reimbursement.reason(),
        Some(&IneligibilityReason::NotScholarshipRecipient)
    );

    child.scholarship_recipient = true;
    child.wants_transit_pass = false;
    assert_eq!(
        evaluate(&child, &household).transit_reimbursement.reason(),
        Some(&IneligibilityReason::NoTransitPass)
    );
}

#[test]
fn evaluation_is_idempotent() {
    let household = target_household();
    let mut child: Child = secondary_child("college-2");
    child.under_welfare_care = true;

    let first = evaluate_all_benefits(&child, &household, 1000);
    let second = evaluate_all_benefits(&child, &household, 1000);

    assert_eq!(first, second);
    assert_eq!(first.total_amount, 100);
}
