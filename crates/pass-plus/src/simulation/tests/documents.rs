use super::common::*;
use crate::simulation::documents::{
    group_by_category, resolve_document_requirements, DocumentCategory, DocumentKind,
    DocumentRequirement, INCOME_ALTERNATIVES_ID,
};
use crate::simulation::domain::{Child, Household, SpecialCircumstance};

fn resolve(child: &Child, household: &Household) -> Vec<DocumentRequirement> {
    let benefits = evaluate(child, household);
    resolve_document_requirements(child, household, &benefits)
}

fn ids(requirements: &[DocumentRequirement]) -> Vec<&'static str> {
    requirements.iter().map(DocumentRequirement::id).collect()
}

#[test]
fn nothing_required_without_any_eligible_benefit() {
    let household = household_with_quotient("75", 500);
    let child = pupil_of_other_school("75");

    assert!(resolve(&child, &household).is_empty());
}

#[test]
fn approved_school_pupil_needs_photo_and_income_proof() {
    let household = target_household();
    let child = secondary_child("college-1");

    let requirements = resolve(&child, &household);

    assert_eq!(ids(&requirements), vec!["child_photo", INCOME_ALTERNATIVES_ID]);
    match requirements.last() {
        Some(DocumentRequirement::Alternatives {
            category, options, ..
        }) => {
            assert_eq!(*category, DocumentCategory::Income);
            assert_eq!(options.len(), 2);
            assert_eq!(options[0].documents.len(), 1);
            assert_eq!(options[1].documents.len(), 2);
        }
        other => panic!("expected income alternatives, got {other:?}"),
    }
}

#[test]
fn direct_aid_alone_does_not_require_income_proof() {
    let household = household_with_quotient("92", 2500);
    let child = secondary_child("college-2");

    let requirements = resolve(&child, &household);

    assert_eq!(ids(&requirements), vec!["child_photo"]);
}

#[test]
fn other_school_requires_schooling_certificate() {
    let household = household_with_quotient("92", 2500);
    let child = pupil_of_other_school("92");

    let requirements = resolve(&child, &household);

    assert_eq!(
        ids(&requirements),
        vec!["child_photo", "schooling_certificate"]
    );
}

#[test]
fn special_circumstance_replaces_income_proof_with_attestation() {
    let household = declared_household(SpecialCircumstance::SocialDifficulty);
    let child = secondary_child("college-3");

    let requirements = resolve(&child, &household);

    assert_eq!(
        ids(&requirements),
        vec!["child_photo", "social_services_attestation"]
    );
    assert!(requirements.iter().all(|requirement| !requirement.is_alternative()));
}

#[test]
fn transit_documents_are_deduplicated_and_ordered() {
    let household = household_with_quotient("92", 1500);
    let mut child = secondary_child("college-4");
    child.scholarship_recipient = true;
    child.wants_transit_pass = true;
    child.under_welfare_care = true;

    let requirements = resolve(&child, &household);

    assert_eq!(
        ids(&requirements),
        vec![
            "child_photo",
            "scholarship_notification",
            "welfare_care_attachment",
            "bank_details",
            "transit_pass_contract",
            INCOME_ALTERNATIVES_ID,
        ]
    );
    let notifications = requirements
        .iter()
        .filter(|requirement| requirement.kind() == Some(DocumentKind::ScholarshipNotification))
        .count();
    assert_eq!(notifications, 1);
}

#[test]
fn scholarship_notification_required_without_transit() {
    let household = household_with_quotient("92", 1500);
    let mut child = secondary_child("college-4");
    child.scholarship_recipient = true;

    let benefits = evaluate(&child, &household);
    assert!(benefits.scholarship_bonus.is_eligible());
    assert!(!benefits.transit_reimbursement.is_eligible());

    let requirements = resolve_document_requirements(&child, &household, &benefits);

    assert_eq!(
        ids(&requirements),
        vec![
            "child_photo",
            "scholarship_notification",
            INCOME_ALTERNATIVES_ID
        ]
    );
}

#[test]
fn welfare_care_alone_needs_attachment_but_no_notification() {
    let household = household_with_quotient("92", 1500);
    let mut child = secondary_child("college-4");
    child.under_welfare_care = true;

    let requirements = resolve(&child, &household);

    assert_eq!(
        ids(&requirements),
        vec![
            "child_photo",
            "welfare_care_attachment",
            INCOME_ALTERNATIVES_ID
        ]
    );
    assert!(requirements
        .iter()
        .all(|requirement| requirement.kind() != Some(DocumentKind::ScholarshipNotification)));
}

#[test]
fn groups_follow_category_precedence() {
    let household = household_with_quotient("92", 1500);
    let mut child = pupil_of_other_school("92");
    child.scholarship_recipient = true;
    child.wants_transit_pass = true;

    let requirements = resolve(&child, &household);
    let groups = group_by_category(&requirements);

    let categories: Vec<DocumentCategory> = groups.iter().map(|(category, _)| *category).collect();
    assert_eq!(
        categories,
        vec![
            DocumentCategory::Common,
            DocumentCategory::Schooling,
            DocumentCategory::Income,
            DocumentCategory::ScholarshipWelfare,
            DocumentCategory::Transit,
        ]
    );
    let transit = &groups[4].1;
    assert_eq!(transit.len(), 2);
}
