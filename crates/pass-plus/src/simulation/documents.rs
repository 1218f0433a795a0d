//! Supporting documents a household must provide for the benefits granted to a child.

use serde::Serialize;

use super::domain::{Child, Household};
use super::eligibility::{attends_approved_school, AggregateResult};

/// Document categories in display precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Common,
    Schooling,
    Income,
    SpecialCircumstance,
    ScholarshipWelfare,
    Transit,
}

impl DocumentCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Common,
            Self::Schooling,
            Self::Income,
            Self::SpecialCircumstance,
            Self::ScholarshipWelfare,
            Self::Transit,
        ]
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::Common => 0,
            Self::Schooling => 1,
            Self::Income => 2,
            Self::SpecialCircumstance => 3,
            Self::ScholarshipWelfare => 4,
            Self::Transit => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "Common documents",
            Self::Schooling => "Schooling documents",
            Self::Income => "Income and family composition",
            Self::SpecialCircumstance => "Special circumstance",
            Self::ScholarshipWelfare => "Scholarship / ASE",
            Self::Transit => "Transit pass",
        }
    }
}

/// Identity of a single supporting document; deduplication key of the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    ChildPhoto,
    SchoolingCertificate,
    SocialServicesAttestation,
    ScholarshipNotification,
    WelfareCareAttachment,
    BankDetails,
    TransitPassContract,
}

impl DocumentKind {
    pub const fn id(self) -> &'static str {
        match self {
            Self::ChildPhoto => "child_photo",
            Self::SchoolingCertificate => "schooling_certificate",
            Self::SocialServicesAttestation => "social_services_attestation",
            Self::ScholarshipNotification => "scholarship_notification",
            Self::WelfareCareAttachment => "welfare_care_attachment",
            Self::BankDetails => "bank_details",
            Self::TransitPassContract => "transit_pass_contract",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ChildPhoto => "Photo of the child",
            Self::SchoolingCertificate => "School enrolment certificate",
            Self::SocialServicesAttestation => "Social services attestation",
            Self::ScholarshipNotification => "Scholarship notification",
            Self::WelfareCareAttachment => "Proof of child-welfare (ASE) care",
            Self::BankDetails => "Bank details (RIB) of the payer",
            Self::TransitPassContract => "Transit pass contract",
        }
    }

    pub const fn category(self) -> DocumentCategory {
        match self {
            Self::ChildPhoto => DocumentCategory::Common,
            Self::SchoolingCertificate => DocumentCategory::Schooling,
            Self::SocialServicesAttestation => DocumentCategory::SpecialCircumstance,
            Self::ScholarshipNotification | Self::WelfareCareAttachment => {
                DocumentCategory::ScholarshipWelfare
            }
            Self::BankDetails | Self::TransitPassContract => DocumentCategory::Transit,
        }
    }
}

/// One acceptable bundle inside an alternatives entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentOption {
    pub id: &'static str,
    pub label: &'static str,
    pub documents: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentRequirement {
    Document {
        kind: DocumentKind,
        name: &'static str,
        category: DocumentCategory,
    },
    /// Any one of the options satisfies the requirement.
    Alternatives {
        id: &'static str,
        category: DocumentCategory,
        options: Vec<DocumentOption>,
    },
}

pub const INCOME_ALTERNATIVES_ID: &str = "income_proof_alternatives";

impl DocumentRequirement {
    pub fn document(kind: DocumentKind) -> Self {
        Self::Document {
            kind,
            name: kind.name(),
            category: kind.category(),
        }
    }

    pub fn income_proof_alternatives() -> Self {
        Self::Alternatives {
            id: INCOME_ALTERNATIVES_ID,
            category: DocumentCategory::Income,
            options: vec![
                DocumentOption {
                    id: "tax_assessment",
                    label: "Option 1",
                    documents: vec![
                        "Tax assessment notice (income and family composition)",
                    ],
                },
                DocumentOption {
                    id: "payslips_and_family_record",
                    label: "Option 2",
                    documents: vec![
                        "Proof of income (payslips for the last 3 months)",
                        "Proof of family composition (family record book or birth certificate)",
                    ],
                },
            ],
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Document { kind, .. } => kind.id(),
            Self::Alternatives { id, .. } => id,
        }
    }

    pub fn category(&self) -> DocumentCategory {
        match self {
            Self::Document { category, .. } | Self::Alternatives { category, .. } => *category,
        }
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        match self {
            Self::Document { kind, .. } => Some(*kind),
            Self::Alternatives { .. } => None,
        }
    }

    pub fn is_alternative(&self) -> bool {
        matches!(self, Self::Alternatives { .. })
    }
}

/// Derives the documents required for the benefits granted to `child`.
///
/// Single documents are deduplicated by kind and ordered by category rank;
/// the income-proof alternatives entry, when required, always comes last.
pub fn resolve_document_requirements(
    child: &Child,
    household: &Household,
    benefits: &AggregateResult,
) -> Vec<DocumentRequirement> {
    if !benefits.at_least_one_eligible {
        return Vec::new();
    }

    let mut kinds: Vec<DocumentKind> = Vec::new();
    let mut require = |kind: DocumentKind| {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    };

    require(DocumentKind::ChildPhoto);

    if child.attends_other_school() || !attends_approved_school(child) {
        require(DocumentKind::SchoolingCertificate);
    }

    let special_circumstance = household.special_circumstance.is_declared();
    if special_circumstance {
        require(DocumentKind::SocialServicesAttestation);
    }

    let transit = benefits.transit_reimbursement.is_eligible();
    if child.scholarship_recipient
        && (benefits.scholarship_bonus.is_eligible()
            || transit
            || benefits.computer_donation.is_eligible())
    {
        require(DocumentKind::ScholarshipNotification);
    }

    if child.under_welfare_care {
        require(DocumentKind::WelfareCareAttachment);
    }

    if transit {
        require(DocumentKind::BankDetails);
        require(DocumentKind::TransitPassContract);
        require(DocumentKind::ScholarshipNotification);
    }

    kinds.sort_by_key(|kind| kind.category().rank());

    let mut requirements: Vec<DocumentRequirement> =
        kinds.into_iter().map(DocumentRequirement::document).collect();

    let income_gated = benefits.cafeteria_reduction.is_eligible()
        || benefits.computer_donation.is_eligible();
    if !special_circumstance && income_gated {
        requirements.push(DocumentRequirement::income_proof_alternatives());
    }

    requirements
}

/// Requirements bucketed by category, in category precedence.
pub fn group_by_category(
    requirements: &[DocumentRequirement],
) -> Vec<(DocumentCategory, Vec<&DocumentRequirement>)> {
    DocumentCategory::ordered()
        .into_iter()
        .filter_map(|category| {
            let members: Vec<_> = requirements
                .iter()
                .filter(|requirement| requirement.category() == category)
                .collect();
            (!members.is_empty()).then_some((category, members))
        })
        .collect()
}
