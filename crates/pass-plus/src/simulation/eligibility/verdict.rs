use serde::{Deserialize, Serialize};

/// Outcome of one benefit rule for one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BenefitVerdict {
    Eligible {
        amount: Option<u32>,
        criteria: Vec<Criterion>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meal_tariff: Option<f64>,
    },
    Ineligible {
        reason: IneligibilityReason,
    },
}

impl BenefitVerdict {
    pub(crate) fn eligible(criteria: Vec<Criterion>) -> Self {
        Self::Eligible {
            amount: None,
            criteria,
            meal_tariff: None,
        }
    }

    pub(crate) fn ineligible(reason: IneligibilityReason) -> Self {
        Self::Ineligible { reason }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible { .. })
    }

    pub fn amount(&self) -> Option<u32> {
        match self {
            Self::Eligible { amount, .. } => *amount,
            Self::Ineligible { .. } => None,
        }
    }

    pub fn meal_tariff(&self) -> Option<f64> {
        match self {
            Self::Eligible { meal_tariff, .. } => *meal_tariff,
            Self::Ineligible { .. } => None,
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        match self {
            Self::Eligible { criteria, .. } => criteria,
            Self::Ineligible { .. } => &[],
        }
    }

    pub fn reason(&self) -> Option<&IneligibilityReason> {
        match self {
            Self::Eligible { .. } => None,
            Self::Ineligible { reason } => Some(reason),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::Eligible {
                amount: Some(amount),
                ..
            } => format!("eligible ({amount} €)"),
            Self::Eligible { .. } => "eligible".to_string(),
            Self::Ineligible { reason } => reason.summary(),
        }
    }
}

/// Satisfied condition recorded on an eligible verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    ResidentInTargetRegion,
    SchooledInTargetRegion,
    ScholarshipRecipient,
    UnderWelfareCare,
    ApprovedCafeteria,
    SpecialCircumstance,
    QuotientBelowThreshold { quotient: u32, threshold: u32 },
    UsesTransitPass,
}

impl Criterion {
    pub fn label(&self) -> String {
        match self {
            Criterion::ResidentInTargetRegion => "Resident in the programme region".to_string(),
            Criterion::SchooledInTargetRegion => "Schooled in the programme region".to_string(),
            Criterion::ScholarshipRecipient => "Scholarship recipient".to_string(),
            Criterion::UnderWelfareCare => "Under child-welfare care (ASE)".to_string(),
            Criterion::ApprovedCafeteria => "Eats at an approved school cafeteria".to_string(),
            Criterion::SpecialCircumstance => "Special circumstance declared".to_string(),
            Criterion::QuotientBelowThreshold {
                quotient,
                threshold,
            } => format!("Monthly quotient ({quotient} €) < {threshold} €"),
            Criterion::UsesTransitPass => "Uses the transit pass".to_string(),
        }
    }
}

/// Why a benefit was refused, phrased for display next to the benefit card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IneligibilityReason {
    NotSecondaryStudent,
    OutsideTargetRegion,
    NotResident,
    BaseAidNotMet,
    NoScholarshipOrWelfareCare,
    NoListedCafeteria,
    QuotientAboveThreshold {
        quotient: u32,
        threshold: u32,
        scholarship_considered: bool,
    },
    NotScholarshipRecipient,
    NoTransitPass,
}

impl IneligibilityReason {
    pub fn summary(&self) -> String {
        match self {
            IneligibilityReason::NotSecondaryStudent => {
                "non-secondary: benefits are reserved for secondary-school pupils".to_string()
            }
            IneligibilityReason::OutsideTargetRegion => {
                "neither resident nor schooled in the programme region".to_string()
            }
            IneligibilityReason::NotResident => {
                "not resident in the programme region".to_string()
            }
            IneligibilityReason::BaseAidNotMet => {
                "base aid not met: not eligible for the direct financial aid".to_string()
            }
            IneligibilityReason::NoScholarshipOrWelfareCare => {
                "neither scholarship recipient nor under child-welfare care".to_string()
            }
            IneligibilityReason::NoListedCafeteria => {
                "does not eat at an approved school cafeteria".to_string()
            }
            IneligibilityReason::QuotientAboveThreshold {
                quotient,
                threshold,
                scholarship_considered,
            } => {
                if *scholarship_considered {
                    format!(
                        "monthly quotient ({quotient} €) at or above the {threshold} € threshold, not a scholarship recipient and not under child-welfare care"
                    )
                } else {
                    format!(
                        "monthly quotient ({quotient} €) at or above the {threshold} € threshold and not under child-welfare care"
                    )
                }
            }
            IneligibilityReason::NotScholarshipRecipient => {
                "not a scholarship recipient".to_string()
            }
            IneligibilityReason::NoTransitPass => "does not use the transit pass".to_string(),
        }
    }
}
