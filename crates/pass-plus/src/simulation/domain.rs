use serde::{Deserialize, Serialize};

use super::quotient::compute_monthly_quotient;
use crate::reference::OTHER_SCHOOL;

/// Household structure declared on the first step of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilySituation {
    SingleParent,
    TwoParents,
    AlternatingCustody,
}

impl FamilySituation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleParent => "Single parent",
            Self::TwoParents => "Parents together",
            Self::AlternatingCustody => "Alternating custody",
        }
    }
}

/// Declared status exempting the household from income collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCircumstance {
    AsylumSeeker,
    SocialDifficulty,
    None,
}

impl SpecialCircumstance {
    /// True for asylum seekers and households followed by social services.
    pub const fn is_declared(self) -> bool {
        !matches!(self, Self::None)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AsylumSeeker => "Asylum seeker",
            Self::SocialDifficulty => "Social difficulty (followed by social services)",
            Self::None => "No special circumstance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub region: String,
    pub family_situation: FamilySituation,
    pub special_circumstance: SpecialCircumstance,
    #[serde(default)]
    pub annual_income: Option<f64>,
    #[serde(default)]
    pub fiscal_shares: Option<f64>,
}

impl Household {
    /// Monthly family quotient used by the income-gated benefits.
    ///
    /// Households with a declared special circumstance are never asked for
    /// their income, so their quotient is always 0.
    pub fn monthly_quotient(&self) -> u32 {
        if self.special_circumstance.is_declared() {
            return 0;
        }
        compute_monthly_quotient(self.annual_income, self.fiscal_shares)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolingLevel {
    Secondary,
    UpperSecondary,
    Other,
}

impl SchoolingLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Secondary => "Secondary school (collège)",
            Self::UpperSecondary => "Upper secondary school (lycée)",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ScholarshipTier {
    One,
    Two,
    Three,
}

impl TryFrom<u8> for ScholarshipTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(format!("scholarship tier must be 1, 2 or 3 (found {other})")),
        }
    }
}

impl From<ScholarshipTier> for u8 {
    fn from(value: ScholarshipTier) -> Self {
        match value {
            ScholarshipTier::One => 1,
            ScholarshipTier::Two => 2,
            ScholarshipTier::Three => 3,
        }
    }
}

/// Answers collected for one child of the household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    #[serde(default)]
    pub number: u8,
    #[serde(default = "resides_with_guardian_default")]
    pub resides_with_guardian: bool,
    #[serde(default)]
    pub residence_region: Option<String>,
    #[serde(default)]
    pub schooling_level: Option<SchoolingLevel>,
    /// Approved school id, or [`OTHER_SCHOOL`] for any other establishment.
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub schooling_region: Option<String>,
    #[serde(default)]
    pub eats_at_listed_cafeteria: Option<bool>,
    #[serde(default)]
    pub cafeteria_school: Option<String>,
    #[serde(default)]
    pub scholarship_recipient: bool,
    #[serde(default)]
    pub scholarship_tier: Option<ScholarshipTier>,
    #[serde(default)]
    pub under_welfare_care: bool,
    #[serde(default)]
    pub wants_transit_pass: bool,
}

fn resides_with_guardian_default() -> bool {
    true
}

impl Child {
    /// Unanswered child record, living with the guardian by default.
    pub fn blank(number: u8) -> Self {
        Self {
            number,
            resides_with_guardian: true,
            residence_region: None,
            schooling_level: None,
            school: None,
            schooling_region: None,
            eats_at_listed_cafeteria: None,
            cafeteria_school: None,
            scholarship_recipient: false,
            scholarship_tier: None,
            under_welfare_care: false,
            wants_transit_pass: false,
        }
    }

    pub fn is_secondary_student(&self) -> bool {
        self.schooling_level == Some(SchoolingLevel::Secondary)
    }

    pub fn attends_other_school(&self) -> bool {
        self.school.as_deref() == Some(OTHER_SCHOOL)
    }
}
