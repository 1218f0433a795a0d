//! Partial updates of household and child answers.
//!
//! Records are never patched in place: `apply` returns a new record and then
//! clears every field that depends on the changed one, as listed in
//! [`CHILD_RESETS`] and [`HOUSEHOLD_RESETS`]. Dependent answers therefore
//! never outlive the answer they were asked for.

use super::domain::{
    Child, FamilySituation, Household, ScholarshipTier, SchoolingLevel, SpecialCircumstance,
};
use crate::reference::OTHER_SCHOOL;

/// Entry of a reset table: when `changed` is written and `when` holds on the
/// updated record, every field in `clears` is reset.
pub struct ResetRule<R: 'static, F: 'static> {
    pub changed: F,
    pub when: fn(&R) -> bool,
    pub clears: &'static [F],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildField {
    ResidesWithGuardian,
    ResidenceRegion,
    SchoolingLevel,
    School,
    SchoolingRegion,
    EatsAtListedCafeteria,
    CafeteriaSchool,
    ScholarshipRecipient,
    ScholarshipTier,
    UnderWelfareCare,
    WantsTransitPass,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChildChange {
    ResidesWithGuardian(bool),
    ResidenceRegion(Option<String>),
    SchoolingLevel(Option<SchoolingLevel>),
    School(Option<String>),
    SchoolingRegion(Option<String>),
    EatsAtListedCafeteria(Option<bool>),
    CafeteriaSchool(Option<String>),
    ScholarshipRecipient(bool),
    ScholarshipTier(Option<ScholarshipTier>),
    UnderWelfareCare(bool),
    WantsTransitPass(bool),
}

impl ChildChange {
    pub fn field(&self) -> ChildField {
        match self {
            Self::ResidesWithGuardian(_) => ChildField::ResidesWithGuardian,
            Self::ResidenceRegion(_) => ChildField::ResidenceRegion,
            Self::SchoolingLevel(_) => ChildField::SchoolingLevel,
            Self::School(_) => ChildField::School,
            Self::SchoolingRegion(_) => ChildField::SchoolingRegion,
            Self::EatsAtListedCafeteria(_) => ChildField::EatsAtListedCafeteria,
            Self::CafeteriaSchool(_) => ChildField::CafeteriaSchool,
            Self::ScholarshipRecipient(_) => ChildField::ScholarshipRecipient,
            Self::ScholarshipTier(_) => ChildField::ScholarshipTier,
            Self::UnderWelfareCare(_) => ChildField::UnderWelfareCare,
            Self::WantsTransitPass(_) => ChildField::WantsTransitPass,
        }
    }
}

fn always<R>(_: &R) -> bool {
    true
}

fn school_is_listed_or_unset(child: &Child) -> bool {
    child.school.as_deref() != Some(OTHER_SCHOOL)
}

fn declined_listed_cafeteria(child: &Child) -> bool {
    child.eats_at_listed_cafeteria == Some(false)
}

fn lives_with_guardian(child: &Child) -> bool {
    child.resides_with_guardian
}

fn not_scholarship_recipient(child: &Child) -> bool {
    !child.scholarship_recipient
}

pub const CHILD_RESETS: &[ResetRule<Child, ChildField>] = &[
    ResetRule {
        changed: ChildField::School,
        when: always::<Child>,
        clears: &[ChildField::EatsAtListedCafeteria, ChildField::CafeteriaSchool],
    },
    ResetRule {
        changed: ChildField::School,
        when: school_is_listed_or_unset,
        clears: &[ChildField::SchoolingRegion],
    },
    ResetRule {
        changed: ChildField::EatsAtListedCafeteria,
        when: declined_listed_cafeteria,
        clears: &[ChildField::CafeteriaSchool],
    },
    ResetRule {
        changed: ChildField::ResidesWithGuardian,
        when: lives_with_guardian,
        clears: &[ChildField::ResidenceRegion],
    },
    ResetRule {
        changed: ChildField::ScholarshipRecipient,
        when: not_scholarship_recipient,
        clears: &[ChildField::ScholarshipTier],
    },
];

impl Child {
    /// Returns a copy with `changes` applied in order, each followed by its resets.
    pub fn apply<I>(&self, changes: I) -> Child
    where
        I: IntoIterator<Item = ChildChange>,
    {
        let mut updated = self.clone();
        for change in changes {
            let field = change.field();
            updated.write(change);
            for rule in CHILD_RESETS.iter().filter(|rule| rule.changed == field) {
                if (rule.when)(&updated) {
                    for cleared in rule.clears {
                        updated.clear(*cleared);
                    }
                }
            }
        }
        updated
    }

    fn write(&mut self, change: ChildChange) {
        match change {
            ChildChange::ResidesWithGuardian(value) => self.resides_with_guardian = value,
            ChildChange::ResidenceRegion(value) => self.residence_region = value,
            ChildChange::SchoolingLevel(value) => self.schooling_level = value,
            ChildChange::School(value) => self.school = value,
            ChildChange::SchoolingRegion(value) => self.schooling_region = value,
            ChildChange::EatsAtListedCafeteria(value) => self.eats_at_listed_cafeteria = value,
            ChildChange::CafeteriaSchool(value) => self.cafeteria_school = value,
            ChildChange::ScholarshipRecipient(value) => self.scholarship_recipient = value,
            ChildChange::ScholarshipTier(value) => self.scholarship_tier = value,
            ChildChange::UnderWelfareCare(value) => self.under_welfare_care = value,
            ChildChange::WantsTransitPass(value) => self.wants_transit_pass = value,
        }
    }

    fn clear(&mut self, field: ChildField) {
        let blank = Child::blank(self.number);
        match field {
            ChildField::ResidesWithGuardian => {
                self.resides_with_guardian = blank.resides_with_guardian
            }
            ChildField::ResidenceRegion => self.residence_region = None,
            ChildField::SchoolingLevel => self.schooling_level = None,
            ChildField::School => self.school = None,
            ChildField::SchoolingRegion => self.schooling_region = None,
            ChildField::EatsAtListedCafeteria => self.eats_at_listed_cafeteria = None,
            ChildField::CafeteriaSchool => self.cafeteria_school = None,
            ChildField::ScholarshipRecipient => {
                self.scholarship_recipient = blank.scholarship_recipient
            }
            ChildField::ScholarshipTier => self.scholarship_tier = None,
            ChildField::UnderWelfareCare => self.under_welfare_care = blank.under_welfare_care,
            ChildField::WantsTransitPass => self.wants_transit_pass = blank.wants_transit_pass,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseholdField {
    Region,
    FamilySituation,
    SpecialCircumstance,
    AnnualIncome,
    FiscalShares,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HouseholdChange {
    Region(String),
    FamilySituation(FamilySituation),
    SpecialCircumstance(SpecialCircumstance),
    AnnualIncome(Option<f64>),
    FiscalShares(Option<f64>),
}

impl HouseholdChange {
    pub fn field(&self) -> HouseholdField {
        match self {
            Self::Region(_) => HouseholdField::Region,
            Self::FamilySituation(_) => HouseholdField::FamilySituation,
            Self::SpecialCircumstance(_) => HouseholdField::SpecialCircumstance,
            Self::AnnualIncome(_) => HouseholdField::AnnualIncome,
            Self::FiscalShares(_) => HouseholdField::FiscalShares,
        }
    }
}

fn circumstance_declared(household: &Household) -> bool {
    household.special_circumstance.is_declared()
}

pub const HOUSEHOLD_RESETS: &[ResetRule<Household, HouseholdField>] = &[ResetRule {
    changed: HouseholdField::SpecialCircumstance,
    when: circumstance_declared,
    clears: &[HouseholdField::AnnualIncome, HouseholdField::FiscalShares],
}];

impl Household {
    /// Returns a copy with `changes` applied in order, each followed by its resets.
    pub fn apply<I>(&self, changes: I) -> Household
    where
        I: IntoIterator<Item = HouseholdChange>,
    {
        let mut updated = self.clone();
        for change in changes {
            let field = change.field();
            match change {
                HouseholdChange::Region(value) => updated.region = value,
                HouseholdChange::FamilySituation(value) => updated.family_situation = value,
                HouseholdChange::SpecialCircumstance(value) => {
                    updated.special_circumstance = value
                }
                HouseholdChange::AnnualIncome(value) => updated.annual_income = value,
                HouseholdChange::FiscalShares(value) => updated.fiscal_shares = value,
            }
            for rule in HOUSEHOLD_RESETS.iter().filter(|rule| rule.changed == field) {
                if (rule.when)(&updated) {
                    for cleared in rule.clears {
                        match cleared {
                            HouseholdField::AnnualIncome => updated.annual_income = None,
                            HouseholdField::FiscalShares => updated.fiscal_shares = None,
                            HouseholdField::Region
                            | HouseholdField::FamilySituation
                            | HouseholdField::SpecialCircumstance => {}
                        }
                    }
                }
            }
        }
        updated
    }
}
