//! Household questionnaire, benefit evaluation and the resulting report.

pub mod documents;
pub mod domain;
pub mod eligibility;
pub mod import;
pub mod intake;
pub mod quotient;
pub mod report;
pub mod session;
pub mod updates;

#[cfg(test)]
mod tests;

pub use documents::{
    group_by_category, resolve_document_requirements, DocumentCategory, DocumentKind,
    DocumentOption, DocumentRequirement,
};
pub use domain::{
    Child, FamilySituation, Household, ScholarshipTier, SchoolingLevel, SpecialCircumstance,
};
pub use eligibility::{
    evaluate_all_benefits, AggregateResult, BenefitKind, BenefitVerdict, Criterion,
    EligibilityEngine, EligibilityPolicy, IneligibilityReason,
};
pub use import::{ChildCsvImporter, ImportError};
pub use intake::{validate_child, validate_child_count, validate_household, IntakeViolation};
pub use quotient::{compute_meal_tariff, compute_monthly_quotient, MealTariffSchedule};
pub use report::{simulate, ChildOutcome, SimulationReport};
pub use session::{SessionError, SimulationSession, Step, MAX_CHILDREN};
pub use updates::{ChildChange, HouseholdChange};
