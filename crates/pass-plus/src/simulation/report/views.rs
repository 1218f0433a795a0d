use crate::simulation::documents::{DocumentCategory, DocumentRequirement};
use crate::simulation::eligibility::BenefitKind;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub evaluated_on: NaiveDate,
    pub quotient: u32,
    pub quotient_label: String,
    pub eligible_children: usize,
    pub total_children: usize,
    pub total_amount: u32,
    pub total_amount_label: String,
    pub transit_reimbursements: usize,
    pub children: Vec<ChildOutcomeView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChildOutcomeView {
    pub number: u8,
    pub eligible: bool,
    pub status_label: String,
    pub benefits: Vec<BenefitView>,
    pub document_groups: Vec<DocumentGroupView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenefitView {
    pub kind: BenefitKind,
    pub title: &'static str,
    pub eligible: bool,
    pub amount_label: Option<String>,
    pub meal_tariff_label: Option<String>,
    pub criteria: Vec<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentGroupView {
    pub category: DocumentCategory,
    pub category_label: &'static str,
    pub documents: Vec<DocumentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub id: &'static str,
    pub name: Option<&'static str>,
    pub options: Vec<DocumentOptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentOptionView {
    pub label: &'static str,
    pub documents: Vec<&'static str>,
}

impl From<&DocumentRequirement> for DocumentView {
    fn from(requirement: &DocumentRequirement) -> Self {
        match requirement {
            DocumentRequirement::Document { kind, name, .. } => DocumentView {
                id: kind.id(),
                name: Some(*name),
                options: Vec::new(),
            },
            DocumentRequirement::Alternatives { id, options, .. } => DocumentView {
                id: *id,
                name: None,
                options: options
                    .iter()
                    .map(|option| DocumentOptionView {
                        label: option.label,
                        documents: option.documents.clone(),
                    })
                    .collect(),
            },
        }
    }
}

/// Whole euro amount, e.g. `80 €`.
pub fn format_euros(amount: u32) -> String {
    format!("{amount} €")
}

/// Price with cents and a French decimal comma, e.g. `3,30 €`.
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{sign}{},{:02} €", cents / 100, cents % 100)
}
