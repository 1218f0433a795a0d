use super::views::{
    format_euros, format_price, BenefitView, ChildOutcomeView, DocumentGroupView, DocumentView,
    SimulationSummary,
};
use crate::simulation::documents::{
    group_by_category, resolve_document_requirements, DocumentRequirement,
};
use crate::simulation::domain::{Child, Household};
use crate::simulation::eligibility::{AggregateResult, EligibilityEngine, EligibilityPolicy};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// Benefits and documents computed for one child.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildOutcome {
    pub number: u8,
    pub benefits: AggregateResult,
    pub documents: Vec<DocumentRequirement>,
}

/// Result of one simulation run over a household and its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub evaluated_on: NaiveDate,
    pub quotient: u32,
    pub children: Vec<ChildOutcome>,
    pub eligible_children: usize,
    pub total_amount: u32,
    pub transit_reimbursements: usize,
}

/// Computes the household quotient once, then evaluates every child.
pub fn simulate(
    household: &Household,
    children: &[Child],
    policy: &EligibilityPolicy,
    evaluated_on: NaiveDate,
) -> SimulationReport {
    let quotient = household.monthly_quotient();
    let engine = EligibilityEngine::new(policy.clone());

    let children: Vec<ChildOutcome> = children
        .iter()
        .map(|child| {
            let benefits = engine.evaluate(child, household, quotient);
            let documents = resolve_document_requirements(child, household, &benefits);
            debug!(
                child = child.number,
                eligible = ?benefits.eligible_kinds(),
                documents = documents.len(),
                "evaluated child"
            );
            ChildOutcome {
                number: child.number,
                benefits,
                documents,
            }
        })
        .collect();

    let eligible_children = children
        .iter()
        .filter(|outcome| outcome.benefits.at_least_one_eligible)
        .count();
    let total_amount = children
        .iter()
        .map(|outcome| outcome.benefits.total_amount)
        .sum();
    let transit_reimbursements = children
        .iter()
        .filter(|outcome| outcome.benefits.transit_reimbursement.is_eligible())
        .count();

    info!(
        quotient,
        children = children.len(),
        eligible_children,
        total_amount,
        "simulation completed"
    );

    SimulationReport {
        evaluated_on,
        quotient,
        children,
        eligible_children,
        total_amount,
        transit_reimbursements,
    }
}

impl SimulationReport {
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            evaluated_on: self.evaluated_on,
            quotient: self.quotient,
            quotient_label: format!("{} €", self.quotient),
            eligible_children: self.eligible_children,
            total_children: self.children.len(),
            total_amount: self.total_amount,
            total_amount_label: format_euros(self.total_amount),
            transit_reimbursements: self.transit_reimbursements,
            children: self.children.iter().map(ChildOutcome::to_view).collect(),
        }
    }
}

impl ChildOutcome {
    pub fn to_view(&self) -> ChildOutcomeView {
        let status_label = if !self.benefits.at_least_one_eligible {
            "Not eligible".to_string()
        } else if self.benefits.total_amount > 0 {
            format!("Eligible - {}", format_euros(self.benefits.total_amount))
        } else {
            "Eligible - benefits available".to_string()
        };

        let benefits = self
            .benefits
            .verdicts()
            .map(|(kind, verdict)| BenefitView {
                kind,
                title: kind.label(),
                eligible: verdict.is_eligible(),
                amount_label: verdict.amount().map(format_euros),
                meal_tariff_label: verdict.meal_tariff().map(format_price),
                criteria: verdict
                    .criteria()
                    .iter()
                    .map(|criterion| criterion.label())
                    .collect(),
                reason: verdict.reason().map(|reason| reason.summary()),
            })
            .collect();

        let document_groups = group_by_category(&self.documents)
            .into_iter()
            .map(|(category, requirements)| DocumentGroupView {
                category,
                category_label: category.label(),
                documents: requirements.into_iter().map(DocumentView::from).collect(),
            })
            .collect();

        ChildOutcomeView {
            number: self.number,
            eligible: self.benefits.at_least_one_eligible,
            status_label,
            benefits,
            document_groups,
        }
    }
}
