mod config;
mod rules;
mod verdict;

pub use config::EligibilityPolicy;
pub use rules::{
    eats_at_listed_cafeteria, is_secondary_student, resides_in_target_region,
    schooled_in_target_region,
};
pub use verdict::{BenefitVerdict, Criterion, IneligibilityReason};

pub(crate) use rules::attends_approved_school;

use super::domain::{Child, Household};
use rules::RuleInputs;
use serde::{Deserialize, Serialize};

/// The five Pass+ benefits, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    DirectFinancialAid,
    ScholarshipBonus,
    CafeteriaReduction,
    TransitReimbursement,
    ComputerDonation,
}

impl BenefitKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::DirectFinancialAid,
            Self::ScholarshipBonus,
            Self::CafeteriaReduction,
            Self::TransitReimbursement,
            Self::ComputerDonation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DirectFinancialAid => "Pass+ financial aid",
            Self::ScholarshipBonus => "Scholarship / ASE bonus",
            Self::CafeteriaReduction => "School cafeteria tariff reduction",
            Self::TransitReimbursement => "Transit pass reimbursement",
            Self::ComputerDonation => "Computer donation",
        }
    }
}

/// Stateless evaluator applying the programme policy to one child at a time.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    policy: EligibilityPolicy,
}

impl EligibilityEngine {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    pub fn evaluate(
        &self,
        child: &Child,
        household: &Household,
        quotient: u32,
    ) -> AggregateResult {
        let inputs = RuleInputs {
            child,
            household,
            quotient,
            policy: &self.policy,
        };

        let direct_aid = rules::direct_financial_aid(&inputs);
        let scholarship_bonus = rules::scholarship_bonus(&inputs, &direct_aid);
        let cafeteria_reduction = rules::cafeteria_reduction(&inputs);
        let transit_reimbursement = rules::transit_reimbursement(&inputs);
        let computer_donation = rules::computer_donation(&inputs);

        AggregateResult::new(
            direct_aid,
            scholarship_bonus,
            cafeteria_reduction,
            transit_reimbursement,
            computer_donation,
        )
    }
}

/// Evaluates the five benefits under the default programme policy.
pub fn evaluate_all_benefits(
    child: &Child,
    household: &Household,
    quotient: u32,
) -> AggregateResult {
    EligibilityEngine::default().evaluate(child, household, quotient)
}

/// Per-child verdicts plus the monetary total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub direct_aid: BenefitVerdict,
    pub scholarship_bonus: BenefitVerdict,
    pub cafeteria_reduction: BenefitVerdict,
    pub transit_reimbursement: BenefitVerdict,
    pub computer_donation: BenefitVerdict,
    pub total_amount: u32,
    pub at_least_one_eligible: bool,
}

impl AggregateResult {
    fn new(
        direct_aid: BenefitVerdict,
        scholarship_bonus: BenefitVerdict,
        cafeteria_reduction: BenefitVerdict,
        transit_reimbursement: BenefitVerdict,
        computer_donation: BenefitVerdict,
    ) -> Self {
        // Only the two cash benefits contribute to the total.
        let total_amount =
            direct_aid.amount().unwrap_or(0) + scholarship_bonus.amount().unwrap_or(0);
        let at_least_one_eligible = [
            &direct_aid,
            &scholarship_bonus,
            &cafeteria_reduction,
            &transit_reimbursement,
            &computer_donation,
        ]
        .iter()
        .any(|verdict| verdict.is_eligible());

        Self {
            direct_aid,
            scholarship_bonus,
            cafeteria_reduction,
            transit_reimbursement,
            computer_donation,
            total_amount,
            at_least_one_eligible,
        }
    }

    pub fn verdict(&self, kind: BenefitKind) -> &BenefitVerdict {
        match kind {
            BenefitKind::DirectFinancialAid => &self.direct_aid,
            BenefitKind::ScholarshipBonus => &self.scholarship_bonus,
            BenefitKind::CafeteriaReduction => &self.cafeteria_reduction,
            BenefitKind::TransitReimbursement => &self.transit_reimbursement,
            BenefitKind::ComputerDonation => &self.computer_donation,
        }
    }

    pub fn verdicts(&self) -> impl Iterator<Item = (BenefitKind, &BenefitVerdict)> + '_ {
        BenefitKind::ordered()
            .into_iter()
            .map(move |kind| (kind, self.verdict(kind)))
    }

    pub fn eligible_kinds(&self) -> Vec<BenefitKind> {
        self.verdicts()
            .filter(|(_, verdict)| verdict.is_eligible())
            .map(|(kind, _)| kind)
            .collect()
    }
}
