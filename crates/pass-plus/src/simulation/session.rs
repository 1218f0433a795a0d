//! Step-by-step questionnaire state: household, number of children, one
//! form per child, then results.

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Child, Household};
use super::eligibility::EligibilityPolicy;
use super::intake::{validate_child, validate_household, IntakeViolation};
use super::report::{simulate, SimulationReport};
use super::updates::{ChildChange, HouseholdChange};

pub const MAX_CHILDREN: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Household,
    ChildCount,
    Children,
    Results,
}

impl Step {
    pub const fn label(self) -> &'static str {
        match self {
            Step::Household => "Household",
            Step::ChildCount => "Number of children",
            Step::Children => "Children",
            Step::Results => "Results",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("household answers are missing")]
    MissingHousehold,
    #[error("child index {index} is out of range ({count} children)")]
    ChildOutOfRange { index: usize, count: usize },
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}

#[derive(Debug, Clone)]
pub struct SimulationSession {
    policy: EligibilityPolicy,
    evaluated_on: NaiveDate,
    step: Step,
    household: Option<Household>,
    child_count: u8,
    children: Vec<Child>,
    current_child: usize,
    results: Option<SimulationReport>,
}

impl SimulationSession {
    pub fn new(policy: EligibilityPolicy, evaluated_on: NaiveDate) -> Self {
        Self {
            policy,
            evaluated_on,
            step: Step::Household,
            household: None,
            child_count: 1,
            children: Vec::new(),
            current_child: 0,
            results: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn household(&self) -> Option<&Household> {
        self.household.as_ref()
    }

    pub fn child_count(&self) -> u8 {
        self.child_count
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn current_child_index(&self) -> usize {
        self.current_child
    }

    pub fn current_child(&self) -> Option<&Child> {
        self.children.get(self.current_child)
    }

    pub fn results(&self) -> Option<&SimulationReport> {
        self.results.as_ref()
    }

    pub fn answer_household(&mut self, household: Household) {
        self.household = Some(household);
    }

    pub fn amend_household<I>(&mut self, changes: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = HouseholdChange>,
    {
        let household = self.household.as_ref().ok_or(SessionError::MissingHousehold)?;
        self.household = Some(household.apply(changes));
        Ok(())
    }

    /// Resizes the child list to `count` (clamped to 1..=[`MAX_CHILDREN`]),
    /// keeping the answers already given.
    pub fn set_child_count(&mut self, count: u8) {
        self.child_count = count.clamp(1, MAX_CHILDREN);
        self.sync_children();
    }

    pub fn update_child<I>(&mut self, index: usize, changes: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = ChildChange>,
    {
        let count = self.children.len();
        let child = self
            .children
            .get_mut(index)
            .ok_or(SessionError::ChildOutOfRange { index, count })?;
        *child = child.apply(changes);
        Ok(())
    }

    /// Moves forward, refusing to leave a step whose answers are incomplete.
    pub fn next(&mut self) -> Result<Step, SessionError> {
        match self.step {
            Step::Household => {
                let household = self.household.as_ref().ok_or(SessionError::MissingHousehold)?;
                validate_household(household)?;
                self.step = Step::ChildCount;
            }
            Step::ChildCount => {
                self.sync_children();
                self.enter_children();
            }
            Step::Children => {
                if let Some(child) = self.children.get(self.current_child) {
                    validate_child(child, &self.policy)?;
                }
                if self.current_child + 1 < usize::from(self.child_count) {
                    self.current_child += 1;
                } else {
                    let household = self.household.as_ref().ok_or(SessionError::MissingHousehold)?;
                    self.results = Some(simulate(
                        household,
                        &self.children,
                        &self.policy,
                        self.evaluated_on,
                    ));
                    self.step = Step::Results;
                }
            }
            Step::Results => {}
        }
        Ok(self.step)
    }

    pub fn previous(&mut self) -> Step {
        match self.step {
            Step::Results => {
                self.results = None;
                self.enter_children();
            }
            Step::Children if self.current_child > 0 => self.current_child -= 1,
            Step::Children => self.step = Step::ChildCount,
            Step::ChildCount => self.step = Step::Household,
            Step::Household => {}
        }
        self.step
    }

    /// Progress through the questionnaire on a 1 to 4 scale.
    pub fn progress(&self) -> f64 {
        match self.step {
            Step::Household => 1.0,
            Step::ChildCount => 2.0,
            Step::Children => {
                3.0 + (self.current_child as f64 / f64::from(self.child_count)) * 0.9
            }
            Step::Results => 4.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.policy.clone(), self.evaluated_on);
    }

    fn enter_children(&mut self) {
        self.step = Step::Children;
        self.current_child = 0;
    }

    fn sync_children(&mut self) {
        let count = usize::from(self.child_count);
        self.children.truncate(count);
        while self.children.len() < count {
            let number = self.children.len() as u8 + 1;
            self.children.push(Child::blank(number));
        }
    }
}
