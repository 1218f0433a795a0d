use crate::infra::{bootstrap, evaluation_date};
use crate::render::render_report;
use chrono::NaiveDate;
use clap::Args;
use pass_plus::error::AppError;
use pass_plus::simulation::{
    simulate, validate_child, validate_child_count, validate_household, Child, ChildCsvImporter,
    EligibilityPolicy, Household, SimulationReport,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// JSON request holding the household answers and its children
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// CSV export with one child per row; replaces the children of the request
    #[arg(long)]
    pub(crate) children_csv: Option<PathBuf>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulationRequest {
    pub(crate) household: Household,
    #[serde(default)]
    pub(crate) children: Vec<Child>,
}

impl SimulationRequest {
    pub(crate) fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }
}

pub(crate) fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let SimulateArgs {
        input,
        children_csv,
        json,
        today,
    } = args;

    let config = bootstrap()?;
    let request = SimulationRequest::from_json(&std::fs::read_to_string(input)?)?;
    let children = match children_csv {
        Some(path) => ChildCsvImporter::from_path(path, &config.policy)?,
        None => request.children,
    };

    let report = build_report(
        &request.household,
        children,
        &config.policy,
        evaluation_date(today),
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&request.household, &report);
    }
    Ok(())
}

/// Numbers the children in request order, checks every answer and runs the simulation.
pub(crate) fn build_report(
    household: &Household,
    children: Vec<Child>,
    policy: &EligibilityPolicy,
    evaluated_on: NaiveDate,
) -> Result<SimulationReport, AppError> {
    validate_household(household)?;
    validate_child_count(children.len())?;

    let children = children
        .into_iter()
        .enumerate()
        .map(|(index, mut child)| {
            child.number = index as u8 + 1;
            validate_child(&child, policy).map(|()| child)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(simulate(household, &children, policy, evaluated_on))
}
