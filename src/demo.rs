use crate::infra::{bootstrap, evaluation_date};
use crate::render::render_report;
use chrono::NaiveDate;
use clap::Args;
use pass_plus::error::AppError;
use pass_plus::simulation::{
    ChildChange, EligibilityPolicy, FamilySituation, Household, SchoolingLevel, SessionError,
    SimulationSession, SpecialCircumstance, Step,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let household = demo_household();

    println!("Pass+ questionnaire demo");
    let session = match walk_questionnaire(config.policy, evaluation_date(args.today)) {
        Ok(session) => session,
        Err(err) => {
            println!("  Questionnaire stopped: {}", err);
            return Ok(());
        }
    };
    let Some(report) = session.results() else {
        println!("  Questionnaire ended without results");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        render_report(&household, report);
    }
    Ok(())
}

fn demo_household() -> Household {
    Household {
        region: "92".to_string(),
        family_situation: FamilySituation::SingleParent,
        special_circumstance: SpecialCircumstance::None,
        annual_income: Some(24_000.0),
        fiscal_shares: Some(2.0),
    }
}

/// Answers every step the way a single parent with one pupil at an approved school would.
fn walk_questionnaire(
    policy: EligibilityPolicy,
    evaluated_on: NaiveDate,
) -> Result<SimulationSession, SessionError> {
    let mut session = SimulationSession::new(policy, evaluated_on);

    session.answer_household(demo_household());
    announce(&session);
    session.next()?;

    session.set_child_count(1);
    announce(&session);
    session.next()?;

    announce(&session);
    session.update_child(
        0,
        [
            ChildChange::SchoolingLevel(Some(SchoolingLevel::Secondary)),
            ChildChange::School(Some("college-1".to_string())),
        ],
    )?;
    while session.next()? != Step::Results {}

    announce(&session);
    Ok(session)
}

fn announce(session: &SimulationSession) {
    println!(
        "- step {:.2}/4: {}",
        session.progress(),
        session.step().label()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_reaches_results() {
        let evaluated_on = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
        let session = walk_questionnaire(EligibilityPolicy::default(), evaluated_on)
            .expect("demo completes");
        let report = session.results().expect("results computed");

        assert_eq!(report.quotient, 1000);
        assert_eq!(report.total_amount, 80);
        let cafeteria = &report.children[0].benefits.cafeteria_reduction;
        assert_eq!(cafeteria.meal_tariff(), Some(3.3));
        assert_eq!(report.children[0].documents.len(), 2);
    }
}
