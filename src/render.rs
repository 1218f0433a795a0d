use pass_plus::reference::region_by_code;
use pass_plus::simulation::report::ChildOutcomeView;
use pass_plus::simulation::{Household, SimulationReport};

pub(crate) fn render_report(household: &Household, report: &SimulationReport) {
    let summary = report.summary();

    println!("Pass+ simulation (evaluated {})", summary.evaluated_on);
    let region = region_by_code(&household.region)
        .map(|region| format!("{} ({})", region.code, region.name))
        .unwrap_or_else(|| household.region.clone());
    println!(
        "Household: {} | {} | {}",
        region,
        household.family_situation.label(),
        household.special_circumstance.label()
    );
    println!("Monthly family quotient: {}", summary.quotient_label);
    println!(
        "Eligible children: {}/{} | direct aid total: {} | transit reimbursements: {}",
        summary.eligible_children,
        summary.total_children,
        summary.total_amount_label,
        summary.transit_reimbursements
    );

    for child in &summary.children {
        render_child(child);
    }
}

fn render_child(child: &ChildOutcomeView) {
    println!("\nChild {}: {}", child.number, child.status_label);

    println!("Benefits");
    for benefit in &child.benefits {
        let marker = if benefit.eligible { "x" } else { " " };
        let detail = match (&benefit.amount_label, &benefit.meal_tariff_label, &benefit.reason) {
            (Some(amount), _, _) => amount.clone(),
            (None, Some(tariff), _) => format!("{tariff} per meal"),
            (None, None, Some(reason)) => reason.clone(),
            (None, None, None) => "eligible".to_string(),
        };
        println!("- [{}] {}: {}", marker, benefit.title, detail);
        for criterion in &benefit.criteria {
            println!("      {criterion}");
        }
    }

    if child.document_groups.is_empty() {
        return;
    }
    println!("Documents to provide");
    for group in &child.document_groups {
        println!("  {}", group.category_label);
        for document in &group.documents {
            match document.name {
                Some(name) => println!("  - {name}"),
                None => {
                    println!("  - One of:");
                    for option in &document.options {
                        println!("      {}: {}", option.label, option.documents.join("; "));
                    }
                }
            }
        }
    }
}
