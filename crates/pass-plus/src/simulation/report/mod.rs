mod summary;
pub mod views;

pub use summary::{simulate, ChildOutcome, SimulationReport};
pub use views::{
    format_euros, format_price, BenefitView, ChildOutcomeView, DocumentGroupView, DocumentView,
    SimulationSummary,
};
