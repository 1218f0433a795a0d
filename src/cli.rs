use crate::demo::{run_demo, DemoArgs};
use crate::simulate::{run_simulation, SimulateArgs};
use clap::{Parser, Subcommand};
use pass_plus::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Pass+ simulator",
    about = "Simulate Pass+ benefits for a household and its secondary-school children",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a household described in a JSON request file
    Simulate(SimulateArgs),
    /// Walk through the questionnaire with a sample household (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Simulate(args) => run_simulation(args),
        Command::Demo(args) => run_demo(args),
    }
}
