mod cli;
mod demo;
mod infra;
mod render;
mod simulate;

use pass_plus::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
