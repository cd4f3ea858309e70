#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_config, print_output};
    use crate::solver::search::solve;
    use std::time::Instant;

    let args = Args::parse();
    let config = parse_config(&args)?;

    let started = Instant::now();
    let solution = solve(&config)?;
    let elapsed = started.elapsed();

    print_output(&solution, elapsed, &args)?;

    Ok(())
}
