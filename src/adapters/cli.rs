use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::time::Duration;

use crate::chemistry::Ion;
use crate::error::AppError;
use crate::models::BrewConfig;
use crate::solver::search::Solution;

#[derive(Parser, Debug)]
#[command(author, version, about = "Brewing-water salt calculator — exhaustive search toward a target ion profile", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON config with base profile and target grid; '-' reads from stdin"
    )]
    config: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON config (overrides --config)"
    )]
    config_json: Option<String>,
    #[arg(
        long,
        value_name = "GALLONS",
        help = "Batch volume in US gallons (overrides the config value)"
    )]
    gallons: Option<f64>,
}

fn parse_config_doc(doc: &str) -> Result<BrewConfig, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseConfigDoc { source })
}

pub fn parse_config(args: &Args) -> Result<BrewConfig, AppError> {
    let mut config = match (&args.config_json, &args.config) {
        (Some(inline), _) => serde_json::from_str(inline)
            .map_err(|source| AppError::ParseConfigJson { source })?,
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_config_doc(&s)?
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_config_doc(&s)?
        }
        (None, None) => BrewConfig::default(),
    };

    if let Some(gallons) = args.gallons {
        config.gallons = gallons;
    }

    Ok(config)
}

fn fmt_ppm(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Three-row comparison table (Initial / Target / Final) across the six
/// ions, with columns padded to fit their widest entry.
fn render_profile_table(solution: &Solution) -> String {
    let headers: Vec<&str> = Ion::ALL.iter().map(|ion| ion.name()).collect();
    let rows = [
        ("Initial", solution.initial.values()),
        ("Target", solution.target.values()),
        ("Final", solution.adjusted.values()),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|(_, values)| fmt_ppm(values[i]).len())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for (header, &width) in headers.iter().zip(&widths) {
        out.push_str(&format!("  {header:>width$}"));
    }
    out.push('\n');
    for (label, values) in rows {
        out.push_str(&format!("{label:<label_width$}"));
        for (&value, &width) in values.iter().zip(&widths) {
            let cell = fmt_ppm(value);
            out.push_str(&format!("  {cell:>width$}"));
        }
        out.push('\n');
    }
    out
}

pub fn print_output(solution: &Solution, elapsed: Duration, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(solution)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    println!(
        "Checked {} candidates ({} ion evaluations) in {:.3} seconds",
        solution.candidates,
        solution.evaluations,
        elapsed.as_secs_f64()
    );
    println!();
    println!(
        "Optimal additions for {} gallons ({} liters):",
        fmt_ppm(solution.gallons),
        fmt_ppm(solution.liters)
    );
    let mut any = false;
    for addition in solution.nonzero_additions() {
        println!("  {}: {} grams", addition.chemical, addition.grams);
        any = true;
    }
    if !any {
        println!("  (none — base water already meets the target)");
    }
    println!();
    print!("{}", render_profile_table(solution));

    Ok(())
}
