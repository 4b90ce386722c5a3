//! crondiff: compare two cron job files.
//!
//! Loads a production and a development job file, pairs their jobs by name
//! (falling back to command text to spot renames) and prints the differences
//! as a table or as JSON.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crondiff_core::{Side, compare};
use crondiff_load::{DuplicatePolicy, load_jobs};
use crondiff_report::SideLabels;

mod config;

use config::{ColorChoice, Options, OutputFormat};

/// Parse boolean from environment variable, accepting common truthy values.
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// Accepts "0", "false", "no", "off", "" (case-insensitive) as false.
fn parse_bool_env(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(format!(
            "invalid boolean value '{}', expected 1/true/yes/on or 0/false/no/off",
            s
        )),
    }
}

#[derive(Parser)]
#[command(name = "crondiff", version)]
#[command(about = "Compare production and development cron job files", long_about = None)]
struct Cli {
    /// Production job file (YAML with a `cronjobs` list)
    #[arg(value_name = "PRODUCTION")]
    production: PathBuf,

    /// Development job file (YAML with a `cronjobs` list)
    #[arg(value_name = "DEVELOPMENT")]
    development: PathBuf,

    /// Output differences in JSON format
    #[arg(long, env = "CRONDIFF_JSON", value_parser = parse_bool_env, default_value = "false")]
    json: bool,

    /// When to color the table output
    #[arg(long, value_enum, env = "CRONDIFF_COLOR", default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Fail when a file defines the same job name twice, instead of comparing the last one
    #[arg(long, env = "CRONDIFF_STRICT", value_parser = parse_bool_env, default_value = "false")]
    strict: bool,

    /// Name shown for the production side
    #[arg(long, default_value = "production")]
    production_label: String,

    /// Name shown for the development side
    #[arg(long, default_value = "development")]
    development_label: String,

    /// Exit with status 1 when any difference is found
    #[arg(long)]
    fail_on_diff: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
            color: self.color,
            duplicates: if self.strict {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::LastWins
            },
            labels: SideLabels::new(&self.production_label, &self.development_label),
            fail_on_diff: self.fail_on_diff,
        }
    }
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "crondiff=warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let options = cli.options();
    if options.color == ColorChoice::Always {
        colored::control::set_override(true);
    }

    let production = load_jobs(&cli.production, options.duplicates).map_err(|e| {
        miette::miette!("error reading {} jobs: {}", options.labels.label(Side::A), e)
    })?;
    let development = load_jobs(&cli.development, options.duplicates).map_err(|e| {
        miette::miette!("error reading {} jobs: {}", options.labels.label(Side::B), e)
    })?;

    let differences = compare(&production, &development);
    info!(
        production = production.len(),
        development = development.len(),
        differences = differences.len(),
        "comparison finished"
    );

    let presenter = options.presenter(&cli.production, &cli.development);
    let mut stdout = io::stdout().lock();
    presenter
        .render(&differences, &mut stdout)
        .map_err(|e| miette::miette!("failed to write output: {}", e))?;

    if options.fail_on_diff && !differences.is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
