//! Carepoint symptom assessment: command-line front end
//!
//! Runs the assessment engine against the builtin condition catalog or a
//! catalog file supplied with `--catalog`.
//!
//! Usage:
//!   cargo run -p carepoint-cli -- assess -s Headache -s Nausea --severity severe --duration "1 day"
//!   cargo run -p carepoint-cli -- assess -s "Chest Pain" -s "Shortness of Breath" --json
//!   cargo run -p carepoint-cli -- catalog
//!   cargo run -p carepoint-cli -- check my-catalog.toml
//!   cargo run -p carepoint-cli -- options
//!   cargo run -p carepoint-cli -- scenarios

mod report;
mod scenarios;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use carepoint_catalog::{TomlCatalog, CANONICAL_SYMPTOMS};
use carepoint_contracts::{
    AssessmentRequest, CarepointError, CarepointResult, DurationBucket, Severity, DISCLAIMER,
};
use carepoint_core::{Assessor, ConditionCatalog};

use crate::report::AssessmentReport;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Carepoint: symptom-to-condition assessment.
///
/// Suggests up to three possible conditions for a set of symptoms, with a
/// confidence band for each and an urgency advisory. Not a diagnosis.
#[derive(Parser)]
#[command(
    name = "carepoint",
    about = "Carepoint symptom assessment engine",
    long_about = "Scores reported symptoms against a condition catalog and suggests\n\
                  up to three possible conditions with confidence and urgency."
)]
struct Cli {
    /// Condition catalog TOML file. Defaults to the builtin catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess a set of symptoms.
    Assess {
        /// A symptom, either a canonical label or free text. Repeatable.
        #[arg(short = 's', long = "symptom")]
        symptoms: Vec<String>,
        /// mild, moderate, severe or extreme.
        #[arg(long, value_parser = parse_severity)]
        severity: Option<Severity>,
        /// "A few hours", "1 day", "2-7 days", "1-4 weeks" or "More than a month".
        #[arg(long, value_parser = parse_duration)]
        duration: Option<DurationBucket>,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the conditions in the catalog.
    Catalog,
    /// Validate a catalog file and exit non-zero if it is invalid.
    Check {
        /// Catalog TOML file to validate.
        path: PathBuf,
    },
    /// List the symptom chips, severities, and durations callers can offer.
    Options,
    /// Run the reference scenarios against the catalog.
    Scenarios,
}

fn parse_severity(s: &str) -> Result<Severity, CarepointError> {
    s.parse()
}

fn parse_duration(s: &str) -> Result<DurationBucket, CarepointError> {
    s.parse()
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Initialize structured logging.  Set RUST_LOG=debug for per-condition scores.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Ok(false) means the command ran but reported failures of its own.
    let result: CarepointResult<bool> = match cli.command {
        Command::Assess {
            symptoms,
            severity,
            duration,
            json,
        } => run_assess(
            cli.catalog.as_deref(),
            AssessmentRequest {
                symptoms,
                severity,
                duration,
            },
            json,
        )
        .map(|()| true),
        Command::Catalog => run_catalog(cli.catalog.as_deref()).map(|()| true),
        Command::Check { path } => run_check(&path).map(|()| true),
        Command::Options => {
            run_options();
            Ok(true)
        }
        Command::Scenarios => run_scenarios(cli.catalog.as_deref()),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("carepoint: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_catalog(path: Option<&Path>) -> CarepointResult<TomlCatalog> {
    match path {
        Some(path) => TomlCatalog::from_file(path),
        None => TomlCatalog::builtin(),
    }
}

fn load_assessor(path: Option<&Path>) -> CarepointResult<Assessor> {
    Assessor::new(Arc::new(load_catalog(path)?))
}

fn run_assess(catalog: Option<&Path>, request: AssessmentRequest, json: bool) -> CarepointResult<()> {
    let assessor = load_assessor(catalog)?;
    let result = assessor.assess(&request);
    let report = AssessmentReport::new(request, result);

    info!(
        assessment_id = %report.assessment_id,
        candidates = report.result.conditions.len(),
        overall_urgent = report.result.overall_urgent,
        "assessment reported"
    );

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).map_err(|e| CarepointError::Serialization {
                reason: format!("failed to serialize report: {}", e),
            })?;
        println!("{}", rendered);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

fn run_catalog(catalog: Option<&Path>) -> CarepointResult<()> {
    let catalog = load_catalog(catalog)?;

    println!("{} conditions", catalog.len());
    println!();
    for def in catalog.conditions() {
        let urgent = if def.is_urgent { "  [URGENT]" } else { "" };
        println!("{} (min match {}){}", def.name, def.min_match, urgent);
        println!("  primary:   {}", def.primary_symptoms.join(", "));
        if !def.secondary_symptoms.is_empty() {
            println!("  secondary: {}", def.secondary_symptoms.join(", "));
        }
        if let Some(required) = &def.required_severity {
            let labels: Vec<&str> = required.iter().map(|s| s.as_str()).collect();
            println!("  severity:  {}", labels.join(", "));
        }
    }
    Ok(())
}

fn run_check(path: &Path) -> CarepointResult<()> {
    let catalog = TomlCatalog::from_file(path)?;
    println!("{}: OK ({} conditions)", path.display(), catalog.len());
    Ok(())
}

fn run_options() {
    println!("Symptoms:");
    for symptom in CANONICAL_SYMPTOMS {
        println!("  {}", symptom);
    }
    println!();
    println!("Severity:");
    for severity in Severity::ALL {
        println!("  {:<9} {}", severity.as_str(), severity.description());
    }
    println!();
    println!("Duration:");
    for duration in DurationBucket::ALL {
        println!("  {}", duration.label());
    }
    println!();
    println!("{}", DISCLAIMER);
}

/// Returns `Ok(false)` when at least one scenario failed.
fn run_scenarios(catalog: Option<&Path>) -> CarepointResult<bool> {
    let assessor = load_assessor(catalog)?;
    let outcomes = scenarios::run(&assessor);

    let mut failed = 0;
    for outcome in &outcomes {
        let names: Vec<&str> = outcome.result.conditions.iter().map(|c| c.name.as_str()).collect();
        match &outcome.verdict {
            Ok(()) => println!("[PASS] {}", outcome.title),
            Err(reason) => {
                failed += 1;
                println!("[FAIL] {}: {}", outcome.title, reason);
            }
        }
        println!(
            "       -> {:?}{}",
            names,
            if outcome.result.overall_urgent { " (urgent)" } else { "" }
        );
    }

    println!();
    println!("{} of {} scenarios passed", outcomes.len() - failed, outcomes.len());

    Ok(failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assess_arguments_parse_into_request_fields() {
        let cli = Cli::try_parse_from([
            "carepoint",
            "assess",
            "-s",
            "Headache",
            "--symptom",
            "Nausea",
            "--severity",
            "Severe",
            "--duration",
            "1 day",
        ])
        .unwrap();

        match cli.command {
            Command::Assess {
                symptoms,
                severity,
                duration,
                json,
            } => {
                assert_eq!(symptoms, vec!["Headache".to_string(), "Nausea".to_string()]);
                assert_eq!(severity, Some(Severity::Severe));
                assert_eq!(duration, Some(DurationBucket::OneDay));
                assert!(!json);
            }
            _ => panic!("expected the assess subcommand"),
        }
    }

    #[test]
    fn unknown_severity_is_rejected_by_the_parser() {
        let parsed = Cli::try_parse_from(["carepoint", "assess", "--severity", "terrible"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn catalog_flag_is_global() {
        let cli = Cli::try_parse_from(["carepoint", "scenarios", "--catalog", "custom.toml"])
            .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn builtin_assessor_loads() {
        assert!(load_assessor(None).is_ok());
    }
}
