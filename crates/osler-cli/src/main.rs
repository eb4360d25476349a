//! Osler CLI - validate extracted claims against the hypothesis ledger.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use osler_validator::{run_validation, ReportMeta, ValidationConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Validate extracted claims against the hypothesis ledger and write a
/// scored report.
#[derive(Parser, Debug)]
#[command(name = "osler", version, about)]
struct Args {
    /// Directory holding claim extraction files (*.json)
    claims_dir: PathBuf,

    /// Hypothesis ledger document; falls back to the baseline set when
    /// absent or unusable
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// Scoring configuration file (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the validation report
    #[arg(long, default_value = "validated_claims.json")]
    output: PathBuf,

    /// Override the run date stamped into the report (YYYY-MM-DD)
    #[arg(long)]
    run_date: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    config.validate().context("invalid configuration")?;

    let claim_files = discover_claim_files(&args.claims_dir)?;
    info!(
        files = claim_files.len(),
        dir = %args.claims_dir.display(),
        "discovered claim files"
    );

    let meta = ReportMeta {
        run_date: args
            .run_date
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
        git_sha: git_sha(),
        config_version: config.version.clone(),
    };

    match run_validation(&claim_files, args.ledger.as_deref(), &config, meta) {
        Some(report) => {
            report.write_atomic(&args.output)?;
            println!(
                "Validated {} of {} claims -> {}",
                report.summary.claims_validated,
                report.summary.total_claims_processed,
                args.output.display()
            );
        }
        None => {
            println!("No claim files found in {}", args.claims_dir.display());
        }
    }
    Ok(())
}

/// Load the scoring configuration, defaulting when no file is given.
fn load_config(path: Option<&Path>) -> Result<ValidationConfig> {
    let Some(path) = path else {
        return Ok(ValidationConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ValidationConfig::from_toml(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// All `.json` files directly under `dir`, lexicographically ordered so a
/// rerun over the same directory scores claims in the same order. A missing
/// directory yields an empty list rather than an error.
fn discover_claim_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(dir = %dir.display(), "claims directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", dir.display()));
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Short git SHA of the working tree, "unknown" outside a repository.
fn git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|sha| sha.trim().to_string())
        .filter(|sha| !sha.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
