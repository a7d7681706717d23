// Gatehouse CLI - Main Entry Point
//
// Evaluates a visitor admission against a roster and, on request, walks the
// admitted visit through its full check-in/check-out lifecycle.
//
// ```console
// $ visitgate --seed 42 --verbose
// $ visitgate --roster roster.json --national-id 33333333 --file-number 1002
// $ visitgate --seed 42 --write-roster roster.json
// ```

use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::{error, info};

use visitgate::admission::{AdmissionEngine, AdmissionResult, CheckInOutcome};
use visitgate::logging::LoggingConfig;
use visitgate::repository::memory::InMemoryStore;
use visitgate::roster::{Roster, RosterConfig, RosterGenerator};
use visitgate::types::{OperatorId, OutputFormat};

/// Command line arguments for the gatehouse CLI
#[derive(Debug, Clone, Parser)]
#[command(
    name = "visitgate",
    version,
    about = "Gatehouse CLI - evaluates visitor admissions for a secured facility",
    long_about = "Evaluates whether a visitor may be admitted right now, reporting every \
blocking reason and advisory. Works against a roster JSON file, or against a \
generated sample roster when none is given.

EXAMPLES:
    # Evaluate the first visitor/inmate of a generated sample roster
    visitgate --seed 42

    # Evaluate a specific pair from a roster file
    visitgate --roster roster.json --national-id 33333333 --file-number 1002

    # Full visit lifecycle after an admission
    visitgate --seed 42 --walkthrough --verbose

    # Produce a roster file to edit and reuse
    visitgate --seed 42 --write-roster roster.json"
)]
struct CliArgs {
    /// Roster JSON file; a sample roster is generated when omitted
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Seed for sample roster generation (deterministic output)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of visitors in the generated sample roster
    #[arg(long)]
    visitors: Option<usize>,

    /// Number of inmates in the generated sample roster
    #[arg(long)]
    inmates: Option<usize>,

    /// Write the roster as JSON to this path and exit
    #[arg(long)]
    write_roster: Option<PathBuf>,

    /// Visitor national id (defaults to the roster's first visitor)
    #[arg(long)]
    national_id: Option<String>,

    /// Inmate file number (defaults to the roster's first inmate)
    #[arg(long)]
    file_number: Option<String>,

    /// Evaluation instant as RFC 3339 (defaults to now)
    #[arg(long)]
    at: Option<String>,

    /// On admission, drive the session through check-in and check-out
    #[arg(long)]
    walkthrough: bool,

    /// Output format for the decision (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable INFO-level logging
    #[arg(long, short)]
    verbose: bool,

    /// Enable DEBUG-level logging
    #[arg(long)]
    debug: bool,

    /// Directory for daily-rolling JSON log files
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() {
    let args = CliArgs::parse();

    let mut logging = if args.debug {
        LoggingConfig::new().with_level(tracing::Level::DEBUG)
    } else if args.verbose {
        LoggingConfig::new().with_level(tracing::Level::INFO)
    } else {
        LoggingConfig::new()
    };
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir);
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("gatehouse run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let now = match &args.at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("--at must be RFC 3339, got {:?}", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let roster = load_or_generate_roster(&args, now)?;
    info!("working with {}", roster.describe());

    if let Some(path) = &args.write_roster {
        let json = roster.to_json().context("serializing roster")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing roster to {}", path.display()))?;
        eprintln!("Roster written to {}", path.display());
        return Ok(());
    }

    let store = InMemoryStore::new();
    roster.install(&store).map_err(|e| anyhow!("installing roster: {}", e))?;
    let engine = AdmissionEngine::with_store(&store);

    let national_id = args
        .national_id
        .clone()
        .or_else(|| roster.visitors.first().map(|v| v.national_id.clone()))
        .ok_or_else(|| anyhow!("roster has no visitors"))?;
    let file_number = args
        .file_number
        .clone()
        .or_else(|| roster.inmates.first().map(|i| i.file_number.clone()))
        .ok_or_else(|| anyhow!("roster has no inmates"))?;

    let result = engine
        .evaluate_admission(&national_id, &file_number, now)
        .context("admission evaluation could not be completed")?;

    print_decision(&args, &national_id, &file_number, now, &result)?;

    if args.walkthrough && result.admitted {
        walkthrough(&engine, &result, now)?;
    }

    Ok(())
}

fn load_or_generate_roster(args: &CliArgs, now: DateTime<Utc>) -> Result<Roster> {
    if let Some(path) = &args.roster {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading roster from {}", path.display()))?;
        return Roster::from_json(&json)
            .with_context(|| format!("parsing roster {}", path.display()));
    }

    let mut generator = match args.seed {
        Some(seed) => RosterGenerator::seeded(seed),
        None => RosterGenerator::new(),
    };
    let mut config = RosterConfig::default();
    if let Some(visitors) = args.visitors {
        config.visitor_count = visitors;
    }
    if let Some(inmates) = args.inmates {
        config.inmate_count = inmates;
    }
    generator.generate(&config, now).context("generating sample roster")
}

fn print_decision(
    args: &CliArgs,
    national_id: &str,
    file_number: &str,
    now: DateTime<Utc>,
    result: &AdmissionResult,
) -> Result<()> {
    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result).context("serializing decision")?);
        }
        OutputFormat::Text => {
            println!(
                "Admission of visitor {} to inmate {} at {}:",
                national_id,
                file_number,
                now.format("%Y-%m-%d %H:%M UTC")
            );
            println!("  {}", if result.admitted { "ADMITTED" } else { "DENIED" });
            for reason in &result.blocking_reasons {
                println!("  - {}", reason);
            }
            for advisory in &result.advisories {
                println!("  * advisory: {}", advisory);
            }
        }
    }
    Ok(())
}

fn walkthrough(engine: &AdmissionEngine, result: &AdmissionResult, now: DateTime<Utc>) -> Result<()> {
    let clearance = result
        .clearance
        .as_ref()
        .ok_or_else(|| anyhow!("admitted result is missing its clearance"))?;
    let operator = OperatorId::new();

    let session = engine.schedule_visit(clearance, now.date_naive(), now)?;
    eprintln!("Scheduled session {}", session.id);

    match engine.check_in(session.id, operator, now)? {
        CheckInOutcome::CheckedIn(session) => {
            eprintln!("Checked in at {}", now.format("%H:%M"));

            let leave = now + chrono::Duration::minutes(30);
            let completed = engine.check_out(session.id, operator, leave)?;
            let minutes =
                completed.duration().map(|d| d.num_minutes()).unwrap_or_default();
            eprintln!("Checked out at {} ({} minutes inside)", leave.format("%H:%M"), minutes);
        }
        CheckInOutcome::FacilityFull => {
            eprintln!("Check-in refused: facility reached its concurrent-visit ceiling");
        }
    }

    Ok(())
}
