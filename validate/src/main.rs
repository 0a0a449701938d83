//! Trigger definition checker.
//!
//! Resolves every enabled trigger in a config file against the bundled
//! data tables and reports what each one matched, so authors can catch
//! typos and renamed abilities without loading into the game. Exits
//! non-zero when any enabled trigger resolves to nothing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::debug;

use sigil_core::{GameTables, TriggerData, find_action_entries, find_status_entries};
use sigil_types::{TriggerConfig, TriggerKind};

#[derive(Parser)]
#[command(
    name = "sigil-validate",
    about = "Check trigger definitions against the bundled data tables"
)]
struct Args {
    /// Trigger config file (TOML)
    config: PathBuf,

    /// Directory holding the table files (defaults to the installed data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TriggerReport {
    id: String,
    input: String,
    kind: TriggerKind,
    matches: Vec<MatchReport>,
}

#[derive(Serialize)]
struct MatchReport {
    id: u32,
    name: String,
    icon: u16,
    max_stacks: u8,
}

impl From<TriggerData> for MatchReport {
    fn from(data: TriggerData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            icon: data.icon,
            max_stacks: data.max_stacks,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let Some(data_dir) = args.data_dir.or_else(GameTables::default_data_dir) else {
        eprintln!("error: no --data-dir given and no default data directory available");
        return ExitCode::FAILURE;
    };
    debug!(?data_dir, "loading tables");

    let tables = match GameTables::load(&data_dir) {
        Ok(tables) => tables,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let raw = match std::fs::read_to_string(&args.config) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("error: failed to read {}: {err}", args.config.display());
            return ExitCode::FAILURE;
        }
    };
    let config: TriggerConfig = match toml::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: failed to parse {}: {err}", args.config.display());
            return ExitCode::FAILURE;
        }
    };

    let enabled: Vec<_> = config.triggers.iter().filter(|t| t.enabled).collect();
    let skipped = config.triggers.len() - enabled.len();

    let reports: Vec<TriggerReport> = enabled
        .iter()
        .map(|trigger| {
            let matches = match trigger.kind {
                TriggerKind::Status => find_status_entries(&tables, &trigger.input),
                TriggerKind::Cooldown => find_action_entries(&tables, &trigger.input),
            };
            TriggerReport {
                id: trigger.id.clone(),
                input: trigger.input.clone(),
                kind: trigger.kind,
                matches: matches.into_iter().map(MatchReport::from).collect(),
            }
        })
        .collect();

    let dead = reports.iter().filter(|r| r.matches.is_empty()).count();

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text_report(&reports, skipped);
    }

    if dead > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_text_report(reports: &[TriggerReport], skipped: usize) {
    let color = atty::is(atty::Stream::Stdout);
    let paint = |code: &str, text: &str| {
        if color {
            format!("{code}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    };

    for report in reports {
        let kind = match report.kind {
            TriggerKind::Status => "status",
            TriggerKind::Cooldown => "cooldown",
        };
        if report.matches.is_empty() {
            println!(
                "{} {} ({kind}): \"{}\" matched nothing",
                paint("\x1b[31m", "FAIL"),
                report.id,
                report.input
            );
            continue;
        }
        println!(
            "{} {} ({kind}): \"{}\"",
            paint("\x1b[32m", "  ok"),
            report.id,
            report.input
        );
        for entry in &report.matches {
            println!(
                "       {} (id {}, icon {}, max stacks {})",
                entry.name, entry.id, entry.icon, entry.max_stacks
            );
        }
    }

    let dead = reports.iter().filter(|r| r.matches.is_empty()).count();
    println!(
        "\n{} trigger(s) checked, {} unresolved, {} disabled",
        reports.len(),
        dead,
        skipped
    );
}
