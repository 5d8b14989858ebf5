//! Curator command-line interface.
//!
//! Classifies team activity snapshots into workload zones, keeps a JSON
//! history file across invocations, and renders recommendations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use curator_engine::{narrative_or_fallback, ActivitySnapshot, ImpedanceEngine};

mod render;
mod settings;

use settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(about = "Cognitive impedance monitoring for teams")]
struct Args {
    /// Path to a curator.toml config file (default: ./curator.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON history file, imported before and exported after each command
    #[arg(long, default_value = "curator_history.json")]
    history: PathBuf,

    /// Emit machine-readable JSON instead of a styled report
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a snapshot of activity counts
    Analyze {
        /// Messages posted in Slack channels
        #[arg(long, default_value = "0")]
        slack_messages: u64,

        /// Messages posted in Discord channels
        #[arg(long, default_value = "0")]
        discord_messages: u64,

        /// Notion page updates
        #[arg(long, default_value = "0")]
        notion_updates: u64,

        /// GitHub events (pushes, PRs, issues)
        #[arg(long, default_value = "0")]
        github_events: u64,

        /// Linear issue updates
        #[arg(long, default_value = "0")]
        linear_updates: u64,

        /// AI-generated artifacts
        #[arg(long, default_value = "0")]
        ai_outputs: u64,

        /// Email threads
        #[arg(long, default_value = "0")]
        emails: u64,

        /// Measurement window in hours
        #[arg(long, default_value = "24")]
        timeframe_hours: u32,

        /// Number of team members (overrides config)
        #[arg(long)]
        team_size: Option<u32>,

        /// Processing hours per person per day (overrides config)
        #[arg(long)]
        hours_per_person: Option<f64>,
    },

    /// Show recent classification history
    Report {
        /// History window in hours
        #[arg(long, default_value = "168")]
        hours: u32,
    },

    /// Print a narrative recommendation for the latest classification
    Advise {
        /// Free-text team context passed to the advisor
        #[arg(long)]
        context: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    match args.command {
        Command::Analyze {
            slack_messages,
            discord_messages,
            notion_updates,
            github_events,
            linear_updates,
            ai_outputs,
            emails,
            timeframe_hours,
            team_size,
            hours_per_person,
        } => {
            let engine = build_engine(
                team_size.unwrap_or(settings.team_size),
                hours_per_person.unwrap_or(settings.processing_hours_per_person),
                &args.history,
            )?;

            let snapshot = ActivitySnapshot::builder()
                .counts(|c| {
                    c.slack_messages(slack_messages)
                        .discord_messages(discord_messages)
                        .notion_updates(notion_updates)
                        .github_events(github_events)
                        .linear_updates(linear_updates)
                        .ai_outputs(ai_outputs)
                        .emails(emails)
                })
                .build();

            let result = engine.classify_within(&snapshot, timeframe_hours)?;
            save_history(&engine, &args.history)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render::print_result(&result);
            }
        }

        Command::Report { hours } => {
            let engine = build_engine(
                settings.team_size,
                settings.processing_hours_per_person,
                &args.history,
            )?;

            let recent = engine.recent(hours);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&recent)?);
            } else {
                render::print_history(&recent);
            }
        }

        Command::Advise { context } => {
            let engine = build_engine(
                settings.team_size,
                settings.processing_hours_per_person,
                &args.history,
            )?;

            let Some(result) = engine.last_result() else {
                bail!("no history yet - run `curator analyze` first");
            };
            let recent = engine.recent(168);

            let narrative = narrative_or_fallback(
                advisor().as_deref(),
                &result,
                context.as_deref(),
                &recent,
            )
            .await;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&narrative)?);
            } else {
                render::print_narrative(&narrative);
            }
        }
    }

    Ok(())
}

/// Construct an engine and seed it from the history file when one exists.
fn build_engine(team_size: u32, hours_per_person: f64, history: &Path) -> Result<ImpedanceEngine> {
    let engine = ImpedanceEngine::builder()
        .team_size(team_size)
        .processing_hours_per_person(hours_per_person)
        .build();

    if history.exists() {
        let json = fs::read_to_string(history)
            .with_context(|| format!("failed to read {}", history.display()))?;
        engine
            .import_json(&json)
            .with_context(|| format!("failed to import {}", history.display()))?;
    }

    Ok(engine)
}

fn save_history(engine: &ImpedanceEngine, history: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&engine.export())?;
    fs::write(history, json).with_context(|| format!("failed to write {}", history.display()))?;
    Ok(())
}

#[cfg(feature = "advisor")]
fn advisor() -> Option<Box<dyn curator_engine::NarrativeAdvisor>> {
    Some(Box::new(
        curator_adapters::advisor::ClaudeAdvisor::builder().build(),
    ))
}

#[cfg(not(feature = "advisor"))]
fn advisor() -> Option<Box<dyn curator_engine::NarrativeAdvisor>> {
    None
}
