//! benchbot CLI - Compare rapier benchmark runs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

mod error;
mod report;
mod service;

use benchbot_core::query::{DEFAULT_PROJECT, DEFAULT_SERVER_URL};
use benchbot_core::{
    build_comparison_charts, initial_selection, option_label, sort_newest_first, BenchDate,
    ColorTable, ComparisonCharts, RequestedDates, RevisionSelection, ServiceConfig,
};
use service::{BenchService, HttpBenchService};

/// benchbot: Compare rapier benchmark runs between two revisions
#[derive(Parser, Debug)]
#[command(name = "benchbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the benchmarks service
    #[arg(long, global = true, env = "BENCHBOT_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Project to query
    #[arg(long, global = true, env = "BENCHBOT_PROJECT", default_value = DEFAULT_PROJECT)]
    project: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List benchmarked revisions, newest first
    List(ListArgs),

    /// Compare two revisions
    Compare(CompareArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Only show the newest N revisions
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Parser, Debug)]
struct CompareArgs {
    /// Timestamp (ms) of the first revision; defaults to the second newest
    #[arg(long)]
    date1: Option<BenchDate>,

    /// Timestamp (ms) of the second revision; defaults to the newest
    #[arg(long)]
    date2: Option<BenchDate>,

    /// Include third-party engines from the first revision
    #[arg(long)]
    other_engines: bool,

    /// Output format: text, json or html
    #[arg(long, default_value = "text")]
    format: String,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Title of the HTML report
    #[arg(long, default_value = "rapier benchmarks")]
    title: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let service = HttpBenchService::new(ServiceConfig::new(cli.server, cli.project))
        .context("Invalid benchmarks service URL")?;
    debug!(
        "Using {} (project {})",
        service.config().base_url,
        service.config().project
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List(args) => list_command(&service, &args, &mut out),
        Commands::Compare(args) => compare_command(&service, &args, &mut out),
    }
}

fn list_command(service: &impl BenchService, args: &ListArgs, out: &mut impl Write) -> Result<()> {
    let mut keys = service
        .list_keys()
        .context("Failed to list benchmarked revisions")?;
    sort_newest_first(&mut keys);

    if let Some(limit) = args.limit {
        keys.truncate(limit);
    }

    info!("Found {} revisions", keys.len());

    match args.format.as_str() {
        "json" => {
            let rows: Vec<_> = keys
                .iter()
                .map(|k| {
                    serde_json::json!({
                        "branch": k.branch,
                        "commit": k.commit,
                        "date": k.date.millis(),
                        "label": option_label(k),
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        _ => {
            for key in &keys {
                writeln!(out, "{:>15}  {}", key.date, option_label(key))?;
            }
        }
    }

    Ok(())
}

/// Explicit dates are sent as given; only a missing side takes the default
fn resolve_selection(service: &impl BenchService, args: &CompareArgs) -> Result<RevisionSelection> {
    if let (Some(date1), Some(date2)) = (args.date1, args.date2) {
        return Ok(RevisionSelection { date1, date2 });
    }

    let mut keys = service
        .list_keys()
        .context("Failed to list benchmarked revisions")?;
    sort_newest_first(&mut keys);

    let default = initial_selection(&keys, &RequestedDates::default())
        .ok_or(benchbot_core::Error::NoRevisions)?;
    let selection = RevisionSelection {
        date1: args.date1.unwrap_or(default.date1),
        date2: args.date2.unwrap_or(default.date2),
    };
    debug!(
        "Selected revisions {} and {}",
        selection.date1, selection.date2
    );
    Ok(selection)
}

fn compare_command(
    service: &impl BenchService,
    args: &CompareArgs,
    out: &mut impl Write,
) -> Result<()> {
    let selection = resolve_selection(service, args)?;

    info!(
        "Comparing {} with {} (other engines: {})",
        selection.date1, selection.date2, args.other_engines
    );

    let response = service
        .compare(selection.date1, selection.date2, args.other_engines)
        .context("Failed to fetch comparison data")?;

    let mut colors = ColorTable::new();
    let charts = build_comparison_charts(response, &mut colors)
        .context("Failed to build comparison charts")?;

    if args.format == "html" {
        if let Some(ref path) = args.output {
            report::write_report(&charts, &args.title, path)?;
            info!("Wrote report to {:?}", path);
        } else {
            writeln!(out, "{}", report::render_report(&charts, &args.title)?)?;
        }
        return Ok(());
    }

    let rendered = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&charts)?,
        _ => text_summary(&charts),
    };

    if let Some(ref path) = args.output {
        report::write_file(path, &rendered)?;
        info!("Wrote comparison to {:?}", path);
    } else {
        writeln!(out, "{}", rendered)?;
    }

    Ok(())
}

fn text_summary(charts: &ComparisonCharts) -> String {
    let mut lines = Vec::new();

    if charts.groups.is_empty() {
        return "No benchmark entries to compare.".to_string();
    }

    for group in &charts.groups {
        lines.push(format!("## {}", group.title));
        for dataset in &group.datasets {
            let frames = dataset.data.len();
            let mean = if frames > 0 {
                dataset.data.iter().sum::<f64>() / frames as f64
            } else {
                0.0
            };
            let max = dataset.data.iter().copied().fold(0.0f64, f64::max);
            lines.push(format!(
                "  {} {}: {} frames, mean {:.3}ms, max {:.3}ms",
                dataset.color, dataset.label, frames, mean, max
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
