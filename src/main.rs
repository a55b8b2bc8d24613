use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::Level;

use gv_stats::{run, ReportArg, ReportConfig, VERSION};

/// Gun violence statistics by US state
#[derive(Debug, Parser)]
#[command(name = "gv-stats", version = VERSION)]
struct Cli {
    /// Sections to print (repeatable, default: all)
    #[arg(long = "report", value_enum)]
    reports: Vec<ReportArg>,

    /// Also print the US-wide yearly population estimate
    #[arg(long)]
    population: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ReportConfig::from_args(&cli.reports, cli.population);
    tracing::info!(sections = ?config.sections, population = config.show_population, "starting run");

    let text = run(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes()).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}

// Diagnostics go to stderr so stdout carries only the report
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
