use anyhow::{Context, Result};
use aquaview_app::{config, plotting, report, server};
use aquaview_core::{analysis, telemetry::builder::TelemetryBuilder};
use aquaview_schemas::range::MetricRange;
use clap::{Parser, Subcommand};
use std::{fs, path::Path};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aquaview", about = "Simulated aquaponics monitoring dashboard")]
struct Cli {
    /// Path to the monitor configuration file.
    #[arg(long, default_value = "aquaview-app/monitor.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an offline simulation and write its log, charts, and summary.
    Run {
        /// Overrides the tick count from the config file.
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Serve the stub dashboard endpoints with a live tick loop.
    Serve {
        /// Overrides the listen address from the config file.
        #[arg(long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquaview=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let cfg = config::MonitorConfig::load(&cli.config)?;

    let book = config::RangeBook::load(&cfg.data_dir)?;
    let ranges = book.resolve_ranges(cfg.preset.as_deref())?;

    match cli.command {
        Command::Run { ticks } => run_offline(&cfg, ranges, ticks.unwrap_or(cfg.ticks)),
        Command::Serve { addr } => {
            let mut builder = TelemetryBuilder::new().with_ranges(ranges);
            if let Some(seed) = cfg.seed {
                builder = builder.with_seed(seed);
            }
            let engine = builder.build()?;
            let addr = addr.unwrap_or_else(|| cfg.listen_addr.clone());
            server::serve(&addr, cfg.tick_interval_ms, engine).await
        }
    }
}

fn run_offline(cfg: &config::MonitorConfig, ranges: Vec<MetricRange>, ticks: u64) -> Result<()> {
    let output_dir = format!(
        "{}/monitor_{}",
        cfg.output_dir,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    let log_path = Path::new(&output_dir).join("telemetry.csv");
    let log_path = log_path.to_str().context("Output path is not valid UTF-8")?;

    let mut builder = TelemetryBuilder::new()
        .with_ranges(ranges)
        .with_timeseries_logging_to_file(log_path);
    if let Some(seed) = cfg.seed {
        builder = builder.with_seed(seed);
    }

    let mut engine = builder.build()?;
    tracing::info!(ticks, "Starting offline simulation");
    engine.run(ticks)?;

    let entries = analysis::parse_log_file(log_path)?;
    let summaries = analysis::summarize(&entries)?;
    let total_alerts = analysis::count_alerts(&entries)?;

    plotting::generate_all_plots(&output_dir, log_path)?;
    report::print_summary(&summaries, ticks, total_alerts);

    println!("\nRun complete. Results are in '{}'", output_dir);
    Ok(())
}
