use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;
use rostercal::{config::RosterConfig, roster};
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Convert a sitting roster (Excel or CSV) into an events CSV and a ZIP of
/// calendar invites for one member's speaking slots.
#[derive(Parser, Debug)]
#[command(name = "rostercal", version, about)]
struct Args {
    /// Roster file: .xlsx/.xlsm/.xls, or anything else as delimited text
    input: PathBuf,

    /// Member name to match (whole word, case-insensitive)
    #[arg(long, default_value = "Ryan")]
    member: String,

    /// Year assumed for dates like "12-Jan" that carry no year
    #[arg(long, default_value_t = 2025)]
    year: i32,

    /// Named timezone for the generated invites
    #[arg(long, default_value = "Australia/Sydney")]
    timezone: String,

    /// Directory the two output files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();

    // ─── 2) assemble the run configuration ───────────────────────────
    let timezone: Tz = args
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid timezone {:?}: {}", args.timezone, e))?;
    let config = RosterConfig {
        member: args.member,
        fallback_year: args.year,
        timezone,
        ..RosterConfig::default()
    };

    // ─── 3) read the roster and run the pipeline ─────────────────────
    let filename = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes =
        fs::read(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let artifacts = roster::process(&bytes, &filename, &config)?;

    for event in &artifacts.events {
        info!(
            date = %event.date.format("%d %b %Y"),
            event = %event.event_type.lines().next().unwrap_or(""),
            location = %event.location,
            "speaking slot"
        );
    }

    // ─── 4) write both artifacts ─────────────────────────────────────
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let stem = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "roster".to_string());
    let table_path = args.out_dir.join(format!("{}_events.csv", stem));
    let archive_path = args.out_dir.join(format!("{}_calendar.zip", stem));

    fs::write(&table_path, &artifacts.table_csv)
        .with_context(|| format!("writing {}", table_path.display()))?;
    fs::write(&archive_path, &artifacts.calendar_zip)
        .with_context(|| format!("writing {}", archive_path.display()))?;

    info!(
        slots = artifacts.events.len(),
        table = %table_path.display(),
        archive = %archive_path.display(),
        "done"
    );
    Ok(())
}
