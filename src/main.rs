use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hakedis_engine::calculation::{auto_distribute, compute_monthly_entitlement};
use hakedis_engine::config::ConfigLoader;
use hakedis_engine::models::{AssignmentBook, ShiftAssignment};

#[derive(Parser)]
#[command(
    name = "hakedis",
    version,
    about = "On-call overtime entitlement calculator and rotation planner",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration directory
    #[arg(short, long, global = true, default_value = "./config/hakedis")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a staff member's monthly entitlement ledger
    Entitlement {
        /// Staff member id
        #[arg(short, long)]
        staff: String,

        /// Year
        #[arg(short, long)]
        year: i32,

        /// Month (1-12)
        #[arg(short, long)]
        month: u32,

        /// JSON file with an array of shift assignments
        #[arg(short, long)]
        assignments: PathBuf,
    },

    /// Distribute the on-call rotation for a month
    Distribute {
        /// Year
        #[arg(short, long)]
        year: i32,

        /// Month (1-12)
        #[arg(short, long)]
        month: u32,

        /// JSON file with the previous month's assignments
        #[arg(short, long)]
        previous: Option<PathBuf>,
    },

    /// List the configured shift definitions
    Shifts,

    /// List the holidays of a year
    Holidays {
        /// Year
        #[arg(short, long)]
        year: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.log_format, cli.verbose)?;

    let loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    match cli.command {
        Commands::Entitlement {
            staff,
            year,
            month,
            assignments,
        } => {
            tracing::info!(
                staff = %staff,
                year = %year,
                month = %month,
                assignments = %assignments.display(),
                "Starting entitlement command"
            );
            if loader.roster().member(&staff).is_none() {
                tracing::warn!(staff = %staff, "Staff member is not on the roster");
            }
            let book = read_assignments(&assignments)?;
            let summary = compute_monthly_entitlement(
                &staff,
                month,
                year,
                &book,
                loader.catalog(),
                &loader.calendar(),
            )?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        Commands::Distribute {
            year,
            month,
            previous,
        } => {
            tracing::info!(
                year = %year,
                month = %month,
                previous = ?previous,
                "Starting distribute command"
            );
            let book = match previous {
                Some(path) => read_assignments(&path)?,
                None => AssignmentBook::new(),
            };
            let staff = loader.roster().on_duty_in_rotation_order();
            let created = auto_distribute(month, year, &staff, &book, loader.rotation_codes())?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }

        Commands::Shifts => {
            let catalog = loader.catalog();
            for definition in catalog.definitions() {
                println!(
                    "{:<6} {:<20} {}-{}  {}",
                    definition.code,
                    definition.display_name,
                    definition.start_time.format("%H:%M"),
                    definition.end_time.format("%H:%M"),
                    catalog.duration_label(definition)
                );
            }
        }

        Commands::Holidays { year } => {
            let (Some(start), Some(end)) = (
                NaiveDate::from_ymd_opt(year, 1, 1),
                NaiveDate::from_ymd_opt(year, 12, 31),
            ) else {
                bail!("year {} is out of range", year);
            };
            for record in loader.calendar().holidays_between(start, end).values() {
                let kind = if record.is_half_day() { "yarım gün" } else { "tam gün" };
                println!("{}  {:<10} {}", record.date, kind, record.display_name());
            }
        }
    }

    tracing::info!("hakedis completed successfully");
    Ok(())
}

fn read_assignments(path: &Path) -> Result<AssignmentBook> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let assignments: Vec<ShiftAssignment> = serde_json::from_str(&content)
        .with_context(|| format!("parsing assignments in {}", path.display()))?;
    Ok(assignments.into_iter().collect())
}

fn setup_tracing(format: LogFormat, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("hakedis_engine=debug,hakedis=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("hakedis_engine=info,hakedis=info,warn")
    };

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
