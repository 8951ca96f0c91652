//! Offline converter: merges yearly artifact files into a kholiday
//! holiday-definition text file for third-party calendar software.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use patro_db::db::query::calendar::today::today_ad;
use patro_db::db::seed::artifact::Artifact;
use patro_service::kholiday::{EntryKind, KholidayOptions, generate, output_file_name};

/// Generate a kholiday holiday-definition file from yearly artifact files.
#[derive(Parser)]
#[command(name = "kholiday", version, about)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Artifact JSON file to convert; repeat to merge several years.
    #[arg(short = 'i', long = "input-artifact", required = true)]
    input_artifacts: Vec<PathBuf>,

    /// Prepend "सार्बजनिक बिदा: " to public-holiday entries.
    #[arg(long = "append-holiday-info")]
    append_holiday_info: bool,

    /// Prepend "पञ्चाङ्ग:" to panchangam entries.
    #[arg(long = "append-panchangam-info")]
    append_panchangam_info: bool,

    /// Merge all of a day's holiday events into one entry.
    #[arg(long = "flatten-holidays")]
    flatten_holidays: bool,

    /// Comma-separated entry kinds to include.
    #[arg(
        long = "select-events",
        default_value = "holidays,nepali_date,panchangam,tithi,non_holiday_events"
    )]
    select_events: String,

    /// Directory the output file is written to.
    #[arg(long = "out-dir", default_value = ".")]
    out_dir: PathBuf,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_owned()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut merged = Artifact::new();
    for path in &cli.input_artifacts {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read artifact \"{}\"", path.display()))?;
        let artifact: Artifact = serde_json::from_str(&text)
            .with_context(|| format!("malformed artifact \"{}\"", path.display()))?;
        tracing::info!(path = %path.display(), days = artifact.len(), "loaded artifact");
        merged.extend(artifact);
    }

    let kinds = EntryKind::parse_list(&cli.select_events)?;
    let options = KholidayOptions {
        kinds,
        append_holiday_label: cli.append_holiday_info,
        append_panchangam_label: cli.append_panchangam_info,
        flatten_holidays: cli.flatten_holidays,
    };

    let contents = generate(&merged, &options, today_ad())?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("cannot create output directory \"{}\"", cli.out_dir.display()))?;
    let path = cli.out_dir.join(output_file_name(&options.kinds));
    std::fs::write(&path, contents)
        .with_context(|| format!("cannot write \"{}\"", path.display()))?;

    tracing::info!(path = %path.display(), "kholiday file generated");
    Ok(())
}
