//! `relrange` — resolve and print a relative date range.
//!
//! ```text
//! relrange previous 2 months --date 3000-02-12
//! relrange next quarter --format RR --locale nl
//! relrange current week --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use relative_range::calendar::parse_date;
use relative_range::{
    FormatOptions, JsonOptions, Measure, RangeOptions, RangeType, RelativeRange, DEFAULT_FORMAT,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "relrange", version, about = "Resolve and format relative date ranges")]
struct Cli {
    /// previous, current or next
    range_type: String,

    /// Unit count followed by the measure, or just the measure
    #[arg(num_args = 1..=2, value_names = ["UNITS", "MEASURE"], required = true)]
    period: Vec<String>,

    /// Reference date (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(short, long)]
    date: Option<String>,

    /// Snap to whole periods (true/false)
    #[arg(long)]
    whole: Option<bool>,

    /// Day offset applied before resolving the end
    #[arg(long, allow_negative_numbers = true)]
    margin: Option<i32>,

    /// Format token (ll, LL, L, R, RR) or a date pattern
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Locale id
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Drop the year from sides in the reference year
    #[arg(long)]
    hide_year: bool,

    /// Drop the day of month for whole-month spans
    #[arg(long)]
    hide_day: bool,

    /// Print the range as JSON instead
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }
    let level = if verbose == 1 { "debug" } else { "trace" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn build_range(cli: &Cli) -> Result<RelativeRange> {
    let range_type: RangeType = cli.range_type.parse()?;
    let (units, measure) = match cli.period.as_slice() {
        [measure] => (None, measure),
        [units, measure] => (
            Some(
                units
                    .parse::<i32>()
                    .with_context(|| format!("Invalid unit count: {units}"))?,
            ),
            measure,
        ),
        _ => anyhow::bail!("Expected [UNITS] MEASURE"),
    };
    let measure: Measure = measure.parse()?;
    let date = cli.date.as_deref().map(parse_date).transpose()?;

    debug!(%range_type, %measure, ?units, ?date, "building range");

    Ok(RelativeRange::from_options(RangeOptions {
        date,
        measure: Some(measure),
        units,
        range_type: Some(range_type),
        whole: cli.whole,
        margin: cli.margin,
        ..RangeOptions::default()
    }))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let range = build_range(&cli)?;

    if cli.json {
        let json = range.to_json(&JsonOptions::default());
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let options = FormatOptions {
        locale: cli.locale.clone(),
        attempt_year_hiding: cli.hide_year,
        attempt_day_hiding: cli.hide_day,
    };
    println!("{}", range.format(&cli.format, &options));
    Ok(())
}
