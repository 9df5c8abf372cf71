use std::{fs::OpenOptions, path::PathBuf};

use anyhow::Context;
use benchmark::BenchmarkConfig;
use clap::Parser;
use fern::colors::ColoredLevelConfig;
use ordered_set_similarity::SimilarityMetric;
use random::{RandomProvider, TrueRandomProvider};

mod benchmark;
mod checks;
mod random;
mod results;

/// Score one random reference list against many random candidates and report the best
/// and worst matches.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for all random decisions. A random seed is picked and logged if not set.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of candidate lists to compare against the reference.
    #[arg(long, default_value_t = 100_000)]
    comparisons: usize,

    /// Lists have a length in 0..max-len before duplicates are removed.
    #[arg(long, default_value_t = 50)]
    max_len: usize,

    /// List values are drawn from 0..max-value.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    max_value: u32,

    /// Metric to rank candidates with.
    #[arg(long, default_value_t = SimilarityMetric::OrderedSet)]
    metric: SimilarityMetric,

    /// Number of best and worst candidates to report.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Check every metric invariant for every candidate.
    #[arg(long)]
    check: bool,

    /// Write the results as JSON to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value_t = log::LevelFilter::Info)]
    log_level: log::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_logging(&args)?;

    let seed = args
        .seed
        .unwrap_or_else(|| TrueRandomProvider::new().random_u64());

    let config = BenchmarkConfig {
        seed,
        comparisons: args.comparisons,
        max_len: args.max_len,
        max_value: args.max_value,
        metric: args.metric,
        top: args.top,
        check_consistency: args.check,
    };

    let results = benchmark::run(&config)?;

    if let Some(path) = &args.output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &results).context("Could not write results")?;
        log::info!("Results written to {}", path.display());
    }

    Ok(())
}

fn setup_logging(args: &Args) -> anyhow::Result<()> {
    let colors = ColoredLevelConfig::new()
        .debug(fern::colors::Color::Cyan)
        .info(fern::colors::Color::Green)
        .warn(fern::colors::Color::Yellow)
        .error(fern::colors::Color::Red);

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let start_length = record.target().len();
            let max_len = 30;
            let (target, target_padding) = if start_length > max_len {
                (&record.target()[start_length - max_len..], "".to_string())
            } else {
                (record.target(), " ".repeat(max_len - start_length))
            };
            out.finish(format_args!(
                "[{}{}][{}] {}",
                target,
                target_padding,
                colors.color(record.level()),
                message
            ))
        })
        .level(args.log_level)
        .chain(std::io::stdout());

    if let Some(path) = &args.log_file {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Could not open log file {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Could not set up logging")?;
    Ok(())
}
