use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use u_knapsack::experiment::{ExperimentConfig, ExperimentRunner};
use u_knapsack::greedy::GreedyRule;
use u_knapsack::report::{CsvReporter, JsonReporter, LogReporter};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON file with an experiment configuration
    #[arg(short, long, value_name = "FILE")]
    config_file: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    min_size: Option<usize>,
    #[arg(long)]
    max_size: Option<usize>,
    #[arg(long)]
    step: Option<usize>,
    #[arg(long)]
    max_weight: Option<u32>,
    #[arg(long)]
    max_value: Option<u32>,
    /// Largest instance size the exhaustive solver is run on
    #[arg(short, long)]
    exhaustive_limit: Option<usize>,
    /// Greedy rule to run (repeatable): density, lightest, valuable
    #[arg(short, long = "rule", value_name = "RULE")]
    rules: Vec<GreedyRule>,
    /// Write one CSV row per solver run to this file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
    /// Write all records as a JSON array to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
    /// List generated and selected items in the console output
    #[arg(long)]
    show_items: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.log_level)?;

    let config = load_config(&args)?;
    info!("[MAIN] experiment config: {config:?}");

    if config.exhaustive_limit > 30 {
        warn!(
            "[MAIN] exhaustive limit {} is high, sizes above ~25 may take very long",
            config.exhaustive_limit
        );
    }

    let csv = args
        .csv
        .as_deref()
        .map(CsvReporter::create)
        .transpose()
        .context("could not create csv file")?;
    let json = args
        .json
        .as_deref()
        .map(JsonReporter::create)
        .transpose()
        .context("could not create json file")?;

    let mut reporter = (LogReporter::new().with_items(args.show_items), (csv, json));
    let result = ExperimentRunner::run_seeded(&config, &mut reporter)?;

    for rule in &config.rules {
        info!(
            "[MAIN] {rule}: missed the optimum on {} of {} exhaustively solved sizes",
            result.mismatches(*rule),
            result.exhaustive_runs()
        );
    }
    if let Some(path) = &args.csv {
        info!("[MAIN] csv written to {}", path.display());
    }
    if let Some(path) = &args.json {
        info!("[MAIN] json written to {}", path.display());
    }

    Ok(())
}

fn load_config(args: &Cli) -> Result<ExperimentConfig> {
    let mut config = match &args.config_file {
        None => ExperimentConfig::default(),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")?
        }
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(n) = args.min_size {
        config.min_size = n;
    }
    if let Some(n) = args.max_size {
        config.max_size = n;
    }
    if let Some(n) = args.step {
        config.size_step = n;
    }
    if let Some(w) = args.max_weight {
        config.max_weight = w;
    }
    if let Some(v) = args.max_value {
        config.max_value = v;
    }
    if let Some(n) = args.exhaustive_limit {
        config.exhaustive_limit = n;
    }
    if !args.rules.is_empty() {
        config.rules = args.rules.clone();
    }

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid experiment config")?;
    Ok(config)
}

fn init_logger(level_filter: LevelFilter) -> Result<()> {
    let start = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let elapsed = start.elapsed().as_secs();
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}]",
                record.level(),
                elapsed / 3600,
                (elapsed / 60) % 60,
                elapsed % 60,
            );
            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    Ok(())
}
