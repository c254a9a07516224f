// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: count square-free integers for one or more bounds.
//!
//! ```bash
//! squarefree 100 1000000            # below each bound
//! squarefree --inclusive 1000000    # up to and including
//! squarefree --stats --split 10000000
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use squarefree_count::config::DEFAULT_SPLIT_THRESHOLD;
use squarefree_count::oracle::count_squarefree_below_naive;
use squarefree_count::{CounterConfig, PhiStrategy, SquarefreeCounter};

#[derive(ValueEnum, Debug, Clone, Copy)]
enum StrategyArg {
    /// Explicit work stack
    Stack,
    /// Direct recursion
    Recursive,
}

impl From<StrategyArg> for PhiStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Stack => PhiStrategy::ExplicitStack,
            StrategyArg::Recursive => PhiStrategy::CallRecursion,
        }
    }
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "squarefree")]
#[command(about = "Count square-free integers below a bound")]
struct Args {
    /// Bounds to query; each is answered independently.
    #[arg(required = true, allow_negative_numbers = true)]
    bounds: Vec<i64>,

    /// Count 1..=N instead of 1..N.
    #[arg(short, long)]
    inclusive: bool,

    /// Test every integer by trial division instead.
    #[arg(long)]
    naive: bool,

    /// Evaluation strategy for the phi recurrence.
    #[arg(long, value_enum, default_value = "stack", env = "SQUAREFREE_STRATEGY")]
    strategy: StrategyArg,

    /// Use the outer decomposition; sub-bounds at or below this go to phi.
    #[arg(long, env = "SQUAREFREE_SPLIT_THRESHOLD")]
    split_threshold: Option<u64>,

    /// Shorthand for --split-threshold with the suggested default.
    #[arg(long, conflicts_with = "split_threshold")]
    split: bool,

    /// Log cache statistics for each bound (raises the default log level to info).
    #[arg(long)]
    stats: bool,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, default_value = "warn", env = "SQUAREFREE_LOG")]
    log_level: String,
}

impl Args {
    fn config(&self) -> CounterConfig {
        let config = CounterConfig::new().with_phi_strategy(self.strategy.into());
        match (self.split_threshold, self.split) {
            (Some(threshold), _) => config.with_split_threshold(threshold),
            (None, true) => config.with_split_threshold(DEFAULT_SPLIT_THRESHOLD),
            (None, false) => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(if args.stats { "info" } else { args.log_level.as_str() })
            }),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let counter = SquarefreeCounter::with_config(args.config());

    for &n in &args.bounds {
        let below = if args.inclusive {
            n.checked_add(1)
        } else {
            Some(n)
        };

        let count = if args.naive {
            let below = below.context("bound too large for the naive counter")?;
            count_squarefree_below_naive(below)
                .with_context(|| format!("counting square-free integers for {}", n))?
        } else {
            match below {
                Some(below) => {
                    let report = counter
                        .count_below_with_report(below)
                        .with_context(|| format!("counting square-free integers for {}", n))?;
                    if args.stats {
                        info!(
                            n,
                            phi_cache = report.phi_cache_entries,
                            outer_cache = report.outer_cache_entries,
                            "[squarefree] {}",
                            report.statistics
                        );
                    }
                    report.count
                }
                // Inclusive i64::MAX has no exclusive counterpart.
                None => counter
                    .count_up_to(n)
                    .with_context(|| format!("counting square-free integers up to {}", n))?,
            }
        };

        println!("{}\t{}", n, count);
    }

    Ok(())
}
