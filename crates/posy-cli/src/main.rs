// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Posy CLI
//!
//! Answers a single bouquet request from the command line. Without input
//! flags it solves the built-in example `[1, 10, 2, 9, 3, 8, 4, 7, 5, 6]` with
//! four bouquets of two flowers, whose answer is day 9.
//!
//! Log output is controlled by `RUST_LOG`, e.g. `RUST_LOG=debug` to trace
//! every probe of the bisection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use posy_model::{
    garden::Garden,
    loading::{Instance, InstanceLoader},
    request::BouquetRequest,
};
use posy_search::result::SolverResult;
use posy_solver::solver::SolverBuilder;
use std::{path::PathBuf, time::Duration};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const EXAMPLE_BLOOM_DAYS: [i64; 10] = [1, 10, 2, 9, 3, 8, 4, 7, 5, 6];
const EXAMPLE_BOUQUETS: usize = 4;
const EXAMPLE_FLOWERS: usize = 2;

/// Finds the earliest day on which bouquets of adjacent bloomed flowers can be picked
#[derive(Parser, Debug)]
#[command(name = "posy")]
#[command(about = "Earliest harvest day for bouquets of adjacent flowers")]
#[command(version)]
struct Cli {
    /// Bloom day of every plot, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "file")]
    days: Option<Vec<i64>>,

    /// Number of bouquets
    #[arg(short = 'm', long, requires = "days")]
    bouquets: Option<usize>,

    /// Adjacent flowers per bouquet
    #[arg(short = 'k', long, requires = "days")]
    flowers: Option<usize>,

    /// Instance file: "n m k" followed by n bloom days
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Strict file parsing: reject trailing data
    #[arg(long, requires = "file")]
    strict: bool,

    /// Wall-clock budget in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Maximum number of feasibility probes
    #[arg(long)]
    probe_limit: Option<u64>,

    /// Print -1 instead of "infeasible"
    #[arg(long)]
    sentinel: bool,

    /// Print the picked bouquets
    #[arg(long)]
    show_harvest: bool,
}

fn load_instance(cli: &Cli) -> Result<Instance<i64>> {
    if let Some(path) = &cli.file {
        return InstanceLoader::<i64>::new()
            .strict(cli.strict)
            .from_path(path)
            .with_context(|| format!("failed to load instance from {}", path.display()));
    }

    let (days, bouquets, flowers) = match &cli.days {
        Some(days) => {
            let (Some(m), Some(k)) = (cli.bouquets, cli.flowers) else {
                bail!("--days needs both --bouquets and --flowers");
            };
            (days.clone(), m, k)
        }
        None => (
            EXAMPLE_BLOOM_DAYS.to_vec(),
            EXAMPLE_BOUQUETS,
            EXAMPLE_FLOWERS,
        ),
    };

    let garden = Garden::new(days).context("invalid bloom days")?;
    let request = BouquetRequest::new(bouquets, flowers).context("invalid bouquet request")?;
    Ok(Instance::new(garden, request))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let instance = load_instance(&cli)?;
    info!(garden = %instance.garden, request = %instance.request, "instance loaded");

    let mut builder = SolverBuilder::<i64>::new().with_logging(true);
    if let Some(ms) = cli.time_limit_ms {
        builder = builder.with_time_limit(Duration::from_millis(ms));
    }
    if let Some(limit) = cli.probe_limit {
        builder = builder.with_probe_limit(limit);
    }
    let mut solver = builder.build();

    let outcome = solver.solve(&instance);
    info!(
        probes = outcome.statistics().probes,
        plots_scanned = outcome.statistics().plots_scanned,
        reason = %outcome.termination_reason(),
        "search complete"
    );

    match outcome.result() {
        SolverResult::Optimal(harvest) => println!("{}", harvest.day()),
        SolverResult::Feasible(harvest) => {
            println!("{} (upper bound: {})", harvest.day(), outcome.termination_reason())
        }
        SolverResult::Infeasible if cli.sentinel => println!("-1"),
        SolverResult::Infeasible => println!("infeasible"),
        SolverResult::Unknown => bail!("search ended without an answer: {}", outcome.termination_reason()),
    }

    if cli.show_harvest {
        if let Some(harvest) = outcome.result().harvest() {
            print!("{}", harvest);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("posy").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_is_worked_example() {
        let instance = load_instance(&parse(&[])).unwrap();
        assert_eq!(instance.garden.bloom_days(), &EXAMPLE_BLOOM_DAYS[..]);
        assert_eq!(instance.request.bouquets(), 4);
        assert_eq!(instance.request.flowers_per_bouquet(), 2);
    }

    #[test]
    fn test_days_flag() {
        let cli = parse(&["--days", "1,10,3,10,2", "-m", "3", "-k", "1"]);
        let instance = load_instance(&cli).unwrap();
        assert_eq!(instance.garden.bloom_days(), &[1, 10, 3, 10, 2]);
        assert_eq!(instance.request.bouquets(), 3);
    }

    #[test]
    fn test_days_without_counts_is_rejected() {
        assert!(load_instance(&parse(&["--days", "1,2"])).is_err());
    }

    #[test]
    fn test_negative_day_is_rejected() {
        let cli = parse(&["--days", "1,-2", "-m", "1", "-k", "1"]);
        assert!(load_instance(&cli).is_err());
    }

    #[test]
    fn test_counts_require_days() {
        let result =
            Cli::try_parse_from(["posy", "-m", "1", "-k", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_days_conflict_with_file() {
        let result = Cli::try_parse_from(["posy", "--days", "1", "--file", "x.txt"]);
        assert!(result.is_err());
    }
}
