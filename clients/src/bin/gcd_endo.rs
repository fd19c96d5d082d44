//! `gcd-endo` — Enumerates the GCD-endomorphisms of `{0..n}` and classifies
//! each by idempotence and i-regularity.
//!
//! **Usage:**
//! ```text
//! gcd-endo [--n <N>] [--limit <N>] [--format table|json] [--summary] [--verbose]
//! gcd-endo --check <MAP> [--format table|json]
//! ```
//!
//! The table goes to stdout; logs go to stderr and honor `RUST_LOG`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gcd_endo::config::{DEFAULT_LIMIT, DEFAULT_N};
use gcd_endo::{
    check, classify_all, enumerate_with_stats, report, AnalysisConfig, SelfMap, Summary,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Fixed-width text table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Enumerate and classify GCD-endomorphisms of {0..n}.
#[derive(Parser)]
#[command(
    name = "gcd-endo",
    about = "Enumerate GCD-endomorphisms of {0..n} and classify idempotence and i-regularity"
)]
struct Args {
    /// Largest domain element; the domain is {0, ..., n}.
    #[arg(short, long, default_value_t = DEFAULT_N)]
    n: usize,

    /// Refuse any n above this; the search visits (n+1)^(n+1) candidates.
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Append enumeration counters and classification totals.
    #[arg(long)]
    summary: bool,

    /// Check a single map such as `0,1,2` or `(0, 1, 2)` instead of enumerating.
    #[arg(long, value_name = "MAP")]
    check: Option<String>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn run_check(literal: &str, format: Format) -> Result<()> {
    let map: SelfMap = literal
        .parse()
        .with_context(|| format!("Invalid map literal: {literal}"))?;
    let verdict = check(&map);
    if !verdict.is_valid() {
        warn!(function = %map, "not a valid GCD-endomorphism");
    }

    match format {
        Format::Table => print!("{}", report::render_check(&verdict)),
        Format::Json => println!("{}", report::render_check_json(&verdict)?),
    }
    Ok(())
}

fn run_enumeration(args: &Args) -> Result<()> {
    let config = AnalysisConfig {
        n: args.n,
        limit: args.limit,
    };
    let domain = config.domain().context("Invalid configuration")?;

    info!(
        n = domain.max(),
        candidates = ?domain.search_space(),
        "enumerating GCD-endomorphisms"
    );
    let (maps, stats) = enumerate_with_stats(domain);
    let records = classify_all(domain, &maps);
    let summary = Summary::of(&records);
    info!(
        functions = summary.total,
        idempotent = summary.idempotent,
        i_regular = summary.i_regular,
        "classification done"
    );

    match args.format {
        Format::Table => {
            println!();
            print!("{}", report::render_table(&records));
            if args.summary {
                println!();
                print!("{}", report::render_summary(&summary, Some(&stats)));
            }
        }
        Format::Json => {
            let json = if args.summary {
                report::render_json(domain.max(), &records, Some(&summary), Some(&stats))?
            } else {
                report::render_json(domain.max(), &records, None, None)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.check {
        Some(literal) => run_check(literal, args.format),
        None => run_enumeration(&args),
    }
}
