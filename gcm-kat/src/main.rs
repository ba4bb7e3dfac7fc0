//! `gcm-kat`: run GCM known-answer suites against the reference engine.
//!
//! Exit status is 0 when every vector passes, 1 at the first mismatch (after
//! printing a dump to standard output) and 2 when a fixture cannot be loaded.

use clap::{Parser, ValueEnum};
use gcm_kat::{Harness, TestSuite, fixtures, rsp};
use gcm_ref::Strategy;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Run every vector against both strategies.
    #[default]
    Both,
    /// Compose-then-multiply only.
    Composed,
    /// Fused multiply-accumulate only.
    Fused,
}

impl StrategyArg {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            Self::Both => &Strategy::ALL,
            Self::Composed => &[Strategy::Composed],
            Self::Fused => &[Strategy::Fused],
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "gcm-kat",
    version,
    about = "Validate AES-GCM GHASH strategies against known-answer vectors"
)]
struct Args {
    /// GHASH strategy to validate.
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// NIST CAVP response file(s) to run after the built-in suites.
    #[arg(long, value_name = "FILE")]
    rsp: Vec<PathBuf>,

    /// Skip the compiled-in suites.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_builtin: bool,

    /// Only run suites whose name contains this string.
    #[arg(long, value_name = "SUBSTR")]
    suite: Option<String>,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn collect_suites(args: &Args) -> Result<Vec<TestSuite>, rsp::RspError> {
    let mut suites = if args.no_builtin {
        Vec::new()
    } else {
        fixtures::builtin_suites()
    };
    for path in &args.rsp {
        suites.extend(rsp::load(path)?);
    }
    if let Some(filter) = &args.suite {
        suites.retain(|s| s.name.contains(filter.as_str()));
    }
    Ok(suites)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let suites = match collect_suites(&args) {
        Ok(suites) => suites,
        Err(err) => {
            tracing::error!(error = %err, "failed to load fixtures");
            return ExitCode::from(2);
        }
    };
    if suites.is_empty() {
        tracing::warn!("no suites selected");
    }

    let harness = Harness::new(args.strategy.strategies().iter().copied());
    tracing::debug!(strategies = ?harness.strategies(), suites = suites.len(), "starting run");
    match harness.run(&suites) {
        Ok(summary) => {
            tracing::info!(
                suites = summary.suites_run,
                skipped = summary.suites_skipped,
                vectors = summary.vectors_run,
                "all vectors passed"
            );
            ExitCode::SUCCESS
        }
        Err(failure) => {
            println!("{failure}");
            ExitCode::FAILURE
        }
    }
}
