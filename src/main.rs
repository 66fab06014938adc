#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use prime_bench::engine::EngineKind;
use prime_bench::{compare_cmd, suite_cmd, sum_cmd};

#[derive(Parser, Debug)]
#[command(name = "prime-bench")]
#[command(about = "Benchmark harness comparing trial-division prime summation engines", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set PRIME_BENCH_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sum all primes up to a bound with one engine variant
    Sum {
        /// Engine variant to run
        #[arg(long, value_enum, default_value_t = EngineKind::Strided)]
        engine: EngineKind,
        /// Inclusive upper bound (prompts on stdin when omitted)
        #[arg(long)]
        bound: Option<i64>,
        /// Number of measured iterations to run
        #[arg(long, default_value_t = 1)]
        iterations: u32,
        /// Number of warmup iterations to run before measuring
        #[arg(long, default_value_t = 0)]
        warmup: u32,
        /// Write machine-readable JSON report to this file
        #[arg(long)]
        json: Option<std::path::PathBuf>,
        /// Append a run record to this JSONL file
        #[arg(long)]
        jsonl: Option<std::path::PathBuf>,
    },

    /// Run both engine variants sequentially and report the speedup ratio
    Compare {
        /// Inclusive upper bound (prompts on stdin when omitted)
        #[arg(long)]
        bound: Option<i64>,
        /// Number of measured iterations to run per engine
        #[arg(long, default_value_t = 1)]
        iterations: u32,
        /// Number of warmup iterations to run before measuring
        #[arg(long, default_value_t = 0)]
        warmup: u32,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
        /// Write machine-readable JSON report to this file
        #[arg(long)]
        json: Option<std::path::PathBuf>,
        /// Append one run record per engine to this JSONL file
        #[arg(long)]
        jsonl: Option<std::path::PathBuf>,
    },

    /// Run comparisons for every bound listed in a YAML config
    Suite {
        /// Path to suite config (bounds, iterations, warmup)
        #[arg(long)]
        config: std::path::PathBuf,
        /// Append run records to this JSONL file
        #[arg(long)]
        jsonl: Option<std::path::PathBuf>,
        /// Write a pretty-JSON summary of all comparisons to this file
        #[arg(long)]
        summary: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("PRIME_BENCH_LOG").unwrap_or_else(|_| {
        if verbose {
            "prime_bench=debug".to_string()
        } else {
            "prime_bench=info".to_string()
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Sum {
            engine,
            bound,
            iterations,
            warmup,
            json,
            jsonl,
        } => sum_cmd::run(engine, bound, iterations, warmup, json, jsonl),
        Commands::Compare {
            bound,
            iterations,
            warmup,
            format,
            json,
            jsonl,
        } => compare_cmd::run(bound, iterations, warmup, format, json, jsonl).map(|_| ()),
        Commands::Suite {
            config,
            jsonl,
            summary,
        } => suite_cmd::run(config, jsonl, summary),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
