use std::path::PathBuf;

use tracing::info;

use crate::core::env::EnvironmentInfo;
use crate::core::schema::{RunConfig, RunRecord, TimingStat};
use crate::engine::EngineKind;
use crate::{
    BenchResult, CommonMeta, JsonlWriter, SumReport, capture_peak_mem, measure_engine, now_string,
    resolve_bound, write_json,
};

pub fn run(
    engine: EngineKind,
    bound: Option<i64>,
    iterations: u32,
    warmup: u32,
    json_out: Option<PathBuf>,
    jsonl_out: Option<PathBuf>,
) -> BenchResult<()> {
    let bound = resolve_bound(bound)?;

    info!(engine = %engine, bound, "summing primes");
    let (sum, samples) = measure_engine(engine, bound, iterations, warmup)?;
    let timing = TimingStat::from_samples(&samples);
    let elapsed_ms = timing.mean_ms;

    let cli_args: Vec<String> = std::env::args().collect();
    let meta = CommonMeta {
        name: "sum".to_string(),
        timestamp: now_string(),
        bound,
        cli_args: cli_args.clone(),
    };
    let report = SumReport {
        meta,
        engine: engine.name().to_string(),
        sum,
        elapsed_ms,
        peak_memory_bytes: capture_peak_mem(),
        system: Some(EnvironmentInfo::detect()),
        iterations: Some(timing.clone()),
    };

    if let Some(json_path) = json_out {
        write_json(&json_path, &report)?;
    }

    if let Some(jsonl_path) = jsonl_out {
        let mut record = RunRecord::new(
            engine.name().to_string(),
            bound,
            sum,
            report.system.clone().unwrap_or_default(),
            RunConfig {
                warmup_iterations: warmup,
                measured_iterations: iterations.max(1),
            },
        );
        record.timing = Some(timing);
        record.peak_memory_bytes = report.peak_memory_bytes;
        record.cli_args = cli_args;
        JsonlWriter::new(&jsonl_path).append(&record)?;
    }

    // Human summary
    println!(
        "[{}] Sum of primes up to {}: {}",
        report.engine, bound, report.sum
    );
    println!(
        "[{}] Calculation took: {:.6} ms (mean over {} iteration(s))",
        report.engine,
        report.elapsed_ms,
        samples.len()
    );

    Ok(())
}
