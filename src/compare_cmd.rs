//! Compare the two engine variants on the same bound.
//!
//! Runs each variant strictly sequentially (each to completion before the
//! next begins), checks that they agree on the sum, and reports a speedup
//! ratio oriented toward the faster variant.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::env::EnvironmentInfo;
use crate::core::schema::{RunConfig, RunRecord, TimingStat};
use crate::engine::EngineKind;
use crate::{
    BenchError, BenchResult, CommonMeta, JsonlWriter, capture_peak_mem, measure_engine,
    now_string, resolve_bound, write_json,
};

/// One variant's result within a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineMeasurement {
    pub engine: String,
    pub sum: u64,
    pub timing: TimingStat,
}

/// Full comparison result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareReport {
    #[serde(flatten)]
    pub meta: CommonMeta,
    pub engines: Vec<EngineMeasurement>,
    /// Whether every variant produced the identical sum
    pub agreement: bool,
    /// Name of the variant with the lower mean time, when measurable
    pub faster: Option<String>,
    /// max(mean) / min(mean); always >= 1, None when a mean rounds to zero
    pub speedup: Option<f64>,
    pub peak_memory_bytes: Option<u64>,
    pub system: Option<EnvironmentInfo>,
}

/// Run every engine variant on `bound` and build the comparison.
pub fn compare(bound: u64, iterations: u32, warmup: u32) -> BenchResult<CompareReport> {
    let mut engines = Vec::with_capacity(EngineKind::ALL.len());
    for kind in EngineKind::ALL {
        info!(engine = %kind, bound, "measuring");
        let (sum, samples) = measure_engine(kind, bound, iterations, warmup)?;
        engines.push(EngineMeasurement {
            engine: kind.name().to_string(),
            sum,
            timing: TimingStat::from_samples(&samples),
        });
    }

    let agreement = engines.windows(2).all(|w| w[0].sum == w[1].sum);

    // Orient the ratio toward the faster variant; no ratio when a clock
    // reading collapsed to zero.
    let (faster, speedup) = match engines
        .iter()
        .min_by(|a, b| a.timing.mean_ms.total_cmp(&b.timing.mean_ms))
    {
        Some(fastest) if engines.iter().all(|m| m.timing.mean_ms > 0.0) => {
            let slowest_ms = engines
                .iter()
                .map(|m| m.timing.mean_ms)
                .fold(f64::NEG_INFINITY, f64::max);
            (
                Some(fastest.engine.clone()),
                Some(slowest_ms / fastest.timing.mean_ms),
            )
        }
        _ => (None, None),
    };

    let meta = CommonMeta {
        name: "compare".to_string(),
        timestamp: now_string(),
        bound,
        cli_args: std::env::args().collect(),
    };

    Ok(CompareReport {
        meta,
        engines,
        agreement,
        faster,
        speedup,
        peak_memory_bytes: capture_peak_mem(),
        system: Some(EnvironmentInfo::detect()),
    })
}

fn format_text(report: &CompareReport) -> String {
    let mut out = String::new();
    for m in &report.engines {
        out.push_str(&format!(
            "[{}] Sum of primes up to {}: {}\n",
            m.engine, report.meta.bound, m.sum
        ));
        out.push_str(&format!(
            "[{}] Calculation took: {:.6} ms (mean over {} iteration(s))\n",
            m.engine, m.timing.mean_ms, m.timing.iterations
        ));
    }
    out.push('\n');
    if !report.agreement {
        out.push_str("WARNING: engine variants disagree on the sum\n");
    }
    match (&report.faster, report.speedup) {
        (Some(faster), Some(ratio)) => {
            let slower = report
                .engines
                .iter()
                .map(|m| m.engine.as_str())
                .find(|&name| name != faster.as_str())
                .unwrap_or("the other engine");
            out.push_str(&format!(
                "{} was {:.2} times faster than {}\n",
                faster, ratio, slower
            ));
        }
        _ => out.push_str("Timings too small to compute a speedup ratio\n"),
    }
    out
}

fn format_json(report: &CompareReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

fn append_records(report: &CompareReport, jsonl_path: &PathBuf, warmup: u32) -> BenchResult<()> {
    let writer = JsonlWriter::new(jsonl_path);
    for m in &report.engines {
        let mut record = RunRecord::new(
            m.engine.clone(),
            report.meta.bound,
            m.sum,
            report.system.clone().unwrap_or_default(),
            RunConfig {
                warmup_iterations: warmup,
                measured_iterations: m.timing.iterations,
            },
        );
        record.timing = Some(m.timing.clone());
        record.peak_memory_bytes = report.peak_memory_bytes;
        record.cli_args = report.meta.cli_args.clone();
        writer.append(&record)?;
    }
    Ok(())
}

/// Main entry point for the compare command
pub fn run(
    bound: Option<i64>,
    iterations: u32,
    warmup: u32,
    format: String,
    json_out: Option<PathBuf>,
    jsonl_out: Option<PathBuf>,
) -> BenchResult<CompareReport> {
    let bound = resolve_bound(bound)?;
    let report = compare(bound, iterations, warmup)?;

    if let Some(ref json_path) = json_out {
        write_json(json_path, &report)?;
        eprintln!("Wrote comparison report to {}", json_path.display());
    }

    if let Some(ref jsonl_path) = jsonl_out {
        append_records(&report, jsonl_path, warmup)?;
        eprintln!("Appended {} record(s) to {}", report.engines.len(), jsonl_path.display());
    }

    let output = match format.as_str() {
        "json" => format_json(&report),
        _ => format_text(&report),
    };
    print!("{}", output);

    // Cross-variant agreement is the harness's core correctness property;
    // surface a disagreement as a failure after the report is emitted.
    if !report.agreement {
        return Err(BenchError::Message(format!(
            "engine variants disagree for bound {bound}"
        )));
    }

    Ok(report)
}
