use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::info;

use crate::core::schema::{RunConfig, RunRecord};
use crate::{BenchError, BenchResult, JsonlWriter, compare_cmd, resolve_bound, write_json};

#[derive(Debug, Deserialize)]
struct SuiteConfig {
    bounds: Vec<i64>,
    iterations: Option<u32>,
    warmup: Option<u32>,
}

pub fn run(
    config_path: PathBuf,
    jsonl_out: Option<PathBuf>,
    summary_out: Option<PathBuf>,
) -> BenchResult<()> {
    let bytes = std::fs::read(&config_path).map_err(|e| BenchError::Message(e.to_string()))?;
    let cfg: SuiteConfig = serde_yaml::from_slice(&bytes).map_err(|e| BenchError::Message(e.to_string()))?;

    if cfg.bounds.is_empty() {
        return Err(BenchError::InvalidInput(format!(
            "no bounds listed in {}",
            config_path.display()
        )));
    }

    let iterations = cfg.iterations.unwrap_or(1);
    let warmup = cfg.warmup.unwrap_or(0);
    let jsonl = jsonl_out.map(JsonlWriter::new);

    let mut results: Vec<JsonValue> = Vec::new();

    for &raw_bound in cfg.bounds.iter() {
        let bound = resolve_bound(Some(raw_bound))?;
        info!(bound, iterations, warmup, "suite: comparing engines");
        let report = compare_cmd::compare(bound, iterations, warmup)?;

        if !report.agreement {
            return Err(BenchError::Message(format!(
                "engine variants disagree for bound {bound}"
            )));
        }

        if let Some(writer) = jsonl.as_ref() {
            for m in &report.engines {
                let mut record = RunRecord::new(
                    m.engine.clone(),
                    bound,
                    m.sum,
                    report.system.clone().unwrap_or_default(),
                    RunConfig {
                        warmup_iterations: warmup,
                        measured_iterations: m.timing.iterations,
                    },
                );
                record.timing = Some(m.timing.clone());
                record.peak_memory_bytes = report.peak_memory_bytes;
                writer.append(&record)?;
            }
        }

        match (&report.faster, report.speedup) {
            (Some(faster), Some(ratio)) => {
                println!(
                    "bound={}: sum={} ({} {:.2}x faster)",
                    bound, report.engines[0].sum, faster, ratio
                );
            }
            _ => println!("bound={}: sum={}", bound, report.engines[0].sum),
        }

        let value = serde_json::to_value(&report)
            .map_err(|e| BenchError::Message(format!("failed to serialize report: {e}")))?;
        results.push(value);
    }

    if let Some(p) = summary_out {
        let summary = serde_json::json!({ "results": results });
        write_json(&p, &summary)?;
        eprintln!("Wrote suite summary to {}", p.display());
    }

    Ok(())
}
