pub mod compare_cmd;
pub mod core;
pub mod engine;
pub mod storage;
pub mod suite_cmd;
pub mod sum_cmd;

use std::io::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::env::EnvironmentInfo;
use crate::core::schema::TimingStat;
use crate::engine::EngineKind;

pub use storage::jsonl::JsonlWriter;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonMeta {
    pub name: String,
    pub timestamp: String,
    pub bound: u64,
    pub cli_args: Vec<String>,
}

/// Report for a single-engine `sum` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumReport {
    #[serde(flatten)]
    pub meta: CommonMeta,
    pub engine: String,
    pub sum: u64,
    pub elapsed_ms: f64,
    pub peak_memory_bytes: Option<u64>,
    pub system: Option<EnvironmentInfo>,
    pub iterations: Option<TimingStat>,
}

// Shared helpers

pub fn now_string() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "".to_string())
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> BenchResult<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| BenchError::Message(e.to_string()))?;
    }
    let json = serde_json::to_vec_pretty(value).map_err(|e| BenchError::Message(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| BenchError::Message(e.to_string()))
}

#[cfg(feature = "mem")]
pub fn capture_peak_mem() -> Option<u64> {
    use sysinfo::{MemoryRefreshKind, RefreshKind, System};
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
    );
    sys.refresh_memory();
    Some(sys.total_memory() - sys.free_memory())
}

#[cfg(not(feature = "mem"))]
pub fn capture_peak_mem() -> Option<u64> {
    None
}

/// Resolve the bound from a CLI flag, or prompt the operator for one.
///
/// Negative values are treated as an empty range and clamped to 0; text that
/// does not parse as an integer is an `InvalidInput` error.
pub fn resolve_bound(bound: Option<i64>) -> BenchResult<u64> {
    let raw = match bound {
        Some(b) => b,
        None => prompt_bound()?,
    };
    if raw < 0 {
        tracing::debug!(bound = raw, "negative bound treated as empty range");
        return Ok(0);
    }
    Ok(raw as u64)
}

/// Run one engine with warmup and measured iterations.
///
/// Returns the computed sum and per-iteration wall-clock samples in
/// milliseconds (monotonic clock). Iterations must agree on the sum; the
/// engines are pure, so a mismatch between iterations is a hard error.
pub fn measure_engine(
    kind: EngineKind,
    bound: u64,
    iterations: u32,
    warmup: u32,
) -> BenchResult<(u64, Vec<f64>)> {
    for _ in 0..warmup {
        let _ = kind.sum_primes(bound);
    }

    let measured = iterations.max(1);
    let mut samples = Vec::with_capacity(measured as usize);
    let mut sum: Option<u64> = None;
    for _ in 0..measured {
        let start = std::time::Instant::now();
        let s = kind.sum_primes(bound);
        samples.push(start.elapsed().as_secs_f64() * 1000.0);
        match sum {
            None => sum = Some(s),
            Some(prev) if prev != s => {
                return Err(BenchError::Message(format!(
                    "engine {kind} returned {s} after {prev} for bound {bound}"
                )));
            }
            _ => {}
        }
    }
    Ok((sum.unwrap_or(0), samples))
}

fn prompt_bound() -> BenchResult<i64> {
    print!("Enter a number to sum primes up to: ");
    std::io::stdout()
        .flush()
        .map_err(|e| BenchError::Message(e.to_string()))?;
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| BenchError::Message(e.to_string()))?;
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| BenchError::InvalidInput(format!("please enter an integer, got {trimmed:?}")))
}
