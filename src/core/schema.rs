//! RunRecord schema v1 - canonical schema for all benchmark outputs.

use serde::{Deserialize, Serialize};

use super::env::EnvironmentInfo;

/// Schema version for forward compatibility
pub const SCHEMA_VERSION: u32 = 1;

/// Timing statistics for a measured engine run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingStat {
    pub iterations: u32,
    pub mean_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stddev_ms: Option<f64>,
    pub min_ms: f64,
    pub max_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p95_ms: Option<f64>,
}

impl TimingStat {
    /// Create TimingStat from a slice of sample times in milliseconds
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return TimingStat {
                iterations: 0,
                mean_ms: 0.0,
                median_ms: None,
                stddev_ms: None,
                min_ms: 0.0,
                max_ms: 0.0,
                p95_ms: None,
            };
        }

        let iterations = n as u32;
        let sum: f64 = samples.iter().sum();
        let mean_ms = sum / n as f64;

        let min_ms = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_ms = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let variance: f64 = samples.iter().map(|x| (x - mean_ms).powi(2)).sum::<f64>() / n as f64;
        let stddev_ms = Some(variance.sqrt());

        // Sort for median and percentiles
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median_ms = if n % 2 == 0 {
            Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        } else {
            Some(sorted[n / 2])
        };

        // p95: index = ceil(0.95 * n) - 1, clamped
        let p95_idx = ((0.95 * n as f64).ceil() as usize)
            .saturating_sub(1)
            .min(n - 1);
        let p95_ms = Some(sorted[p95_idx]);

        TimingStat {
            iterations,
            mean_ms,
            median_ms,
            stddev_ms,
            min_ms,
            max_ms,
            p95_ms,
        }
    }
}

/// Run configuration for benchmarks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub warmup_iterations: u32,
    pub measured_iterations: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            warmup_iterations: 0,
            measured_iterations: 1,
        }
    }
}

/// Canonical benchmark record - one engine run at one bound
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Unique identifier for this record
    pub record_id: String,

    /// ISO 8601 timestamp
    pub timestamp: String,

    /// Engine variant name ("scalar" or "strided")
    pub engine: String,

    /// Inclusive upper limit of the scanned range
    pub bound: u64,

    /// Sum of all primes in [2, bound]
    pub sum: u64,

    /// Environment information (CPU, OS, versions, etc.)
    pub env: EnvironmentInfo,

    /// Run configuration
    pub config: RunConfig,

    /// Timing across measured iterations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingStat>,

    /// Peak memory during the run, when sampled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_memory_bytes: Option<u64>,

    /// Command line arguments used
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cli_args: Vec<String>,
}

impl RunRecord {
    /// Create a new RunRecord with required fields
    pub fn new(engine: String, bound: u64, sum: u64, env: EnvironmentInfo, config: RunConfig) -> Self {
        // Record ID from wall clock nanos + compacted timestamp
        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let compact = if timestamp.len() >= 19 {
            timestamp[..19].replace([':', '-', 'T'], "")
        } else {
            String::new()
        };
        let record_id = format!("{nanos:x}-{compact}");

        RunRecord {
            schema_version: SCHEMA_VERSION,
            record_id,
            timestamp,
            engine,
            bound,
            sum,
            env,
            config,
            timing: None,
            peak_memory_bytes: None,
            cli_args: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_stat_from_samples() {
        let samples = vec![100.0, 110.0, 105.0, 115.0, 120.0];
        let stat = TimingStat::from_samples(&samples);

        assert_eq!(stat.iterations, 5);
        assert!((stat.mean_ms - 110.0).abs() < 0.001);
        assert_eq!(stat.min_ms, 100.0);
        assert_eq!(stat.max_ms, 120.0);

        // Median of [100, 105, 110, 115, 120] = 110
        assert_eq!(stat.median_ms, Some(110.0));

        // Stddev: sqrt((100 + 0 + 25 + 25 + 100) / 5) = sqrt(50) = 7.071...
        assert!((stat.stddev_ms.unwrap() - 7.071).abs() < 0.01);

        // p95 with 5 samples: index = ceil(0.95 * 5) - 1 = 4 -> 120
        assert_eq!(stat.p95_ms, Some(120.0));
    }

    #[test]
    fn test_timing_stat_empty_samples() {
        let samples: Vec<f64> = vec![];
        let stat = TimingStat::from_samples(&samples);

        assert_eq!(stat.iterations, 0);
        assert_eq!(stat.mean_ms, 0.0);
        assert!(stat.median_ms.is_none());
    }

    #[test]
    fn test_timing_stat_single_sample() {
        let samples = vec![42.0];
        let stat = TimingStat::from_samples(&samples);

        assert_eq!(stat.iterations, 1);
        assert_eq!(stat.mean_ms, 42.0);
        assert_eq!(stat.min_ms, 42.0);
        assert_eq!(stat.max_ms, 42.0);
        assert_eq!(stat.median_ms, Some(42.0));
        assert_eq!(stat.stddev_ms, Some(0.0));
    }

    #[test]
    fn test_run_record_new_fills_identity() {
        let record = RunRecord::new(
            "scalar".to_string(),
            100,
            1060,
            EnvironmentInfo::default(),
            RunConfig::default(),
        );
        assert_eq!(record.schema_version, SCHEMA_VERSION);
        assert!(!record.record_id.is_empty());
        assert_eq!(record.engine, "scalar");
        assert_eq!(record.bound, 100);
        assert_eq!(record.sum, 1060);
        assert!(record.timing.is_none());
    }
}
