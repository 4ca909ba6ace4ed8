// src/benchmark/results.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageTimings {
    pub generation_ms: u64,
    pub batch_gcd_ms: u64,
    pub resolve_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanBenchmark {
    pub moduli: usize,
    pub modulus_bits: usize,
    pub planted_weak: usize,
    pub weak_found: usize,
    pub needs_pairwise: usize,
    pub pairwise_resolved: usize,
    pub total_ms: u64,
    pub stage_times: StageTimings,
    /// Quadratic-baseline runtime, when the batch was small enough to run it
    pub naive_ms: Option<u64>,
    /// Whether the baseline reproduced the batch-GCD output exactly
    pub naive_agrees: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: DateTime<Utc>,
    pub threads: usize,
    pub scan_benchmarks: Vec<ScanBenchmark>,
}

impl BenchmarkSuite {
    pub fn new() -> Self {
        BenchmarkSuite {
            timestamp: Utc::now(),
            threads: rayon::current_num_threads(),
            scan_benchmarks: Vec::new(),
        }
    }

    pub fn add_scan_benchmark(&mut self, result: ScanBenchmark) {
        self.scan_benchmarks.push(result);
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!("BENCHMARK SUITE RESULTS");
        println!("{}", "=".repeat(80));
        println!("\nTimestamp: {}", self.timestamp);
        println!("Threads: {}", self.threads);

        if self.scan_benchmarks.is_empty() {
            println!("\nNo scan benchmarks recorded.");
            return;
        }

        println!(
            "\n{:>8} {:>6} {:>8} {:>6} {:>8} {:>9} {:>11} {:>9}",
            "moduli", "bits", "planted", "weak", "gen ms", "batch ms", "resolve ms", "naive ms"
        );
        for b in &self.scan_benchmarks {
            println!(
                "{:>8} {:>6} {:>8} {:>6} {:>8} {:>9} {:>11} {:>9}",
                b.moduli,
                b.modulus_bits,
                b.planted_weak,
                b.weak_found,
                b.stage_times.generation_ms,
                b.stage_times.batch_gcd_ms,
                b.stage_times.resolve_ms,
                b.naive_ms
                    .map(|ms| ms.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
    }
}
