// src/benchmark/runner.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use crate::algorithms::batch_gcd::batch_gcd;
use crate::algorithms::coprime_resolver::resolve;
use crate::algorithms::naive::reference_gcd_list;
use crate::benchmark::moduli::synthesize_batch;
use crate::benchmark::results::{BenchmarkSuite, ScanBenchmark, StageTimings};
use crate::config::BenchmarkConfig;

pub struct BenchmarkRunner {
    suite: BenchmarkSuite,
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: &BenchmarkConfig) -> Self {
        BenchmarkRunner {
            suite: BenchmarkSuite::new(),
            config: config.clone(),
        }
    }

    /// Run scan benchmarks for the requested batch sizes
    pub fn run_scan_benchmarks(&mut self, counts: &[usize]) {
        println!("\n{}", "=".repeat(80));
        println!("Running Batch-GCD Scan Benchmarks");
        println!("{}", "=".repeat(80));

        for &count in counts {
            println!("\n{}", "-".repeat(80));
            println!(
                "Benchmarking scan of {} moduli ({} bits each)",
                count, self.config.modulus_bits
            );
            println!("{}", "-".repeat(80));

            let result = self.benchmark_single_scan(count);
            self.suite.add_scan_benchmark(result);
        }
    }

    /// Benchmark one synthetic batch end to end
    pub fn benchmark_single_scan(&self, count: usize) -> ScanBenchmark {
        let mut rng = StdRng::from_entropy();
        let start_total = Instant::now();

        let start_gen = Instant::now();
        let batch = synthesize_batch(
            &mut rng,
            count,
            self.config.modulus_bits as u64,
            self.config.shared_fraction,
        );
        let generation_ms = start_gen.elapsed().as_millis() as u64;
        println!(
            "  Generation: {} moduli, {} planted weak ({} ms)",
            count, batch.planted_weak, generation_ms
        );

        let start_batch = Instant::now();
        let gcds = batch_gcd(&batch.moduli);
        let batch_gcd_ms = start_batch.elapsed().as_millis() as u64;
        println!("  Batch GCD: {} ms", batch_gcd_ms);

        let start_resolve = Instant::now();
        let resolution = resolve(&batch.moduli, &gcds);
        let resolve_ms = start_resolve.elapsed().as_millis() as u64;
        println!(
            "  Resolve: {} ms ({} weak, {} needed pairwise work)",
            resolve_ms,
            resolution.weak_count(),
            resolution.needs_pairwise
        );

        // The quadratic baseline doubles as a correctness cross-check, but
        // only at sizes where it finishes in reasonable time.
        let (naive_ms, naive_agrees) = if count <= self.config.naive_compare_limit {
            let start_naive = Instant::now();
            let reference = reference_gcd_list(&batch.moduli);
            let ms = start_naive.elapsed().as_millis() as u64;
            let agrees = reference == gcds;
            println!("  Naive baseline: {} ms (agrees: {})", ms, agrees);
            (Some(ms), Some(agrees))
        } else {
            println!(
                "  Naive baseline skipped ({} > limit {})",
                count, self.config.naive_compare_limit
            );
            (None, None)
        };

        ScanBenchmark {
            moduli: count,
            modulus_bits: self.config.modulus_bits,
            planted_weak: batch.planted_weak,
            weak_found: resolution.weak_count(),
            needs_pairwise: resolution.needs_pairwise,
            pairwise_resolved: resolution.pairwise_resolved,
            total_ms: start_total.elapsed().as_millis() as u64,
            stage_times: StageTimings {
                generation_ms,
                batch_gcd_ms,
                resolve_ms,
            },
            naive_ms,
            naive_agrees,
        }
    }

    pub fn print_summary(&self) {
        self.suite.print_summary();
    }

    pub fn save_results(&self, path: &str) -> std::io::Result<()> {
        self.suite.save_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scan_records_consistent_counts() {
        let config = BenchmarkConfig {
            modulus_bits: 64,
            shared_fraction: 0.25,
            naive_compare_limit: 64,
        };
        let runner = BenchmarkRunner::new(&config);
        let result = runner.benchmark_single_scan(16);

        assert_eq!(result.moduli, 16);
        assert_eq!(result.planted_weak, 4);
        assert!(result.weak_found >= result.planted_weak);
        assert_eq!(result.naive_agrees, Some(true));
    }
}
