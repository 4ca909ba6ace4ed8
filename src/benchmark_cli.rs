// src/benchmark_cli.rs
// CLI benchmark runner - separated to avoid polluting main.rs

use chrono::Utc;
use env_logger::Env;

use crate::benchmark::runner::BenchmarkRunner;
use crate::config::ScanConfig;

pub fn run_benchmarks(args: &[String], config: &ScanConfig) {
    // Initialize logging for benchmarks
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("\n{}", "=".repeat(80));
    println!("BATCH-GCD BENCHMARK SUITE");
    println!("{}", "=".repeat(80));

    // Parse batch sizes from the command line, or use defaults
    let counts: Vec<usize> = if args.len() > 2 {
        args[2..]
            .iter()
            .filter_map(|s| s.parse::<usize>().ok())
            .collect()
    } else {
        vec![64, 256, 1024]
    };

    println!("\nBenchmarking batch sizes: {:?}", counts);

    let mut runner = BenchmarkRunner::new(&config.benchmark);
    runner.run_scan_benchmarks(&counts);
    runner.print_summary();

    // Save results to JSON
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("batch_gcd_bench_{}.json", timestamp);

    match runner.save_results(&filename) {
        Ok(_) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("Error saving results: {}", e),
    }
}
