// src/main.rs

use batch_gcd::algorithms;
use batch_gcd::benchmark_cli;
use batch_gcd::config::ScanConfig;
use batch_gcd::core::ingest::read_moduli;
use env_logger::Env;
use log::info;
use num::One;
use std::io;

fn main() {
    // Load configuration first (before logging is initialized)
    let config = ScanConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        ScanConfig::default()
    });

    let args: Vec<String> = std::env::args().collect();

    // Check for --bench flag
    if args.len() > 1 && args[1] == "--bench" {
        benchmark_cli::run_benchmarks(&args, &config);
        return;
    }

    if args.len() > 1 {
        eprintln!("Usage: {} < moduli.hex", args[0]);
        eprintln!("       {} --bench [batch_sizes...]", args[0]);
        eprintln!("Reads whitespace-separated hex RSA moduli from stdin and");
        eprintln!("reports every modulus sharing a prime factor with another.");
        std::process::exit(1);
    }

    // Initialize logging based on config (overridable by BATCH_GCD_LOG_LEVEL)
    let log_level = std::env::var("BATCH_GCD_LOG_LEVEL").unwrap_or_else(|_| config.log_level.clone());
    let env = Env::default()
        .filter_or("BATCH_GCD_LOG_LEVEL", log_level)
        .write_style_or("BATCH_GCD_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    // Configure the rayon pool backing the parallel kernels
    let num_threads = config.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .expect("Failed to configure thread pool");

    info!("================================================================================");
    info!("BATCH-GCD SCANNER CONFIGURATION");
    info!("================================================================================");
    info!("Threads: {} (total cores: {})", num_threads, num_cpus::get());
    info!("Log level: {}", config.log_level);
    info!("================================================================================");
    info!("");

    // Read hex moduli from stdin, one whitespace-separated entry each
    let stdin = io::stdin();
    let ingest = read_moduli(stdin.lock()).unwrap_or_else(|e| {
        eprintln!("Error reading moduli from stdin: {}", e);
        std::process::exit(1);
    });
    info!(
        "Read {} moduli ({} invalid entries skipped, {} zero/negative entries rejected)",
        ingest.accepted, ingest.skipped, ingest.rejected
    );

    if ingest.moduli.is_empty() {
        info!("No moduli to scan.");
        return;
    }

    let outcome = algorithms::scan(&ingest.moduli);

    let one = num::BigInt::one();
    for i in 0..ingest.moduli.len() {
        if outcome.gcds[i] != one {
            eprintln!(
                "Found vulnerable modulus on line {}: {:x} with smallest co-factor {:x}",
                i + 1,
                ingest.moduli[i],
                outcome.resolution.cofactors[i]
            );
        }
    }

    info!("");
    info!("Scan complete: {} weak moduli, {} required pairwise work, {} still unresolved",
        outcome.resolution.weak_count(),
        outcome.resolution.needs_pairwise,
        outcome.resolution.still_unresolved()
    );
}
