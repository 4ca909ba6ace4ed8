// src/config/scan_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main scanner configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of threads for the parallel kernels (default: all cores)
    pub threads: Option<usize>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Benchmark-mode settings
    pub benchmark: BenchmarkConfig,
}

/// Settings for the synthetic benchmark suite (`--bench`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Bit length of each synthetic modulus (two primes of half this size)
    pub modulus_bits: usize,

    /// Fraction of moduli planted with a shared prime factor
    pub shared_fraction: f64,

    /// Run the quadratic baseline for comparison when the batch size is at
    /// most this many moduli
    pub naive_compare_limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            threads: None,
            log_level: "info".to_string(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            modulus_bits: 512,
            shared_fraction: 0.05,
            naive_compare_limit: 512,
        }
    }
}

impl ScanConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("benchmark.modulus_bits", 512)?
            .set_default("benchmark.shared_fraction", 0.05)?
            .set_default("benchmark.naive_compare_limit", 512)?;

        if Path::new("batch_gcd.toml").exists() {
            builder = builder.add_source(File::with_name("batch_gcd"));
        }

        // Override with environment variables (prefix: BATCH_GCD, nesting
        // separator "__", e.g. BATCH_GCD_BENCHMARK__MODULUS_BITS)
        builder = builder.add_source(
            Environment::with_prefix("BATCH_GCD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.threads, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.benchmark.modulus_bits, 512);
        assert_eq!(config.benchmark.shared_fraction, 0.05);
        assert_eq!(config.benchmark.naive_compare_limit, 512);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully fall back to defaults when no config file exists
        let config = ScanConfig::load().unwrap_or_else(|_| ScanConfig::default());
        assert_eq!(config.log_level, "info");
    }
}
