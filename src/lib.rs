//! genotype-filter - keep SNPs with every genotype class represented
//!
//! Filters a phased VCF so that only records where the homozygous-reference,
//! heterozygous and homozygous-alternate classes each reach a minimum number
//! of samples survive, then hands the result to `bgzip` and `bcftools index`.
//!
//! # Example
//!
//! ```ignore
//! use genotype_filter::{run, FilterConfig, PostProcessor};
//!
//! let config = FilterConfig { threshold: 10, ..FilterConfig::default() };
//! let summary = run(&config, Some(&PostProcessor::default()))?;
//! println!("kept {} of {}", summary.stats.retained, summary.stats.records);
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use self::core::{
    run, validate, ConfigError, ExternalToolError, FilterConfig, FilterError, Genotype,
    GenotypeTally, OutputPaths, PostProcessor, RunSummary, UnrecognizedPolicy,
};
pub use formats::vcf;
pub use formats::{filter_reader, filter_vcf, FilterOptions, FilterStats};
