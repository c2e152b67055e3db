//! Validate, filter, post-process
//!
//! The three stages run strictly in order. The filter stage owns and closes
//! its output before the compressor is started.

use crate::core::error::Result;
use crate::core::external::PostProcessor;
use crate::core::validate::{validate, FilterConfig, OutputPaths};
use crate::formats::vcf::{filter_vcf, FilterOptions, FilterStats};

/// Outcome of a complete run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: FilterStats,
    pub paths: OutputPaths,
    /// False when post-processing was skipped
    pub compressed: bool,
}

/// Run all stages; `post = None` stops after writing the plain VCF
pub fn run(config: &FilterConfig, post: Option<&PostProcessor>) -> Result<RunSummary> {
    let (threshold, paths) = validate(config)?;

    let options = FilterOptions::new(threshold).with_policy(config.unrecognized);
    log::info!(
        "filtering {:?} -> {:?} (threshold={}, unrecognized={:?})",
        config.input,
        paths.plain,
        threshold,
        options.unrecognized
    );

    let stats = filter_vcf(&config.input, &paths.plain, &options)?;

    if stats.unrecognized_genotypes > 0 {
        log::warn!(
            "{} sample genotypes were not one of 0|0, 0|1, 1|0, 1|1 (policy: {:?})",
            stats.unrecognized_genotypes,
            options.unrecognized
        );
    }

    let compressed = match post {
        Some(post) => {
            post.run(&paths)?;
            true
        }
        None => false,
    };

    Ok(RunSummary {
        stats,
        paths,
        compressed,
    })
}
