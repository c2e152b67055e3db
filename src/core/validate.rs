//! Run configuration and precondition checks
//!
//! Validation only inspects the filesystem; nothing is opened or created.

use crate::core::error::{ConfigError, ConfigResult};
use crate::core::genotype::UnrecognizedPolicy;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended by the block-gzip tool
pub const COMPRESSED_SUFFIX: &str = ".gz";

/// Suffix appended by the CSI indexer to the compressed file
pub const INDEX_SUFFIX: &str = ".gz.csi";

/// Input file used when none is given
pub const DEFAULT_INPUT: &str = "Genotypes.individuals_filtered.maf0.05.vcf.gz";

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "Genotypes.individuals_filtered.parent.of.origin.vcf";

/// Minimum samples per genotype class used when none is given
pub const DEFAULT_THRESHOLD: i64 = 50;

/// Everything a filtering run needs
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Compressed VCF to read
    pub input: PathBuf,
    /// Plain VCF to write, without the `.gz` suffix
    pub output: PathBuf,
    /// Minimum samples required in each genotype class; signed so that bad
    /// values reach the validator instead of the argument parser
    pub threshold: i64,
    pub unrecognized: UnrecognizedPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            threshold: DEFAULT_THRESHOLD,
            unrecognized: UnrecognizedPolicy::default(),
        }
    }
}

/// The three artifacts a run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Filtered plain-text VCF (consumed by the compressor)
    pub plain: PathBuf,
    /// `<plain>.gz`
    pub compressed: PathBuf,
    /// `<plain>.gz.csi`
    pub index: PathBuf,
}

impl OutputPaths {
    /// Derive the compressed and index paths from the plain output path
    pub fn new<P: AsRef<Path>>(plain: P) -> Self {
        let plain = plain.as_ref().to_path_buf();
        Self {
            compressed: with_suffix(&plain, COMPRESSED_SUFFIX),
            index: with_suffix(&plain, INDEX_SUFFIX),
            plain,
        }
    }
}

/// Append a literal suffix to a path (`Path::with_extension` would replace `.vcf`)
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Check the configuration, stopping at the first violated precondition
///
/// Order: threshold, input, output name, then each output artifact.
/// Returns the threshold as an unsigned count together with the output paths.
pub fn validate(config: &FilterConfig) -> ConfigResult<(u64, OutputPaths)> {
    let threshold = u64::try_from(config.threshold)
        .map_err(|_| ConfigError::NegativeThreshold(config.threshold))?;

    if !config.input.is_file() {
        return Err(ConfigError::InputNotFound(config.input.clone()));
    }

    let paths = OutputPaths::new(&config.output);

    for path in [&paths.plain, &paths.compressed, &paths.index] {
        // symlink_metadata so a dangling link still counts as taken
        if path.symlink_metadata().is_ok() {
            return Err(ConfigError::WouldOverwrite(path.clone()));
        }
    }

    if config.output.extension().map_or(false, |ext| ext == "gz") {
        return Err(ConfigError::CompressedOutputName(config.output.clone()));
    }

    Ok((threshold, paths))
}
