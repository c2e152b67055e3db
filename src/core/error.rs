//! Error types for genotype-filter
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for genotype-filter operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Argument or filesystem precondition violated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading, decompressing or writing failed during filtering
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Compression or indexing tool failed
    #[error("External tool error: {0}")]
    ExternalTool(#[from] ExternalToolError),
}

/// Errors raised by the argument validator
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Threshold below zero
    #[error("minimum count must be zero or greater, got {0}")]
    NegativeThreshold(i64),

    /// Input path missing or not a regular file
    #[error("input file {} doesn't exist", .0.display())]
    InputNotFound(PathBuf),

    /// One of the output artifacts is already on disk
    #[error("{} would be overwritten", .0.display())]
    WouldOverwrite(PathBuf),

    /// Output name already carries the compression suffix
    #[error("output name {} must not end in .gz (the suffix is added after compression)", .0.display())]
    CompressedOutputName(PathBuf),
}

/// Errors raised while running the post-processing tools
#[derive(Debug, Error)]
pub enum ExternalToolError {
    /// The program could not be started at all
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The program exited unsuccessfully; `code` is `None` when killed by a signal
    #[error("{tool} exited with {}", describe_exit(.code))]
    Failed { tool: String, code: Option<i32> },

    /// The program reported success but its artifact is absent
    #[error("{tool} finished but {} was not created", .path.display())]
    MissingOutput { tool: String, path: PathBuf },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "a signal".to_string(),
    }
}

/// Result type alias for genotype-filter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Result type alias for validation
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for post-processing
pub type ToolResult<T> = std::result::Result<T, ExternalToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_messages_name_the_path() {
        let err = ConfigError::WouldOverwrite(PathBuf::from("out.vcf.gz"));
        assert_eq!(err.to_string(), "out.vcf.gz would be overwritten");

        let err = ConfigError::InputNotFound(PathBuf::from("missing.vcf.gz"));
        assert_eq!(err.to_string(), "input file missing.vcf.gz doesn't exist");
    }

    #[test]
    fn test_tool_failure_message() {
        let err = ExternalToolError::Failed { tool: "bgzip".to_string(), code: Some(2) };
        assert_eq!(err.to_string(), "bgzip exited with status 2");

        let err = ExternalToolError::Failed { tool: "bcftools".to_string(), code: None };
        assert_eq!(err.to_string(), "bcftools exited with a signal");
    }

    #[test]
    fn test_filter_error_wraps_config() {
        let err: FilterError = ConfigError::NegativeThreshold(-1).into();
        assert!(matches!(err, FilterError::Config(ConfigError::NegativeThreshold(-1))));
        assert!(err.to_string().contains("-1"));
    }
}
