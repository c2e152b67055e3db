//! Core filtering functionality
//!
//! This module contains argument validation, genotype classification,
//! compression-aware I/O, the external tool runner and the run driver.

mod error;
pub mod external;
pub mod genotype;
pub mod io;
pub mod pipeline;
pub mod validate;

pub use error::{
    ConfigError, ConfigResult, ExternalToolError, FilterError, Result, ToolResult,
};
pub use external::{PostProcessor, ToolCommand, DEFAULT_BCFTOOLS, DEFAULT_BGZIP};
pub use genotype::{Genotype, GenotypeTally, UnrecognizedPolicy};
pub use io::{
    create_output, detect_compression, open_input, CompressionFormat, LineIterator,
    DEFAULT_BUFFER_SIZE,
};
pub use pipeline::{run, RunSummary};
pub use validate::{
    validate, with_suffix, FilterConfig, OutputPaths, COMPRESSED_SUFFIX, DEFAULT_INPUT,
    DEFAULT_OUTPUT, DEFAULT_THRESHOLD, INDEX_SUFFIX,
};
