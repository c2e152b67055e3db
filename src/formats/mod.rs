//! File format adapters
//!
//! Adapters for genomic text formats. Only VCF is handled.

pub mod vcf;

pub use vcf::{filter_reader, filter_vcf, DataLine, FilterOptions, FilterStats};
