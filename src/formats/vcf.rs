//! VCF genotype-balance filter
//!
//! Streams a VCF once, passing header lines through and keeping only data
//! records in which every genotype class reaches the minimum sample count.

use crate::core::genotype::{GenotypeTally, UnrecognizedPolicy};
use crate::core::io::{create_output, open_input, LineIterator};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Number of fixed columns before the first sample (CHROM..FORMAT)
pub const FIXED_FIELDS: usize = 9;

/// Filter settings for a single pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Minimum samples in each of hom-ref, het and hom-alt
    pub threshold: u64,
    pub unrecognized: UnrecognizedPolicy,
}

impl FilterOptions {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: UnrecognizedPolicy) -> Self {
        self.unrecognized = policy;
        self
    }
}

/// Filtering statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterStats {
    pub header_lines: usize,
    /// Data records seen
    pub records: usize,
    pub retained: usize,
    pub rejected: usize,
    /// Sample tokens that were not a recognised phased call
    pub unrecognized_genotypes: u64,
}

/// Whitespace-split view of a data line
pub struct DataLine<'a> {
    fields: Vec<&'a str>,
}

impl<'a> DataLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        Self {
            fields: line.split_whitespace().collect(),
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Sample fields (index 9 onward); empty when the line is short
    pub fn samples(&self) -> &[&'a str] {
        self.fields.get(FIXED_FIELDS..).unwrap_or(&[])
    }

    pub fn tally(&self, policy: UnrecognizedPolicy) -> GenotypeTally {
        GenotypeTally::from_samples(self.samples().iter().copied(), policy)
    }

    /// Write fields joined by single tabs, newline-terminated
    pub fn write_tab_joined<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                out.write_all(b"\t")?;
            }
            out.write_all(field.as_bytes())?;
        }
        out.write_all(b"\n")
    }
}

/// True for header and meta-information lines
pub fn is_header(line: &str) -> bool {
    line.starts_with('#')
}

/// Decide one data line; returns its tally and whether it is kept
pub fn evaluate_line(line: &str, options: &FilterOptions) -> (GenotypeTally, bool) {
    let tally = DataLine::parse(line).tally(options.unrecognized);
    let keep = tally.passes(options.threshold, options.unrecognized);
    (tally, keep)
}

/// Filter a VCF stream
///
/// Header lines are written with trailing whitespace stripped. Retained data
/// lines are re-emitted with single tab separators. One line is held at a
/// time.
pub fn filter_reader<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &FilterOptions,
) -> io::Result<FilterStats> {
    let mut stats = FilterStats::default();
    let mut lines = LineIterator::new(reader);

    while let Some(line) = lines.next_line() {
        let line = line?;

        if is_header(line) {
            writer.write_all(line.trim_end().as_bytes())?;
            writer.write_all(b"\n")?;
            stats.header_lines += 1;
            continue;
        }

        stats.records += 1;

        let record = DataLine::parse(line);
        let tally = record.tally(options.unrecognized);
        stats.unrecognized_genotypes += tally.unrecognized;

        if tally.passes(options.threshold, options.unrecognized) {
            record.write_tab_joined(writer)?;
            stats.retained += 1;
        } else {
            stats.rejected += 1;
        }
    }

    writer.flush()?;
    Ok(stats)
}

/// Filter a (compressed) VCF file into a new plain-text VCF
///
/// The output must not already exist. Both files are closed when this
/// returns, on success or error; a failed run may leave a partial output.
pub fn filter_vcf<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &FilterOptions,
) -> io::Result<FilterStats> {
    let reader = open_input(input.as_ref())?;
    let mut writer = create_output(output.as_ref())?;

    let stats = filter_reader(reader, &mut writer, options)?;

    // into_inner surfaces the final flush error instead of losing it in Drop
    writer.into_inner().map_err(|e| e.into_error())?;

    log::debug!("filter pass finished: {:?}", stats);
    Ok(stats)
}
