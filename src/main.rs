//! genotype-filter CLI entry point
//!
//! Filters a phased VCF for SNPs with at least a minimum count in all three
//! genotype groups, then compresses and indexes the result.

use clap::{Parser, ValueEnum};
use genotype_filter::core::{
    run, FilterConfig, PostProcessor, UnrecognizedPolicy, DEFAULT_BCFTOOLS, DEFAULT_BGZIP,
    DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_THRESHOLD,
};
use std::path::PathBuf;
use std::time::Instant;

/// Handling of genotype tokens other than 0|0, 0|1, 1|0, 1|1 (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum UnrecognizedArg {
    /// Count them as heterozygous
    #[default]
    #[value(name = "het")]
    Het,
    /// Leave them out of every group
    #[value(name = "ignore")]
    Ignore,
    /// Drop any SNP that contains one
    #[value(name = "reject")]
    Reject,
}

impl From<UnrecognizedArg> for UnrecognizedPolicy {
    fn from(arg: UnrecognizedArg) -> Self {
        match arg {
            UnrecognizedArg::Het => UnrecognizedPolicy::Het,
            UnrecognizedArg::Ignore => UnrecognizedPolicy::Ignore,
            UnrecognizedArg::Reject => UnrecognizedPolicy::Reject,
        }
    }
}

#[derive(Parser)]
#[command(name = "genotype-filter")]
#[command(about = "Filters a vcf file for SNPs with at least a certain count in all three genotype groups. \
Warning: only works on vcf files where genotype is specified only by the phased GT flag \
(such as the standard 1000 genomes downloads).")]
#[command(version)]
struct Cli {
    /// Name of vcf file to be filtered
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Name of output vcf file (without .gz suffix)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Minimum count in genotype groups
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    threshold: i64,

    /// Handling of genotype tokens that are not a phased biallelic call
    #[arg(long, value_enum, default_value = "het")]
    unrecognized: UnrecognizedArg,

    /// Block-gzip program used to compress the output
    #[arg(long, default_value = DEFAULT_BGZIP)]
    bgzip: PathBuf,

    /// bcftools program used to index the compressed output
    #[arg(long, default_value = DEFAULT_BCFTOOLS)]
    bcftools: PathBuf,

    /// Leave the plain filtered VCF instead of compressing and indexing it
    #[arg(long)]
    no_postprocess: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let start = Instant::now();

    let config = FilterConfig {
        input: cli.input,
        output: cli.output,
        threshold: cli.threshold,
        unrecognized: cli.unrecognized.into(),
    };
    let post = PostProcessor::new(cli.bgzip, cli.bcftools);

    eprintln!("Filtering VCF file: {:?} -> {:?}", config.input, config.output);
    let summary = run(&config, (!cli.no_postprocess).then_some(&post))?;

    eprintln!("\n=== Filter Statistics ===");
    eprintln!("Header lines:    {}", summary.stats.header_lines);
    eprintln!("Total records:   {}", summary.stats.records);
    eprintln!("Retained:        {}", summary.stats.retained);
    eprintln!("Rejected:        {}", summary.stats.rejected);
    eprintln!("Unrecognized GT: {}", summary.stats.unrecognized_genotypes);
    if summary.compressed {
        eprintln!("Output:          {:?}", summary.paths.compressed);
        eprintln!("Index:           {:?}", summary.paths.index);
    } else {
        eprintln!("Output:          {:?}", summary.paths.plain);
    }
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
