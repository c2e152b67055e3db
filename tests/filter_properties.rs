//! Property-based tests for the genotype-balance filter

use genotype_filter::formats::vcf::{filter_reader, FilterOptions, FIXED_FIELDS};
use genotype_filter::{GenotypeTally, UnrecognizedPolicy};
use proptest::prelude::*;

/// Generate a sample genotype token, mostly phased calls with some noise
fn arb_genotype() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("0|0".to_string()),
        4 => Just("1|1".to_string()),
        2 => Just("0|1".to_string()),
        2 => Just("1|0".to_string()),
        1 => Just("./.".to_string()),
        1 => Just("0/1".to_string()),
        1 => Just(".|.".to_string()),
    ]
}

/// Generate a data line with its sample tokens
fn arb_data_line() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        (1u8..=22),
        1u64..10_000_000,
        prop::collection::vec(arb_genotype(), 0..30),
    )
        .prop_map(|(chrom, pos, samples)| {
            let mut fields = vec![format!("chr{}", chrom), pos.to_string()];
            fields.extend([".", "A", "T", ".", "PASS", ".", "GT"].map(String::from));
            fields.extend(samples.iter().cloned());
            (fields.join("\t"), samples)
        })
}

/// Generate a header line with optional trailing whitespace
fn arb_header_line() -> impl Strategy<Value = String> {
    ("##[a-zA-Z]{1,10}=[a-zA-Z0-9<>,=]{0,20}", "[ \t]{0,3}")
        .prop_map(|(body, trailing)| format!("{}{}", body, trailing))
}

fn filter_text(input: &str, options: FilterOptions) -> String {
    let mut out = Vec::new();
    filter_reader(input.as_bytes(), &mut out, &options).unwrap();
    String::from_utf8(out).unwrap()
}

fn count(samples: &[String], token: &str) -> u64 {
    samples.iter().filter(|s| s.as_str() == token).count() as u64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Header lines survive any threshold with only trailing whitespace removed
    #[test]
    fn prop_header_passthrough(header in arb_header_line(), threshold in 0u64..100) {
        let out = filter_text(&format!("{}\n", header), FilterOptions::new(threshold));
        prop_assert_eq!(out, format!("{}\n", header.trim_end()));
    }

    /// A record is kept iff min(hom_ref, het, hom_alt) >= threshold
    #[test]
    fn prop_retained_iff_all_groups_reach_threshold(
        (line, samples) in arb_data_line(),
        threshold in 0u64..8,
    ) {
        let hom_ref = count(&samples, "0|0");
        let hom_alt = count(&samples, "1|1");
        let het = samples.len() as u64 - hom_ref - hom_alt;
        let expected = hom_ref.min(het).min(hom_alt) >= threshold;

        let out = filter_text(&line, FilterOptions::new(threshold));
        prop_assert_eq!(!out.is_empty(), expected);
        if expected {
            prop_assert_eq!(out, format!("{}\n", line));
        }
    }

    /// Filtering filtered output again changes nothing
    #[test]
    fn prop_idempotent(
        lines in prop::collection::vec(arb_data_line(), 0..20),
        threshold in 0u64..4,
    ) {
        let mut input = String::from("##fileformat=VCFv4.2\n");
        for (line, _) in &lines {
            input.push_str(line);
            input.push('\n');
        }
        let options = FilterOptions::new(threshold);
        let once = filter_text(&input, options);
        let twice = filter_text(&once, options);
        prop_assert_eq!(once, twice);
    }

    /// Threshold zero keeps every data line
    #[test]
    fn prop_threshold_zero_keeps_everything(lines in prop::collection::vec(arb_data_line(), 0..20)) {
        let input: String = lines.iter().map(|(l, _)| format!("{}\n", l)).collect();
        let out = filter_text(&input, FilterOptions::new(0));
        prop_assert_eq!(out.lines().count(), lines.len());
    }

    /// Whitespace between fields is normalised to single tabs
    #[test]
    fn prop_retained_lines_are_tab_joined(
        samples in prop::collection::vec(arb_genotype(), 0..10),
        sep in "[ \t]{1,3}",
    ) {
        let mut fields = vec!["1", "500", ".", "C", "G", ".", ".", "."];
        fields.push("GT");
        fields.extend(samples.iter().map(|s| s.as_str()));
        let line = fields.join(sep.as_str());

        let out = filter_text(&line, FilterOptions::new(0));
        prop_assert_eq!(out, format!("{}\n", fields.join("\t")));
    }

    /// Reject never keeps a record that Ignore would drop, and never keeps unrecognised tokens
    #[test]
    fn prop_reject_is_stricter_than_ignore((line, samples) in arb_data_line(), threshold in 0u64..4) {
        let ignore = filter_text(&line, FilterOptions::new(threshold).with_policy(UnrecognizedPolicy::Ignore));
        let reject = filter_text(&line, FilterOptions::new(threshold).with_policy(UnrecognizedPolicy::Reject));
        if !reject.is_empty() {
            prop_assert_eq!(&reject, &ignore);
            let tally = GenotypeTally::from_samples(samples.iter().map(|s| s.as_str()), UnrecognizedPolicy::Reject);
            prop_assert_eq!(tally.unrecognized, 0);
        }
    }
}

#[test]
fn test_two_sample_example() {
    let line = "chr1 100 . A T . . . GT 0|0 1|1\n";

    assert_eq!(filter_text(line, FilterOptions::new(1)), "");
    assert_eq!(
        filter_text(line, FilterOptions::new(0)),
        "chr1\t100\t.\tA\tT\t.\t.\t.\tGT\t0|0\t1|1\n"
    );
}

#[test]
fn test_threshold_one_needs_each_group() {
    let samples = ["0|0", "0|1", "1|1"];
    for skip in 0..samples.len() {
        let kept: Vec<&str> = samples
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, s)| *s)
            .collect();
        let line = format!("1\t1\t.\tA\tG\t.\t.\t.\tGT\t{}\n", kept.join("\t"));
        assert_eq!(filter_text(&line, FilterOptions::new(1)), "", "missing {}", samples[skip]);
    }
    let line = format!("1\t1\t.\tA\tG\t.\t.\t.\tGT\t{}\n", samples.join("\t"));
    assert_eq!(filter_text(&line, FilterOptions::new(1)), line);
}

#[test]
fn test_fixed_field_count() {
    assert_eq!(FIXED_FIELDS, 9);
}
