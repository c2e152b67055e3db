//! Phased genotype classification and per-record tallies
//!
//! Only the phased diploid GT convention is understood: `0|0`, `0|1`, `1|0`
//! and `1|1`. Everything else is an unrecognised token whose fate is decided
//! by an [`UnrecognizedPolicy`].

/// Genotype class of a single sample call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genotype {
    /// `0|0`
    HomRef,
    /// `0|1` or `1|0`
    Het,
    /// `1|1`
    HomAlt,
    /// Any other token (unphased, missing, multi-allelic, extra FORMAT keys)
    Unrecognized,
}

impl Genotype {
    /// Classify a sample field by exact token match
    pub fn classify(token: &str) -> Self {
        match token {
            "0|0" => Genotype::HomRef,
            "1|1" => Genotype::HomAlt,
            "0|1" | "1|0" => Genotype::Het,
            _ => Genotype::Unrecognized,
        }
    }
}

/// What to do with sample tokens that are not a recognised phased call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnrecognizedPolicy {
    /// Count them as heterozygous
    #[default]
    Het,
    /// Leave them out of every category
    Ignore,
    /// Reject any record containing one
    Reject,
}

/// Per-record genotype counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenotypeTally {
    pub hom_ref: u64,
    pub het: u64,
    pub hom_alt: u64,
    /// Tokens that matched no phased call, whatever the policy did with them
    pub unrecognized: u64,
}

impl GenotypeTally {
    /// Tally a sequence of sample fields
    pub fn from_samples<'a, I>(samples: I, policy: UnrecognizedPolicy) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = Self::default();
        for sample in samples {
            tally.add(Genotype::classify(sample), policy);
        }
        tally
    }

    /// Add one classified sample
    pub fn add(&mut self, genotype: Genotype, policy: UnrecognizedPolicy) {
        match genotype {
            Genotype::HomRef => self.hom_ref += 1,
            Genotype::Het => self.het += 1,
            Genotype::HomAlt => self.hom_alt += 1,
            Genotype::Unrecognized => {
                self.unrecognized += 1;
                if policy == UnrecognizedPolicy::Het {
                    self.het += 1;
                }
            }
        }
    }

    /// Smallest of the three category counts
    pub fn min_count(&self) -> u64 {
        self.hom_ref.min(self.het).min(self.hom_alt)
    }

    /// True when every category holds at least `threshold` samples
    ///
    /// Under [`UnrecognizedPolicy::Reject`] a record with any unrecognised
    /// token never passes.
    pub fn passes(&self, threshold: u64, policy: UnrecognizedPolicy) -> bool {
        if policy == UnrecognizedPolicy::Reject && self.unrecognized > 0 {
            return false;
        }
        self.min_count() >= threshold
    }
}
