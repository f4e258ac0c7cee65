use bio::alignment::pairwise::Aligner;

use crate::core::feature::CdsFeature;

/// Safely convert usize to f64 for identity calculations
///
/// Sequence lengths are well within the safe range of f64 mantissa precision.
#[inline]
fn len_to_f64(len: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        len as f64
    }
}

/// Outcome of comparing two features' sequences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Normalized identity in [0, 1]: aligned identical residues scaled by
    /// the longer sequence's length
    pub identity: f64,

    /// `old_len - new_len`; positive means the old sequence is longer
    pub length_diff: i64,

    /// Whether identity strictly exceeds the configured threshold
    pub is_match: bool,
}

impl Comparison {
    /// Identity of exactly 1.0, reported distinctly from merely passing the
    /// threshold
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.identity >= 1.0
    }
}

/// Scoring seam between the aligner and the pairwise alignment primitive.
///
/// Implementations must be pure functions of the two features and their own
/// configuration, so the aligner stays independently testable with a stub.
pub trait SimilarityOracle {
    fn compare(&self, old: &CdsFeature, new: &CdsFeature) -> Comparison;
}

/// Production oracle: global pairwise alignment with a permissive scheme.
///
/// Scoring is match = +1 with mismatches and gaps free, so the alignment
/// score is the maximum number of identical residues pairable under optimal
/// global alignment, independent of gap placement. Identity divides that by
/// the longer sequence's length; a perfectly aligned prefix of a longer
/// sequence therefore still scores below 1.0.
#[derive(Debug, Clone, Copy)]
pub struct GlobalIdentityScorer {
    threshold: f64,
}

impl GlobalIdentityScorer {
    /// Create a scorer with the given match identity threshold in (0, 1].
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl SimilarityOracle for GlobalIdentityScorer {
    fn compare(&self, old: &CdsFeature, new: &CdsFeature) -> Comparison {
        let (s1, s2) = (old.sequence.as_slice(), new.sequence.as_slice());
        let longer = s1.len().max(s2.len());

        let identity = if longer == 0 {
            0.0
        } else {
            let score = |a: u8, b: u8| i32::from(a == b);
            let mut aligner = Aligner::with_capacity(s1.len(), s2.len(), 0, 0, &score);
            f64::from(aligner.global(s1, s2).score) / len_to_f64(longer)
        };

        Comparison {
            identity,
            length_diff: s1.len() as i64 - s2.len() as i64,
            // Strict inequality: identity equal to the threshold is not a match
            is_match: identity > self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feature::Strand;

    fn feature(seq: &[u8]) -> CdsFeature {
        CdsFeature::new("test", 0, seq.len() as u64, Strand::Forward, seq.to_vec())
    }

    #[test]
    fn test_identical_sequences_are_exact() {
        let scorer = GlobalIdentityScorer::new(0.7);
        let cmp = scorer.compare(&feature(b"ATGCATGCAT"), &feature(b"ATGCATGCAT"));
        assert_eq!(cmp.identity, 1.0);
        assert!(cmp.is_exact());
        assert!(cmp.is_match);
        assert_eq!(cmp.length_diff, 0);
    }

    #[test]
    fn test_identity_normalized_by_longer_length() {
        // The shorter sequence aligns perfectly but identity is still
        // penalized by the length difference: 8 / 10.
        let scorer = GlobalIdentityScorer::new(0.7);
        let cmp = scorer.compare(&feature(b"ATGCATGCAT"), &feature(b"ATGCATGC"));
        assert!((cmp.identity - 0.8).abs() < 1e-12);
        assert!(!cmp.is_exact());
        assert!(cmp.is_match);
        assert_eq!(cmp.length_diff, 2);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Identity is exactly 0.8; a threshold of 0.8 must reject it.
        let at = GlobalIdentityScorer::new(0.8);
        let cmp = at.compare(&feature(b"ATGCATGCAT"), &feature(b"ATGCATGC"));
        assert!(!cmp.is_match);

        let below = GlobalIdentityScorer::new(0.79);
        assert!(below.compare(&feature(b"ATGCATGCAT"), &feature(b"ATGCATGC")).is_match);
    }

    #[test]
    fn test_dissimilar_sequences_do_not_match() {
        let scorer = GlobalIdentityScorer::new(0.7);
        let cmp = scorer.compare(&feature(b"AAAAAAAAAA"), &feature(b"TTTTTTTTTT"));
        assert!(!cmp.is_match);
        assert!(cmp.identity < 0.7);
    }

    #[test]
    fn test_length_diff_sign() {
        let scorer = GlobalIdentityScorer::new(0.5);
        let cmp = scorer.compare(&feature(b"ATGC"), &feature(b"ATGCATGC"));
        assert_eq!(cmp.length_diff, -4);
    }

    #[test]
    fn test_indels_are_tolerated() {
        // One deleted base out of ten: the other nine still align, and gaps
        // cost nothing, so identity is 9/10.
        let scorer = GlobalIdentityScorer::new(0.7);
        let cmp = scorer.compare(&feature(b"ATGCATGCAT"), &feature(b"ATGCTGCAT"));
        assert!((cmp.identity - 0.9).abs() < 1e-12);
        assert!(cmp.is_match);
        assert_eq!(cmp.length_diff, 1);
    }
}
