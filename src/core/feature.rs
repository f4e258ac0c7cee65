use serde::{Deserialize, Serialize};

/// Orientation of a feature on its parent sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// A single CDS annotation from a GenBank record.
///
/// Coordinates are 0-based half-open `[start, end)` on the parent sequence.
/// The nucleotide subsequence is extracted from the parent record at load
/// time (reverse complemented for reverse-strand features), so a feature is
/// self-contained and immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdsFeature {
    /// Product description (the `/product` qualifier)
    pub product: String,

    /// Start coordinate, 0-based inclusive
    pub start: u64,

    /// End coordinate, 0-based exclusive
    pub end: u64,

    /// Strand the CDS lies on
    pub strand: Strand,

    /// Extracted nucleotide sequence of the CDS
    #[serde(skip)]
    pub sequence: Vec<u8>,
}

impl CdsFeature {
    pub fn new(
        product: impl Into<String>,
        start: u64,
        end: u64,
        strand: Strand,
        sequence: Vec<u8>,
    ) -> Self {
        Self {
            product: product.into(),
            start,
            end,
            strand,
            sequence,
        }
    }

    /// Span of the feature in bases
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the product annotates a hypothetical protein
    #[must_use]
    pub fn is_hypothetical(&self) -> bool {
        self.product.to_lowercase().contains("hypothetical")
    }
}

/// One-line description: `product (start-end strand, len bp)`
impl std::fmt::Display for CdsFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}-{} {}, {} bp)",
            self.product,
            self.start,
            self.end,
            self.strand,
            self.len()
        )
    }
}

/// One annotated genome record: its name and the ordered list of CDS features
/// in their order of occurrence in the source annotation.
#[derive(Debug, Clone)]
pub struct GenomeRecord {
    /// Record name (LOCUS name, or the file stem if absent)
    pub name: String,

    /// CDS features in annotation order
    pub features: Vec<CdsFeature>,
}

impl GenomeRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, features: Vec<CdsFeature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(product: &str, start: u64, end: u64, strand: Strand) -> CdsFeature {
        CdsFeature::new(product, start, end, strand, vec![b'A'; (end - start) as usize])
    }

    #[test]
    fn test_feature_length() {
        let f = feature("DNA polymerase", 100, 250, Strand::Forward);
        assert_eq!(f.len(), 150);
        assert!(!f.is_empty());
    }

    #[test]
    fn test_hypothetical_detection() {
        assert!(feature("hypothetical protein", 0, 30, Strand::Forward).is_hypothetical());
        assert!(feature("Hypothetical Protein", 0, 30, Strand::Forward).is_hypothetical());
        assert!(!feature("DNA polymerase", 0, 30, Strand::Forward).is_hypothetical());
    }

    #[test]
    fn test_one_line_display() {
        let f = feature("terminase large subunit", 10, 40, Strand::Reverse);
        assert_eq!(f.to_string(), "terminase large subunit (10-40 -, 30 bp)");
    }

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
    }
}
