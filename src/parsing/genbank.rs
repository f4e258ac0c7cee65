use std::path::Path;

use gb_io::reader::SeqReader;
use gb_io::seq::{Location, Seq};
use gb_io::FeatureKind;
use thiserror::Error;
use tracing::debug;

use crate::core::feature::{CdsFeature, GenomeRecord, Strand};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GenBank parse error: {0}")]
    GenBank(String),

    #[error("no records found in GenBank file")]
    NoRecords,

    #[error("no CDS features found in record")]
    NoCdsFeatures,

    #[error("CDS at {start}-{end} has no product qualifier")]
    MissingProduct { start: u64, end: u64 },

    #[error("CDS at {start}-{end} has an empty sequence")]
    EmptyFeatureSequence { start: u64, end: u64 },
}

/// Parse a GenBank flat file and extract the CDS features of its first record.
///
/// Only the first record is read; multi-record comparison is out of scope.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::GenBank`
/// if the content is not valid GenBank, `ParseError::NoRecords` for an empty
/// file, `ParseError::NoCdsFeatures` if the record has no CDS annotations, or
/// `ParseError::MissingProduct` if a CDS lacks its `/product` qualifier.
pub fn parse_file(path: &Path) -> Result<GenomeRecord, ParseError> {
    let file = std::fs::File::open(path)?;

    let seq = SeqReader::new(file)
        .next()
        .ok_or(ParseError::NoRecords)?
        .map_err(|e| ParseError::GenBank(e.to_string()))?;

    let fallback_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());

    record_to_genome(&seq, &fallback_name)
}

/// Convert a gb-io record into a [`GenomeRecord`], keeping CDS features only.
///
/// Each feature's nucleotide sequence is extracted here, so downstream code
/// never needs the parent record again. Extraction follows the feature's
/// location, including `complement(...)` (reverse complemented) and
/// `join(...)` (concatenated spans).
///
/// # Errors
///
/// See [`parse_file`].
pub fn record_to_genome(seq: &Seq, fallback_name: &str) -> Result<GenomeRecord, ParseError> {
    let cds_kind = FeatureKind::from("CDS");
    let mut features = Vec::new();

    for feature in &seq.features {
        if feature.kind != cds_kind {
            continue;
        }

        let (start, end) = feature
            .location
            .find_bounds()
            .map_err(|e| ParseError::GenBank(e.to_string()))?;
        let (start, end) = (start.max(0) as u64, end.max(0) as u64);

        let product = feature
            .qualifier_values("product".into())
            .next()
            .map(str::to_string)
            .ok_or(ParseError::MissingProduct { start, end })?;

        let sequence = seq
            .extract_location(&feature.location)
            .map_err(|e| ParseError::GenBank(e.to_string()))?;
        if sequence.is_empty() {
            return Err(ParseError::EmptyFeatureSequence { start, end });
        }

        features.push(CdsFeature::new(
            product,
            start,
            end,
            location_strand(&feature.location),
            sequence,
        ));
    }

    if features.is_empty() {
        return Err(ParseError::NoCdsFeatures);
    }

    let name = seq
        .name
        .clone()
        .unwrap_or_else(|| fallback_name.to_string());

    debug!("loaded {} CDS features from record {}", features.len(), name);

    Ok(GenomeRecord::new(name, features))
}

/// Derive the strand from a feature location.
fn location_strand(location: &Location) -> Strand {
    match location {
        Location::Complement(_) => Strand::Reverse,
        _ => Strand::Forward,
    }
}
