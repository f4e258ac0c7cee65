//! Core data types for annotation comparison.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CdsFeature`]: A single CDS annotation with product, coordinates, strand,
//!   and its extracted nucleotide sequence
//! - [`GenomeRecord`]: One annotated genome record and its ordered feature list
//! - [`Strand`]: Forward/reverse orientation of a feature
//!
//! Features are ordered by their position of occurrence in the source
//! annotation. They are immutable once loaded; the comparison run owns both
//! feature lists for its whole lifetime.

pub mod feature;

pub use feature::{CdsFeature, GenomeRecord, Strand};
