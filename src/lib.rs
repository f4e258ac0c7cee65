//! # gbk-compare
//!
//! A library for comparing CDS annotations between two versions of an
//! annotated genome.
//!
//! After reannotating an assembly, or annotating two closely related
//! assemblies, it is useful to know which genes persisted, which were gained
//! or lost, and which changed. Coordinates alone are unreliable for this:
//! small assembly edits shift every downstream position. `gbk-compare`
//! instead pairs features by pairwise sequence identity, walking both
//! annotations in order and tolerating bounded local insertions and
//! deletions on either side.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gbk_compare::{GlobalIdentityScorer, SkipAligner};
//! use gbk_compare::parsing::genbank::parse_file;
//! use std::path::Path;
//!
//! let old = parse_file(Path::new("old.gbk")).unwrap();
//! let new = parse_file(Path::new("new.gbk")).unwrap();
//!
//! let oracle = GlobalIdentityScorer::new(0.7);
//! let aligner = SkipAligner::new(&oracle, 10);
//!
//! let mut events = Vec::new();
//! aligner.align(&old.features, &new.features, &mut events).unwrap();
//!
//! for event in &events {
//!     print!("{}", gbk_compare::matching::report::format_event(event));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Feature and record data types
//! - [`parsing`]: GenBank loader
//! - [`matching`]: Similarity oracle and skip-tolerant aligner
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::feature::{CdsFeature, GenomeRecord, Strand};
pub use matching::aligner::{AlignmentError, AlignmentEvent, SkipAligner};
pub use matching::oracle::{Comparison, GlobalIdentityScorer, SimilarityOracle};
pub use matching::report::ProductTransition;
