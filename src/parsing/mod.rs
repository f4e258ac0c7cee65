//! Parsers for loading annotated genome records.
//!
//! This module provides the GenBank loader used by the comparison pipeline:
//!
//! - **GenBank flat files**: Read the first record of an annotated genome,
//!   keep its CDS features, and extract each feature's nucleotide sequence
//!
//! The aligner itself has no dependency on any file format; it consumes the
//! [`crate::core::GenomeRecord`] contract produced here, so alternative
//! loaders can be added without touching the matching code.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gbk_compare::parsing::genbank::parse_file;
//! use std::path::Path;
//!
//! let record = parse_file(Path::new("assembly.gbk")).unwrap();
//! println!("{}: {} CDS features", record.name, record.features.len());
//! ```

pub mod genbank;
