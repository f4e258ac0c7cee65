//! Feature alignment engine and similarity scoring.
//!
//! This module provides the core comparison functionality:
//!
//! - [`SimilarityOracle`]: The narrow scoring seam; given two features,
//!   reports normalized identity, signed length difference, and the
//!   match decision
//! - [`GlobalIdentityScorer`]: Production oracle over global pairwise
//!   alignment
//! - [`SkipAligner`]: Skip-tolerant feature aligner producing the ordered
//!   event stream
//! - [`report`]: Human-readable rendering of alignment events
//!
//! ## Alignment Algorithm
//!
//! The aligner walks both feature lists with two monotonic cursors. At each
//! step it enumerates lookahead offset pairs `(old_offset, new_offset)`
//! within the skip budget, smallest total skip first, and accepts the first
//! pair whose features the oracle calls a match. Skipped features become
//! one-sided events; an accepted pair becomes a match event. If no offset
//! pair within the budget matches, the run fails with
//! [`AlignmentError::Exhausted`] — the caller must re-invoke with a larger
//! budget or lower threshold.
//!
//! ## Identity
//!
//! Identity is the optimal global-alignment score under a permissive scheme
//! (match +1, everything else 0) scaled by the longer sequence's length, so
//! it penalizes length mismatch as well as content divergence.

pub mod aligner;
pub mod oracle;
pub mod report;

pub use aligner::{AlignmentError, AlignmentEvent, SkipAligner};
pub use oracle::{Comparison, GlobalIdentityScorer, SimilarityOracle};
