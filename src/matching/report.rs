//! Human-readable rendering of alignment events.
//!
//! The text format is one block per event, each preceded by a blank line:
//!
//! ```text
//! Exact match
//!   old: DNA polymerase (100-400 +, 300 bp)
//!   new: DNA polymerase (100-400 +, 300 bp)
//!
//! Inexact match (93.25% ID, old seq longer)
//!   old: hypothetical protein (500-800 +, 300 bp)
//!   new: DNA ligase (500-790 +, 290 bp)
//!   no longer hypothetical
//!
//! In old but not in new:
//!   hypothetical protein (900-950 -, 50 bp)
//! ```

use std::fmt::Write;

use serde::Serialize;

use crate::core::feature::CdsFeature;
use crate::matching::aligner::AlignmentEvent;

/// Change in hypothetical-annotation status across a matched pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductTransition {
    StillHypothetical,
    NoLongerHypothetical,
    BecameHypothetical,
}

impl ProductTransition {
    /// Derive the transition for a matched pair; `None` when neither product
    /// mentions "hypothetical".
    #[must_use]
    pub fn between(old: &CdsFeature, new: &CdsFeature) -> Option<Self> {
        match (old.is_hypothetical(), new.is_hypothetical()) {
            (true, true) => Some(Self::StillHypothetical),
            (true, false) => Some(Self::NoLongerHypothetical),
            (false, true) => Some(Self::BecameHypothetical),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for ProductTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StillHypothetical => write!(f, "still hypothetical"),
            Self::NoLongerHypothetical => write!(f, "no longer hypothetical"),
            Self::BecameHypothetical => write!(f, "became hypothetical"),
        }
    }
}

/// Render one event as a text block, including the leading blank line.
#[must_use]
pub fn format_event(event: &AlignmentEvent) -> String {
    let mut out = String::new();

    match event {
        AlignmentEvent::Match {
            old,
            new,
            identity,
            length_diff,
        } => {
            if *identity >= 1.0 {
                out.push_str("\nExact match\n");
            } else {
                let length_note = match length_diff {
                    0 => "same length",
                    d if *d > 0 => "old seq longer",
                    _ => "new seq longer",
                };
                let _ = writeln!(
                    out,
                    "\nInexact match ({:.2}% ID, {length_note})",
                    identity * 100.0
                );
            }
            let _ = writeln!(out, "  old: {old}");
            let _ = writeln!(out, "  new: {new}");
            if let Some(transition) = ProductTransition::between(old, new) {
                let _ = writeln!(out, "  {transition}");
            }
        }
        AlignmentEvent::OldOnly { old } => {
            let _ = writeln!(out, "\nIn old but not in new:\n  {old}");
        }
        AlignmentEvent::NewOnly { new } => {
            let _ = writeln!(out, "\nIn new but not in old:\n  {new}");
        }
    }

    out
}

/// Render one event as a TSV line: `event  identity  length_diff  old  new`.
#[must_use]
pub fn format_event_tsv(event: &AlignmentEvent) -> String {
    match event {
        AlignmentEvent::Match {
            old,
            new,
            identity,
            length_diff,
        } => format!("match\t{identity:.4}\t{length_diff}\t{old}\t{new}"),
        AlignmentEvent::OldOnly { old } => format!("old_only\t\t\t{old}\t"),
        AlignmentEvent::NewOnly { new } => format!("new_only\t\t\t\t{new}"),
    }
}
