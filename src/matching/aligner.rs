use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::feature::CdsFeature;
use crate::matching::oracle::SimilarityOracle;

#[derive(Error, Debug)]
pub enum AlignmentError {
    /// No offset pair within the skip budget produced a match at the current
    /// cursor positions. Unrecoverable; the caller must re-invoke with a
    /// larger budget or a lower identity threshold.
    #[error(
        "failed to find alignment at old feature {old_index} / new feature {new_index}: \
         no pairing within the skip budget"
    )]
    Exhausted { old_index: usize, new_index: usize },
}

/// One atomic unit of comparison output.
///
/// The full ordered event stream accounts for both input lists: every
/// feature from either list appears in exactly one event, alone or paired.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlignmentEvent {
    /// A pair accepted by the oracle
    Match {
        old: CdsFeature,
        new: CdsFeature,
        identity: f64,
        length_diff: i64,
    },
    /// Feature present in the old annotation only
    OldOnly { old: CdsFeature },
    /// Feature present in the new annotation only
    NewOnly { new: CdsFeature },
}

/// Skip-tolerant aligner over two ordered feature lists.
///
/// Walks both lists with two monotonically advancing cursors. Each step is a
/// best-first greedy search over a bounded lookahead window: candidate
/// offset pairs are tried smallest total skip first, and the first pair the
/// oracle accepts decides the step. This is not a global optimum over the
/// remaining lists; it encodes the bias that the fewest features should be
/// skipped at each decision point.
pub struct SkipAligner<'a> {
    oracle: &'a dyn SimilarityOracle,
    skip_budget: usize,
}

impl<'a> SkipAligner<'a> {
    /// Create an aligner with the given oracle and skip budget.
    ///
    /// The skip budget bounds how many consecutive features may be bypassed
    /// on either side while searching for the next matching pair. A budget
    /// of zero can only align two already-empty lists.
    #[must_use]
    pub fn new(oracle: &'a dyn SimilarityOracle, skip_budget: usize) -> Self {
        Self {
            oracle,
            skip_budget,
        }
    }

    /// Align the two feature lists, pushing events in traversal order.
    ///
    /// Events already pushed when an error is returned are valid and final;
    /// callers that stream output need not suppress them.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError::Exhausted`] when no offset pair within the
    /// skip budget reconciles the lists at the current cursor positions. A
    /// trailing run of unmatched features longer than the budget on either
    /// side ends this way rather than draining gracefully; this mirrors the
    /// bounded-lookahead design rather than being an oversight worth fixing
    /// here, since a larger budget resolves it.
    pub fn align(
        &self,
        old: &[CdsFeature],
        new: &[CdsFeature],
        events: &mut Vec<AlignmentEvent>,
    ) -> Result<(), AlignmentError> {
        let offsets = offset_pairs(self.skip_budget);
        let mut old_i = 0usize;
        let mut new_i = 0usize;

        loop {
            if old_i >= old.len() && new_i >= new.len() {
                break;
            }

            match self.step(old, new, old_i, new_i, &offsets, events)? {
                Step::Accepted {
                    old_offset,
                    new_offset,
                } => {
                    // Move past the matched pair
                    old_i += old_offset + 1;
                    new_i += new_offset + 1;
                }
                Step::Finished => break,
            }
        }

        debug!(
            "alignment complete: {} events covering {} old / {} new features",
            events.len(),
            old.len(),
            new.len()
        );

        Ok(())
    }

    /// Scan the offset pairs in priority order and resolve one step.
    fn step(
        &self,
        old: &[CdsFeature],
        new: &[CdsFeature],
        old_i: usize,
        new_i: usize,
        offsets: &[(usize, usize)],
        events: &mut Vec<AlignmentEvent>,
    ) -> Result<Step, AlignmentError> {
        for &(old_offset, new_offset) in offsets {
            match (old.get(old_i + old_offset), new.get(new_i + new_offset)) {
                // Both sides exhausted at this lookahead: the lists are
                // simultaneously finished. Drain the skipped remainder and
                // stop.
                (None, None) => {
                    emit_skipped(old, new, old_i, new_i, old_offset, new_offset, events);
                    return Ok(Step::Finished);
                }
                (Some(old_feature), Some(new_feature)) => {
                    let cmp = self.oracle.compare(old_feature, new_feature);
                    if cmp.is_match {
                        trace!(
                            "accepted offsets ({old_offset}, {new_offset}) at \
                             cursors ({old_i}, {new_i}), identity {:.4}",
                            cmp.identity
                        );
                        emit_skipped(old, new, old_i, new_i, old_offset, new_offset, events);
                        events.push(AlignmentEvent::Match {
                            old: old_feature.clone(),
                            new: new_feature.clone(),
                            identity: cmp.identity,
                            length_diff: cmp.length_diff,
                        });
                        return Ok(Step::Accepted {
                            old_offset,
                            new_offset,
                        });
                    }
                }
                // One side out of range: this hypothesis cannot pair, reject
                _ => {}
            }
        }

        Err(AlignmentError::Exhausted {
            old_index: old_i,
            new_index: new_i,
        })
    }
}

enum Step {
    Accepted {
        old_offset: usize,
        new_offset: usize,
    },
    Finished,
}

/// Emit one-sided events for the features bypassed by an accepted offset pair.
fn emit_skipped(
    old: &[CdsFeature],
    new: &[CdsFeature],
    old_i: usize,
    new_i: usize,
    old_offset: usize,
    new_offset: usize,
    events: &mut Vec<AlignmentEvent>,
) {
    for feature in &old[old_i..old_i + old_offset] {
        events.push(AlignmentEvent::OldOnly {
            old: feature.clone(),
        });
    }
    for feature in &new[new_i..new_i + new_offset] {
        events.push(AlignmentEvent::NewOnly {
            new: feature.clone(),
        });
    }
}

/// All lookahead offset pairs within the budget, smallest total skip first,
/// ties broken by ascending old offset.
fn offset_pairs(skip_budget: usize) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (0..skip_budget)
        .flat_map(|o| (0..skip_budget).map(move |n| (o, n)))
        .collect();
    pairs.sort_by_key(|&(o, n)| (o + n, o));
    pairs
}
