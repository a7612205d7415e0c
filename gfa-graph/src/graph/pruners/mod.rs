// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural pruners, per §4.5: every pruner scans the graph under an immutable borrow, collects
//! a list of [`Decision`]s, then applies them against a mutable borrow and calls `cleanup`.
//! Two-pass rather than delete-while-iterating, since the adjacency ranges `outgoing_links`/
//! `incoming_links` borrow from `Graph` and a delete call needs `&mut Graph`.

mod bulge;
mod isolated;
mod loop_kill;
mod low_coverage;
mod nongenomic;
mod shortcut;
mod tip;
mod unbalanced;
mod weak_link;

pub use bulge::{remove_simple_bulges, BulgeOptions};
pub use isolated::{remove_isolated, IsolatedOptions};
pub use loop_kill::{kill_loops, LoopKillOptions};
pub use low_coverage::{remove_low_coverage, LowCoverageOptions};
pub use nongenomic::{remove_nongenomic_links, NongenomicOptions};
pub use shortcut::{remove_shortcuts, ShortcutOptions};
pub use tip::{clip_tips, TipClipOptions};
pub use unbalanced::{remove_unbalanced_links, UnbalancedOptions};
pub use weak_link::{remove_weak_links, WeakLinkOptions};

use super::Graph;
use crate::{Link, SegmentId};

/// A single deletion decided by a pruner's scan pass.
#[derive(Copy, Clone, Debug)]
pub enum Decision {
    /// Nothing to do for this candidate.
    Keep,
    /// Delete this link (and its twin).
    DeleteLink(Link),
    /// Delete this segment (and every incident arc).
    DeleteSegment(SegmentId),
}

/// Per-run deletion counts, returned by every pruner so callers can report what happened.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PruneReport {
    /// Segments deleted this run.
    pub deleted_segments: usize,
    /// Links deleted this run.
    pub deleted_links: usize,
}

impl PruneReport {
    fn apply(&mut self, graph: &mut Graph, decision: Decision) {
        match decision {
            Decision::Keep => {}
            Decision::DeleteLink(l) => {
                graph.delete_link(l);
                self.deleted_links += 1;
            }
            Decision::DeleteSegment(id) => {
                graph.delete_segment(id);
                self.deleted_segments += 1;
            }
        }
    }

    fn apply_all(mut self, graph: &mut Graph, decisions: Vec<Decision>) -> Self {
        for decision in decisions {
            self.apply(graph, decision);
        }
        graph.cleanup();
        self
    }
}

fn coverage_of(graph: &Graph, coverage: &dyn crate::CoverageLookup, id: SegmentId) -> f64 {
    coverage.coverage(graph.segment_name(id)).unwrap_or(0.0)
}
