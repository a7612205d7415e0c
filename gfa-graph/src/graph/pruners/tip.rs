// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tip clipping: removes short dead-end branches off an otherwise-branching vertex.

use super::{coverage_of, Decision, PruneReport};
use crate::graph::Graph;
use crate::CoverageLookup;

/// Options controlling [`clip_tips`].
pub struct TipClipOptions<'a> {
    /// A tip must be shorter than `max_length + l.start_overlap()`. Setting this to `0` disables
    /// the pruner entirely (every vertex fails the length check).
    pub max_length: u64,
    /// If set, a tip's read count (looked up by segment name) must be `<= max_read_cnt` to be
    /// removed.
    pub max_read_cnt: Option<u64>,
    /// Read-count source for the `max_read_cnt` filter.
    pub read_count: Option<&'a dyn CoverageLookup>,
    /// If set, a tip's coverage must be below this threshold to be removed.
    pub cov_thr: Option<f64>,
    /// Coverage source for the `cov_thr` filter.
    pub coverage: Option<&'a dyn CoverageLookup>,
}

impl<'a> Default for TipClipOptions<'a> {
    fn default() -> Self {
        Self {
            max_length: 10_000,
            max_read_cnt: None,
            read_count: None,
            cov_thr: None,
            coverage: None,
        }
    }
}

/// Removes every tip: a vertex with no incoming arcs, exactly one outgoing arc to a vertex with
/// two or more incoming arcs, and a length shorter than `max_length + start_overlap`, per §4.5.
pub fn clip_tips(graph: &mut Graph, options: &TipClipOptions<'_>) -> PruneReport {
    let mut decisions = Vec::new();

    if options.max_length > 0 {
        for v in graph.directed_segments() {
            if graph.segment(v.segment()).removed() {
                continue;
            }
            if graph.incoming_link_cnt(v) > 0 || graph.outgoing_link_cnt(v) != 1 {
                continue;
            }
            let l = graph.unique_outgoing(v).expect("outgoing_link_cnt(v) == 1");
            if graph.incoming_link_cnt(l.end()) == 1 {
                continue;
            }

            if let (Some(max_read_cnt), Some(read_count)) = (options.max_read_cnt, options.read_count) {
                if let Some(cnt) = read_count.coverage(graph.segment_name(v.segment())) {
                    if cnt > max_read_cnt as f64 {
                        continue;
                    }
                }
            }
            if let (Some(cov_thr), Some(coverage)) = (options.cov_thr, options.coverage) {
                if coverage_of(graph, coverage, v.segment()) >= cov_thr {
                    continue;
                }
            }

            if graph.segment_length(v.segment()) < options.max_length + l.start_overlap() as u64 {
                decisions.push(Decision::DeleteSegment(v.segment()));
            }
        }
    }

    PruneReport::default().apply_all(graph, decisions)
}
