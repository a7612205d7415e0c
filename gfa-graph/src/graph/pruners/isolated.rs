// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Isolated-segment removal: drops short segments with no links on either end.

use super::{coverage_of, Decision, PruneReport};
use crate::graph::Graph;
use crate::{CoverageLookup, Direction};

/// Options controlling [`remove_isolated`].
pub struct IsolatedOptions<'a> {
    /// Only segments shorter than this are removed.
    pub max_length: u64,
    /// If set, only segments with coverage below this are removed.
    pub cov_thr: Option<f64>,
    /// Coverage source for the `cov_thr` filter.
    pub coverage: Option<&'a dyn CoverageLookup>,
}

impl<'a> Default for IsolatedOptions<'a> {
    fn default() -> Self {
        Self {
            max_length: 10_000,
            cov_thr: None,
            coverage: None,
        }
    }
}

/// Removes every segment with no incoming and no outgoing arcs (on either strand) that is
/// shorter than `max_length`, per §4.5.
pub fn remove_isolated(graph: &mut Graph, options: &IsolatedOptions<'_>) -> PruneReport {
    let mut decisions = Vec::new();

    for v in graph.directed_segments() {
        if v.direction() == Direction::Reverse {
            continue;
        }
        if graph.segment(v.segment()).removed() {
            continue;
        }
        if graph.incoming_link_cnt(v) + graph.outgoing_link_cnt(v) != 0 {
            continue;
        }
        if graph.segment_length(v.segment()) >= options.max_length {
            continue;
        }
        if let (Some(cov_thr), Some(coverage)) = (options.cov_thr, options.coverage) {
            if coverage_of(graph, coverage, v.segment()) >= cov_thr {
                continue;
            }
        }
        decisions.push(Decision::DeleteSegment(v.segment()));
    }

    PruneReport::default().apply_all(graph, decisions)
}
