// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Self-loop removal on branching, low-coverage vertices.

use super::{coverage_of, Decision, PruneReport};
use crate::graph::Graph;
use crate::{CoverageLookup, Direction};

/// Options controlling [`kill_loops`].
pub struct LoopKillOptions<'a> {
    /// A loop is only killed if its vertex's coverage is `<= max_base_coverage`.
    pub max_base_coverage: f64,
    /// Coverage source.
    pub coverage: &'a dyn CoverageLookup,
}

/// Deletes every self-loop arc (`l.end() == v`) on a branching vertex (`in_cnt >= 2 && out_cnt >=
/// 2`) whose coverage is at most `max_base_coverage`, per §4.5.
pub fn kill_loops(graph: &mut Graph, options: &LoopKillOptions<'_>) -> PruneReport {
    let mut decisions = Vec::new();

    for v in graph.directed_segments() {
        if v.direction() == Direction::Reverse {
            continue;
        }
        if graph.segment(v.segment()).removed() {
            continue;
        }
        if graph.outgoing_link_cnt(v) < 2 || graph.incoming_link_cnt(v) < 2 {
            continue;
        }
        if coverage_of(graph, options.coverage, v.segment()) > options.max_base_coverage {
            continue;
        }
        for l in graph.outgoing_links(v) {
            if !l.removed() && l.end() == v {
                decisions.push(Decision::DeleteLink(l));
            }
        }
    }

    PruneReport::default().apply_all(graph, decisions)
}
