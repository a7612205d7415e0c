// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Low-coverage segment removal.

use super::{coverage_of, Decision, PruneReport};
use crate::graph::Graph;
use crate::{CoverageLookup, Direction};

/// Options controlling [`remove_low_coverage`].
pub struct LowCoverageOptions<'a> {
    /// Only segments no longer than this are removed.
    pub max_length: u64,
    /// A segment is removed when its coverage is strictly below this.
    pub cov_thr: f64,
    /// Coverage source.
    pub coverage: &'a dyn CoverageLookup,
}

/// Removes every segment no longer than `max_length` with coverage below `cov_thr`, per §4.5.
pub fn remove_low_coverage(graph: &mut Graph, options: &LowCoverageOptions<'_>) -> PruneReport {
    let mut decisions = Vec::new();

    for v in graph.directed_segments() {
        if v.direction() == Direction::Reverse {
            continue;
        }
        if graph.segment(v.segment()).removed() {
            continue;
        }
        if graph.segment_length(v.segment()) > options.max_length {
            continue;
        }
        if coverage_of(graph, options.coverage, v.segment()) < options.cov_thr {
            decisions.push(Decision::DeleteSegment(v.segment()));
        }
    }

    PruneReport::default().apply_all(graph, decisions)
}
