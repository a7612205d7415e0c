// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unbalanced-link removal: drops outgoing arcs to a much-lower-coverage neighbour than the
//! vertex's best-covered neighbour, unless it is itself that best-covered neighbour.

use super::{coverage_of, Decision, PruneReport};
use crate::graph::Graph;
use crate::{CoverageLookup, Link};

/// Options controlling [`remove_unbalanced_links`].
pub struct UnbalancedOptions<'a> {
    /// A neighbour's coverage must exceed `floor(coverage_ratio * baseline_cov)` to survive,
    /// unless it is the best-covered neighbour.
    pub coverage_ratio: f64,
    /// Coverage source.
    pub coverage: &'a dyn CoverageLookup,
}

/// For every vertex, removes outgoing arcs to neighbours whose coverage is at or below
/// `floor(coverage_ratio * coverage(v))`, except the single neighbour with the highest coverage,
/// per §4.5.
pub fn remove_unbalanced_links(graph: &mut Graph, options: &UnbalancedOptions<'_>) -> PruneReport {
    let mut decisions = Vec::new();

    for v in graph.directed_segments() {
        if graph.segment(v.segment()).removed() {
            continue;
        }
        let outs: Vec<Link> = graph.outgoing_links(v).filter(|l| !l.removed()).collect();
        if outs.is_empty() {
            continue;
        }

        let baseline_cov = coverage_of(graph, options.coverage, v.segment());
        let threshold = (options.coverage_ratio * baseline_cov).floor();
        let max_out_nb_cov = outs
            .iter()
            .map(|l| coverage_of(graph, options.coverage, l.end().segment()))
            .fold(f64::MIN, f64::max);

        for l in &outs {
            let nb_cov = coverage_of(graph, options.coverage, l.end().segment());
            if nb_cov > threshold {
                continue;
            }
            if nb_cov == max_out_nb_cov {
                continue;
            }
            decisions.push(Decision::DeleteLink(*l));
        }
    }

    PruneReport::default().apply_all(graph, decisions)
}
