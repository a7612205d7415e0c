// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shortcut removal: drops a low-coverage branch when an alternative unambiguous path reaches
//! the same source through better-covered vertices.

use super::{coverage_of, Decision, PruneReport};
use crate::graph::Graph;
use crate::{CoverageLookup, DirectedSegment};
use std::collections::HashSet;

/// Options controlling [`remove_shortcuts`].
pub struct ShortcutOptions<'a> {
    /// Both `v` and the candidate `w` must have coverage strictly below this.
    pub max_base_coverage: f64,
    /// Every internal vertex of the alternative backward path must have coverage `>=` this.
    pub min_path_coverage: f64,
    /// Coverage source.
    pub coverage: &'a dyn CoverageLookup,
}

/// Walks backward from `w` while `unique_incoming` holds and every visited vertex (including
/// `w` itself, but not `v`) has coverage `>= min_path_coverage`. Returns whether the walk reaches
/// `v`. Grounded on `UnambiguousBackwardPath` in
/// `examples/original_source/src/shortcut_remover.cpp`, which gates each step on coverage rather
/// than being a plain reachability walk -- distinct from the unqualified
/// [`super::super::traversal::unambiguous_backward_path`].
fn unambiguous_backward_path_covered(
    graph: &Graph,
    coverage: &dyn CoverageLookup,
    mut w: DirectedSegment,
    v: DirectedSegment,
    min_path_coverage: f64,
) -> bool {
    let mut used_links = HashSet::new();
    while w != v {
        let Some(l) = graph.unique_incoming(w) else {
            return false;
        };
        if coverage_of(graph, coverage, w.segment()) < min_path_coverage {
            return false;
        }
        if !used_links.insert(l.link_id()) {
            return false;
        }
        w = l.start();
    }
    true
}

/// Whether some sibling predecessor of `w` other than `v` (and not itself branching downstream)
/// reaches `v` by an unambiguous, coverage-gated backward path.
fn has_unambiguous_alternative(
    graph: &Graph,
    coverage: &dyn CoverageLookup,
    w: DirectedSegment,
    v: DirectedSegment,
    min_path_coverage: f64,
) -> bool {
    graph.incoming_links(w).filter(|l| !l.removed()).any(|l| {
        let w1 = l.start();
        if w1 == v || graph.outgoing_link_cnt(w1) > 1 {
            return false;
        }
        unambiguous_backward_path_covered(graph, coverage, w1, v, min_path_coverage)
    })
}

/// Removes outgoing arcs out of a low-coverage branching vertex `v` when the arc's end `w` is
/// also low-coverage and some other, unambiguous, better-covered path reaches back to `v`, per
/// §4.5.
///
/// The end's coverage check here follows the text of §4.5 ("end w also below
/// max_base_coverage"); the matching clause in `shortcut_remover.cpp` re-checks `v`'s own
/// coverage a second time instead, which reads as a copy/paste slip in the original rather than
/// intentional behavior -- see `DESIGN.md`.
pub fn remove_shortcuts(graph: &mut Graph, options: &ShortcutOptions<'_>) -> PruneReport {
    let mut decisions = Vec::new();

    for v in graph.directed_segments() {
        if graph.segment(v.segment()).removed() {
            continue;
        }
        if graph.outgoing_link_cnt(v) < 2 {
            continue;
        }
        if coverage_of(graph, options.coverage, v.segment()) >= options.max_base_coverage {
            continue;
        }

        for l in graph.outgoing_links(v) {
            if l.removed() {
                continue;
            }
            let w = l.end();
            if coverage_of(graph, options.coverage, w.segment()) >= options.max_base_coverage {
                continue;
            }
            if has_unambiguous_alternative(graph, options.coverage, w, v, options.min_path_coverage) {
                decisions.push(Decision::DeleteLink(l));
            }
        }
    }

    PruneReport::default().apply_all(graph, decisions)
}
