// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weak-link removal: drops outgoing arcs whose overlap is too small to trust, always keeping
//! at least the strongest one.

use super::{Decision, PruneReport};
use crate::graph::Graph;
use crate::Link;

/// Options controlling [`remove_weak_links`].
pub struct WeakLinkOptions {
    /// An outgoing arc is weak if `max(start_overlap, end_overlap) < min_overlap`.
    pub min_overlap: u32,
    /// Skip a deletion that would leave its target with zero incoming arcs.
    pub prevent_deadends: bool,
}

/// Removes weak outgoing arcs from every vertex, per §4.5. The single strongest outgoing arc
/// (first in storage order on ties) is always kept, even if it is itself weak.
pub fn remove_weak_links(graph: &mut Graph, options: &WeakLinkOptions) -> PruneReport {
    let mut decisions = Vec::new();

    for v in graph.directed_segments() {
        if graph.segment(v.segment()).removed() {
            continue;
        }
        let outs: Vec<Link> = graph.outgoing_links(v).filter(|l| !l.removed()).collect();
        if outs.is_empty() {
            continue;
        }

        let max_ovl = outs.iter().map(Link::max_overlap).max().unwrap_or(0);
        let strongest = outs.iter().position(|l| l.max_overlap() == max_ovl);

        for (i, l) in outs.iter().enumerate() {
            if l.max_overlap() >= options.min_overlap {
                continue;
            }
            if max_ovl < options.min_overlap && Some(i) == strongest {
                continue;
            }
            if options.prevent_deadends && graph.incoming_link_cnt(l.end()) == 1 {
                continue;
            }
            decisions.push(Decision::DeleteLink(*l));
        }
    }

    PruneReport::default().apply_all(graph, decisions)
}
