// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded BFS over the bidirected graph, extracting the induced subgraph around a set of named
//! segments. Grounded on `CollectNeighborhood`/`Go` in
//! `examples/original_source/src/neighborhood.cpp`.

use super::Graph;
use crate::{DirectedSegment, Direction, Link, LinkId, SegmentId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Relaxes `v`'s recorded depth to `depth` if that's an improvement (or it had none). Returns
/// whether it improved, i.e. whether `v` should be (re-)expanded.
fn relax(considered: &mut HashMap<DirectedSegment, u32>, v: DirectedSegment, depth: u32) -> bool {
    match considered.get(&v) {
        Some(&d) if d <= depth => false,
        _ => {
            considered.insert(v, depth);
            true
        }
    }
}

/// Extracts the induced subgraph reachable within `radius` edges (outgoing or incoming) from any
/// segment named in `nodes_of_interest`, per §4.6.
///
/// Every directed segment's complement is marked reached at the same depth the moment the
/// segment itself is: an undirected node is "in the neighborhood" the instant either of its
/// strands is, which keeps the induced S/L output symmetric without separately walking both
/// strands of every vertex.
pub fn extract_neighborhood(
    graph: &Graph,
    nodes_of_interest: &HashSet<String>,
    radius: u32,
) -> Graph {
    let mut considered: HashMap<DirectedSegment, u32> = HashMap::new();
    let mut queue: VecDeque<(DirectedSegment, u32)> = VecDeque::new();

    for v in graph.directed_segments() {
        if v.direction() == Direction::Reverse {
            continue;
        }
        if nodes_of_interest.contains(graph.segment_name(v.segment())) {
            relax(&mut considered, v, 0);
            relax(&mut considered, v.complement(), 0);
            queue.push_back((v, 0));
        }
    }

    while let Some((v, depth)) = queue.pop_front() {
        if considered.get(&v) != Some(&depth) {
            continue;
        }
        if depth >= radius {
            continue;
        }
        let next_depth = depth + 1;

        for l in graph.outgoing_links(v).filter(|l| !l.removed()) {
            if relax(&mut considered, l.end(), next_depth) {
                relax(&mut considered, l.end().complement(), next_depth);
                queue.push_back((l.end(), next_depth));
            }
        }
        for l in graph.incoming_links(v).filter(|l| !l.removed()) {
            if relax(&mut considered, l.start(), next_depth) {
                relax(&mut considered, l.start().complement(), next_depth);
                queue.push_back((l.start(), next_depth));
            }
        }
    }

    induced_subgraph(graph, &considered)
}

fn induced_subgraph(graph: &Graph, considered: &HashMap<DirectedSegment, u32>) -> Graph {
    let mut new_segments = Vec::new();
    let mut old_to_new: HashMap<SegmentId, SegmentId> = HashMap::new();

    for v in graph.directed_segments() {
        if v.direction() == Direction::Reverse {
            continue;
        }
        if !considered.contains_key(&v) {
            continue;
        }
        let new_id = SegmentId::new(new_segments.len());
        old_to_new.insert(v.segment(), new_id);
        new_segments.push(graph.segment(v.segment()).clone());
    }

    let mut new_arcs = Vec::new();
    for l in graph.canonical_links() {
        if l.removed() {
            continue;
        }
        if !considered.contains_key(&l.start()) || !considered.contains_key(&l.end()) {
            continue;
        }
        let (Some(&new_start_seg), Some(&new_end_seg)) =
            (old_to_new.get(&l.start().segment()), old_to_new.get(&l.end().segment()))
        else {
            continue;
        };

        let new_start = DirectedSegment::new(new_start_seg, l.start().direction());
        let new_end = DirectedSegment::new(new_end_seg, l.end().direction());
        let link_id = LinkId::new(new_arcs.len() / 2);
        let forward = Link::new(new_start, new_end, l.start_overlap(), l.end_overlap(), link_id);
        let twin = forward.complement();
        new_arcs.push(forward);
        new_arcs.push(twin);
    }

    Graph::from_parts(new_segments, new_arcs)
}
