// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure functions over a [`Graph`] reference. None of these mutate the graph; all of them guard
//! against cycles via an explicit visited set, never a length bound (design note, §9).

use super::Graph;
use crate::{DirectedSegment, Link, Path, SegmentId};
use std::collections::HashSet;

/// The unique outgoing arc from `v`, if extending through it stays non-branching on both ends:
/// `v` has exactly one live outgoing arc `l`, and `l.end()` has exactly one live incoming arc
/// (which must then be `l`).
pub fn non_branching_extension(graph: &Graph, v: DirectedSegment) -> Option<Link> {
    let l = graph.unique_outgoing(v)?;
    graph.unique_incoming(l.end())?;
    Some(l)
}

/// The maximal non-branching path starting at `v`, extended by repeated
/// [`non_branching_extension`]. Stops the instant the next arc would revisit a segment id
/// already on the path (either strand), treating that as a cycle.
pub fn non_branching_forward(graph: &Graph, v: DirectedSegment) -> Path {
    let mut path = Path::single(v);
    let mut visited: HashSet<SegmentId> = HashSet::new();
    visited.insert(v.segment());
    loop {
        let cur = path.last().expect("path is never empty");
        let Some(l) = non_branching_extension(graph, cur) else {
            break;
        };
        if !visited.insert(l.end().segment()) {
            break;
        }
        path.extend(l);
    }
    path
}

/// The maximal non-branching path through `v`: the forward walk from `v`, prefixed by the
/// backward walk from `v.complement()` (reversed and complemented so it arrives at `v`).
///
/// If the backward half would loop back into a segment the forward half already visited, it's
/// dropped -- merging it in would revisit a segment id, which every traversal here treats as a
/// cycle -- and the result is just the forward walk.
pub fn non_branching_path(graph: &Graph, v: DirectedSegment) -> Path {
    let forward = non_branching_forward(graph, v);
    let backward = non_branching_forward(graph, v.complement()).complement();

    let prefix_len = backward.segments().len().saturating_sub(1);
    let prefix = &backward.segments()[..prefix_len];

    let forward_ids: HashSet<SegmentId> = forward.segments().iter().map(|d| d.segment()).collect();
    let loops_back = prefix.iter().any(|d| forward_ids.contains(&d.segment()));

    if prefix.is_empty() || loops_back {
        return forward;
    }

    let mut segments = prefix.to_vec();
    segments.extend_from_slice(forward.segments());
    let mut links = backward.links().to_vec();
    links.extend_from_slice(forward.links());
    Path { segments, links }
}

/// Walks backward from `w` while `unique_incoming` holds. If the walk reaches `v`, returns the
/// path from `v` to `w`; otherwise (the walk runs out of unique predecessors, or loops without
/// ever reaching `v`) returns `None`.
pub fn unambiguous_backward_path(graph: &Graph, w: DirectedSegment, v: DirectedSegment) -> Option<Path> {
    if v == w {
        return Some(Path::single(v));
    }

    let mut rev_segments = vec![w];
    let mut rev_links: Vec<Link> = Vec::new();
    let mut used_links = HashSet::new();
    let mut cur = w;

    while cur != v {
        let l = graph.unique_incoming(cur)?;
        if !used_links.insert(l.link_id()) {
            return None;
        }
        cur = l.start();
        rev_links.push(l);
        rev_segments.push(cur);
    }

    rev_segments.reverse();
    rev_links.reverse();
    Some(Path {
        segments: rev_segments,
        links: rev_links,
    })
}

/// Walks forward from `v` while `unique_outgoing` holds. Stops on cycle (a repeated segment id),
/// same as [`non_branching_forward`] but without requiring the far end to be non-branching too.
pub fn unique_outgoing_forward(graph: &Graph, v: DirectedSegment) -> Path {
    let mut path = Path::single(v);
    let mut visited: HashSet<SegmentId> = HashSet::new();
    visited.insert(v.segment());
    loop {
        let cur = path.last().expect("path is never empty");
        let Some(l) = graph.unique_outgoing(cur) else {
            break;
        };
        if !visited.insert(l.end().segment()) {
            break;
        }
        path.extend(l);
    }
    path
}
