// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::{MinOverlapWeight, SuperbubbleFinder};
use crate::{DirectedSegment, Direction, SegmentId};

fn forward(index: usize) -> DirectedSegment {
    DirectedSegment::new(SegmentId::new(index), Direction::Forward)
}

// Scenario 1: a trivial diamond bubble succeeds, with the heaviest path picking the
// first-visited tied arc (A -> B -> D, since B -> D was declared before C -> D).
#[test]
fn trivial_bubble_succeeds() {
    let graph = fixtures::trivial_bubble();
    let a = forward(graph.segment_id_by_name("A").unwrap().index());
    let finder = SuperbubbleFinder::new(&graph, a, 10_000, 2_000, 100, MinOverlapWeight);

    let bubble = finder.find().expect("diamond bubble should be found");
    assert_eq!(bubble.start, a);
    let d = forward(graph.segment_id_by_name("D").unwrap().index());
    assert_eq!(bubble.end, d);
    assert_eq!(bubble.segments.len(), 4);

    let heaviest_names: Vec<&str> = bubble
        .heaviest_path
        .segments()
        .iter()
        .map(|v| graph.segment_name(v.segment()))
        .collect();
    assert_eq!(heaviest_names, vec!["A", "B", "D"]);
}

// Scenario 6: a wide length-diff between the two branches defeats the max_diff threshold.
#[test]
fn max_diff_threshold_rejects_bubble() {
    let graph = fixtures::superbubble_max_diff_failure();
    let a = forward(graph.segment_id_by_name("A").unwrap().index());
    let finder = SuperbubbleFinder::new(&graph, a, 10_000, 2_000, 100, MinOverlapWeight);

    assert!(finder.find().is_none(), "branch length spread should exceed max_diff");
}

// Invariant 7: every dominated vertex's distance range is well-formed, and on success the exit's
// range span respects max_diff.
#[test]
fn dominated_range_is_well_formed() {
    let graph = fixtures::trivial_bubble();
    let a = forward(graph.segment_id_by_name("A").unwrap().index());
    let finder = SuperbubbleFinder::new(&graph, a, 10_000, 2_000, 100, MinOverlapWeight);
    let bubble = finder.find().expect("bubble should be found");

    assert!(bubble.range.hi() >= bubble.range.lo());
    assert!(bubble.range.lo() >= 1);
    assert!(bubble.range.size() <= 2_000);
}

// A source with fewer than two outgoing arcs can never start a superbubble.
#[test]
fn single_outgoing_arc_cannot_be_a_source() {
    let graph = fixtures::gfa("S\tX\t*\tLN:i:50\nS\tY\t*\tLN:i:50\nL\tX\t+\tY\t+\t10M\n");
    let x = forward(graph.segment_id_by_name("X").unwrap().index());
    let finder = SuperbubbleFinder::new(&graph, x, 10_000, 2_000, 100, MinOverlapWeight);
    assert!(finder.find().is_none());
}
