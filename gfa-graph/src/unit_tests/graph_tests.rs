// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::gfa::{parse_gfa, write_gfa, WriteOptions};
use crate::graph::{compact, from_gfa_text, CompactOptions, Graph};
use crate::{DirectedSegment, Direction, Link, SegmentId};

fn small_graph() -> Graph {
    fixtures::gfa(
        "S\tA\t*\tLN:i:100\n\
         S\tB\t*\tLN:i:100\n\
         S\tC\t*\tLN:i:100\n\
         L\tA\t+\tB\t+\t20M\n\
         L\tB\t+\tC\t+\t30M\n",
    )
}

// Invariant 1: after any delete_* sequence followed by cleanup, check_no_dead_links holds and
// every live arc's twin is also live.
#[test]
fn symmetric_deletion_survives_cleanup() {
    let mut graph = small_graph();
    let a = DirectedSegment::new(SegmentId::new(0), Direction::Forward);
    let link_ab = graph.unique_outgoing(a).expect("A has one outgoing link");

    graph.delete_link(link_ab);
    graph.delete_segment(SegmentId::new(2)); // C

    graph.cleanup();

    assert!(graph.check_no_dead_links());
    graph.verify().expect("graph invariants should hold after cleanup");
    // A and B both survive (deleting the A->B link doesn't remove either endpoint); C was
    // deleted outright and its incident link along with it.
    assert_eq!(graph.segment_cnt(), 2, "A and B should remain, C should be gone");
    assert!(graph.segment_id_by_name("C").is_none());
}

// Invariant 2: complement is an involution, for both links and directed segments.
#[test]
fn complement_is_involution() {
    let graph = small_graph();
    for v in graph.directed_segments() {
        assert_eq!(v.complement().complement(), v);
    }
    for l in graph.outgoing_links(DirectedSegment::new(SegmentId::new(0), Direction::Forward)) {
        assert_eq!(l.complement().complement(), l);
    }
}

// Invariant 3: total_length is preserved under path complementation.
#[test]
fn total_length_preserved_under_complement() {
    let graph = small_graph();
    let a = DirectedSegment::new(SegmentId::new(0), Direction::Forward);
    let path = crate::graph::non_branching_path(&graph, a);
    assert_eq!(graph.total_length(&path), graph.total_length(&path.complement()));
}

// Invariant 4: min_overlap is always representable (trivially >= 0 over u32); a single-segment
// path reports 0.
#[test]
fn min_overlap_of_trivial_path_is_zero() {
    let a = DirectedSegment::new(SegmentId::new(0), Direction::Forward);
    let path = crate::Path::single(a);
    assert_eq!(path.min_overlap(), 0);
}

// Invariant 5: write-then-read yields an isomorphic graph (same segments, same canonical links,
// same lengths).
#[test]
fn gfa_round_trip_is_isomorphic() {
    let graph = small_graph();
    let text = write_gfa(&graph, &WriteOptions::default());
    let (segments, links) = parse_gfa(&text).expect("written GFA should parse");
    let (reparsed, warnings) = Graph::from_records(segments, links);
    assert!(warnings.is_empty());

    assert_eq!(reparsed.segment_cnt(), graph.segment_cnt());
    let mut original_names: Vec<&str> = graph.segments().map(|s| s.name()).collect();
    let mut reparsed_names: Vec<&str> = reparsed.segments().map(|s| s.name()).collect();
    original_names.sort_unstable();
    reparsed_names.sort_unstable();
    assert_eq!(original_names, reparsed_names);

    for name in original_names {
        let orig_id = graph.segment_id_by_name(name).unwrap();
        let new_id = reparsed.segment_id_by_name(name).unwrap();
        assert_eq!(graph.segment_length(orig_id), reparsed.segment_length(new_id));
    }

    let canon_count = |g: &Graph| g.canonical_links().filter(|l| !l.removed()).count();
    assert_eq!(canon_count(&graph), canon_count(&reparsed));
}

// Invariant 6: compacting an already-compact graph changes no segment names (rename_all off).
#[test]
fn compaction_is_idempotent() {
    let graph = small_graph(); // A -> B -> C is already one non-branching path
    let once = compact(&graph, &CompactOptions::default());
    let mut first_names: Vec<&str> = once.graph.segments().map(|s| s.name()).collect();
    first_names.sort_unstable();

    let twice = compact(&once.graph, &CompactOptions::default());
    let mut second_names: Vec<&str> = twice.graph.segments().map(|s| s.name()).collect();
    second_names.sort_unstable();

    assert_eq!(first_names, second_names);
    assert!(twice.id_mapping.is_empty(), "nothing left to rename on the second pass");
}

#[test]
fn from_gfa_text_matches_from_records() {
    let text = "S\tX\t*\tLN:i:50\nS\tY\t*\tLN:i:50\nL\tX\t+\tY\t+\t10M\n";
    let (graph, warnings) = from_gfa_text(text).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(graph.segment_cnt(), 2);
    assert_eq!(graph.link_cnt(), 1);
}

#[test]
fn link_max_overlap_and_overlap_pick_correct_side() {
    let graph = fixtures::gfa("S\tP\t*\tLN:i:200\nS\tQ\t*\tLN:i:200\nL\tP\t+\tQ\t+\t30M\n");
    let p = DirectedSegment::new(SegmentId::new(0), Direction::Forward);
    let l: Link = graph.unique_outgoing(p).unwrap();
    assert_eq!(l.overlap(), 30);
    assert_eq!(l.max_overlap(), 30);
}
