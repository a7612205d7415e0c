// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::{clip_tips, compact, remove_unbalanced_links, remove_weak_links};
use crate::graph::{CompactOptions, TipClipOptions, UnbalancedOptions, WeakLinkOptions};

// Scenario 2: a short tip feeding a fork target gets clipped, leaving the fork's two surviving
// segments linked once.
#[test]
fn tip_clipping_removes_short_dead_end() {
    let mut graph = fixtures::tip_clip_graph();
    let options = TipClipOptions {
        max_length: 200,
        ..TipClipOptions::default()
    };
    let report = clip_tips(&mut graph, &options);

    assert_eq!(report.deleted_segments, 1);
    assert!(graph.segment_id_by_name("T").is_none());
    assert!(graph.segment_id_by_name("A").is_some());
    assert!(graph.segment_id_by_name("B").is_some());
    assert_eq!(graph.canonical_links().filter(|l| !l.removed()).count(), 1);
}

// Scenario 3: both outgoing overlaps are below min_overlap, but the strongest (P->Q, 50) is
// always kept.
#[test]
fn weak_link_removal_keeps_the_strongest_arc() {
    let mut graph = fixtures::weak_link_graph();
    let options = WeakLinkOptions {
        min_overlap: 100,
        prevent_deadends: false,
    };
    let report = remove_weak_links(&mut graph, &options);

    assert_eq!(report.deleted_links, 1);
    let p = crate::DirectedSegment::new(graph.segment_id_by_name("P").unwrap(), crate::Direction::Forward);
    assert_eq!(graph.outgoing_link_cnt(p), 1);
    let surviving = graph.unique_outgoing(p).unwrap();
    assert_eq!(graph.segment_name(surviving.end().segment()), "Q");
}

// Scenario 4: u -> a survives (18/20 = 0.9 > 0.2), u -> b is deleted (3/20 = 0.15 <= 0.2 and
// b isn't the best-covered neighbour).
#[test]
fn unbalanced_link_removal_keeps_well_covered_neighbour() {
    let (mut graph, coverage) = fixtures::unbalanced_graph();
    let options = UnbalancedOptions {
        coverage_ratio: 0.2,
        coverage: &coverage,
    };
    let report = remove_unbalanced_links(&mut graph, &options);

    assert_eq!(report.deleted_links, 1);
    let u = crate::DirectedSegment::new(graph.segment_id_by_name("u").unwrap(), crate::Direction::Forward);
    assert_eq!(graph.outgoing_link_cnt(u), 1);
    let surviving = graph.unique_outgoing(u).unwrap();
    assert_eq!(graph.segment_name(surviving.end().segment()), "a");
}

// Scenario 5: a 3-segment non-branching chain compacts into one segment with the expected
// length, RC and ll tags.
#[test]
fn compaction_accumulates_length_and_coverage() {
    let (graph, coverage) = fixtures::non_branching_chain();
    let options = CompactOptions {
        prefix: "m_".to_string(),
        coverage: Some(&coverage),
        ..CompactOptions::default()
    };
    let result = compact(&graph, &options);

    assert_eq!(result.graph.segment_cnt(), 1);
    let id = result.graph.segment_id_by_name("m_1").expect("single compacted segment");
    assert_eq!(result.graph.segment_length(id), 280);

    let cov = result.coverage.get("m_1").copied().expect("coverage should be recorded");
    assert!((cov - 20.0).abs() < 1e-9, "expected weighted mean coverage 20.0, got {}", cov);

    let text = crate::gfa::write_gfa(&result.graph, &crate::gfa::WriteOptions {
        coverage: Some(&result.coverage),
        ..Default::default()
    });
    assert!(text.contains("RC:i:5600"));
    assert!(text.contains("ll:f:20.000"));
}
