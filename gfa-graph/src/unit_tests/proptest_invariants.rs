// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::{non_branching_path, Graph};
use crate::{DirectedSegment, Direction, SegmentId};
use proptest::prelude::*;

/// Builds a random chain graph `s0 -> s1 -> ... -> s(n-1)` with `n` in `2..=6`, random lengths,
/// and overlaps always strictly smaller than either endpoint's length (so every link is valid).
fn chain_graph_strategy() -> impl Strategy<Value = (Graph, Vec<u32>)> {
    (2usize..=6).prop_flat_map(|n| {
        let lengths = prop::collection::vec(20u64..200, n);
        lengths.prop_flat_map(move |lengths| {
            let min_len = *lengths.iter().min().unwrap() as u32;
            let overlaps = prop::collection::vec(1u32..min_len.max(2), n - 1);
            overlaps.prop_map(move |overlaps| {
                let mut text = String::new();
                for (i, len) in lengths.iter().enumerate() {
                    text.push_str(&format!("S\ts{}\t*\tLN:i:{}\n", i, len));
                }
                for (i, ovl) in overlaps.iter().enumerate() {
                    text.push_str(&format!("L\ts{}\t+\ts{}\t+\t{}M\n", i, i + 1, ovl));
                }
                let (graph, warnings) = crate::graph::from_gfa_text(&text)
                    .expect("generated chain GFA should always parse");
                assert!(warnings.is_empty());
                (graph, overlaps)
            })
        })
    })
}

fn seg(index: usize) -> DirectedSegment {
    DirectedSegment::new(SegmentId::new(index), Direction::Forward)
}

proptest! {
    // Invariant 2: complement is an involution over every directed segment and every live link.
    #[test]
    fn prop_complement_is_involution((graph, _overlaps) in chain_graph_strategy()) {
        for v in graph.directed_segments() {
            prop_assert_eq!(v.complement().complement(), v);
        }
        for l in graph.canonical_links() {
            prop_assert_eq!(l.complement().complement(), l);
        }
    }

    // Invariant 3: total_length is preserved under path complementation, for the full chain.
    #[test]
    fn prop_total_length_preserved_under_complement((graph, _overlaps) in chain_graph_strategy()) {
        let path = non_branching_path(&graph, seg(0));
        prop_assert_eq!(graph.total_length(&path), graph.total_length(&path.complement()));
    }

    // Invariant 4: a path's min_overlap never exceeds any of its constituent link overlaps, and
    // a single-segment path always reports zero.
    #[test]
    fn prop_min_overlap_is_bounded_by_every_link((graph, overlaps) in chain_graph_strategy()) {
        let path = non_branching_path(&graph, seg(0));
        let min_ovl = path.min_overlap();
        for ovl in &overlaps {
            prop_assert!(min_ovl <= *ovl);
        }

        let trivial = crate::Path::single(seg(0));
        prop_assert_eq!(trivial.min_overlap(), 0);
    }

    // Invariant 1: deleting an arbitrary link and cleaning up never leaves a dangling twin.
    #[test]
    fn prop_symmetric_deletion_survives_cleanup(
        (graph, overlaps) in chain_graph_strategy(),
        victim_index in 0usize..6,
    ) {
        let mut graph = graph;
        let victim_index = victim_index % overlaps.len();
        let link = graph.unique_outgoing(seg(victim_index)).expect("chain link should exist");

        graph.delete_link(link);
        graph.cleanup();

        prop_assert!(graph.check_no_dead_links());
        prop_assert!(graph.verify().is_ok());
    }
}
