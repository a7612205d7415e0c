// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::extract_neighborhood;
use std::collections::HashSet;

fn chain_graph() -> crate::graph::Graph {
    fixtures::gfa(
        "S\tA\t*\tLN:i:100\n\
         S\tB\t*\tLN:i:100\n\
         S\tC\t*\tLN:i:100\n\
         S\tD\t*\tLN:i:100\n\
         S\tE\t*\tLN:i:100\n\
         L\tA\t+\tB\t+\t10M\n\
         L\tB\t+\tC\t+\t10M\n\
         L\tC\t+\tD\t+\t10M\n\
         L\tD\t+\tE\t+\t10M\n",
    )
}

fn names(graph: &crate::graph::Graph) -> Vec<&str> {
    let mut v: Vec<&str> = graph.segments().map(|s| s.name()).collect();
    v.sort_unstable();
    v
}

// Invariant 8: radius 0 returns exactly the seed set (plus any segment reachable at distance 0,
// i.e. nothing beyond the named segments themselves).
#[test]
fn radius_zero_returns_exactly_the_seed_set() {
    let graph = chain_graph();
    let seeds: HashSet<String> = ["C".to_string()].into_iter().collect();

    let sub = extract_neighborhood(&graph, &seeds, 0);

    assert_eq!(names(&sub), vec!["C"]);
    assert_eq!(sub.canonical_links().filter(|l| !l.removed()).count(), 0);
}

#[test]
fn radius_one_pulls_in_direct_neighbours_both_directions() {
    let graph = chain_graph();
    let seeds: HashSet<String> = ["C".to_string()].into_iter().collect();

    let sub = extract_neighborhood(&graph, &seeds, 1);

    assert_eq!(names(&sub), vec!["B", "C", "D"]);
    // B->C and C->D should both survive as links in the induced subgraph.
    assert_eq!(sub.canonical_links().filter(|l| !l.removed()).count(), 2);
}

#[test]
fn radius_expands_symmetrically_from_multiple_seeds() {
    let graph = chain_graph();
    let seeds: HashSet<String> = ["A".to_string(), "E".to_string()].into_iter().collect();

    let sub = extract_neighborhood(&graph, &seeds, 1);

    // A pulls in B, E pulls in D; C (distance 2 from both) stays out.
    assert_eq!(names(&sub), vec!["A", "B", "D", "E"]);
}

#[test]
fn unrelated_segments_are_excluded_entirely() {
    let graph = chain_graph();
    let seeds: HashSet<String> = ["A".to_string()].into_iter().collect();

    let sub = extract_neighborhood(&graph, &seeds, 100);

    // radius 100 on a 5-node chain reaches everything.
    assert_eq!(names(&sub), vec!["A", "B", "C", "D", "E"]);
}
