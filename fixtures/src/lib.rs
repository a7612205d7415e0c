// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small hand-built GFA graphs covering the end-to-end scenarios used by `gfa-graph`'s test
//! suite. Each function here corresponds to one concrete scenario laid out in the core crate's
//! design notes.

use gfa_graph::graph::{from_gfa_text, Graph};
use std::collections::HashMap;

/// Parses `text` as GFA, asserting it carries no warnings -- every fixture here is clean input.
pub fn gfa(text: &str) -> Graph {
    let (graph, warnings) = from_gfa_text(text).expect("fixture GFA text should parse");
    assert!(warnings.is_empty(), "fixture GFA should have no warnings: {:?}", warnings);
    graph
}

/// Builds a coverage lookup table from `(name, coverage)` pairs.
pub fn coverage(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|&(name, cov)| (name.to_string(), cov)).collect()
}

/// Scenario 1: a trivial diamond bubble `A -> {B, C} -> D`, all segments 100bp, all overlaps 50.
pub fn trivial_bubble() -> Graph {
    gfa(
        "S\tA\t*\tLN:i:100\n\
         S\tB\t*\tLN:i:100\n\
         S\tC\t*\tLN:i:100\n\
         S\tD\t*\tLN:i:100\n\
         L\tA\t+\tB\t+\t50M\n\
         L\tA\t+\tC\t+\t50M\n\
         L\tB\t+\tD\t+\t50M\n\
         L\tC\t+\tD\t+\t50M\n",
    )
}

/// Scenario 6: the same diamond, but `C` is long enough that the exit's distance-range span
/// exceeds `max_diff`.
pub fn superbubble_max_diff_failure() -> Graph {
    gfa(
        "S\tA\t*\tLN:i:100\n\
         S\tB\t*\tLN:i:100\n\
         S\tC\t*\tLN:i:2500\n\
         S\tD\t*\tLN:i:100\n\
         L\tA\t+\tB\t+\t50M\n\
         L\tA\t+\tC\t+\t50M\n\
         L\tB\t+\tD\t+\t50M\n\
         L\tC\t+\tD\t+\t50M\n",
    )
}

/// Scenario 2: a 100bp tip `T` feeding into a fork target `A`, which also has another incoming
/// neighbour `B`.
pub fn tip_clip_graph() -> Graph {
    gfa(
        "S\tT\t*\tLN:i:100\n\
         S\tA\t*\tLN:i:1000\n\
         S\tB\t*\tLN:i:1000\n\
         L\tT\t+\tA\t+\t50M\n\
         L\tB\t+\tA\t+\t50M\n",
    )
}

/// Scenario 3: `P` branches to `Q` (overlap 50) and `R` (overlap 30), both below a
/// `min_overlap` of 100.
pub fn weak_link_graph() -> Graph {
    gfa(
        "S\tP\t*\tLN:i:200\n\
         S\tQ\t*\tLN:i:200\n\
         S\tR\t*\tLN:i:200\n\
         L\tP\t+\tQ\t+\t50M\n\
         L\tP\t+\tR\t+\t30M\n",
    )
}

/// Scenario 4: `u` branches to `a` (coverage 18) and `b` (coverage 3), with `u` itself at
/// coverage 20.
pub fn unbalanced_graph() -> (Graph, HashMap<String, f64>) {
    let graph = gfa(
        "S\tu\t*\tLN:i:200\n\
         S\ta\t*\tLN:i:200\n\
         S\tb\t*\tLN:i:200\n\
         L\tu\t+\ta\t+\t10M\n\
         L\tu\t+\tb\t+\t10M\n",
    );
    let cov = coverage(&[("u", 20.0), ("a", 18.0), ("b", 3.0)]);
    (graph, cov)
}

/// Scenario 5: a 3-segment non-branching chain `s1 -> s2 -> s3`, 100bp each, 10bp overlaps,
/// coverages 10/20/30.
pub fn non_branching_chain() -> (Graph, HashMap<String, f64>) {
    let graph = gfa(
        "S\ts1\t*\tLN:i:100\n\
         S\ts2\t*\tLN:i:100\n\
         S\ts3\t*\tLN:i:100\n\
         L\ts1\t+\ts2\t+\t10M\n\
         L\ts2\t+\ts3\t+\t10M\n",
    );
    let cov = coverage(&[("s1", 10.0), ("s2", 20.0), ("s3", 30.0)]);
    (graph, cov)
}
