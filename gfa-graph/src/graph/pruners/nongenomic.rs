// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Non-genomic link removal: drops arcs that look like artifacts of a repeat rather than real
//! genomic adjacencies, using a "uniqueness"/"reliability" heuristic over length and coverage.

use super::{Decision, PruneReport};
use crate::graph::Graph;
use crate::{CoverageLookup, GfaWarning, Link, SegmentId};
use std::collections::HashSet;

/// Options controlling [`remove_nongenomic_links`].
pub struct NongenomicOptions<'a> {
    /// Segments longer than this are always considered unique.
    pub unique_len: u64,
    /// If set (together with `coverage`), segments below this coverage are also considered
    /// unique, unless flagged as a suspected repeat.
    pub max_unique_cov: Option<f64>,
    /// An extension is reliable if its end is at least this long.
    pub reliable_len: u64,
    /// If set (together with `coverage`), an extension is also reliable if its end's coverage is
    /// above this, unless the end is flagged as suspected-false.
    pub reliable_cov: Option<f64>,
    /// An extension is reliable only if its overlap is at least this.
    pub reliable_ovl: u32,
    /// Require both `l` and `l.complement()` to look non-genomic before deleting.
    pub require_both_sides: bool,
    /// Coverage source for the `max_unique_cov`/`reliable_cov` filters.
    pub coverage: Option<&'a dyn CoverageLookup>,
}

impl<'a> Default for NongenomicOptions<'a> {
    fn default() -> Self {
        Self {
            unique_len: u64::MAX,
            max_unique_cov: None,
            reliable_len: 0,
            reliable_cov: None,
            reliable_ovl: 0,
            require_both_sides: false,
            coverage: None,
        }
    }
}

fn coverage_of(graph: &Graph, coverage: &dyn CoverageLookup, id: SegmentId) -> f64 {
    coverage.coverage(graph.segment_name(id)).unwrap_or(0.0)
}

fn deadend_names(graph: &Graph) -> HashSet<String> {
    graph
        .directed_segments()
        .filter(|&v| graph.no_outgoing(v))
        .map(|v| graph.segment_name(v.segment()).to_string())
        .collect()
}

fn is_unique(
    graph: &Graph,
    options: &NongenomicOptions<'_>,
    suspected_repeats: &HashSet<SegmentId>,
    s: SegmentId,
) -> bool {
    if graph.segment_length(s) > options.unique_len {
        return true;
    }
    if let (Some(coverage), Some(max_unique_cov)) = (options.coverage, options.max_unique_cov) {
        if !suspected_repeats.contains(&s) && coverage_of(graph, coverage, s) < max_unique_cov + 1e-5 {
            return true;
        }
    }
    false
}

/// For every unique vertex with more than one unambiguously-incoming neighbour, flags the
/// vertex itself as a suspected repeat and every one of those neighbours as suspected-false.
/// Grounded on `FindSuspicious` in `examples/original_source/src/nongenomic_link_removal.cpp`.
fn find_suspicious(
    graph: &Graph,
    options: &NongenomicOptions<'_>,
    suspected_false: &mut HashSet<SegmentId>,
) -> HashSet<SegmentId> {
    // uniqueness is evaluated against an empty suspected-repeats set during this scan: the
    // original builds the repeat set in a fresh local variable and only publishes it to the
    // caller's uniqueness closure after this function returns.
    let empty = HashSet::new();
    let mut suspected_repeats = HashSet::new();
    for w in graph.directed_segments() {
        if !is_unique(graph, options, &empty, w.segment()) {
            continue;
        }
        let mut unambiguously_incoming = Vec::new();
        for l in graph.incoming_links(w).filter(|l| !l.removed()) {
            if graph.unique_outgoing(l.start()).is_some() {
                unambiguously_incoming.push(l.start());
            }
        }
        if unambiguously_incoming.len() > 1 {
            for v in unambiguously_incoming {
                suspected_false.insert(v.segment());
            }
            suspected_repeats.insert(w.segment());
        }
    }
    suspected_repeats
}

fn is_reliable_extension(
    graph: &Graph,
    options: &NongenomicOptions<'_>,
    suspected_false: &HashSet<SegmentId>,
    l: Link,
) -> bool {
    let w = l.end();
    if l.overlap() < options.reliable_ovl {
        return false;
    }
    if graph.segment_length(w.segment()) >= options.reliable_len {
        return true;
    }
    if let (Some(coverage), Some(reliable_cov)) = (options.coverage, options.reliable_cov) {
        if !suspected_false.contains(&w.segment()) && coverage_of(graph, coverage, w.segment()) > reliable_cov - 1e-5 {
            return true;
        }
    }
    false
}

fn has_nongenomic_start(
    graph: &Graph,
    options: &NongenomicOptions<'_>,
    suspected_repeats: &HashSet<SegmentId>,
    suspected_false: &HashSet<SegmentId>,
    l: Link,
) -> bool {
    let v = l.start();
    let w = l.end();
    if graph.unique_incoming(w).is_some() {
        return false;
    }
    if !is_unique(graph, options, suspected_repeats, v.segment()) {
        return false;
    }

    for l1 in graph.outgoing_links(v).filter(|l| !l.removed()) {
        if l1.end() == w {
            continue;
        }
        if graph.unique_incoming(l1.end()).is_some() && is_reliable_extension(graph, options, suspected_false, l1) {
            return true;
        }
    }
    false
}

/// Removes arcs into a multiply-incoming vertex from a unique predecessor that also has another,
/// reliable, unambiguous extension -- i.e. arcs that look like a spurious repeat-induced
/// adjacency rather than a genomic one, per §4.5. Returns a warning for every dead end that
/// didn't exist before the pass.
pub fn remove_nongenomic_links(
    graph: &mut Graph,
    options: &NongenomicOptions<'_>,
) -> (PruneReport, Vec<GfaWarning>) {
    let initial_deadends = deadend_names(graph);

    let mut suspected_false = HashSet::new();
    let suspected_repeats = find_suspicious(graph, options, &mut suspected_false);

    let mut decisions = Vec::new();
    for v in graph.directed_segments() {
        for l in graph.outgoing_links(v).filter(|l| !l.removed()) {
            if !has_nongenomic_start(graph, options, &suspected_repeats, &suspected_false, l) {
                continue;
            }
            let both_sides_agree = !options.require_both_sides
                || has_nongenomic_start(graph, options, &suspected_repeats, &suspected_false, l.complement());
            if both_sides_agree {
                decisions.push(Decision::DeleteLink(l));
            }
        }
    }

    let report = PruneReport::default().apply_all(graph, decisions);

    let mut warnings = Vec::new();
    if report.deleted_links > 0 {
        for name in deadend_names(graph).difference(&initial_deadends) {
            if let Some(id) = graph.segment_id_by_name(name) {
                warnings.push(GfaWarning::NewDeadend { segment: id });
            }
        }
    }

    (report, warnings)
}
