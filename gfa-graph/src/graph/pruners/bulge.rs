// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simple bulge removal: collapses a single-segment "bubble" (one unique incoming arc, one
//! unique outgoing arc) when an unambiguous alternative path covers the same ground.

use super::{Decision, PruneReport};
use crate::graph::traversal::unambiguous_backward_path;
use crate::graph::Graph;
use crate::{CoverageLookup, DirectedSegment, Direction, Path, SegmentId};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Options controlling [`remove_simple_bulges`].
pub struct BulgeOptions<'a> {
    /// The node's own contributed length (`total_len - len(v) - len(w)`) must be at most this.
    pub max_length: u64,
    /// `|len(alt) - len(base)|` must be at most this.
    pub max_diff: u64,
    /// If the base path is longer, it may exceed the alternative by at most this much.
    pub max_shortening: u64,
    /// The alternative's minimum overlap must be at least the base's, or at least this.
    pub min_alt_overlap: u32,
    /// Sort candidates by coverage instead of by minimum overlap.
    pub use_coverage: bool,
    /// Endpoints must have coverage at or below this (only checked when `coverage` is set).
    pub max_unique_cov: f64,
    /// `min_coverage(base_internal) / min_coverage(alt_internal)` must be at most this (only
    /// checked when `coverage` is set).
    pub max_coverage_ratio: f64,
    /// Coverage source; `None` skips every coverage-based check.
    pub coverage: Option<&'a dyn CoverageLookup>,
}

impl<'a> Default for BulgeOptions<'a> {
    fn default() -> Self {
        Self {
            max_length: u64::MAX,
            max_diff: u64::MAX,
            max_shortening: u64::MAX,
            min_alt_overlap: 0,
            use_coverage: false,
            max_unique_cov: f64::MAX,
            max_coverage_ratio: f64::MAX,
            coverage: None,
        }
    }
}

fn coverage_of(graph: &Graph, coverage: &dyn CoverageLookup, id: SegmentId) -> f64 {
    coverage.coverage(graph.segment_name(id)).unwrap_or(0.0)
}

fn not_in_path(path: &Path, n: DirectedSegment) -> bool {
    path.segments().iter().all(|&v| v != n && v != n.complement())
}

/// Minimum coverage over a path's internal vertices (every segment but the first and last).
fn min_internal_coverage(graph: &Graph, coverage: &dyn CoverageLookup, path: &Path) -> f64 {
    let segs = path.segments();
    debug_assert!(segs.len() >= 3);
    segs[1..segs.len() - 1]
        .iter()
        .map(|d| coverage_of(graph, coverage, d.segment()))
        .fold(f64::MAX, f64::min)
}

/// The accept predicate from §4.5. `base` is the 3-segment `(v, n, w)` path; `alt` is the
/// candidate alternative from `v` to `w`.
fn accept_bulge(graph: &Graph, options: &BulgeOptions<'_>, base: &Path, alt: &Path) -> bool {
    let base_len = graph.total_length(base);
    let alt_len = graph.total_length(alt);

    let diff = if alt_len > base_len { alt_len - base_len } else { base_len - alt_len };
    if diff > options.max_diff {
        return false;
    }
    if base_len > alt_len && base_len - alt_len > options.max_shortening {
        return false;
    }

    let base_min_ovl = base.min_overlap();
    let alt_min_ovl = alt.min_overlap();
    if alt_min_ovl < base_min_ovl && alt_min_ovl < options.min_alt_overlap {
        return false;
    }

    if let Some(coverage) = options.coverage {
        let v = base.first().expect("base path is never empty");
        let w = base.last().expect("base path is never empty");
        if coverage_of(graph, coverage, v.segment()) > options.max_unique_cov + 1e-5
            || coverage_of(graph, coverage, w.segment()) > options.max_unique_cov + 1e-5
        {
            return false;
        }

        let base_inner = min_internal_coverage(graph, coverage, base);
        let alt_inner = min_internal_coverage(graph, coverage, alt);
        if alt_inner < 1e-5 || base_inner / alt_inner > options.max_coverage_ratio {
            return false;
        }
    }

    true
}

/// Checks whether `n` forms a simple bulge, returning the segment to delete and the alternative
/// path to protect if so.
fn forms_simple_bulge(
    graph: &Graph,
    n: DirectedSegment,
    options: &BulgeOptions<'_>,
) -> Option<(SegmentId, Path)> {
    let l_in = graph.unique_incoming(n)?;
    let l_out = graph.unique_outgoing(n)?;

    let mut base = Path::single(l_in.start());
    base.extend(l_in);
    base.extend(l_out);

    let v = base.first().expect("base path has 3 segments");
    let w = base.last().expect("base path has 3 segments");
    if v == n || v == n.complement() || w == n || w == n.complement() {
        return None;
    }

    let total_len = graph.total_length(&base);
    let seg_v = graph.segment_length(v.segment());
    let seg_w = graph.segment_length(w.segment());
    if total_len > seg_v + seg_w && total_len - seg_v - seg_w > options.max_length {
        return None;
    }

    for l in graph.incoming_links(w).filter(|l| !l.removed()) {
        let w1 = l.start();
        if w1 == n || w1 == v || w1 == n.complement() {
            continue;
        }
        let Some(alt_prefix) = unambiguous_backward_path(graph, w1, v) else {
            continue;
        };
        if !not_in_path(&alt_prefix, n) {
            continue;
        }

        let mut alt = alt_prefix;
        alt.extend(l);

        if accept_bulge(graph, options, &base, &alt) {
            return Some((n.segment(), alt));
        }
    }

    None
}

/// Removes single-segment bulges that have an unambiguous, acceptable alternative path, per
/// §4.5. Candidates are visited in ascending order of their flanking overlaps (or, with
/// `use_coverage`, ascending coverage); once a bulge is removed, every segment on the alternative
/// path it was checked against is protected from removal for the rest of this pass.
pub fn remove_simple_bulges(graph: &mut Graph, options: &BulgeOptions<'_>) -> PruneReport {
    let mut candidates: Vec<(f64, SegmentId)> = Vec::new();
    for idx in 0..graph.segment_cnt() {
        let id = SegmentId::new(idx);
        if graph.segment(id).removed() {
            continue;
        }
        let v = DirectedSegment::new(id, Direction::Forward);
        let (Some(l_out), Some(l_in)) = (graph.unique_outgoing(v), graph.unique_incoming(v)) else {
            continue;
        };
        let key = if options.use_coverage {
            options
                .coverage
                .map(|c| coverage_of(graph, c, id))
                .unwrap_or(0.0)
        } else {
            l_out.start_overlap().min(l_in.end_overlap()) as f64
        };
        candidates.push((key, id));
    }
    candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut protected: HashSet<SegmentId> = HashSet::new();
    let mut decisions = Vec::new();

    for (_, seg_id) in candidates {
        if protected.contains(&seg_id) {
            continue;
        }

        let found = forms_simple_bulge(graph, DirectedSegment::new(seg_id, Direction::Forward), options)
            .or_else(|| forms_simple_bulge(graph, DirectedSegment::new(seg_id, Direction::Reverse), options));

        if let Some((to_delete, alt_path)) = found {
            for seg in alt_path.segments() {
                protected.insert(seg.segment());
            }
            decisions.push(Decision::DeleteSegment(to_delete));
        }
    }

    PruneReport::default().apply_all(graph, decisions)
}
