// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Length-bounded, weight-maximizing dominator search over a bidirected graph.

use super::Graph;
use crate::{CoverageLookup, DirectedSegment, Link, Path, Range};
use std::collections::{BTreeSet, HashMap, HashSet};

/// The per-step metric a [`SuperbubbleFinder`] maximizes along a dominated path.
///
/// A path's weight is the minimum of `step_weight` over its arcs; the finder is generic over
/// this policy so the same search drives both the overlap-based and coverage-based variants.
pub trait WeightPolicy {
    /// The contribution of arriving at `arc.end()` via `arc`.
    fn step_weight(&self, arc: Link) -> f64;
}

/// Weighs a path by its minimum end-overlap (the smallest anastomosis along the path).
#[derive(Copy, Clone, Debug, Default)]
pub struct MinOverlapWeight;

impl WeightPolicy for MinOverlapWeight {
    fn step_weight(&self, arc: Link) -> f64 {
        arc.end_overlap() as f64
    }
}

/// Weighs a path by the minimum coverage over its internal vertices, rather than by overlap.
pub struct MinCoverageWeight<'a> {
    graph: &'a Graph,
    coverage: &'a dyn CoverageLookup,
}

impl<'a> MinCoverageWeight<'a> {
    /// Creates a coverage-based weight policy reading from `coverage`.
    pub fn new(graph: &'a Graph, coverage: &'a dyn CoverageLookup) -> Self {
        Self { graph, coverage }
    }
}

impl<'a> WeightPolicy for MinCoverageWeight<'a> {
    fn step_weight(&self, arc: Link) -> f64 {
        let name = self.graph.segment_name(arc.end().segment());
        self.coverage.coverage(name).unwrap_or(0.0)
    }
}

/// A superbubble found by [`SuperbubbleFinder::find`]: single entry `start`, single exit `end`,
/// the set of vertices it dominates, the exit's distance range, and the heaviest `start -> end`
/// path.
#[derive(Clone, Debug)]
pub struct Superbubble {
    /// The entry vertex (the finder's configured start vertex).
    pub start: DirectedSegment,
    /// The exit vertex.
    pub end: DirectedSegment,
    /// Every vertex dominated by `start`, including both endpoints.
    pub segments: HashSet<DirectedSegment>,
    /// The exit's minimum/maximum distance from `start`.
    pub range: Range,
    /// The heaviest `start -> end` path through the bubble.
    pub heaviest_path: Path,
}

/// Searches for a superbubble rooted at a fixed start vertex.
///
/// See §4.3: a length-bounded dominator search that tracks, per dominated vertex, the best
/// weight reaching it and its minimum/maximum distance from the source, terminating either at a
/// unique border vertex (a candidate exit) or on one of several failure conditions.
pub struct SuperbubbleFinder<'a, W> {
    graph: &'a Graph,
    start_vertex: DirectedSegment,
    max_length: u64,
    max_diff: u64,
    max_count: usize,
    weight_policy: W,
}

impl<'a, W: WeightPolicy> SuperbubbleFinder<'a, W> {
    /// Creates a new finder rooted at `start_vertex`.
    pub fn new(
        graph: &'a Graph,
        start_vertex: DirectedSegment,
        max_length: u64,
        max_diff: u64,
        max_count: usize,
        weight_policy: W,
    ) -> Self {
        Self {
            graph,
            start_vertex,
            max_length,
            max_diff,
            max_count,
            weight_policy,
        }
    }

    fn check_can_be_processed(
        &self,
        v: DirectedSegment,
        dom: &HashMap<DirectedSegment, (f64, Range)>,
    ) -> bool {
        self.graph
            .incoming_links(v)
            .filter(|l| !l.removed())
            .all(|l| dom.contains_key(&l.start()))
    }

    fn update_can_be_processed(
        &self,
        v: DirectedSegment,
        dom: &HashMap<DirectedSegment, (f64, Range)>,
        can_process: &mut BTreeSet<DirectedSegment>,
        border: &mut BTreeSet<DirectedSegment>,
    ) {
        for l in self.graph.outgoing_links(v).filter(|l| !l.removed()) {
            let neighbour = l.end();
            // Skip the back-edge into the start vertex (allows a self-loop on the start node).
            if neighbour == self.start_vertex {
                continue;
            }
            border.insert(neighbour);
            if self.check_can_be_processed(neighbour, dom) {
                can_process.insert(neighbour);
            }
        }
    }

    fn has_edge_to_start(&self, v: DirectedSegment) -> bool {
        self.graph
            .outgoing_links(v)
            .filter(|l| !l.removed())
            .any(|l| l.end() == self.start_vertex)
    }

    /// Attempts to find a superbubble. Returns `None` on any failure mode from §4.3: the start
    /// has fewer than two outgoing arcs, the search runs dry before reaching a unique border
    /// vertex, `max_count` is exceeded, an inner vertex has no outgoing edge or an edge back to
    /// the start, the candidate exit's complement is already dominated (non-simple bubble), or
    /// the exit fails the length/diff thresholds or the triviality check.
    pub fn find(&self) -> Option<Superbubble> {
        if self.graph.outgoing_link_cnt(self.start_vertex) < 2 {
            return None;
        }

        let mut dom: HashMap<DirectedSegment, (f64, Range)> = HashMap::new();
        let mut backtrace: HashMap<DirectedSegment, Link> = HashMap::new();
        dom.insert(self.start_vertex, (f64::MAX, Range::new(0, 0)));

        let mut can_process = BTreeSet::new();
        let mut border = BTreeSet::new();
        self.update_can_be_processed(self.start_vertex, &dom, &mut can_process, &mut border);

        let mut nontrivial = false;
        let mut visited_count = 1usize;

        loop {
            let is_end = border.len() == 1;
            visited_count += 1;
            if visited_count > self.max_count {
                return None;
            }

            let v = if !is_end {
                let &v = can_process.iter().next()?;
                v
            } else {
                *border.iter().next().expect("is_end implies border has exactly one element")
            };
            can_process.remove(&v);

            let mut min_d = u64::MAX;
            let mut max_d = 0u64;
            let mut max_w = f64::MIN;
            let mut best_entrance: Option<Link> = None;
            let mut used_incoming = 0u32;

            for l in self.graph.incoming_links(v).filter(|l| !l.removed()) {
                let Some(&(pred_weight, pred_range)) = dom.get(&l.start()) else {
                    // Only reachable when is_end: an incoming link from outside the bubble.
                    continue;
                };
                used_incoming += 1;

                let seg_len = self.graph.segment_length(v);
                let shift = if (l.end_overlap() as u64) < seg_len {
                    seg_len - l.end_overlap() as u64
                } else {
                    1
                };
                let range = pred_range.shift(shift);
                min_d = min_d.min(range.lo());
                max_d = max_d.max(range.hi());

                let weight = pred_weight.min(self.weight_policy.step_weight(l));
                if weight > max_w {
                    max_w = weight;
                    best_entrance = Some(l);
                }
            }

            nontrivial |= used_incoming > 1;
            let best_entrance = best_entrance?;
            let range = Range::new(min_d, max_d);

            if !is_end {
                if self.has_edge_to_start(v) {
                    return None;
                }
                if self.graph.outgoing_link_cnt(v) == 0 {
                    return None;
                }
            }

            if dom.contains_key(&v.complement()) {
                return None;
            }

            dom.insert(v, (max_w, range));
            backtrace.insert(v, best_entrance);
            border.remove(&v);

            if is_end {
                let seg_len = self.graph.segment_length(v);
                if range.lo() > seg_len && range.lo() - seg_len > self.max_length {
                    return None;
                }
                if range.size() > self.max_diff {
                    return None;
                }
                if !nontrivial {
                    return None;
                }
                return Some(Superbubble {
                    start: self.start_vertex,
                    end: v,
                    segments: dom.keys().copied().collect(),
                    range,
                    heaviest_path: backtrace_path(v, &backtrace),
                });
            }

            self.update_can_be_processed(v, &dom, &mut can_process, &mut border);
        }
    }
}

fn backtrace_path(end: DirectedSegment, backtrace: &HashMap<DirectedSegment, Link>) -> Path {
    let mut rev_segments = vec![end];
    let mut rev_links = Vec::new();
    let mut cur = end;
    while let Some(&l) = backtrace.get(&cur) {
        rev_links.push(l);
        cur = l.start();
        rev_segments.push(cur);
    }
    rev_segments.reverse();
    rev_links.reverse();
    Path {
        segments: rev_segments,
        links: rev_links,
    }
}
