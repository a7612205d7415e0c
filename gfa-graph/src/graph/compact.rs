// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collapses every maximal non-branching path into a single segment.

use super::traversal::non_branching_path;
use super::Graph;
use crate::{CoverageLookup, DirectedSegment, Direction, Link, LinkId, Path, Segment, SegmentId};
use std::collections::{HashMap, HashSet};

/// Options controlling a [`compact`] run.
pub struct CompactOptions<'a> {
    /// Prefix for generated names; `${prefix}${counter}` with counter starting at 1.
    /// `"_"` means an empty prefix.
    pub prefix: String,
    /// Coverage source. `None` skips coverage accumulation entirely (no `RC`/`ll` tags).
    pub coverage: Option<&'a dyn CoverageLookup>,
    /// Non-zero enables De Bruijn graph coverage normalization: per-segment weight becomes
    /// `length - dbg_k` and the divisor becomes `total_length - dbg_k`. Every arc's
    /// `end_overlap` is expected to equal `dbg_k` in this mode.
    pub dbg_k: u32,
    /// Clamp inter-path link overlaps to `min(length(start), length(end)) - 1`.
    pub normalize_ovls: bool,
    /// Suppress sequence output; every compacted segment is written as `*`.
    pub drop_sequence: bool,
    /// Always generate a new name, even for trivial (single-segment) paths.
    pub rename_all: bool,
}

impl<'a> Default for CompactOptions<'a> {
    fn default() -> Self {
        Self {
            prefix: "m_".to_string(),
            coverage: None,
            dbg_k: 0,
            normalize_ovls: false,
            drop_sequence: false,
            rename_all: false,
        }
    }
}

/// The result of a [`compact`] run.
pub struct CompactResult {
    /// The compacted graph: one segment per maximal non-branching path.
    pub graph: Graph,
    /// Per-new-segment weighted-mean coverage, present only for segments where a coverage
    /// source was supplied and at least one constituent had a known coverage.
    pub coverage: HashMap<String, f64>,
    /// `(new_name, original_segment_names)` for every path that received a generated name
    /// (trivial paths keeping their original name are omitted).
    pub id_mapping: Vec<(String, Vec<String>)>,
}

/// Compacts every maximal non-branching path of `graph` into one new segment, per §4.4.
pub fn compact(graph: &Graph, options: &CompactOptions<'_>) -> CompactResult {
    let prefix = if options.prefix == "_" {
        String::new()
    } else {
        options.prefix.clone()
    };

    let mut used: HashSet<SegmentId> = HashSet::new();
    let mut inner_links: HashSet<LinkId> = HashSet::new();
    let mut orig2new: HashMap<SegmentId, (String, bool)> = HashMap::new();
    let mut new_segments: Vec<Segment> = Vec::new();
    let mut new_coverage: HashMap<String, f64> = HashMap::new();
    let mut id_mapping: Vec<(String, Vec<String>)> = Vec::new();
    let mut compact_cnt = 0usize;

    for v in graph.directed_segments() {
        if graph.segment(v.segment()).removed() {
            continue;
        }
        if v.direction() == Direction::Reverse || used.contains(&v.segment()) {
            continue;
        }

        let path = non_branching_path(graph, v);
        for seg in path.segments() {
            used.insert(seg.segment());
        }
        for link in path.links() {
            inner_links.insert(link.link_id());
        }

        let start = path.first().expect("non_branching_path never empty");
        let end = path.last().expect("non_branching_path never empty");
        let trivial = path.links().is_empty();

        let name = if trivial && !options.rename_all {
            graph.segment_name(start.segment()).to_string()
        } else {
            compact_cnt += 1;
            let name = format!("{}{}", prefix, compact_cnt);
            let orig_names = path
                .segments()
                .iter()
                .map(|d| graph.segment_name(d.segment()).to_string())
                .collect();
            id_mapping.push((name.clone(), orig_names));
            name
        };

        orig2new.insert(start.segment(), (name.clone(), start.direction() == Direction::Forward));
        if !trivial {
            orig2new.insert(end.segment(), (name.clone(), end.direction() == Direction::Forward));
        }

        let (sequence, length, coverage) = compacted_sequence(graph, &path, options);
        if let Some(cov) = coverage {
            new_coverage.insert(name.clone(), cov);
        }
        new_segments.push(Segment::new(name, length, sequence));
    }

    let name_to_id: HashMap<String, SegmentId> = new_segments
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name().to_string(), SegmentId::new(i)))
        .collect();

    let mut new_links: Vec<Link> = Vec::new();
    for link in graph.canonical_links() {
        if link.removed() || inner_links.contains(&link.link_id()) {
            continue;
        }
        let start_seg = link.start().segment();
        let end_seg = link.end().segment();
        if graph.segment(start_seg).removed() || graph.segment(end_seg).removed() {
            continue;
        }

        let Some((start_name, start_same)) = orig2new.get(&start_seg).cloned() else {
            continue;
        };
        let Some((end_name, end_same)) = orig2new.get(&end_seg).cloned() else {
            continue;
        };

        let new_start_dir = if start_same {
            link.start().direction()
        } else {
            link.start().direction().flip()
        };
        let new_end_dir = if end_same {
            link.end().direction()
        } else {
            link.end().direction().flip()
        };

        let new_start_id = name_to_id[&start_name];
        let new_end_id = name_to_id[&end_name];

        let mut ovl = link.overlap();
        if options.normalize_ovls {
            let bound = new_segments[new_start_id.index()]
                .length()
                .min(new_segments[new_end_id.index()].length())
                .saturating_sub(1);
            ovl = (ovl as u64).min(bound) as u32;
        }

        let link_id = LinkId::new(new_links.len() / 2);
        let forward = Link::new(
            DirectedSegment::new(new_start_id, new_start_dir),
            DirectedSegment::new(new_end_id, new_end_dir),
            ovl,
            ovl,
            link_id,
        );
        let twin = forward.complement();
        new_links.push(forward);
        new_links.push(twin);
    }

    CompactResult {
        graph: Graph::from_parts(new_segments, new_links),
        coverage: new_coverage,
        id_mapping,
    }
}

fn compacted_sequence(
    graph: &Graph,
    path: &Path,
    options: &CompactOptions<'_>,
) -> (Option<String>, u64, Option<f64>) {
    let first = path.first().expect("path is never empty");
    let first_seg = graph.segment(first.segment());
    let mut total_len = first_seg.length();
    let mut len_sum = total_len;
    let mut coverage_acc = 0f64;

    if let Some(cov_fn) = options.coverage {
        if let Some(c) = cov_fn.coverage(first_seg.name()) {
            coverage_acc += c * (first_seg.length() as f64 - options.dbg_k as f64);
        }
    }

    let build_sequence = !options.drop_sequence
        && path
            .segments()
            .iter()
            .all(|d| graph.segment(d.segment()).sequence().is_some());
    let mut sequence = build_sequence.then(|| directed_sequence(first_seg, first.direction()));

    for link in path.links() {
        let end_seg = graph.segment(link.end().segment());
        debug_assert!(options.dbg_k == 0 || link.end_overlap() == options.dbg_k);
        let trim = end_seg.length().saturating_sub(1).min(link.end_overlap() as u64);
        total_len += end_seg.length() - trim;
        len_sum += end_seg.length();
        if let Some(cov_fn) = options.coverage {
            if let Some(c) = cov_fn.coverage(end_seg.name()) {
                coverage_acc += c * (end_seg.length() as f64 - options.dbg_k as f64);
            }
        }
        if let Some(seq) = sequence.as_mut() {
            let directed = directed_sequence(end_seg, link.end().direction());
            seq.push_str(&directed[trim as usize..]);
        }
    }

    let coverage = options.coverage.map(|_| {
        let denom = if options.dbg_k == 0 {
            len_sum as f64
        } else {
            total_len as f64 - options.dbg_k as f64
        };
        coverage_acc / denom
    });

    (sequence, total_len, coverage)
}

fn directed_sequence(seg: &Segment, direction: Direction) -> String {
    let seq = seg.sequence().unwrap_or("");
    match direction {
        Direction::Forward => seq.to_string(),
        Direction::Reverse => reverse_complement(seq),
    }
}

fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_nucl).collect()
}

fn complement_nucl(c: char) -> char {
    match c {
        'A' => 'T',
        'a' => 't',
        'C' => 'G',
        'c' => 'g',
        'G' => 'C',
        'g' => 'c',
        'T' => 'A',
        't' => 'a',
        other => other,
    }
}
