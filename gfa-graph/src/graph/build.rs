// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Graph;
use crate::gfa::{parse_gfa, RawLink, RawSegment};
use crate::{DirectedSegment, Direction, Error, GfaWarning, Link, LinkId, Segment, SegmentId};
use indexmap::IndexMap;

impl Graph {
    /// Builds a graph from raw GFA records.
    ///
    /// Segments are kept in first-seen order; a later `S` record naming a segment already seen
    /// is dropped and reported as [`GfaWarning::DuplicateSegment`]. A link naming a segment that
    /// was never defined (or was dropped as a duplicate) is dropped and reported as
    /// [`GfaWarning::DanglingLink`]. A link whose overlap on either side is `>=` that side's
    /// segment length is kept -- it's the caller's problem once the graph is built -- but
    /// reported as [`GfaWarning::OverlapExceedsLength`].
    pub fn from_records(segments: Vec<RawSegment>, links: Vec<RawLink>) -> (Self, Vec<GfaWarning>) {
        let mut warnings = Vec::new();

        // IndexMap: first-seen order is preserved, which is what gives downstream algorithms
        // (superbubble tie-breaking, non-branching traversal) deterministic behavior on inputs
        // that are otherwise symmetric.
        let mut by_name: IndexMap<String, Segment> = IndexMap::with_capacity(segments.len());
        for raw in segments {
            if by_name.contains_key(&raw.name) {
                warnings.push(GfaWarning::DuplicateSegment {
                    name: raw.name.clone(),
                });
                continue;
            }
            by_name.insert(
                raw.name.clone(),
                Segment::new(raw.name, raw.length, raw.sequence),
            );
        }

        let segment_list: Vec<Segment> = by_name.values().cloned().collect();
        let index_of: IndexMap<String, SegmentId> = by_name
            .keys()
            .enumerate()
            .map(|(i, name)| (name.clone(), SegmentId::new(i)))
            .collect();

        let mut arcs = Vec::with_capacity(links.len() * 2);
        for raw in links {
            let (Some(&from_id), Some(&to_id)) =
                (index_of.get(&raw.from_name), index_of.get(&raw.to_name))
            else {
                warnings.push(GfaWarning::DanglingLink {
                    name: format!("{}{}{}{}", raw.from_name, strand(raw.from_forward), raw.to_name, strand(raw.to_forward)),
                });
                continue;
            };

            let start = DirectedSegment::new(from_id, dir(raw.from_forward));
            let end = DirectedSegment::new(to_id, dir(raw.to_forward));

            let from_len = segment_list[from_id.index()].length();
            let to_len = segment_list[to_id.index()].length();
            if raw.start_overlap as u64 >= from_len || raw.end_overlap as u64 >= to_len {
                warnings.push(GfaWarning::OverlapExceedsLength { segment: from_id });
            }

            let link_id = LinkId::new(arcs.len() / 2);
            let forward = Link::new(start, end, raw.start_overlap, raw.end_overlap, link_id);
            let twin = forward.complement();
            arcs.push(forward);
            arcs.push(twin);
        }

        (Graph::from_parts(segment_list, arcs), warnings)
    }
}

/// Parses `text` as GFA 1.0 and builds a graph from it.
pub fn from_gfa_text(text: &str) -> Result<(Graph, Vec<GfaWarning>), Error> {
    let (segments, links) = parse_gfa(text)?;
    Ok(Graph::from_records(segments, links))
}

fn dir(forward: bool) -> Direction {
    if forward {
        Direction::Forward
    } else {
        Direction::Reverse
    }
}

fn strand(forward: bool) -> &'static str {
    if forward {
        "+"
    } else {
        "-"
    }
}
