// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{DirectedSegment, Direction, Error, Link, LinkId, Path, Segment, SegmentId};
use std::collections::HashMap;

/// A mutable bidirected assembly graph.
///
/// Segments live in an ordered `Vec`, indexed by [`SegmentId`]. Arcs live in a single flat `Vec`,
/// sorted and indexed by the inner vertex id of their `start`: for each directed vertex `v` the
/// outgoing arcs occupy a contiguous range `ranges[v.inner_index()]`. Incoming arcs of `v` are
/// read as the outgoing arcs of `v.complement()`, reinterpreted as complements on the fly -- they
/// are the twins of the incoming arcs, and materializing them costs nothing beyond the
/// `complement()` call. This is the "double-iteration-list" design: there is exactly one physical
/// adjacency index, and the symmetric-link invariant holds by construction, since a twin pair's
/// two halves are both explicit entries in `arcs`.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(super) segments: Vec<Segment>,
    pub(super) name_index: HashMap<String, SegmentId>,
    pub(super) arcs: Vec<Link>,
    // ranges[v.inner_index()] = half-open (start, end) index range into `arcs`.
    pub(super) ranges: Vec<(u32, u32)>,
}

impl Graph {
    pub(super) fn from_parts(segments: Vec<Segment>, mut arcs: Vec<Link>) -> Self {
        // Stable sort: arcs that tie on start vertex keep their relative insertion order, which
        // is what gives the superbubble finder and the pruners deterministic tie-breaking.
        arcs.sort_by_key(|a| a.start.inner_index());
        let mut graph = Self {
            segments,
            name_index: HashMap::new(),
            arcs,
            ranges: Vec::new(),
        };
        graph.rebuild_ranges();
        graph.rebuild_name_index();
        graph
    }

    fn rebuild_ranges(&mut self) {
        let n = self.segments.len() * 2;
        let mut ranges = vec![(0u32, 0u32); n];
        let mut i = 0usize;
        while i < self.arcs.len() {
            let inner = self.arcs[i].start.inner_index();
            let range_start = i;
            while i < self.arcs.len() && self.arcs[i].start.inner_index() == inner {
                i += 1;
            }
            ranges[inner] = (range_start as u32, i as u32);
        }
        self.ranges = ranges;
    }

    fn rebuild_name_index(&mut self) {
        self.name_index = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), SegmentId::new(i)))
            .collect();
    }

    fn range_of(&self, v: DirectedSegment) -> (usize, usize) {
        let (s, e) = self.ranges[v.inner_index()];
        (s as usize, e as usize)
    }

    /// Number of segments, live or removed.
    pub fn segment_cnt(&self) -> usize {
        self.segments.len()
    }

    /// Number of distinct links (twin pairs), live or removed, counted once each.
    pub fn link_cnt(&self) -> usize {
        self.arcs.len() / 2
    }

    /// Looks up a segment by id.
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.index()]
    }

    /// Looks up a segment id by its name.
    pub fn segment_id_by_name(&self, name: &str) -> Option<SegmentId> {
        self.name_index.get(name).copied()
    }

    /// The segment's stable name.
    pub fn segment_name(&self, id: SegmentId) -> &str {
        self.segments[id.index()].name()
    }

    /// The segment's length in bases.
    pub fn segment_length(&self, id: SegmentId) -> u64 {
        self.segments[id.index()].length()
    }

    /// All segments, in id order. Removed segments are included; filter by
    /// [`Segment::removed`].
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// All `2 * segment_cnt()` directed vertices, in ascending inner-index order. Directed
    /// vertices over removed segments are still yielded; filter by `graph.segment(v.segment())
    /// .removed()`.
    pub fn directed_segments(&self) -> impl Iterator<Item = DirectedSegment> + '_ {
        (0..self.segments.len() * 2).map(DirectedSegment::from_inner_index)
    }

    /// All arcs physically stored with `start == v`, live or removed, in storage order.
    pub fn outgoing_links(&self, v: DirectedSegment) -> impl Iterator<Item = Link> + '_ {
        let (s, e) = self.range_of(v);
        self.arcs[s..e].iter().copied()
    }

    /// All arcs ending at `v`: the twins of `v.complement()`'s outgoing arcs, read back as
    /// complements so `end() == v` holds. Live or removed, in storage order.
    pub fn incoming_links(&self, v: DirectedSegment) -> impl Iterator<Item = Link> + '_ {
        let (s, e) = self.range_of(v.complement());
        self.arcs[s..e].iter().map(|l| l.complement())
    }

    /// Number of live outgoing arcs from `v`.
    pub fn outgoing_link_cnt(&self, v: DirectedSegment) -> usize {
        self.outgoing_links(v).filter(|l| !l.removed()).count()
    }

    /// Number of live incoming arcs into `v`.
    pub fn incoming_link_cnt(&self, v: DirectedSegment) -> usize {
        self.incoming_links(v).filter(|l| !l.removed()).count()
    }

    /// `true` iff `v` has no live outgoing arcs.
    pub fn no_outgoing(&self, v: DirectedSegment) -> bool {
        self.outgoing_link_cnt(v) == 0
    }

    /// `true` iff `v` has no live incoming arcs.
    pub fn no_incoming(&self, v: DirectedSegment) -> bool {
        self.incoming_link_cnt(v) == 0
    }

    /// The single live outgoing arc from `v`, or `None` if `v` has zero or more than one.
    pub fn unique_outgoing(&self, v: DirectedSegment) -> Option<Link> {
        let mut live = self.outgoing_links(v).filter(|l| !l.removed());
        let first = live.next()?;
        if live.next().is_some() {
            None
        } else {
            Some(first)
        }
    }

    /// The single live incoming arc into `v`, or `None` if `v` has zero or more than one.
    pub fn unique_incoming(&self, v: DirectedSegment) -> Option<Link> {
        let mut live = self.incoming_links(v).filter(|l| !l.removed());
        let first = live.next()?;
        if live.next().is_some() {
            None
        } else {
            Some(first)
        }
    }

    /// All canonical links (§3), live or removed, the representation used when writing GFA or
    /// counting inner links without double-counting a twin pair.
    pub fn canonical_links(&self) -> impl Iterator<Item = Link> + '_ {
        self.arcs.iter().copied().filter(|l| l.is_canonical())
    }

    /// Total length of a path: the first segment's length, plus for every link the end
    /// segment's length minus the link's `end_overlap`.
    pub fn total_length(&self, path: &Path) -> u64 {
        let Some(first) = path.first() else {
            return 0;
        };
        let mut total = self.segment_length(first.segment());
        for link in path.links() {
            total += self.segment_length(link.end().segment()) - link.end_overlap() as u64;
        }
        total
    }

    fn find_arc_index(&self, start: DirectedSegment, link_id: LinkId) -> Option<usize> {
        let (s, e) = self.range_of(start);
        (s..e).find(|&i| self.arcs[i].link_id() == link_id)
    }

    /// Marks `id` removed, and logically removes every arc in either of its two directed
    /// vertices' outgoing ranges (covering both genuine outgoing arcs and the twins of incoming
    /// arcs on both strands). Arcs whose twin lives on a neighbouring segment are left for
    /// [`fix_symmetric_deletion`](Self::fix_symmetric_deletion) to catch.
    pub fn delete_segment(&mut self, id: SegmentId) {
        self.segments[id.index()].removed = true;
        for direction in [Direction::Forward, Direction::Reverse] {
            let v = DirectedSegment::new(id, direction);
            let (s, e) = self.range_of(v);
            for arc in &mut self.arcs[s..e] {
                arc.removed = true;
            }
        }
    }

    /// Marks `link` and its twin removed.
    pub fn delete_link(&mut self, link: Link) {
        if let Some(i) = self.find_arc_index(link.start(), link.link_id()) {
            self.arcs[i].removed = true;
        }
        if let Some(i) = self.find_arc_index(link.end().complement(), link.link_id()) {
            self.arcs[i].removed = true;
        }
    }

    /// Walks every live arc and, if its twin is missing or already removed, marks it removed
    /// too. Defensive: restores the symmetric-link invariant after a caller (or
    /// [`delete_segment`](Self::delete_segment)) broke it on only one side.
    pub fn fix_symmetric_deletion(&mut self) {
        let removed_snapshot: Vec<bool> = self.arcs.iter().map(|a| a.removed).collect();
        for i in 0..self.arcs.len() {
            if removed_snapshot[i] {
                continue;
            }
            let arc = self.arcs[i];
            let twin_start = arc.end().complement();
            let twin_live = self
                .find_arc_index(twin_start, arc.link_id())
                .map(|j| !removed_snapshot[j])
                .unwrap_or(false);
            if !twin_live {
                self.arcs[i].removed = true;
            }
        }
    }

    /// Compacts storage: drops every logically-removed segment and arc, re-indexes, and calls
    /// [`fix_symmetric_deletion`](Self::fix_symmetric_deletion) first so that the result
    /// satisfies [`check_no_dead_links`](Self::check_no_dead_links).
    ///
    /// Invalidates any `SegmentId`/inner-index values obtained before the call.
    pub fn cleanup(&mut self) {
        self.fix_symmetric_deletion();

        let mut old_to_new: Vec<Option<SegmentId>> = vec![None; self.segments.len()];
        let mut new_segments = Vec::with_capacity(self.segments.len());
        for (old_idx, seg) in self.segments.iter().enumerate() {
            if seg.removed {
                continue;
            }
            let new_id = SegmentId::new(new_segments.len());
            old_to_new[old_idx] = Some(new_id);
            new_segments.push(seg.clone());
        }

        let mut new_arcs = Vec::with_capacity(self.arcs.len());
        for arc in &self.arcs {
            if arc.removed {
                continue;
            }
            // Both endpoints should already be live segments, since fix_symmetric_deletion
            // propagated any segment-removal into both halves of the twin pair. Checked anyway,
            // cheaply, as a defensive net.
            let (Some(start_seg), Some(end_seg)) = (
                old_to_new[arc.start.segment.index()],
                old_to_new[arc.end.segment.index()],
            ) else {
                continue;
            };
            let mut new_arc = *arc;
            new_arc.start = DirectedSegment::new(start_seg, arc.start.direction);
            new_arc.end = DirectedSegment::new(end_seg, arc.end.direction);
            new_arcs.push(new_arc);
        }
        new_arcs.sort_by_key(|a| a.start.inner_index());

        self.segments = new_segments;
        self.arcs = new_arcs;
        self.rebuild_ranges();
        self.rebuild_name_index();
    }

    /// Diagnostic: `true` iff no arc has the removed flag set.
    pub fn check_no_dead_links(&self) -> bool {
        self.arcs.iter().all(|a| !a.removed)
    }

    /// Verifies internal invariants on this graph. Used by tests and by callers that want to
    /// assert the symmetric-link invariant (spec error kind 4) after a pruning pass.
    pub fn verify(&self) -> Result<(), Error> {
        if self.ranges.len() != self.segments.len() * 2 {
            return Err(Error::GraphInternalError(format!(
                "range table has {} entries, expected {}",
                self.ranges.len(),
                self.segments.len() * 2
            )));
        }
        for arc in self.arcs.iter().filter(|a| !a.removed) {
            let twin_start = arc.end().complement();
            match self.find_arc_index(twin_start, arc.link_id()) {
                Some(i) if !self.arcs[i].removed => {
                    let twin = self.arcs[i];
                    if twin.complement() != *arc {
                        return Err(Error::GraphInternalError(format!(
                            "arc {:?} and its twin {:?} don't agree on fields",
                            arc, twin
                        )));
                    }
                }
                _ => {
                    return Err(Error::GraphInternalError(format!(
                        "live arc {:?} has no live twin",
                        arc
                    )));
                }
            }
        }
        Ok(())
    }
}
