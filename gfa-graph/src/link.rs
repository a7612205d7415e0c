// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::DirectedSegment;
use std::fmt;

/// Identifies a twin pair of arcs: a live arc and its reverse-complement always share a
/// `LinkId`, assigned once when the pair is created.
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LinkId(pub(crate) u32);

impl LinkId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Debug for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkId({})", self.0)
    }
}

/// An overlap arc between two directed segments.
///
/// Every link has a twin: for `(start -> end, start_overlap, end_overlap)` the twin is
/// `(end.complement() -> start.complement(), end_overlap, start_overlap)`. Both halves of a twin
/// pair share a [`LinkId`].
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Link {
    pub(crate) start: DirectedSegment,
    pub(crate) end: DirectedSegment,
    pub(crate) start_overlap: u32,
    pub(crate) end_overlap: u32,
    pub(crate) link_id: LinkId,
    pub(crate) removed: bool,
}

impl Link {
    pub(crate) fn new(
        start: DirectedSegment,
        end: DirectedSegment,
        start_overlap: u32,
        end_overlap: u32,
        link_id: LinkId,
    ) -> Self {
        Self {
            start,
            end,
            start_overlap,
            end_overlap,
            link_id,
            removed: false,
        }
    }

    /// The directed segment this link starts from.
    pub fn start(&self) -> DirectedSegment {
        self.start
    }

    /// The directed segment this link ends on.
    pub fn end(&self) -> DirectedSegment {
        self.end
    }

    /// Bases of `start`'s sequence consumed by the overlap.
    pub fn start_overlap(&self) -> u32 {
        self.start_overlap
    }

    /// Bases of `end`'s sequence consumed by the overlap.
    pub fn end_overlap(&self) -> u32 {
        self.end_overlap
    }

    /// The id shared by this link and its twin.
    pub fn link_id(&self) -> LinkId {
        self.link_id
    }

    /// Whether this link has been logically removed.
    pub fn removed(&self) -> bool {
        self.removed
    }

    /// The link's overlap for the purposes of compaction: the smaller of the two overlap sides.
    pub fn overlap(&self) -> u32 {
        self.start_overlap.min(self.end_overlap)
    }

    /// The larger of the two overlap sides, used by the weak-link pruner.
    pub fn max_overlap(&self) -> u32 {
        self.start_overlap.max(self.end_overlap)
    }

    /// Returns this link's reverse-complement twin.
    ///
    /// `l.complement().complement() == l` always holds (spec invariant 2).
    pub fn complement(&self) -> Self {
        Self {
            start: self.end.complement(),
            end: self.start.complement(),
            start_overlap: self.end_overlap,
            end_overlap: self.start_overlap,
            link_id: self.link_id,
            removed: self.removed,
        }
    }

    fn order_key(&self) -> (usize, usize, u32, u32) {
        (
            self.start.inner_index(),
            self.end.inner_index(),
            self.start_overlap,
            self.end_overlap,
        )
    }

    /// Whether this is the canonical representative of its twin pair.
    ///
    /// Exactly one of `l` and `l.complement()` is canonical, by a fixed total order over
    /// `(start, end, start_overlap, end_overlap)`. Writing GFA and computing inner-link sets use
    /// canonical form to avoid double-counting.
    pub fn is_canonical(&self) -> bool {
        self.order_key() <= self.complement().order_key()
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} -> {:?} ({}M/{}M)",
            self.start, self.end, self.start_overlap, self.end_overlap
        )
    }
}
