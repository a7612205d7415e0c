// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::SegmentId;
use std::fmt;

/// The two strands a segment can be traversed on.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Direction {
    /// The segment's sequence as recorded.
    Forward,
    /// The segment's reverse complement.
    Reverse,
}

impl Direction {
    /// Returns the other direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "+"),
            Direction::Reverse => write!(f, "-"),
        }
    }
}

/// A (segment, strand) pair: the bidirected-graph abstraction.
///
/// Every undirected segment appears as two `DirectedSegment`s, each the [`complement`] of the
/// other. The `inner_index` is a dense key suitable for indexing adjacency lists:
/// `segment.index() * 2 + (direction == Reverse)`.
///
/// [`complement`]: DirectedSegment::complement
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DirectedSegment {
    pub(crate) segment: SegmentId,
    pub(crate) direction: Direction,
}

impl DirectedSegment {
    /// Creates a new directed segment.
    pub fn new(segment: SegmentId, direction: Direction) -> Self {
        Self { segment, direction }
    }

    /// Reconstructs a `DirectedSegment` from its dense inner index.
    pub fn from_inner_index(inner: usize) -> Self {
        let direction = if inner & 1 == 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        Self {
            segment: SegmentId::new(inner >> 1),
            direction,
        }
    }

    /// The dense inner index used to key adjacency-list ranges.
    pub fn inner_index(&self) -> usize {
        (self.segment.index() << 1) | (self.direction == Direction::Reverse) as usize
    }

    /// The underlying segment id, independent of strand.
    pub fn segment(&self) -> SegmentId {
        self.segment
    }

    /// The strand this directed segment occupies.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the reverse-complement of this directed segment: same segment, flipped strand.
    pub fn complement(&self) -> Self {
        Self {
            segment: self.segment,
            direction: self.direction.flip(),
        }
    }
}

impl fmt::Debug for DirectedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.segment, self.direction)
    }
}
