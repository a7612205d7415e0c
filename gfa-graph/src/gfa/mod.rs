// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The GFA 1.0 text container: parsing, writing, and the plain-data record types that sit
//! between the two and [`Graph::from_records`](crate::graph::Graph::from_records).
//!
//! Lines are tab-separated; unknown line kinds are ignored on read. Only three line kinds are
//! understood: `H` (header, always emitted first on write), `S` (segment) and `L` (link, with a
//! CIGAR restricted to a single `<int>M` operation).

mod reader;
mod writer;

pub use reader::parse_gfa;
pub use writer::{write_gfa, WriteOptions};

/// A segment as read from (or about to be written to) an `S` line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawSegment {
    /// The segment's stable name.
    pub name: String,
    /// The segment's length in bases.
    pub length: u64,
    /// The segment's sequence, or `None` if it was recorded as `*`.
    pub sequence: Option<String>,
}

impl RawSegment {
    /// Creates a new raw segment record.
    pub fn new(name: impl Into<String>, length: u64, sequence: Option<String>) -> Self {
        Self {
            name: name.into(),
            length,
            sequence,
        }
    }
}

/// A link as read from (or about to be written to) an `L` line.
///
/// The on-disk grammar carries a single `<int>M` overlap; `gfa-graph`'s internal model keeps a
/// separate `start_overlap`/`end_overlap` pair (matching the bidirected link data model), so a
/// plain GFA read sets both to the parsed value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawLink {
    /// Name of the segment the link starts from.
    pub from_name: String,
    /// Whether the link leaves `from_name` on its forward strand.
    pub from_forward: bool,
    /// Name of the segment the link ends on.
    pub to_name: String,
    /// Whether the link arrives at `to_name` on its forward strand.
    pub to_forward: bool,
    /// Bases of `from_name` consumed by the overlap.
    pub start_overlap: u32,
    /// Bases of `to_name` consumed by the overlap.
    pub end_overlap: u32,
}

impl RawLink {
    /// Creates a new raw link record with independently specified overlap sizes.
    pub fn new(
        from_name: impl Into<String>,
        from_forward: bool,
        to_name: impl Into<String>,
        to_forward: bool,
        start_overlap: u32,
        end_overlap: u32,
    ) -> Self {
        Self {
            from_name: from_name.into(),
            from_forward,
            to_name: to_name.into(),
            to_forward,
            start_overlap,
            end_overlap,
        }
    }

    /// Creates a new raw link record from a single on-disk overlap value, as read from a plain
    /// `<int>M` CIGAR.
    pub fn symmetric(
        from_name: impl Into<String>,
        from_forward: bool,
        to_name: impl Into<String>,
        to_forward: bool,
        overlap: u32,
    ) -> Self {
        Self::new(from_name, from_forward, to_name, to_forward, overlap, overlap)
    }
}
