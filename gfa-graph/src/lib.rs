// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A bidirected assembly-graph model for GFA (Graphical Fragment Assembly) files, plus the
//! cleaning algorithms (tip clipping, bulge popping, superbubble detection, compaction, ...)
//! that operate on it.
//!
//! `gfa-graph` loads a GFA file into a [`Graph`](graph::Graph), a mutable bidirected graph in
//! which every segment appears as two complementary directed vertices and every link exists
//! simultaneously as itself and as its reverse-complement twin. The cleaning tools in the
//! `gfa-tools` crate are thin drivers over the operations this crate exposes.
//!
//! # Examples
//!
//! Build a graph from in-memory records and look up a segment:
//!
//! ```
//! use gfa_graph::graph::Graph;
//! use gfa_graph::{RawLink, RawSegment};
//!
//! let segments = vec![
//!     RawSegment::new("a", 100, None),
//!     RawSegment::new("b", 100, None),
//! ];
//! let links = vec![RawLink::new("a", true, "b", true, 10, 10)];
//! let (graph, warnings) = Graph::from_records(segments, links);
//! assert!(warnings.is_empty());
//! assert_eq!(graph.segment_cnt(), 2);
//! ```

#![warn(missing_docs)]

mod coverage;
mod direction;
pub mod errors;
pub mod gfa;
pub mod graph;
mod link;
mod path;
mod segment;
#[cfg(test)]
mod unit_tests;

pub use coverage::CoverageLookup;
pub use direction::{Direction, DirectedSegment};
pub use errors::{Error, GfaWarning};
pub use gfa::{RawLink, RawSegment};
pub use link::{Link, LinkId};
pub use path::{Path, Range};
pub use segment::{Segment, SegmentId};
