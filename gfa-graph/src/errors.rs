// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contains types that describe errors and warnings that `gfa-graph` methods can return.

use crate::SegmentId;
use std::fmt;
use std::io;

use Error::*;

/// Error type describing the sorts of errors `gfa-graph` can return.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading or writing a GFA file.
    Io(io::Error),
    /// The GFA text couldn't be parsed.
    GfaParseError(String),
    /// A link referenced a segment name that was never declared with an `S` line.
    UnknownSegment(String),
    /// An internal error occurred within this `Graph`. Indicates a broken invariant.
    GraphInternalError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Io(err) => write!(f, "I/O error: {}", err),
            GfaParseError(msg) => write!(f, "error while parsing GFA: {}", msg),
            UnknownSegment(name) => write!(f, "link refers to unknown segment '{}'", name),
            GraphInternalError(msg) => write!(f, "internal error in graph: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Io(err) => Some(err),
            GfaParseError(_) => None,
            UnknownSegment(_) => None,
            GraphInternalError(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Io(err)
    }
}

/// Describes a recoverable problem noticed while building or writing a graph.
///
/// Warnings never abort a run (spec error kind 3): the graph is built (or written) as best as
/// it can be, and the warning is surfaced to the caller for reporting.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum GfaWarning {
    /// Two `S` lines declared the same segment name; the later one was ignored.
    DuplicateSegment {
        /// The duplicated name.
        name: String,
    },
    /// An `L` line referenced a segment name that was never declared.
    DanglingLink {
        /// The name the link referred to.
        name: String,
    },
    /// A link's `start_overlap` is at least as long as the segment it starts from, or its
    /// `end_overlap` is at least as long as the segment it ends on -- the link is pathological
    /// and will be clamped on output.
    OverlapExceedsLength {
        /// The segment whose length the overlap exceeds or equals.
        segment: SegmentId,
    },
    /// A pruning pass left a directed segment with no outgoing arcs that had at least one before
    /// the pass ran. Raised by [`crate::graph::remove_nongenomic_links`] (§4.5: "Warn if new
    /// deadends appear").
    NewDeadend {
        /// The segment that became a dead end.
        segment: SegmentId,
    },
}

impl fmt::Display for GfaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfaWarning::DuplicateSegment { name } => {
                write!(f, "duplicate segment name '{}', ignoring later occurrence", name)
            }
            GfaWarning::DanglingLink { name } => {
                write!(f, "link references unknown segment '{}', dropping link", name)
            }
            GfaWarning::OverlapExceedsLength { segment } => write!(
                f,
                "overlap is >= length of segment {:?}; will be clamped on output",
                segment
            ),
            GfaWarning::NewDeadend { segment } => {
                write!(f, "segment {:?} became a new dead end", segment)
            }
        }
    }
}
