// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::graph::Graph;
use crate::{CoverageLookup, Direction};
use std::fmt::Write as _;

/// Options controlling how [`write_gfa`] renders a graph.
#[derive(Default)]
pub struct WriteOptions<'a> {
    /// Replace every segment's sequence with `*` on output.
    pub drop_sequence: bool,
    /// Coverage source used to emit `RC`/`ll` tags on `S` lines. `None` omits both tags.
    pub coverage: Option<&'a dyn CoverageLookup>,
}

/// Renders a graph as GFA 1.0 text.
///
/// Only canonical links (§3) are written, to avoid emitting both halves of a twin pair.
/// Removed segments and links are skipped entirely -- the writer never sees a dead entity unless
/// the caller didn't call [`Graph::cleanup`] first, in which case removed entries are still
/// filtered out here.
pub fn write_gfa(graph: &Graph, options: &WriteOptions<'_>) -> String {
    let mut out = String::new();
    out.push_str("H\tVN:Z:1.0\n");

    for segment in graph.segments() {
        if segment.removed() {
            continue;
        }
        let seq_field: String = if options.drop_sequence {
            "*".to_string()
        } else {
            segment.sequence().unwrap_or("*").to_string()
        };
        write!(out, "S\t{}\t{}\tLN:i:{}", segment.name(), seq_field, segment.length()).unwrap();

        if let Some(coverage) = options.coverage {
            if let Some(cov) = coverage.coverage(segment.name()) {
                let rc = (cov * segment.length() as f64).round() as i64;
                write!(out, "\tRC:i:{}\tll:f:{:.3}", rc, cov).unwrap();
            }
        }
        out.push('\n');
    }

    for link in graph.canonical_links() {
        if link.removed() {
            continue;
        }
        let start_seg = graph.segment(link.start().segment());
        let end_seg = graph.segment(link.end().segment());
        if start_seg.removed() || end_seg.removed() {
            continue;
        }

        let overlap = clamp_overlap(link.start_overlap(), start_seg.length())
            .min(clamp_overlap(link.end_overlap(), end_seg.length()));

        writeln!(
            out,
            "L\t{}\t{}\t{}\t{}\t{}M",
            start_seg.name(),
            strand_char(link.start().direction()),
            end_seg.name(),
            strand_char(link.end().direction()),
            overlap,
        )
        .unwrap();
    }

    out
}

fn strand_char(direction: Direction) -> char {
    match direction {
        Direction::Forward => '+',
        Direction::Reverse => '-',
    }
}

/// Clamps a pathological overlap (>= the segment's own length) down to `length - 1` so that
/// downstream readers never see an overlap that would consume an entire segment.
fn clamp_overlap(overlap: u32, length: u64) -> u32 {
    if length == 0 {
        return 0;
    }
    let max_allowed = (length - 1).min(u32::MAX as u64) as u32;
    overlap.min(max_allowed)
}
