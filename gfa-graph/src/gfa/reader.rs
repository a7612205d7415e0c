// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::gfa::{RawLink, RawSegment};
use crate::Error;

/// Parses GFA 1.0 text into segment and link records.
///
/// Lines are tab-separated; unknown line kinds (including `H`) are ignored. `S` lines need a
/// `LN:i:<len>` tag unless they carry an explicit sequence (in which case the sequence's length
/// is used as a fallback). `L` lines must carry a CIGAR restricted to a single `<int>M`
/// operation.
pub fn parse_gfa(text: &str) -> Result<(Vec<RawSegment>, Vec<RawLink>), Error> {
    let mut segments = Vec::new();
    let mut links = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match fields[0] {
            "S" => segments.push(parse_segment(&fields, line_no)?),
            "L" => links.push(parse_link(&fields, line_no)?),
            _ => {
                // Unknown line kinds (H, C, P, comments, ...) are ignored on read.
            }
        }
    }

    Ok((segments, links))
}

fn parse_segment(fields: &[&str], line_no: usize) -> Result<RawSegment, Error> {
    if fields.len() < 3 {
        return Err(Error::GfaParseError(format!(
            "line {}: S record needs at least 3 fields",
            line_no + 1
        )));
    }
    let name = fields[1].to_string();
    let seq_field = fields[2];
    let sequence = if seq_field == "*" {
        None
    } else {
        Some(seq_field.to_string())
    };

    let mut explicit_length = None;
    for tag in &fields[3..] {
        if let Some(rest) = tag.strip_prefix("LN:i:") {
            explicit_length = Some(rest.parse::<u64>().map_err(|_| {
                Error::GfaParseError(format!("line {}: invalid LN tag '{}'", line_no + 1, tag))
            })?);
        }
    }

    let length = match (explicit_length, &sequence) {
        (Some(len), _) => len,
        (None, Some(seq)) => seq.len() as u64,
        (None, None) => {
            return Err(Error::GfaParseError(format!(
                "line {}: S record for '{}' has no sequence and no LN tag",
                line_no + 1,
                name
            )))
        }
    };

    Ok(RawSegment::new(name, length, sequence))
}

fn parse_strand(field: &str, line_no: usize) -> Result<bool, Error> {
    match field {
        "+" => Ok(true),
        "-" => Ok(false),
        other => Err(Error::GfaParseError(format!(
            "line {}: expected '+' or '-', found '{}'",
            line_no + 1,
            other
        ))),
    }
}

fn parse_overlap(field: &str, line_no: usize) -> Result<u32, Error> {
    let digits = field.strip_suffix('M').ok_or_else(|| {
        Error::GfaParseError(format!(
            "line {}: CIGAR '{}' must be a single <int>M operation",
            line_no + 1,
            field
        ))
    })?;
    digits.parse::<u32>().map_err(|_| {
        Error::GfaParseError(format!(
            "line {}: invalid overlap '{}'",
            line_no + 1,
            field
        ))
    })
}

fn parse_link(fields: &[&str], line_no: usize) -> Result<RawLink, Error> {
    if fields.len() < 6 {
        return Err(Error::GfaParseError(format!(
            "line {}: L record needs at least 6 fields",
            line_no + 1
        )));
    }
    let from_forward = parse_strand(fields[2], line_no)?;
    let to_forward = parse_strand(fields[4], line_no)?;
    let overlap = parse_overlap(fields[5], line_no)?;

    Ok(RawLink::symmetric(
        fields[1],
        from_forward,
        fields[3],
        to_forward,
        overlap,
    ))
}
