// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared CLI plumbing for the `gfa-tools` binaries: the common options every cleaning tool
//! accepts (§6), coverage-file and GFA file I/O, and exit-code mapping (§7).
//!
//! This library translates command-line arguments into `gfa-graph`'s data structures; it carries
//! no cleaning logic of its own.

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use gfa_graph::gfa::{parse_gfa, write_gfa, WriteOptions};
use gfa_graph::graph::{compact, CompactOptions, Graph};
use gfa_graph::GfaWarning;
use std::collections::HashMap;
use std::fs;
use std::io::Write as _;
use std::process::exit;
use structopt::StructOpt;

/// Options common to every cleaning tool, mirroring §6's "Common positional arguments" / "Common
/// options" list. Each tool's own options struct embeds this with `#[structopt(flatten)]`.
#[derive(Debug, StructOpt)]
pub struct GlobalOpts {
    /// Input GFA file
    pub gfa_in: Utf8PathBuf,

    /// Output GFA file
    pub gfa_out: Utf8PathBuf,

    /// Coverage file: one `<segment-name>\t<coverage>` line per segment
    #[structopt(long)]
    pub coverage: Option<Utf8PathBuf>,

    /// Compact maximal non-branching paths after running this tool
    #[structopt(long)]
    pub compact: bool,

    /// Append `<new-name>\t<original-name>,...` id-mapping records here (only meaningful with
    /// `--compact`)
    #[structopt(long)]
    pub id_mapping: Option<Utf8PathBuf>,

    /// Prefix for names generated by `--compact`; `_` means an empty prefix
    #[structopt(long, default_value = "m_")]
    pub prefix: String,

    /// Rename every compacted segment, even single-segment (trivial) paths
    #[structopt(long)]
    pub rename_all: bool,

    /// Replace every sequence with `*` on output
    #[structopt(long)]
    pub drop_sequence: bool,

    /// De Bruijn graph k-mer size; nonzero enables coverage normalization during compaction
    #[structopt(long, default_value = "0")]
    pub dbg_k: u64,
}

impl GlobalOpts {
    /// Loads the coverage map, if `--coverage` was given.
    pub fn load_coverage(&self) -> Result<Option<HashMap<String, f64>>> {
        self.coverage.as_deref().map(load_coverage_file).transpose()
    }

    /// Requires a coverage map to be present, per the tool's own threshold options. Returns exit
    /// code 2 (§6 "a required supplementary file is absent") when it's missing.
    pub fn require_coverage(&self) -> Result<HashMap<String, f64>> {
        self.load_coverage()?
            .ok_or_else(|| ToolError::missing_file("a coverage-dependent option was given without --coverage").into())
    }

    /// Reads and parses the input graph.
    pub fn read_graph(&self) -> Result<(Graph, Vec<GfaWarning>)> {
        read_graph(&self.gfa_in)
    }

    /// Runs `--compact` (if requested) and writes the final graph, coverage map and id-mapping
    /// file, matching the data flow in spec.md §2 ("Cleanup -> optionally Compact -> write").
    pub fn finish(
        &self,
        graph: Graph,
        coverage: Option<HashMap<String, f64>>,
    ) -> Result<()> {
        let (graph, coverage) = if self.compact {
            let options = CompactOptions {
                prefix: self.prefix.clone(),
                dbg_k: self.dbg_k as u32,
                drop_sequence: self.drop_sequence,
                rename_all: self.rename_all,
                coverage: coverage.as_ref().map(|c| c as &dyn gfa_graph::CoverageLookup),
                ..CompactOptions::default()
            };
            let result = compact(&graph, &options);
            if let Some(id_mapping_path) = &self.id_mapping {
                write_id_mapping(id_mapping_path, &result.id_mapping)?;
            }
            let coverage = if result.coverage.is_empty() { None } else { Some(result.coverage) };
            (result.graph, coverage)
        } else {
            (graph, coverage)
        };

        let write_options = WriteOptions {
            drop_sequence: self.drop_sequence,
            coverage: coverage.as_ref().map(|c| c as &dyn gfa_graph::CoverageLookup),
        };
        write_graph(&self.gfa_out, &graph, &write_options)
    }
}

/// Parses a coverage file: one `<name>\t<coverage>` line per segment.
pub fn load_coverage_file(path: &Utf8Path) -> Result<HashMap<String, f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| anyhow!("failed to read coverage file {}", path))?;
    let mut coverage = HashMap::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let name = fields
            .next()
            .ok_or_else(|| anyhow!("{}:{}: missing segment name", path, lineno + 1))?;
        let value = fields
            .next()
            .ok_or_else(|| anyhow!("{}:{}: missing coverage value", path, lineno + 1))?;
        let value: f64 = value
            .parse()
            .with_context(|| anyhow!("{}:{}: invalid coverage value '{}'", path, lineno + 1, value))?;
        coverage.insert(name.to_string(), value);
    }
    Ok(coverage)
}

/// Reads and parses a GFA file, printing every warning to stderr.
pub fn read_graph(path: &Utf8Path) -> Result<(Graph, Vec<GfaWarning>)> {
    let text = fs::read_to_string(path).with_context(|| anyhow!("failed to read {}", path))?;
    let (segments, links) =
        parse_gfa(&text).map_err(|err| ToolError::usage(err.to_string()))?;
    let (graph, warnings) = Graph::from_records(segments, links);
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }
    Ok((graph, warnings))
}

/// Writes a graph to `path` with atomic write-or-absent semantics: rendered to a sibling
/// temporary file first, then renamed into place, so a failure partway through never leaves a
/// truncated `gfa_out` behind.
pub fn write_graph(path: &Utf8Path, graph: &Graph, options: &WriteOptions<'_>) -> Result<()> {
    let text = write_gfa(graph, options);
    let tmp_path = path.with_extension("gfa.tmp");
    {
        let mut file = fs::File::create(&tmp_path)
            .with_context(|| anyhow!("failed to create {}", tmp_path))?;
        file.write_all(text.as_bytes())
            .with_context(|| anyhow!("failed to write {}", tmp_path))?;
    }
    fs::rename(&tmp_path, path).with_context(|| anyhow!("failed to rename {} to {}", tmp_path, path))?;
    Ok(())
}

/// Appends id-mapping records for every renamed compacted segment, per §6's "`--id-mapping
/// <file>` (appended)".
pub fn write_id_mapping(path: &Utf8Path, mapping: &[(String, Vec<String>)]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| anyhow!("failed to open {}", path))?;
    for (new_name, originals) in mapping {
        writeln!(file, "{}\t{}", new_name, originals.join(","))
            .with_context(|| anyhow!("failed to write {}", path))?;
    }
    Ok(())
}

/// A CLI-boundary error carrying the exit code it should map to, per §6 ("0 on success; 1 on
/// argument-parsing failure...; 2 when a required supplementary file is absent").
#[derive(Debug)]
pub struct ToolError {
    code: i32,
    message: String,
}

impl ToolError {
    /// Exit code 1: usage / argument error discovered after parsing succeeded.
    pub fn usage(message: impl Into<String>) -> Self {
        Self { code: 1, message: message.into() }
    }

    /// Exit code 2: a required supplementary file (e.g. `--coverage`) was absent.
    pub fn missing_file(message: impl Into<String>) -> Self {
        Self { code: 2, message: message.into() }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ToolError {}

/// Parses `T` from the real command line, exiting with code 1 and the usage message on failure
/// (structopt's own default exit code doesn't match §6's "1 on argument-parsing failure").
pub fn parse_args<T: StructOpt>() -> T {
    match T::from_args_safe() {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    }
}

/// Runs a tool's `main`, mapping its result to the exit codes in §6 and printing a `color-eyre`
/// report for anything that isn't a [`ToolError`].
pub fn run_tool(main: impl FnOnce() -> Result<()>) -> ! {
    match main() {
        Ok(()) => exit(0),
        Err(err) => {
            if let Some(tool_err) = err.downcast_ref::<ToolError>() {
                eprintln!("error: {}", tool_err);
                exit(tool_err.code);
            }
            eprintln!("{:?}", err);
            exit(1);
        }
    }
}
