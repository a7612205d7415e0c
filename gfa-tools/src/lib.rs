// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-tool option structs and drivers for the `gfa-tools` binaries (§2, §4.5, §4.6). Each
//! binary in `src/bin/` is a thin wrapper that parses its own `Options` type and calls `exec`.

use anyhow::Result;
use gfa_cmdlib::{GlobalOpts, ToolError};
use gfa_graph::graph::{
    clip_tips, compact, extract_neighborhood, kill_loops, remove_isolated, remove_low_coverage,
    remove_nongenomic_links, remove_shortcuts, remove_simple_bulges, remove_unbalanced_links,
    remove_weak_links, BulgeOptions, CompactOptions, IsolatedOptions, LoopKillOptions,
    LowCoverageOptions, NongenomicOptions, PruneReport, ShortcutOptions, TipClipOptions,
    UnbalancedOptions, WeakLinkOptions,
};
use gfa_graph::CoverageLookup;
use std::collections::HashSet;
use structopt::StructOpt;

fn report_pruned(tool: &str, report: PruneReport) {
    eprintln!(
        "{}: removed {} segment(s), {} link(s)",
        tool, report.deleted_segments, report.deleted_links
    );
}

#[derive(Debug, StructOpt)]
pub struct TipClipperOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Maximum tip length (before adding the start overlap)
    #[structopt(long, default_value = "10000")]
    pub max_length: u64,

    /// Only clip tips with at most this many supporting reads (requires --coverage to hold
    /// per-segment read counts)
    #[structopt(long)]
    pub max_read_cnt: Option<u64>,

    /// Only clip tips with coverage below this threshold
    #[structopt(long)]
    pub cov_thr: Option<f64>,
}

impl TipClipperOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.load_coverage()?;
        if (self.max_read_cnt.is_some() || self.cov_thr.is_some()) && coverage.is_none() {
            return Err(ToolError::missing_file(
                "--max-read-cnt/--cov-thr given without --coverage",
            )
            .into());
        }
        let cov_ref: Option<&dyn CoverageLookup> = coverage.as_ref().map(|c| c as &dyn CoverageLookup);
        let options = TipClipOptions {
            max_length: self.max_length,
            max_read_cnt: self.max_read_cnt,
            read_count: cov_ref,
            cov_thr: self.cov_thr,
            coverage: cov_ref,
        };
        let report = clip_tips(&mut graph, &options);
        report_pruned("gfa-tip-clipper", report);
        self.common.finish(graph, coverage)
    }
}

#[derive(Debug, StructOpt)]
pub struct IsolatedRemoverOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Maximum length of an isolated segment to remove
    #[structopt(long, default_value = "10000")]
    pub max_length: u64,

    /// Only remove isolated segments with coverage below this threshold
    #[structopt(long)]
    pub cov_thr: Option<f64>,
}

impl IsolatedRemoverOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.load_coverage()?;
        if self.cov_thr.is_some() && coverage.is_none() {
            return Err(ToolError::missing_file("--cov-thr given without --coverage").into());
        }
        let cov_ref: Option<&dyn CoverageLookup> = coverage.as_ref().map(|c| c as &dyn CoverageLookup);
        let options = IsolatedOptions {
            max_length: self.max_length,
            cov_thr: self.cov_thr,
            coverage: cov_ref,
        };
        let report = remove_isolated(&mut graph, &options);
        report_pruned("gfa-isolated-remover", report);
        self.common.finish(graph, coverage)
    }
}

#[derive(Debug, StructOpt)]
pub struct LowCoverageRemoverOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Maximum length of a segment eligible for removal
    #[structopt(long, default_value = "10000")]
    pub max_length: u64,

    /// Remove segments with coverage strictly below this threshold
    #[structopt(long)]
    pub cov_thr: f64,
}

impl LowCoverageRemoverOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.require_coverage()?;
        let options = LowCoverageOptions {
            max_length: self.max_length,
            cov_thr: self.cov_thr,
            coverage: &coverage,
        };
        let report = remove_low_coverage(&mut graph, &options);
        report_pruned("gfa-low-coverage-remover", report);
        self.common.finish(graph, Some(coverage))
    }
}

#[derive(Debug, StructOpt)]
pub struct LoopKillerOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Kill self-loops on vertices with coverage at or below this
    #[structopt(long)]
    pub max_base_coverage: f64,
}

impl LoopKillerOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.require_coverage()?;
        let options = LoopKillOptions {
            max_base_coverage: self.max_base_coverage,
            coverage: &coverage,
        };
        let report = kill_loops(&mut graph, &options);
        report_pruned("gfa-loop-killer", report);
        self.common.finish(graph, Some(coverage))
    }
}

#[derive(Debug, StructOpt)]
pub struct ShortcutRemoverOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Both endpoints of a candidate shortcut must have coverage below this
    #[structopt(long)]
    pub max_base_coverage: f64,

    /// The alternative path's internal vertices must have coverage at or above this
    #[structopt(long)]
    pub min_path_coverage: f64,
}

impl ShortcutRemoverOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.require_coverage()?;
        let options = ShortcutOptions {
            max_base_coverage: self.max_base_coverage,
            min_path_coverage: self.min_path_coverage,
            coverage: &coverage,
        };
        let report = remove_shortcuts(&mut graph, &options);
        report_pruned("gfa-shortcut-remover", report);
        self.common.finish(graph, Some(coverage))
    }
}

#[derive(Debug, StructOpt)]
pub struct BulgeRemoverOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Maximum contributed length of the bulge's own segments
    #[structopt(long, default_value = "18446744073709551615")]
    pub max_length: u64,

    /// Maximum absolute length difference between the bulge and its alternative
    #[structopt(long, default_value = "18446744073709551615")]
    pub max_diff: u64,

    /// Maximum amount by which the bulge may be longer than its alternative
    #[structopt(long, default_value = "18446744073709551615")]
    pub max_shortening: u64,

    /// Minimum overlap required of the alternative path
    #[structopt(long, default_value = "0")]
    pub min_alt_overlap: u32,

    /// Rank candidates by coverage instead of by minimum overlap
    #[structopt(long)]
    pub use_coverage: bool,

    /// Endpoints must have coverage at or below this for coverage-based checks to apply
    #[structopt(long)]
    pub max_unique_cov: Option<f64>,

    /// Maximum ratio of the bulge's minimum internal coverage to the alternative's
    #[structopt(long)]
    pub max_coverage_ratio: Option<f64>,
}

impl BulgeRemoverOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.load_coverage()?;
        if (self.use_coverage || self.max_unique_cov.is_some() || self.max_coverage_ratio.is_some())
            && coverage.is_none()
        {
            return Err(ToolError::missing_file(
                "--use-coverage/--max-unique-cov/--max-coverage-ratio given without --coverage",
            )
            .into());
        }
        let cov_ref: Option<&dyn CoverageLookup> = coverage.as_ref().map(|c| c as &dyn CoverageLookup);
        let options = BulgeOptions {
            max_length: self.max_length,
            max_diff: self.max_diff,
            max_shortening: self.max_shortening,
            min_alt_overlap: self.min_alt_overlap,
            use_coverage: self.use_coverage,
            max_unique_cov: self.max_unique_cov.unwrap_or(f64::MAX),
            max_coverage_ratio: self.max_coverage_ratio.unwrap_or(f64::MAX),
            coverage: cov_ref,
        };
        let report = remove_simple_bulges(&mut graph, &options);
        report_pruned("gfa-bulge-remover", report);
        self.common.finish(graph, coverage)
    }
}

#[derive(Debug, StructOpt)]
pub struct NongenomicRemoverOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Segments longer than this are always considered unique
    #[structopt(long, default_value = "18446744073709551615")]
    pub unique_len: u64,

    /// Segments with coverage below this are also considered unique
    #[structopt(long)]
    pub max_unique_cov: Option<f64>,

    /// An extension is reliable if its end is at least this long
    #[structopt(long, default_value = "0")]
    pub reliable_len: u64,

    /// An extension is also reliable if its end's coverage is above this
    #[structopt(long)]
    pub reliable_cov: Option<f64>,

    /// An extension is reliable only if its overlap is at least this
    #[structopt(long, default_value = "0")]
    pub reliable_ovl: u32,

    /// Require both a link and its twin to look non-genomic before deleting either
    #[structopt(long)]
    pub require_both_sides: bool,
}

impl NongenomicRemoverOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.load_coverage()?;
        if (self.max_unique_cov.is_some() || self.reliable_cov.is_some()) && coverage.is_none() {
            return Err(ToolError::missing_file(
                "--max-unique-cov/--reliable-cov given without --coverage",
            )
            .into());
        }
        let cov_ref: Option<&dyn CoverageLookup> = coverage.as_ref().map(|c| c as &dyn CoverageLookup);
        let options = NongenomicOptions {
            unique_len: self.unique_len,
            max_unique_cov: self.max_unique_cov,
            reliable_len: self.reliable_len,
            reliable_cov: self.reliable_cov,
            reliable_ovl: self.reliable_ovl,
            require_both_sides: self.require_both_sides,
            coverage: cov_ref,
        };
        let (report, warnings) = remove_nongenomic_links(&mut graph, &options);
        report_pruned("gfa-nongenomic-remover", report);
        for warning in &warnings {
            eprintln!("warning: {}", warning);
        }
        self.common.finish(graph, coverage)
    }
}

#[derive(Debug, StructOpt)]
pub struct WeakLinkRemoverOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// An outgoing arc is weak if its strongest overlap is below this
    #[structopt(long)]
    pub min_overlap: u32,

    /// Never remove a link that would leave its target with no incoming arcs
    #[structopt(long)]
    pub prevent_deadends: bool,
}

impl WeakLinkRemoverOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.load_coverage()?;
        let options = WeakLinkOptions {
            min_overlap: self.min_overlap,
            prevent_deadends: self.prevent_deadends,
        };
        let report = remove_weak_links(&mut graph, &options);
        report_pruned("gfa-weak-link-remover", report);
        self.common.finish(graph, coverage)
    }
}

#[derive(Debug, StructOpt)]
pub struct UnbalancedRemoverOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// A neighbour survives only if its coverage exceeds floor(coverage_ratio * baseline)
    #[structopt(long)]
    pub coverage_ratio: f64,
}

impl UnbalancedRemoverOptions {
    pub fn exec(&self) -> Result<()> {
        let (mut graph, _) = self.common.read_graph()?;
        let coverage = self.common.require_coverage()?;
        let options = UnbalancedOptions {
            coverage_ratio: self.coverage_ratio,
            coverage: &coverage,
        };
        let report = remove_unbalanced_links(&mut graph, &options);
        report_pruned("gfa-unbalanced-remover", report);
        self.common.finish(graph, Some(coverage))
    }
}

#[derive(Debug, StructOpt)]
pub struct CompactToolOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,
}

impl CompactToolOptions {
    pub fn exec(&self) -> Result<()> {
        let (graph, _) = self.common.read_graph()?;
        let coverage = self.common.load_coverage()?;
        let cov_ref: Option<&dyn CoverageLookup> = coverage.as_ref().map(|c| c as &dyn CoverageLookup);
        let options = CompactOptions {
            prefix: self.common.prefix.clone(),
            coverage: cov_ref,
            dbg_k: self.common.dbg_k as u32,
            normalize_ovls: false,
            drop_sequence: self.common.drop_sequence,
            rename_all: self.common.rename_all,
        };
        let result = compact(&graph, &options);
        eprintln!(
            "gfa-compact: {} segment(s) compacted into new paths",
            result.id_mapping.len()
        );
        if let Some(id_mapping_path) = &self.common.id_mapping {
            gfa_cmdlib::write_id_mapping(id_mapping_path, &result.id_mapping)?;
        }
        let coverage = if result.coverage.is_empty() { None } else { Some(result.coverage) };
        let write_options = gfa_graph::gfa::WriteOptions {
            drop_sequence: self.common.drop_sequence,
            coverage: coverage.as_ref().map(|c| c as &dyn CoverageLookup),
        };
        gfa_cmdlib::write_graph(&self.common.gfa_out, &result.graph, &write_options)
    }
}

#[derive(Debug, StructOpt)]
pub struct NeighborhoodOptions {
    #[structopt(flatten)]
    pub common: GlobalOpts,

    /// Segment name to seed the neighborhood search from; may be repeated
    #[structopt(long = "node", required = true)]
    pub nodes: Vec<String>,

    /// Maximum number of edges to walk out from any seed node
    #[structopt(long, default_value = "1")]
    pub radius: u32,
}

impl NeighborhoodOptions {
    pub fn exec(&self) -> Result<()> {
        let (graph, _) = self.common.read_graph()?;
        let nodes: HashSet<String> = self.nodes.iter().cloned().collect();
        let sub = extract_neighborhood(&graph, &nodes, self.radius);
        eprintln!(
            "gfa-neighborhood: extracted {} segment(s) within radius {}",
            sub.segment_cnt(),
            self.radius
        );
        self.common.finish(sub, None)
    }
}
