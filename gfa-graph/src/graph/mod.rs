// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The bidirected graph store and every algorithm layered on top of it.

mod build;
mod compact;
mod graph_impl;
mod neighborhood;
mod pruners;
mod superbubble;
mod traversal;

pub use build::from_gfa_text;
pub use compact::{compact, CompactOptions, CompactResult};
pub use graph_impl::Graph;
pub use neighborhood::extract_neighborhood;
pub use pruners::{
    clip_tips, kill_loops, remove_isolated, remove_low_coverage, remove_nongenomic_links,
    remove_shortcuts, remove_simple_bulges, remove_unbalanced_links, remove_weak_links,
    BulgeOptions, IsolatedOptions, LoopKillOptions, LowCoverageOptions, NongenomicOptions,
    PruneReport, ShortcutOptions, TipClipOptions, UnbalancedOptions, WeakLinkOptions,
};
pub use superbubble::{MinCoverageWeight, MinOverlapWeight, Superbubble, SuperbubbleFinder, WeightPolicy};
pub use traversal::{
    non_branching_extension, non_branching_forward, non_branching_path, unambiguous_backward_path,
    unique_outgoing_forward,
};
