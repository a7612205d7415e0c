// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod graph_tests;
mod neighborhood_tests;
mod pruner_tests;
mod proptest_invariants;
mod scenario_tests;
mod superbubble_tests;
