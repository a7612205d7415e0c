// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

/// A read-only mapping from segment name to a non-negative coverage value.
///
/// Implemented for `HashMap<String, f64>` (the typical in-memory coverage table loaded from a
/// `--coverage` file) and for closures, so pruners and the superbubble finder can be generic over
/// "is there a coverage source" without committing to one concrete map type -- grounded in the
/// C++ source's use of a `std::function<double(const std::string&)>` passed by value into
/// `Compactifier` and the pruners (`examples/original_source/src/compact.hpp`).
pub trait CoverageLookup {
    /// Returns the coverage recorded for `segment_name`, or `None` if it's unknown.
    fn coverage(&self, segment_name: &str) -> Option<f64>;
}

impl CoverageLookup for HashMap<String, f64> {
    fn coverage(&self, segment_name: &str) -> Option<f64> {
        self.get(segment_name).copied()
    }
}

impl<F> CoverageLookup for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn coverage(&self, segment_name: &str) -> Option<f64> {
        self(segment_name)
    }
}
