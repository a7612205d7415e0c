// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use gfa_tools::UnbalancedRemoverOptions;

fn main() {
    color_eyre::install().expect("color_eyre::install should only be called once");
    let options: UnbalancedRemoverOptions = gfa_cmdlib::parse_args();
    gfa_cmdlib::run_tool(|| options.exec())
}
