// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use dna_toolkit::errors::ToolkitError;

fn main() -> Result<(), ToolkitError> {
    dna_toolkit::run()
}
