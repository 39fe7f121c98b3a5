// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use dna_toolkit::errors::ToolkitError;

// Runs the CLI with `args` (no program name) and returns what it printed. Config files are
// ignored so results do not depend on the environment.
#[allow(dead_code)]
pub fn run_cli(args: &[&str]) -> Result<String, ToolkitError> {
    let mut full_args = vec!["dna-toolkit", "--no-config"];
    full_args.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    dna_toolkit::run_from(full_args, &mut out)?;
    Ok(String::from_utf8(out).expect("CLI output is UTF-8"))
}

#[allow(dead_code)]
pub fn run_ok(args: &[&str]) -> String {
    run_cli(args).unwrap_or_else(|e| panic!("{:?} failed: {}", args, e))
}
