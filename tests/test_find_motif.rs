// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use dna_toolkit::errors::ToolkitError;

#[test]
fn test_find_motif_literal() {
    let out = utils::run_ok(&["find_motif", "data/motifs.fas", "cg"]);
    insta::assert_snapshot!(out, @r"
Searching for motif 'cg'...
  Motif found in motif1 at positions: [4, 8]
  Motif not found in motif2.
  Motif found in motif3 at positions: [1, 5]
");
}

#[test]
fn test_find_motif_overlapping() {
    let out = utils::run_ok(&["find_motif", "data/motifs.fas", "AA"]);
    assert_eq!(
        out,
        "Searching for motif 'AA'...\n\
         \x20 Motif found in motif1 at positions: [0, 1, 2, 6]\n\
         \x20 Motif not found in motif2.\n\
         \x20 Motif not found in motif3.\n"
    );
}

#[test]
fn test_find_motif_metacharacters_are_literal() {
    let out = utils::run_ok(&["find_motif", "data/motifs.fas", "T.T"]);
    assert!(out.contains("  Motif not found in motif2."), "{}", out);
}

#[test]
fn test_find_motif_raw_pattern() {
    let out = utils::run_ok(&["find_motif", "--raw-pattern", "data/motifs.fas", "T.T"]);
    assert!(
        out.contains("  Motif found in motif2 at positions: [0, 1, 2, 3]"),
        "{}",
        out
    );
}

#[test]
fn test_find_motif_bad_pattern() {
    let res = utils::run_cli(&["find_motif", "-r", "data/motifs.fas", "A[C"]);
    assert!(matches!(res, Err(ToolkitError::Format(_))));
}

#[test]
fn test_find_motif_no_sequences() {
    let out = utils::run_ok(&["find_motif", "data/blank.fas", "ACGT"]);
    assert_eq!(out, "No sequences found in file.\n");
}

#[test]
fn test_find_motif_missing_arguments() {
    let usage = "Usage: dna-toolkit find_motif <fasta_file> <motif>\n";
    assert_eq!(utils::run_ok(&["find_motif"]), usage);
    assert_eq!(utils::run_ok(&["find_motif", "data/motifs.fas"]), usage);
}

#[test]
fn test_find_motif_json() {
    let out = utils::run_ok(&["--output", "json", "find_motif", "data/test1.fas", "c"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["motif"], "c");
    assert_eq!(value["sequences"][0]["positions"], serde_json::json!([1]));
    assert_eq!(value["sequences"][1]["positions"], serde_json::json!([2, 3]));
}
