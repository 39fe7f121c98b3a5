// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use dna_toolkit::errors::ToolkitError;

#[test]
fn test_gc_two_records() {
    let out = utils::run_ok(&["gc", "data/test1.fas"]);
    assert_eq!(out, "GC Content:\n  seq1: 50.00%\n  seq2: 100.00%\n");
}

#[test]
fn test_gc_multiline() {
    let out = utils::run_ok(&["gc", "data/multiline.fas"]);
    insta::assert_snapshot!(out, @r"
GC Content:
  chrA: 70.00%
  chrB: 0.00%
  chrC: 0.00%
");
}

#[test]
fn test_gc_precision() {
    let out = utils::run_ok(&["gc", "--precision", "0", "data/test1.fas"]);
    assert_eq!(out, "GC Content:\n  seq1: 50%\n  seq2: 100%\n");
}

#[test]
fn test_gc_no_sequences() {
    let out = utils::run_ok(&["gc", "data/blank.fas"]);
    assert_eq!(out, "No sequences found in file.\n");
}

#[test]
fn test_gc_missing_argument() {
    let out = utils::run_ok(&["gc"]);
    assert_eq!(out, "Usage: dna-toolkit gc <fasta_file>\n");
}

#[test]
fn test_gc_missing_file() {
    let res = utils::run_cli(&["gc", "data/does-not-exist.fas"]);
    assert!(matches!(res, Err(ToolkitError::Io(_))));
}

#[test]
fn test_gc_sequence_before_header() {
    let res = utils::run_cli(&["gc", "data/no_header.fas"]);
    assert!(matches!(res, Err(ToolkitError::Format(_))));
}

#[test]
fn test_gc_duplicates() {
    let res = utils::run_cli(&["gc", "data/duplicate.fas"]);
    assert!(matches!(res, Err(ToolkitError::Format(_))));

    let out = utils::run_ok(&["--duplicates", "append", "gc", "data/duplicate.fas"]);
    assert_eq!(out, "GC Content:\n  dup: 50.00%\n  other: 100.00%\n");

    let out = utils::run_ok(&["gc", "--duplicates", "replace", "data/duplicate.fas"]);
    assert_eq!(out, "GC Content:\n  dup: 100.00%\n  other: 100.00%\n");
}

#[test]
fn test_gc_json() {
    let out = utils::run_ok(&["gc", "--output", "json", "data/test1.fas"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["command"], "gc");
    assert_eq!(value["sequences"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["sequences"][0]["id"], "seq1");
    assert_eq!(value["sequences"][0]["gc_content"], 50.0);
}
