// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

/// Percentage (0-100) of G and C in `sequence`, ignoring case. Every character counts toward the
/// length, including N's and other ambiguity codes. An empty sequence has a GC content of 0.
pub fn gc_content(sequence: &str) -> f64 {
    let total = sequence.chars().count();
    if total == 0 {
        return 0.0;
    }
    let gc = sequence
        .chars()
        .filter(|c| matches!(c, 'G' | 'g' | 'C' | 'c'))
        .count();
    (gc as f64 / total as f64) * 100.0
}
