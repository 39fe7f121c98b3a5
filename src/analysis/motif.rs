// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::ToolkitError;

/// 0-based character positions of every occurrence of `motif` in `sequence`, overlapping ones
/// included, in increasing order. Matching is literal and ignores ASCII case. An empty motif
/// matches nowhere.
pub fn find_motifs(sequence: &str, motif: &str) -> Vec<usize> {
    let pat: Vec<char> = motif.chars().collect();
    let seq: Vec<char> = sequence.chars().collect();
    if pat.is_empty() || pat.len() > seq.len() {
        return Vec::new();
    }
    seq.windows(pat.len())
        .enumerate()
        .filter(|(_, window)| window.iter().zip(&pat).all(|(a, b)| a.eq_ignore_ascii_case(b)))
        .map(|(pos, _)| pos)
        .collect()
}

/// A motif search: either literal text (the default) or a regular expression.
#[derive(Debug, Clone)]
pub enum MotifSearch {
    Literal(String),
    Pattern(Regex),
}

impl MotifSearch {
    pub fn literal(motif: &str) -> Self {
        MotifSearch::Literal(motif.to_string())
    }

    /// Case-insensitive regex search. Fails if `pattern` is not a valid regex.
    pub fn pattern(pattern: &str) -> Result<Self, ToolkitError> {
        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(MotifSearch::Pattern(re))
    }

    pub fn find_all(&self, sequence: &str) -> Vec<usize> {
        match self {
            MotifSearch::Literal(motif) => find_motifs(sequence, motif),
            MotifSearch::Pattern(re) => find_pattern_starts(re, sequence),
        }
    }
}

// Character positions at which a non-empty match of `re` starts. After each hit the scan
// restarts one character further on, so overlapping matches are all reported.
fn find_pattern_starts(re: &Regex, sequence: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut from = 0;
    // character index of byte offset `counted`
    let mut counted = 0;
    let mut char_pos = 0;
    while from <= sequence.len() {
        let Some(m) = re.find_at(sequence, from) else {
            break;
        };
        char_pos += sequence[counted..m.start()].chars().count();
        counted = m.start();
        if !m.is_empty() {
            starts.push(char_pos);
        }
        from = m.start() + next_char_len(sequence, m.start());
    }
    debug!("Pattern '{}': {} hit(s)", re.as_str(), starts.len());
    starts
}

fn next_char_len(s: &str, at: usize) -> usize {
    s[at..].chars().next().map_or(1, char::len_utf8)
}
