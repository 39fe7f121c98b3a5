// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::errors::ToolkitError;
use crate::seq::file::SeqFile;

/// What to do when a header repeats an identifier seen earlier in the same file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with a format error
    #[default]
    Reject,
    /// Keep accumulating into the first record
    Append,
    /// Discard what was read so far; the record keeps its original position
    Replace,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Append => "append",
            DuplicatePolicy::Replace => "replace",
        };
        write!(f, "{}", s)
    }
}

/// Reads a whole FastA file into memory, then parses it with [`parse_fasta`].
pub fn read_fasta_file<P: AsRef<Path>>(
    path: P,
    policy: DuplicatePolicy,
) -> Result<SeqFile, ToolkitError> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_fasta(text.as_bytes(), policy)
}

/// Parses FastA text. Lines are trimmed and blank lines skipped; the identifier is the first
/// whitespace-delimited token after '>'. Sequence lines are concatenated as-is, so case is kept.
pub fn parse_fasta<R: BufRead>(
    reader: R,
    policy: DuplicatePolicy,
) -> Result<SeqFile, ToolkitError> {
    let mut result = SeqFile::new();
    // index of the record sequence lines are appended to
    let mut current: Option<usize> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = i + 1;
        let l = line.trim();
        if l.is_empty() {
            continue;
        }
        if let Some(hdr) = l.strip_prefix('>') {
            let id = hdr.split_whitespace().next().ok_or_else(|| {
                ToolkitError::Format(format!("Header without identifier on line {}", lineno))
            })?;
            debug!("Header '{}' on line {}", id, lineno);
            let idx = match result.position(id) {
                None => result.push_empty(id),
                Some(idx) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(ToolkitError::Format(format!(
                            "Duplicate identifier '{}' on line {}",
                            id, lineno
                        )));
                    }
                    DuplicatePolicy::Append => {
                        warn!("Duplicate identifier '{}' on line {}: appending", id, lineno);
                        idx
                    }
                    DuplicatePolicy::Replace => {
                        warn!("Duplicate identifier '{}' on line {}: replacing", id, lineno);
                        result.sequence_mut(idx).clear();
                        idx
                    }
                },
            };
            current = Some(idx);
        } else {
            let idx = current.ok_or_else(|| {
                ToolkitError::Format(format!(
                    "Sequence data before first header on line {}",
                    lineno
                ))
            })?;
            result.sequence_mut(idx).push_str(l);
        }
    }

    info!("Read {} sequence(s)", result.len());
    Ok(result)
}
