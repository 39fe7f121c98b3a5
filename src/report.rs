// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::analysis::{gc_content, MotifSearch};
use crate::seq::file::SeqFile;

pub const NO_SEQUENCES: &str = "No sequences found in file.";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Serialize)]
pub struct GcEntry<'a> {
    pub id: &'a str,
    pub gc_content: f64,
}

#[derive(Debug, Serialize)]
pub struct GcReport<'a> {
    pub command: &'static str,
    pub sequences: Vec<GcEntry<'a>>,
}

impl<'a> GcReport<'a> {
    pub fn new(seqs: &'a SeqFile) -> Self {
        let sequences = seqs
            .iter()
            .map(|rec| GcEntry {
                id: &rec.id,
                gc_content: gc_content(&rec.sequence),
            })
            .collect();
        GcReport {
            command: "gc",
            sequences,
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W, precision: usize) -> io::Result<()> {
        if self.sequences.is_empty() {
            return writeln!(out, "{}", NO_SEQUENCES);
        }
        writeln!(out, "GC Content:")?;
        for entry in &self.sequences {
            writeln!(out, "  {}: {:.*}%", entry.id, precision, entry.gc_content)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MotifEntry<'a> {
    pub id: &'a str,
    pub positions: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct MotifReport<'a> {
    pub command: &'static str,
    pub motif: &'a str,
    pub sequences: Vec<MotifEntry<'a>>,
}

impl<'a> MotifReport<'a> {
    pub fn new(seqs: &'a SeqFile, motif: &'a str, search: &MotifSearch) -> Self {
        let sequences = seqs
            .iter()
            .map(|rec| MotifEntry {
                id: &rec.id,
                positions: search.find_all(&rec.sequence),
            })
            .collect();
        MotifReport {
            command: "find_motif",
            motif,
            sequences,
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.sequences.is_empty() {
            return writeln!(out, "{}", NO_SEQUENCES);
        }
        writeln!(out, "Searching for motif '{}'...", self.motif)?;
        for entry in &self.sequences {
            if entry.positions.is_empty() {
                writeln!(out, "  Motif not found in {}.", entry.id)?;
            } else {
                writeln!(
                    out,
                    "  Motif found in {} at positions: [{}]",
                    entry.id,
                    entry.positions.iter().join(", ")
                )?;
            }
        }
        Ok(())
    }
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
