// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    ffi::OsString,
    io::{stdout, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use crate::analysis::MotifSearch;
use crate::config::{ToolkitConfig, DEFAULT_PRECISION};
use crate::errors::ToolkitError;
use crate::report::{write_json, GcReport, MotifReport, OutputFormat};
use crate::seq::fasta::{read_fasta_file, DuplicatePolicy};

const PROG: &str = "dna-toolkit";

// No built-in `help` subcommand: `help` is answered like any other unknown command.
#[derive(Debug, Parser)]
#[command(name = PROG, version, about, long_about = None, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// What to do with repeated sequence identifiers [reject|append|replace]; default: reject
    #[arg(short, long, global = true, hide_possible_values = true)]
    duplicates: Option<DuplicatePolicy>,

    /// Output format [text|json]; default: text
    #[arg(short, long, global = true, hide_possible_values = true)]
    output: Option<OutputFormat>,

    /// Decimal places for GC percentages; default: 2
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Ignore any .dnatoolkitconfig file
    #[arg(long = "no-config", global = true)]
    no_config: bool,
}

// Positionals are optional so that missing ones get our own usage line rather than clap's error.
#[derive(Debug, Subcommand)]
enum Command {
    /// GC content of each sequence
    Gc {
        /// FastA file
        fasta_file: Option<PathBuf>,
    },

    /// Start positions of a motif in each sequence
    #[command(name = "find_motif")]
    FindMotif {
        /// FastA file
        fasta_file: Option<PathBuf>,

        /// Motif (literal, case-insensitive)
        motif: Option<String>,

        /// Treat the motif as a regular expression
        #[arg(short = 'r', long = "raw-pattern")]
        raw_pattern: bool,
    },

    #[command(external_subcommand)]
    Other(Vec<OsString>),
}

// Effective settings: command line over config file over defaults.
struct Settings {
    duplicates: DuplicatePolicy,
    output: OutputFormat,
    precision: usize,
}

impl Settings {
    fn merge(opts: &GlobalOpts, config: ToolkitConfig) -> Self {
        Settings {
            duplicates: opts.duplicates.or(config.duplicates).unwrap_or_default(),
            output: opts.output.or(config.output).unwrap_or_default(),
            precision: opts.precision.or(config.precision).unwrap_or(DEFAULT_PRECISION),
        }
    }

    // The config file is only read by commands that analyse a file, so a broken one does not
    // get in the way of usage messages.
    fn load<F>(opts: &GlobalOpts, load_config: F) -> Result<Self, ToolkitError>
    where
        F: FnOnce() -> Result<ToolkitConfig, ToolkitError>,
    {
        let config = if opts.no_config {
            ToolkitConfig::default()
        } else {
            load_config()?
        };
        let settings = Settings::merge(opts, config);
        debug!(
            "duplicates: {}, output: {}, precision: {}",
            settings.duplicates, settings.output, settings.precision
        );
        Ok(settings)
    }
}

fn print_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Usage: {} <command> [arguments]", PROG)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  gc <fasta_file>")?;
    writeln!(out, "  find_motif <fasta_file> <motif>")
}

pub fn run() -> Result<(), ToolkitError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let mut out = stdout().lock();
    execute(cli, &mut out, ToolkitConfig::discover)
}

/// Parses `args` (program name first) and runs the selected command, writing the report to
/// `out`. Argument errors clap cannot recover from come back as `ToolkitError::Usage`.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> Result<(), ToolkitError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    execute(cli, out, ToolkitConfig::discover)
}

fn execute<W, F>(cli: Cli, out: &mut W, load_config: F) -> Result<(), ToolkitError>
where
    W: Write,
    F: FnOnce() -> Result<ToolkitConfig, ToolkitError>,
{
    match cli.command {
        None => print_usage(out)?,
        Some(Command::Gc { fasta_file }) => {
            let Some(fasta_file) = fasta_file else {
                writeln!(out, "Usage: {} gc <fasta_file>", PROG)?;
                return Ok(());
            };
            let settings = Settings::load(&cli.opts, load_config)?;
            let seqs = read_fasta_file(&fasta_file, settings.duplicates)?;
            let report = GcReport::new(&seqs);
            match settings.output {
                OutputFormat::Text => report.write_text(out, settings.precision)?,
                OutputFormat::Json => write_json(out, &report)?,
            }
        }
        Some(Command::FindMotif {
            fasta_file,
            motif,
            raw_pattern,
        }) => {
            let (Some(fasta_file), Some(motif)) = (fasta_file, motif) else {
                writeln!(out, "Usage: {} find_motif <fasta_file> <motif>", PROG)?;
                return Ok(());
            };
            let settings = Settings::load(&cli.opts, load_config)?;
            // Compile the pattern before touching the file so a bad regex fails fast.
            let search = if raw_pattern {
                MotifSearch::pattern(&motif)?
            } else {
                MotifSearch::literal(&motif)
            };
            let seqs = read_fasta_file(&fasta_file, settings.duplicates)?;
            let report = MotifReport::new(&seqs, &motif, &search);
            match settings.output {
                OutputFormat::Text => report.write_text(out)?,
                OutputFormat::Json => write_json(out, &report)?,
            }
        }
        Some(Command::Other(args)) => {
            let command = args
                .first()
                .map(|c| c.to_string_lossy().into_owned())
                .unwrap_or_default();
            writeln!(out, "Unknown command: {}", command)?;
            writeln!(out, "Available commands: gc, find_motif")?;
        }
    }

    Ok(())
}
