// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::errors::ToolkitError;
use crate::report::OutputFormat;
use crate::seq::fasta::DuplicatePolicy;

pub const CONFIG_FILE_NAME: &str = ".dnatoolkitconfig";
pub const DEFAULT_PRECISION: usize = 2;

/// Settings read from `.dnatoolkitconfig` (JSON). Every key is optional; command-line options
/// take precedence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolkitConfig {
    pub precision: Option<usize>,
    pub duplicates: Option<DuplicatePolicy>,
    pub output: Option<OutputFormat>,
}

impl ToolkitConfig {
    pub fn from_file(path: &Path) -> Result<Self, ToolkitError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ToolkitError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads the first config file found, or the defaults if there is none.
    pub fn discover() -> Result<Self, ToolkitError> {
        match find_config() {
            Some(path) => {
                info!("Using config file {}", path.display());
                Self::from_file(&path).map_err(|e| match e {
                    ToolkitError::Config(msg) => {
                        ToolkitError::Config(format!("{}: {}", path.display(), msg))
                    }
                    other => other,
                })
            }
            None => Ok(ToolkitConfig::default()),
        }
    }
}

// $HOME first, then the current directory.
fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
