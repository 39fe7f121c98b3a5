// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io};

#[derive(Debug)]
pub enum ToolkitError {
    Io(io::Error),
    Format(String),
    Usage(String),
    Config(String),
}

// These allow conversion to ToolkitError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for ToolkitError {
    fn from(e: io::Error) -> Self {
        ToolkitError::Io(e)
    }
}

impl From<regex::Error> for ToolkitError {
    fn from(e: regex::Error) -> Self {
        ToolkitError::Format(format!("Malformed pattern: {}", e))
    }
}

impl From<serde_json::Error> for ToolkitError {
    fn from(e: serde_json::Error) -> Self {
        ToolkitError::Config(e.to_string())
    }
}

impl From<clap::Error> for ToolkitError {
    fn from(e: clap::Error) -> Self {
        ToolkitError::Usage(e.to_string())
    }
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolkitError::Io(e) => write!(f, "I/O error: {}", e),
            ToolkitError::Format(msg) => write!(f, "Format error: {}", msg),
            ToolkitError::Usage(msg) => write!(f, "Usage error: {}", msg),
            ToolkitError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ToolkitError {}
