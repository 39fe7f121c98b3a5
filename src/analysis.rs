// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod gc;
pub mod motif;

pub use gc::gc_content;
pub use motif::{find_motifs, MotifSearch};
