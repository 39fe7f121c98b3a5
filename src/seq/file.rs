// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is an ordered collection of sequence records, keyed by
// identifier. Records keep the order in which their identifiers were first seen.
//

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeqFile {
    records: Vec<SeqRecord>,
    // identifier -> index into `records`
    index: HashMap<String, usize>,
}

impl SeqFile {
    pub fn new() -> Self {
        SeqFile::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeqRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|rec| rec.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&idx| self.records[idx].sequence.as_str())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the index of the record for `id`, adding an empty one if `id` is new.
    pub(crate) fn push_empty(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.records.len();
        self.records.push(SeqRecord::new(id, String::new()));
        self.index.insert(id.to_string(), idx);
        idx
    }

    pub(crate) fn sequence_mut(&mut self, idx: usize) -> &mut String {
        &mut self.records[idx].sequence
    }
}

impl<'a> IntoIterator for &'a SeqFile {
    type Item = &'a SeqRecord;
    type IntoIter = std::slice::Iter<'a, SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<SeqRecord> for SeqFile {
    // Later records with an already-seen id replace the earlier sequence in place.
    fn from_iter<I: IntoIterator<Item = SeqRecord>>(iter: I) -> Self {
        let mut file = SeqFile::new();
        for rec in iter {
            let idx = file.push_empty(&rec.id);
            *file.sequence_mut(idx) = rec.sequence;
        }
        file
    }
}
