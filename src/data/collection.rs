// collection.rs - Ordered identifier -> sequence collection

use std::collections::{HashMap, HashSet};
use regex::Regex;
use crate::core::error::DistanceError;

/// Ordered mapping from sequence identifier to sequence content.
///
/// Insertion order is the row/column order of every distance matrix built
/// from the collection. Sequences are stored as ASCII-uppercased bytes;
/// symbols outside A/G/C/T are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceCollection {
    entries: Vec<(String, Vec<u8>)>,
    index: HashMap<String, usize>,
}

impl SequenceCollection {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a collection from `(id, sequence)` pairs, failing on the first duplicate id
    pub fn from_pairs<I, K, S>(pairs: I) -> Result<Self, DistanceError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: AsRef<[u8]>,
    {
        let mut collection = Self::new();
        for (id, sequence) in pairs {
            collection.insert(id, sequence)?;
        }
        Ok(collection)
    }

    /// Append a sequence, normalizing it to uppercase
    pub fn insert(&mut self, id: impl Into<String>, sequence: impl AsRef<[u8]>) -> Result<(), DistanceError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(DistanceError::DuplicateId(id));
        }
        let normalized = sequence.as_ref().to_ascii_uppercase();
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, normalized));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in collection order
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.index.get(id).map(|&i| self.entries[i].1.as_slice())
    }

    /// Sequence at matrix position `i`
    pub fn sequence_at(&self, i: usize) -> Option<&[u8]> {
        self.entries.get(i).map(|(_, seq)| seq.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(id, seq)| (id.as_str(), seq.as_slice()))
    }

    /// Length of the longest sequence (0 for an empty collection)
    pub fn max_len(&self) -> usize {
        self.entries.iter().map(|(_, seq)| seq.len()).max().unwrap_or(0)
    }

    /// Keep only the entries accepted by `filter`, preserving order
    pub fn filter(&self, filter: &SequenceFilter) -> Self {
        let mut kept = Self::new();
        for (id, sequence) in self.iter().filter(|(id, _)| filter.accepts(id)) {
            kept.index.insert(id.to_string(), kept.entries.len());
            kept.entries.push((id.to_string(), sequence.to_vec()));
        }
        kept
    }

    /// Length and composition summary
    pub fn stats(&self) -> CollectionStats {
        let lengths: Vec<usize> = self.entries.iter().map(|(_, seq)| seq.len()).collect();
        let total: usize = lengths.iter().sum();
        let non_acgt_symbols = self
            .entries
            .iter()
            .flat_map(|(_, seq)| seq.iter())
            .filter(|b| !matches!(b, b'A' | b'G' | b'C' | b'T'))
            .count();

        CollectionStats {
            sequences: lengths.len(),
            min_len: lengths.iter().copied().min().unwrap_or(0),
            max_len: lengths.iter().copied().max().unwrap_or(0),
            mean_len: if lengths.is_empty() { 0.0 } else { total as f64 / lengths.len() as f64 },
            uniform_length: lengths.windows(2).all(|w| w[0] == w[1]),
            non_acgt_symbols,
        }
    }
}

/// Summary statistics over a collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    pub sequences: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub mean_len: f64,
    pub uniform_length: bool,
    pub non_acgt_symbols: usize,
}

/// Identifier filters: every configured criterion must accept an id
#[derive(Debug, Clone, Default)]
pub struct SequenceFilter {
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
    pub include_set: Option<HashSet<String>>,
    pub exclude_set: Option<HashSet<String>>,
}

impl SequenceFilter {
    pub fn is_empty(&self) -> bool {
        self.include_regex.is_none()
            && self.exclude_regex.is_none()
            && self.include_set.is_none()
            && self.exclude_set.is_none()
    }

    pub fn accepts(&self, id: &str) -> bool {
        if let Some(regex) = &self.include_regex {
            if !regex.is_match(id) {
                return false;
            }
        }
        if let Some(regex) = &self.exclude_regex {
            if regex.is_match(id) {
                return false;
            }
        }
        if let Some(set) = &self.include_set {
            if !set.contains(id) {
                return false;
            }
        }
        if let Some(set) = &self.exclude_set {
            if set.contains(id) {
                return false;
            }
        }
        true
    }
}
