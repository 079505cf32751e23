// voss.rs - Voss indicator mapping of nucleotide sequences

use crate::data::SequenceCollection;

/// Fixed sub-vector order of the Voss mapping
pub const VOSS_BASES: [u8; 4] = [b'A', b'G', b'C', b'T'];

fn base_slot(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'G' => Some(1),
        b'C' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Concatenation of the A, G, C and T indicator sub-vectors of one sequence,
/// each `max_len` long.
#[derive(Debug, Clone, PartialEq)]
pub struct VossVector {
    values: Vec<f64>,
    max_len: usize,
}

impl VossVector {
    /// Encode `sequence` padded to `max_len`.
    ///
    /// Positions past the end of the sequence, and symbols outside A/G/C/T,
    /// set no indicator.
    pub fn encode(sequence: &[u8], max_len: usize) -> Self {
        let mut values = vec![0.0; 4 * max_len];
        for (i, &base) in sequence.iter().enumerate().take(max_len) {
            if let Some(slot) = base_slot(base) {
                values[slot * max_len + i] = 1.0;
            }
        }
        Self { values, max_len }
    }

    /// Total length, always `4 * max_len`
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Indicator value for `base` at `position` (0.0 for unknown bases or out-of-range positions)
    pub fn indicator(&self, base: u8, position: usize) -> f64 {
        match base_slot(base.to_ascii_uppercase()) {
            Some(slot) if position < self.max_len => self.values[slot * self.max_len + position],
            _ => 0.0,
        }
    }

    /// L2 norm of the difference between two vectors of equal length
    pub fn euclidean(&self, other: &VossVector) -> f64 {
        debug_assert_eq!(self.len(), other.len());
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// Voss vectors of a whole collection, in collection order, sharing one `max_len`
#[derive(Debug, Clone, PartialEq)]
pub struct VossEncoding {
    labels: Vec<String>,
    vectors: Vec<VossVector>,
    max_len: usize,
}

impl VossEncoding {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn vectors(&self) -> &[VossVector] {
        &self.vectors
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VossVector> {
        self.labels
            .iter()
            .position(|label| label == id)
            .map(|i| &self.vectors[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VossVector)> {
        self.labels.iter().map(String::as_str).zip(self.vectors.iter())
    }
}

/// Encode every sequence of `collection`, padding to the longest sequence of the batch
pub fn voss_vectors(collection: &SequenceCollection) -> VossEncoding {
    let max_len = collection.max_len();
    let (labels, vectors) = collection
        .iter()
        .map(|(id, sequence)| (id.to_string(), VossVector::encode(sequence, max_len)))
        .unzip();

    VossEncoding { labels, vectors, max_len }
}
