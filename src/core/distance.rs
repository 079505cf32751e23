// distance.rs - Pairwise distances and the three matrix builders

use crate::core::error::DistanceError;
use crate::core::matrix::DistanceMatrix;
use crate::core::voss::{voss_vectors, VossEncoding};
use crate::data::SequenceCollection;

/// Number of positions at which two equal-length sequences differ.
///
/// Bare sequences carry no identifiers, so a mismatch is reported as
/// [`DistanceError::UnequalLengths`]; the matrix builder reports
/// [`DistanceError::LengthMismatch`] with sequence identifiers instead.
pub fn hamming_distance(seq1: &[u8], seq2: &[u8]) -> Result<usize, DistanceError> {
    if seq1.len() != seq2.len() {
        return Err(DistanceError::UnequalLengths {
            first_len: seq1.len(),
            second_len: seq2.len(),
        });
    }
    Ok(seq1.iter().zip(seq2).filter(|(a, b)| a != b).count())
}

/// Unit-cost edit distance (insertions, deletions, substitutions)
pub fn levenshtein_distance(seq1: &[u8], seq2: &[u8]) -> usize {
    // Keep the shorter sequence as the DP row
    let (long, short) = if seq1.len() >= seq2.len() { (seq1, seq2) } else { (seq2, seq1) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, &a) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &b) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(a != b);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Euclidean distances between the Voss vectors of an encoding
pub fn euclidean_matrix(encoding: &VossEncoding) -> DistanceMatrix<f64> {
    let vectors = encoding.vectors();
    DistanceMatrix::from_fn(encoding.labels().to_vec(), |i, j| {
        vectors[i].euclidean(&vectors[j])
    })
}

/// Vectorize `collection` with the Voss mapping, then build the Euclidean matrix
pub fn voss_euclidean_matrix(collection: &SequenceCollection) -> DistanceMatrix<f64> {
    euclidean_matrix(&voss_vectors(collection))
}

/// Hamming distances; fails on the first pair of unequal-length sequences
pub fn hamming_matrix(collection: &SequenceCollection) -> Result<DistanceMatrix<usize>, DistanceError> {
    check_uniform_length(collection)?;
    let sequences: Vec<&[u8]> = collection.iter().map(|(_, seq)| seq).collect();
    DistanceMatrix::from_upper_triangle(collection.ids(), |i, j| {
        hamming_distance(sequences[i], sequences[j])
    })
}

/// Levenshtein distances; sequences may differ in length
pub fn levenshtein_matrix(collection: &SequenceCollection) -> DistanceMatrix<usize> {
    let sequences: Vec<&[u8]> = collection.iter().map(|(_, seq)| seq).collect();
    DistanceMatrix::from_fn(collection.ids(), |i, j| {
        levenshtein_distance(sequences[i], sequences[j])
    })
}

/// Report the first row-major pair `(i, j)` whose lengths differ.
///
/// Lengths are all equal iff they all equal the first one, so that pair is
/// always `(0, j)` for the first mismatching `j`.
pub fn check_uniform_length(collection: &SequenceCollection) -> Result<(), DistanceError> {
    let mut entries = collection.iter();
    let Some((first_id, first_seq)) = entries.next() else {
        return Ok(());
    };
    for (id, seq) in entries {
        if seq.len() != first_seq.len() {
            return Err(DistanceError::LengthMismatch {
                first: first_id.to_string(),
                second: id.to_string(),
                first_len: first_seq.len(),
                second_len: seq.len(),
            });
        }
    }
    Ok(())
}
