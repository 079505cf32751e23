// mod.rs - Core distance engine module

pub mod distance;
pub mod error;
pub mod matrix;
pub mod voss;

// Re-export main types for convenience
pub use distance::{
    check_uniform_length, euclidean_matrix, hamming_distance, hamming_matrix, levenshtein_distance, levenshtein_matrix,
    voss_euclidean_matrix,
};
pub use error::DistanceError;
pub use matrix::DistanceMatrix;
pub use voss::{voss_vectors, VossEncoding, VossVector, VOSS_BASES};
