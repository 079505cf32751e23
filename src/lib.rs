// lib.rs - vossdist library root

//! # vossdist - Pairwise distance matrices for nucleotide sequences
//!
//! This library turns an ordered collection of labelled DNA sequences into
//! symmetric pairwise distance matrices. Three metrics are available:
//!
//! - **Voss Euclidean**: each sequence becomes a flattened 4 × L binary
//!   indicator matrix (rows A, G, C, T), zero-padded to the longest sequence,
//!   and pairs are compared by Euclidean distance
//! - **Hamming**: number of mismatching positions, defined only when every
//!   sequence has the same length
//! - **Levenshtein**: minimum number of single-symbol insertions, deletions
//!   and substitutions
//!
//! Matrices keep the input order of the collection as their row and column
//! labels, and can be written as TSV, CSV, PHYLIP, NEXUS, JSON or a condensed
//! upper triangle.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use vossdist::prelude::*;
//!
//! let sequences = load_fasta(std::path::Path::new("sequences.fasta"))?;
//!
//! let edit = levenshtein_matrix(&sequences);
//! let voss = voss_euclidean_matrix(&sequences);
//! let hamming = hamming_matrix(&sequences)?;
//!
//! write_matrix("edit.tsv", "tsv", &edit, "levenshtein", "example")?;
//! # let _ = (voss, hamming);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod align;
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::align::MafftAligner;
    pub use crate::cli::{validate_args, Args, Metric, ValidationResult};
    pub use crate::core::{euclidean_matrix, hamming_matrix, levenshtein_matrix, voss_euclidean_matrix};
    pub use crate::core::{check_uniform_length, hamming_distance, levenshtein_distance, voss_vectors};
    pub use crate::core::{DistanceError, DistanceMatrix, VossEncoding, VossVector};
    pub use crate::data::{load_fasta, parse_fasta, write_fasta};
    pub use crate::data::{CollectionStats, SequenceCollection, SequenceFilter};
    pub use crate::output::write_matrix;
}

// Re-export main types at the root level for convenience
pub use cli::{Args, Metric, ValidationResult};
pub use core::{DistanceError, DistanceMatrix, VossEncoding, VossVector};
pub use data::{SequenceCollection, SequenceFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "vossdist v{} - Voss, Hamming and Levenshtein distance matrices for DNA",
        VERSION
    )
}
