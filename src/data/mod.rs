// mod.rs - Data structures and sequence I/O module

pub mod collection;
pub mod fasta;

// Re-export main types for convenience
pub use collection::{CollectionStats, SequenceCollection, SequenceFilter};
pub use fasta::{load_fasta, parse_fasta, write_fasta, write_fasta_to};
