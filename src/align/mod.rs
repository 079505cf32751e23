// mod.rs - External alignment tools module

pub mod mafft;

pub use mafft::MafftAligner;
