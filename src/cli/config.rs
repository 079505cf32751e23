// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub fasta: Option<String>,
    pub output: Option<String>,

    // Core settings
    pub metric: Option<String>,
    pub format: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Alignment
    pub align: Option<bool>,
    pub mafft_binary: Option<String>,
    pub aligned_output: Option<String>,

    // Identifier filtering
    pub include_ids: Option<String>,
    pub exclude_ids: Option<String>,
    pub include_ids_list: Option<String>,
    pub exclude_ids_list: Option<String>,

    // Flags
    pub stats_only: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# vossdist.toml - Configuration file for vossdist
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to input FASTA file
fasta = "sequences.fasta"

# Output distance matrix file (with metric = "all", one file per metric)
output = "distances.tsv"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Distance metric: euclidean, hamming, levenshtein, all
# Note: hamming requires every sequence to have the same length (align first)
metric = "levenshtein"

# Output format: tsv, csv, phylip, nexus, json, condensed
format = "tsv"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# ALIGNMENT
# =============================================================================

# Align sequences with MAFFT before computing distances
align = false

# MAFFT executable
mafft_binary = "mafft"

# Save aligned sequences to a FASTA file
# aligned_output = "aligned_seqs.fasta"

# =============================================================================
# IDENTIFIER FILTERING
# =============================================================================

# Include only sequences whose identifier matches regex pattern
# include_ids = "^sample.*"

# Exclude sequences whose identifier matches regex pattern
# exclude_ids = "control.*"

# Include only sequences listed in a file (one identifier per line)
# include_ids_list = "keep.txt"

# Exclude sequences listed in a file (one identifier per line)
# exclude_ids_list = "blacklist.txt"

# =============================================================================
# FLAGS
# =============================================================================

# Show collection statistics only
stats_only = false

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.fasta.as_deref(), Some("sequences.fasta"));
        assert_eq!(config.metric.as_deref(), Some("levenshtein"));
        assert_eq!(config.align, Some(false));
        assert_eq!(config.threads, None);
        assert_eq!(config.include_ids, None);
    }

    #[test]
    fn test_round_trip_file() {
        let config = Config {
            fasta: Some("input.fa".to_string()),
            metric: Some("all".to_string()),
            threads: Some(4),
            ..Config::new()
        };

        let path = std::env::temp_dir()
            .join(format!("vossdist_config_test_{}.toml", std::process::id()));
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_toml() {
        let path = std::env::temp_dir()
            .join(format!("vossdist_bad_config_test_{}.toml", std::process::id()));
        std::fs::write(&path, "threads = \"many\"").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
        let _ = std::fs::remove_file(&path);
    }
}
