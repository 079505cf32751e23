// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.fasta.is_none() {
            self.fasta = config.fasta;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings
        if self.metric.is_none() {
            self.metric = config.metric;
        }
        if self.format.is_none() {
            self.format = config.format;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Alignment
        if !self.align && config.align.unwrap_or(false) {
            self.align = true;
        }
        if self.mafft_binary.is_none() {
            self.mafft_binary = config.mafft_binary;
        }
        if self.aligned_output.is_none() {
            self.aligned_output = config.aligned_output;
        }

        // Identifier filtering
        if self.include_ids.is_none() {
            self.include_ids = config.include_ids;
        }
        if self.exclude_ids.is_none() {
            self.exclude_ids = config.exclude_ids;
        }
        if self.include_ids_list.is_none() {
            self.include_ids_list = config.include_ids_list;
        }
        if self.exclude_ids_list.is_none() {
            self.exclude_ids_list = config.exclude_ids_list;
        }

        // Flags (config can only switch them on)
        if !self.stats_only && config.stats_only.unwrap_or(false) {
            self.stats_only = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
