// args.rs - Command line arguments definition

use argh::FromArgs;

pub const DEFAULT_METRIC: &str = "levenshtein";
pub const DEFAULT_FORMAT: &str = "tsv";
pub const DEFAULT_MAFFT_BINARY: &str = "mafft";

#[derive(FromArgs)]
/// vossdist - Pairwise distance matrices for nucleotide sequences
pub struct Args {
    /// path to input FASTA file
    #[argh(option)]
    pub fasta: Option<String>,

    /// output distance matrix file (with --metric all, one file per metric)
    #[argh(option)]
    pub output: Option<String>,

    /// distance metric: euclidean, hamming, levenshtein, all, or a comma list (default: levenshtein)
    #[argh(option)]
    pub metric: Option<String>,

    /// output format: tsv, csv, phylip, nexus, json, condensed (default: tsv)
    #[argh(option)]
    pub format: Option<String>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// align sequences with MAFFT before computing distances
    #[argh(switch)]
    pub align: bool,

    /// MAFFT executable (default: mafft)
    #[argh(option)]
    pub mafft_binary: Option<String>,

    /// save the aligned sequences to this FASTA file (requires --align)
    #[argh(option)]
    pub aligned_output: Option<String>,

    /// include only sequences whose identifier matches regex pattern
    #[argh(option)]
    pub include_ids: Option<String>,

    /// exclude sequences whose identifier matches regex pattern
    #[argh(option)]
    pub exclude_ids: Option<String>,

    /// include only sequences listed in a file (one identifier per line)
    #[argh(option)]
    pub include_ids_list: Option<String>,

    /// exclude sequences listed in a file (one identifier per line)
    #[argh(option)]
    pub exclude_ids_list: Option<String>,

    /// show collection statistics only, then exit
    #[argh(switch)]
    pub stats_only: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

// Options left unset on the command line and in the config fall back to defaults here
impl Args {
    pub fn metric(&self) -> &str {
        self.metric.as_deref().unwrap_or(DEFAULT_METRIC)
    }

    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    pub fn mafft_binary(&self) -> &str {
        self.mafft_binary.as_deref().unwrap_or(DEFAULT_MAFFT_BINARY)
    }
}
