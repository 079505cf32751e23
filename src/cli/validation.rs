// validation.rs - Input validation utilities

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufRead};
use regex::Regex;
use crate::cli::args::Args;
use crate::cli::metric::{parse_metrics, Metric};
use crate::data::SequenceFilter;
use crate::output::SUPPORTED_FORMATS;

pub struct ValidationResult {
    pub metrics: Vec<Metric>,
    /// Metrics came from `all` rather than being named one by one
    pub all_metrics: bool,
    pub format: String,
    pub filter: SequenceFilter,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate metric selection
    let metrics = parse_metrics(args.metric())?;
    let all_metrics = args.metric().eq_ignore_ascii_case("all");

    // Validate output format
    let format = args.format().to_lowercase();
    if !SUPPORTED_FORMATS.contains(&format.as_str()) {
        return Err(format!(
            "Invalid output format '{}'. Available: {}",
            args.format(),
            SUPPORTED_FORMATS.join(", ")
        ));
    }

    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    if args.aligned_output.is_some() && !args.align {
        return Err("--aligned-output requires --align".to_string());
    }

    if args.mafft_binary().trim().is_empty() {
        return Err("--mafft-binary must not be empty".to_string());
    }

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_ids {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_ids regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_ids {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_ids regex: {}", e))?)
    } else {
        None
    };

    // Load filter sets from files
    let include_set = if let Some(file_path) = &args.include_ids_list {
        Some(load_set_from_file(file_path)?)
    } else {
        None
    };

    let exclude_set = if let Some(file_path) = &args.exclude_ids_list {
        Some(load_set_from_file(file_path)?)
    } else {
        None
    };

    Ok(ValidationResult {
        metrics,
        all_metrics,
        format,
        filter: SequenceFilter {
            include_regex,
            exclude_regex,
            include_set,
            exclude_set,
        },
    })
}

/// Load a set of strings from a file (one per line)
pub fn load_set_from_file(file_path: &str) -> Result<HashSet<String>, String> {
    let file = File::open(file_path)
        .map_err(|e| format!("Failed to open filter file '{}': {}", file_path, e))?;

    let reader = BufReader::new(file);
    let mut set = HashSet::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {} from '{}': {}",
                                           line_num + 1, file_path, e))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            set.insert(trimmed.to_string());
        }
    }

    println!("📋 Loaded {} items from filter file '{}'", set.len(), file_path);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["vossdist"], args).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let result = validate_args(&parse(&["--fasta", "in.fa"])).unwrap();
        assert_eq!(result.metrics, vec![Metric::Levenshtein]);
        assert!(!result.all_metrics);
        assert_eq!(result.format, "tsv");
        assert!(result.filter.is_empty());
    }

    #[test]
    fn test_metric_all() {
        let result = validate_args(&parse(&["--metric", "all", "--format", "PHYLIP"])).unwrap();
        assert_eq!(result.metrics.len(), 3);
        assert!(result.all_metrics);
        assert_eq!(result.format, "phylip");

        let listed = validate_args(&parse(&["--metric", "euclidean,hamming,levenshtein"])).unwrap();
        assert_eq!(listed.metrics.len(), 3);
        assert!(!listed.all_metrics);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(validate_args(&parse(&["--metric", "cosine"])).is_err());
        assert!(validate_args(&parse(&["--format", "xlsx"])).is_err());
        assert!(validate_args(&parse(&["--threads", "0"])).is_err());
        assert!(validate_args(&parse(&["--include-ids", "("])).is_err());
    }

    #[test]
    fn test_aligned_output_requires_align() {
        let err = validate_args(&parse(&["--aligned-output", "a.fa"])).err().unwrap();
        assert!(err.contains("--align"));
        assert!(validate_args(&parse(&["--align", "--aligned-output", "a.fa"])).is_ok());
    }

    #[test]
    fn test_filters_from_regex_and_list() {
        let list = std::env::temp_dir()
            .join(format!("vossdist_ids_list_test_{}.txt", std::process::id()));
        std::fs::write(&list, "# keep these\nseq1\n\n  seq2  \n").unwrap();

        let args = parse(&[
            "--exclude-ids", "^seq2$",
            "--include-ids-list", list.to_str().unwrap(),
        ]);
        let result = validate_args(&args).unwrap();
        assert!(result.filter.accepts("seq1"));
        assert!(!result.filter.accepts("seq2"));
        assert!(!result.filter.accepts("seq3"));
        let _ = std::fs::remove_file(&list);
    }

    #[test]
    fn test_missing_list_file() {
        let err = load_set_from_file("/nonexistent/vossdist/ids.txt").unwrap_err();
        assert!(err.contains("Failed to open filter file"));
    }
}
