// main.rs - CLI entry point

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};
use vossdist::cli::Config;
use vossdist::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let fasta = args.fasta.clone().ok_or("--fasta is required")?;

    let output = if args.stats_only || args.dry_run {
        None
    } else {
        Some(args.output.clone().ok_or("--output is required")?)
    };

    // Validate all arguments
    let validation_result = validate_args(&args)?;

    println!("🚀 vossdist v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "📐 Metrics: {}",
        validation_result
            .metrics
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        let num_threads = rayon::current_num_threads();
        println!("🧵 Threads: {} (auto-detected)", num_threads);
    }

    let total_start = Instant::now();

    // Load sequences
    println!("🧬 Loading sequences from: {}", fasta);
    let loaded = load_fasta(Path::new(&fasta))?;
    println!("   Loaded {} sequences", loaded.len());

    let sequences = if validation_result.filter.is_empty() {
        loaded
    } else {
        let filtered = loaded.filter(&validation_result.filter);
        println!(
            "🔍 Identifier filters: kept {} sequences, removed {}",
            filtered.len(),
            loaded.len() - filtered.len()
        );
        filtered
    };

    if sequences.is_empty() {
        println!("⚠️  No sequences left to compare: matrices will be empty");
    }

    print_stats(&sequences);

    if args.stats_only {
        println!("\n✅ Statistics analysis completed");
        return Ok(());
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    // Optional multiple sequence alignment
    let sequences = if args.align {
        let aligner = MafftAligner::new(args.mafft_binary());
        println!("🔄 Aligning {} sequences with {}...", sequences.len(), aligner.binary());
        let align_start = Instant::now();
        let aligned = aligner.align(&sequences)?;
        println!(
            "   ⏱️  Alignment time: {:.2}s",
            align_start.elapsed().as_secs_f64()
        );

        if let Some(path) = &args.aligned_output {
            write_fasta(Path::new(path), &aligned)?;
            println!("💾 Aligned sequences saved to: {}", path);
        }
        aligned
    } else {
        sequences
    };

    let output = output.ok_or("--output is required")?;
    let metrics = select_metrics(
        &validation_result.metrics,
        validation_result.all_metrics,
        &sequences,
    )?;

    write_metric_matrices(
        &metrics,
        &sequences,
        &output,
        &validation_result.format,
        &command_line,
    )?;

    let total_elapsed = total_start.elapsed();
    println!(
        "\n🎉 Completed in {:.2}s",
        total_elapsed.as_secs_f64()
    );

    Ok(())
}

/// Settle which metrics run before any file is written.
///
/// Hamming on sequences of unequal length is dropped with a warning when it
/// only came in through `all`; naming it explicitly is an error.
fn select_metrics(
    metrics: &[Metric],
    all_metrics: bool,
    sequences: &SequenceCollection,
) -> Result<Vec<Metric>, String> {
    if !metrics.contains(&Metric::Hamming) {
        return Ok(metrics.to_vec());
    }

    match check_uniform_length(sequences) {
        Ok(()) => Ok(metrics.to_vec()),
        Err(e) if all_metrics => {
            println!("⚠️  Skipping Hamming: {}", e);
            println!("💡 Use --align to compute Hamming distances on aligned sequences");
            Ok(metrics.iter().copied().filter(|m| *m != Metric::Hamming).collect())
        }
        Err(e) => Err(format!("{} (try --align)", e)),
    }
}

/// Build and write one matrix per metric; returns the files written
fn write_metric_matrices(
    metrics: &[Metric],
    sequences: &SequenceCollection,
    output: &str,
    format: &str,
    command_line: &str,
) -> Result<Vec<String>, String> {
    let multiple = metrics.len() > 1;
    let mut written = Vec::with_capacity(metrics.len());

    for metric in metrics {
        let file_path = if multiple {
            metric_output_path(output, metric.name())
        } else {
            output.to_string()
        };

        println!("\n🎯 Distance calculation: {}", metric.description());
        compute_and_write(*metric, sequences, &file_path, format, command_line)?;
        written.push(file_path);
    }

    Ok(written)
}

fn compute_and_write(
    metric: Metric,
    sequences: &SequenceCollection,
    file_path: &str,
    format: &str,
    command_line: &str,
) -> Result<(), String> {
    let n = sequences.len();
    let pairs = n * n.saturating_sub(1) / 2;

    let pb = spinner(format!("Computing {} distances for {} pairs", metric.name(), pairs))?;
    let start = Instant::now();

    match metric {
        Metric::Euclidean => {
            let encoding = voss_vectors(sequences);
            pb.set_message(format!(
                "Voss vectors: {} × {} values, comparing {} pairs",
                encoding.len(),
                4 * encoding.max_len(),
                pairs
            ));
            let matrix = euclidean_matrix(&encoding);
            finish(&pb, start);
            write_matrix(file_path, format, &matrix, metric.name(), command_line)
        }
        Metric::Hamming => {
            let matrix = hamming_matrix(sequences);
            finish(&pb, start);
            write_matrix(file_path, format, &matrix?, metric.name(), command_line)
        }
        Metric::Levenshtein => {
            let matrix = levenshtein_matrix(sequences);
            finish(&pb, start);
            write_matrix(file_path, format, &matrix, metric.name(), command_line)
        }
    }
}

fn spinner(message: String) -> Result<ProgressBar, String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .map_err(|e| format!("Invalid progress template: {}", e))?,
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn finish(pb: &ProgressBar, start: Instant) {
    pb.finish_and_clear();
    println!("   ⏱️  Computation time: {:.2}s", start.elapsed().as_secs_f64());
}

fn print_stats(sequences: &SequenceCollection) {
    let stats = sequences.stats();
    println!("\n📈 === COLLECTION STATISTICS ===");
    println!("  • Sequences: {}", stats.sequences);
    println!(
        "  • Length: min {}, max {}, mean {:.1}",
        stats.min_len, stats.max_len, stats.mean_len
    );
    println!(
        "  • Uniform length: {}",
        if stats.uniform_length { "yes" } else { "no" }
    );
    if stats.non_acgt_symbols > 0 {
        println!(
            "  ⚠️  {} non-ACGT symbols (ignored by the Voss encoding)",
            stats.non_acgt_symbols
        );
    }
}

/// Insert the metric name before the extension: `out.tsv` becomes `out.hamming.tsv`
fn metric_output_path(output: &str, metric: &str) -> String {
    let path = Path::new(output);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}.{}.{}", stem, metric, ext.to_string_lossy()),
        None => format!("{}.{}", stem, metric),
    };
    let mut result = PathBuf::from(path.parent().unwrap_or_else(|| Path::new("")));
    result.push(file_name);
    result.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_output_path() {
        assert_eq!(metric_output_path("out.tsv", "hamming"), "out.hamming.tsv");
        assert_eq!(metric_output_path("results/dist.phy", "euclidean"), "results/dist.euclidean.phy");
        assert_eq!(metric_output_path("matrix", "levenshtein"), "matrix.levenshtein");
    }

    fn mixed_lengths() -> SequenceCollection {
        SequenceCollection::from_pairs(vec![("a", "ACGT"), ("b", "ACG"), ("c", "TTTT")]).unwrap()
    }

    fn temp_output(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("vossdist_main_test_{}_{}", name, std::process::id()))
            .join("out.tsv")
    }

    #[test]
    fn test_select_metrics_drops_hamming_from_all_on_mixed_lengths() {
        let selected = select_metrics(&Metric::ALL, true, &mixed_lengths()).unwrap();
        assert_eq!(selected, vec![Metric::Euclidean, Metric::Levenshtein]);
    }

    #[test]
    fn test_select_metrics_rejects_explicit_hamming_on_mixed_lengths() {
        let err = select_metrics(&[Metric::Euclidean, Metric::Hamming], false, &mixed_lengths())
            .unwrap_err();
        assert!(err.contains("'b' has 3"));

        let uniform = SequenceCollection::from_pairs(vec![("a", "ACGT"), ("b", "ACGA")]).unwrap();
        assert_eq!(select_metrics(&[Metric::Hamming], false, &uniform).unwrap(), vec![Metric::Hamming]);
    }

    #[test]
    fn test_all_metrics_on_mixed_lengths_writes_every_remaining_file() {
        let output = temp_output("all_mixed");
        let output_str = output.to_string_lossy().into_owned();
        let sequences = mixed_lengths();

        let metrics = select_metrics(&Metric::ALL, true, &sequences).unwrap();
        let written = write_metric_matrices(&metrics, &sequences, &output_str, "tsv", "vossdist --test")
            .unwrap();

        let dir = output.parent().unwrap();
        assert_eq!(written.len(), 2);
        assert!(dir.join("out.euclidean.tsv").exists());
        assert!(dir.join("out.levenshtein.tsv").exists());
        assert!(!dir.join("out.hamming.tsv").exists());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_explicit_hamming_failure_writes_nothing() {
        let output = temp_output("explicit_mixed");
        let output_str = output.to_string_lossy().into_owned();
        let sequences = mixed_lengths();

        let result = select_metrics(&Metric::ALL, false, &sequences)
            .and_then(|m| write_metric_matrices(&m, &sequences, &output_str, "tsv", "cmd"));

        assert!(result.is_err());
        assert!(!output.parent().unwrap().exists());
    }
}
