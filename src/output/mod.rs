// mod.rs - Output formatters module

use std::fmt::Display;
use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use serde::Serialize;
use crate::core::DistanceMatrix;

/// Formats accepted by [`write_matrix`]
pub const SUPPORTED_FORMATS: &[&str] = &["tsv", "csv", "phylip", "nexus", "json", "condensed"];

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Create `file_path` and run `render` against a buffered writer
fn with_output_file<F>(file_path: &str, render: F) -> Result<(), String>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))
}

fn write_comment_header<W: Write>(writer: &mut W, metric: &str, command_line: &str) -> io::Result<()> {
    writeln!(writer, "# Command: {}", command_line)?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(writer, "# vossdist v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(writer, "# Metric: {}", metric)
}

/// Write distance matrix in TSV format
pub fn write_tsv<T: Copy + Display>(
    file_path: &str,
    matrix: &DistanceMatrix<T>,
    metric: &str,
    command_line: &str,
) -> Result<(), String> {
    with_output_file(file_path, |writer| {
        write_comment_header(writer, metric, command_line)?;

        write!(writer, "Sequence")?;
        for label in matrix.labels() {
            write!(writer, "\t{}", label)?;
        }
        writeln!(writer)?;

        for (label, row) in matrix.labels().iter().zip(matrix.rows()) {
            write!(writer, "{}", label)?;
            for d in row {
                write!(writer, "\t{}", d)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    })
}

/// Write distance matrix in CSV format
pub fn write_csv<T: Copy + Display>(
    file_path: &str,
    matrix: &DistanceMatrix<T>,
    metric: &str,
    command_line: &str,
) -> Result<(), String> {
    with_output_file(file_path, |writer| {
        write_comment_header(writer, metric, command_line)?;

        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut header = vec!["Sequence".to_string()];
        header.extend(matrix.labels().iter().cloned());
        csv_writer.write_record(&header)?;

        for (label, row) in matrix.labels().iter().zip(matrix.rows()) {
            let mut record = vec![label.clone()];
            record.extend(row.iter().map(|d| d.to_string()));
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush()
    })
}

/// Write distance matrix in relaxed PHYLIP format.
///
/// Labels are never truncated: the name column is as wide as the longest
/// label (at least 10 characters) and is always followed by whitespace, as
/// read by PHYLIP 3.7, RapidNJ and most modern tools. Strict 10-character
/// readers need labels of at most 10 characters.
pub fn write_phylip<T: Copy + Display>(
    file_path: &str,
    matrix: &DistanceMatrix<T>,
    metric: &str,
    command_line: &str,
) -> Result<(), String> {
    let name_width = matrix.labels().iter().map(|l| l.len()).max().unwrap_or(0).max(10);

    with_output_file(file_path, |writer| {
        writeln!(writer, "    {}", matrix.len())?;

        // Lower triangle including the diagonal
        for (i, label) in matrix.labels().iter().enumerate() {
            write!(writer, "{:<width$}", label, width = name_width)?;
            for d in &matrix.rows()[i][..=i] {
                write!(writer, "  {}", d)?;
            }
            writeln!(writer)?;
        }

        // Trailing comments are ignored by most PHYLIP parsers
        writeln!(writer)?;
        write_comment_header(writer, metric, command_line)
    })
}

/// Write distance matrix in NEXUS format
pub fn write_nexus<T: Copy + Display>(
    file_path: &str,
    matrix: &DistanceMatrix<T>,
    metric: &str,
    command_line: &str,
) -> Result<(), String> {
    with_output_file(file_path, |writer| {
        writeln!(writer, "#NEXUS")?;
        writeln!(writer, "[Command: {}]", command_line)?;
        writeln!(writer, "[Generated: {}]", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(writer, "[vossdist v{}, metric: {}]", env!("CARGO_PKG_VERSION"), metric)?;
        writeln!(writer, "BEGIN DISTANCES;")?;
        writeln!(writer, "    DIMENSIONS NTAX={};", matrix.len())?;
        writeln!(writer, "    FORMAT LABELS LOWER DIAGONAL;")?;
        writeln!(writer, "    MATRIX")?;

        for (i, label) in matrix.labels().iter().enumerate() {
            write!(writer, "        {}", label)?;
            for d in &matrix.rows()[i][..=i] {
                write!(writer, " {}", d)?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, "    ;")?;
        writeln!(writer, "END;")
    })
}

#[derive(Serialize)]
struct JsonMatrix<'a, T> {
    metric: &'a str,
    labels: &'a [String],
    matrix: &'a [Vec<T>],
}

/// Write labels and matrix as a JSON object
pub fn write_json<T: Copy + Serialize>(
    file_path: &str,
    matrix: &DistanceMatrix<T>,
    metric: &str,
) -> Result<(), String> {
    with_output_file(file_path, |writer| {
        let document = JsonMatrix {
            metric,
            labels: matrix.labels(),
            matrix: matrix.rows(),
        };
        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writeln!(writer)
    })
}

/// Write the tab-separated labels, then the condensed upper triangle one value per line
pub fn write_condensed<T: Copy + Display>(
    file_path: &str,
    matrix: &DistanceMatrix<T>,
) -> Result<(), String> {
    with_output_file(file_path, |writer| {
        writeln!(writer, "{}", matrix.labels().join("\t"))?;
        for d in matrix.condensed() {
            writeln!(writer, "{}", d)?;
        }
        Ok(())
    })
}

/// Write distance matrix in the specified format
pub fn write_matrix<T: Copy + Display + Serialize>(
    file_path: &str,
    format: &str,
    matrix: &DistanceMatrix<T>,
    metric: &str,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(file_path, matrix, metric, command_line),
        "csv" => write_csv(file_path, matrix, metric, command_line),
        "phylip" => write_phylip(file_path, matrix, metric, command_line),
        "nexus" => write_nexus(file_path, matrix, metric, command_line),
        "json" => write_json(file_path, matrix, metric),
        "condensed" => write_condensed(file_path, matrix),
        _ => Err(format!(
            "Unsupported output format: {}. Use: {}",
            format,
            SUPPORTED_FORMATS.join(", ")
        )),
    }?;
    println!("✅ Distance matrix written to: {} ({} format)", file_path, format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> DistanceMatrix<usize> {
        let labels = vec!["s1".to_string(), "s2".to_string(), "s3".to_string()];
        DistanceMatrix::from_fn(labels, |i, j| i + j)
    }

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("vossdist_output_test_{}", std::process::id()))
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    fn data_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| !l.starts_with('#') && !l.is_empty()).collect()
    }

    #[test]
    fn test_write_tsv() {
        let path = temp_path("matrix.tsv");
        write_matrix(&path, "tsv", &sample_matrix(), "levenshtein", "vossdist --test").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.contains("# Metric: levenshtein"));
        assert_eq!(
            data_lines(&content),
            vec!["Sequence\ts1\ts2\ts3", "s1\t0\t1\t2", "s2\t1\t0\t3", "s3\t2\t3\t0"]
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_csv() {
        let path = temp_path("matrix.csv");
        write_matrix(&path, "CSV", &sample_matrix(), "hamming", "cmd").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert_eq!(
            data_lines(&content),
            vec!["Sequence,s1,s2,s3", "s1,0,1,2", "s2,1,0,3", "s3,2,3,0"]
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_phylip_lower_triangle() {
        let path = temp_path("matrix.phy");
        write_phylip(&path, &sample_matrix(), "hamming", "cmd").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "    3");
        assert_eq!(lines[1], "s1          0");
        assert_eq!(lines[3], "s3          2  3  0");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_phylip_long_labels_stay_separated() {
        let labels = vec!["short".to_string(), "a_very_long_label".to_string()];
        let matrix = DistanceMatrix::from_fn(labels, |_, _| 7usize);
        let path = temp_path("long_labels.phy");
        write_phylip(&path, &matrix, "levenshtein", "cmd").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        // Both rows share one column width and every label stays whole
        assert_eq!(lines[1], "short              0");
        assert_eq!(lines[2], "a_very_long_label  7  0");
        for line in &lines[1..3] {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert!(fields[0] == "short" || fields[0] == "a_very_long_label");
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_nexus() {
        let path = temp_path("matrix.nex");
        write_nexus(&path, &sample_matrix(), "hamming", "cmd").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("#NEXUS"));
        assert!(content.contains("DIMENSIONS NTAX=3;"));
        assert!(content.contains("        s2 1 0\n"));
        assert!(content.trim_end().ends_with("END;"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_json() {
        let labels = vec!["a".to_string(), "b".to_string()];
        let matrix = DistanceMatrix::from_fn(labels, |_, _| 1.5_f64);
        let path = temp_path("matrix.json");
        write_json(&path, &matrix, "euclidean").unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["metric"], "euclidean");
        assert_eq!(value["labels"], serde_json::json!(["a", "b"]));
        assert_eq!(value["matrix"], serde_json::json!([[0.0, 1.5], [1.5, 0.0]]));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_condensed() {
        let path = temp_path("matrix.condensed");
        write_condensed(&path, &sample_matrix()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["s1\ts2\ts3", "1", "2", "3"]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unsupported_format() {
        let path = temp_path("matrix.xyz");
        let err = write_matrix(&path, "xlsx", &sample_matrix(), "hamming", "cmd").unwrap_err();
        assert!(err.contains("Unsupported output format"));
    }
}
