// fasta.rs - FASTA loading and writing for sequence collections

use std::fs::{File, create_dir_all};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use bio::io::fasta;
use crate::data::collection::SequenceCollection;

/// Load a FASTA file into an ordered, uppercase-normalized collection
pub fn load_fasta(path: &Path) -> Result<SequenceCollection, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open FASTA file {}: {}", path.display(), e))?;

    parse_fasta(BufReader::new(file))
        .map_err(|e| format!("{} ({})", e, path.display()))
}

/// Parse FASTA records from any reader.
///
/// The identifier is the first whitespace-delimited token of the header;
/// multi-line sequences are concatenated.
pub fn parse_fasta<R: Read>(reader: R) -> Result<SequenceCollection, String> {
    let reader = fasta::Reader::new(reader);
    let mut collection = SequenceCollection::new();

    for record_result in reader.records() {
        let record = record_result
            .map_err(|e| format!("Invalid FASTA record: {}", e))?;

        collection.insert(record.id(), record.seq())?;
    }

    Ok(collection)
}

/// Write a collection as FASTA (one `>id` line, one sequence line)
pub fn write_fasta_to<W: Write>(writer: W, collection: &SequenceCollection) -> Result<(), String> {
    let mut writer = fasta::Writer::new(writer);
    for (id, sequence) in collection.iter() {
        writer
            .write(id, None, sequence)
            .map_err(|e| format!("Failed to write FASTA record '{}': {}", id, e))?;
    }
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write a collection to a FASTA file, creating parent directories
pub fn write_fasta(path: &Path, collection: &SequenceCollection) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    let file = File::create(path)
        .map_err(|e| format!("Failed to create FASTA file '{}': {}", path.display(), e))?;
    write_fasta_to(BufWriter::new(file), collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline_and_case() {
        let input = b">seq1 some description\nacgt\nAC\n>seq2\nTTGCA\n";
        let collection = parse_fasta(&input[..]).unwrap();

        assert_eq!(collection.ids(), vec!["seq1", "seq2"]);
        assert_eq!(collection.get("seq1"), Some(&b"ACGTAC"[..]));
        assert_eq!(collection.get("seq2"), Some(&b"TTGCA"[..]));
    }

    #[test]
    fn test_parse_duplicate_ids_fails() {
        let input = b">dup\nACGT\n>dup\nTTTT\n";
        let err = parse_fasta(&input[..]).unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn test_parse_empty_input() {
        let collection = parse_fasta(&b""[..]).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_write_then_load_file() {
        let collection = SequenceCollection::from_pairs(vec![
            ("b_first", "ACGTN"),
            ("a_second", "GG"),
        ])
        .unwrap();

        let path = std::env::temp_dir()
            .join(format!("vossdist_fasta_test_{}", std::process::id()))
            .join("out.fasta");
        write_fasta(&path, &collection).unwrap();

        let loaded = load_fasta(&path).unwrap();
        assert_eq!(loaded, collection);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_fasta(Path::new("/nonexistent/definitely_missing.fasta")).unwrap_err();
        assert!(err.contains("Failed to open FASTA file"));
    }
}
