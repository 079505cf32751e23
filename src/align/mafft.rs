// mafft.rs - External MAFFT multiple sequence alignment wrapper

use std::io::Write;
use std::process::{Command, Stdio};
use crate::data::{parse_fasta, write_fasta_to, SequenceCollection};

/// Runs an external MAFFT binary, feeding FASTA on stdin and reading the
/// aligned FASTA from stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MafftAligner {
    binary: String,
    args: Vec<String>,
}

impl Default for MafftAligner {
    fn default() -> Self {
        Self::new("mafft")
    }
}

impl MafftAligner {
    /// Aligner invoking `binary --quiet -`
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            args: vec!["--quiet".to_string(), "-".to_string()],
        }
    }

    /// Aligner with an explicit argument list
    pub fn with_args(binary: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            args,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Align every sequence of `collection`; the output keeps MAFFT's record order
    pub fn align(&self, collection: &SequenceCollection) -> Result<SequenceCollection, String> {
        let mut input = Vec::new();
        write_fasta_to(&mut input, collection)?;

        let mut child = Command::new(&self.binary)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("Failed to start aligner '{}': {}", self.binary, e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| format!("Failed to open stdin of '{}'", self.binary))?;

        // Feed stdin from another thread so a full stdout pipe cannot deadlock us
        let feeder = std::thread::spawn(move || stdin.write_all(&input));

        let output = child
            .wait_with_output()
            .map_err(|e| format!("Failed to wait for aligner '{}': {}", self.binary, e))?;

        if !output.status.success() {
            return Err(format!(
                "Aligner '{}' exited with {}: {}",
                self.binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        feeder
            .join()
            .map_err(|_| format!("Stdin writer for '{}' panicked", self.binary))?
            .map_err(|e| format!("Failed to send sequences to '{}': {}", self.binary, e))?;

        parse_fasta(&output.stdout[..])
            .map_err(|e| format!("Failed to parse output of '{}': {}", self.binary, e))
    }
}
