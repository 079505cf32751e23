// metric.rs - Metric selection parsed from the command line

use std::fmt;
use std::str::FromStr;

/// Distance metric chosen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Euclidean,
    Hamming,
    Levenshtein,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Euclidean, Metric::Hamming, Metric::Levenshtein];

    /// Short name used in file names and output headers
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Hamming => "hamming",
            Metric::Levenshtein => "levenshtein",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Metric::Euclidean => "Euclidean distance between Voss vectors",
            Metric::Hamming => "Hamming distance (equal-length sequences only)",
            Metric::Levenshtein => "Levenshtein edit distance",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" | "voss" | "voss-euclidean" => Ok(Metric::Euclidean),
            "hamming" => Ok(Metric::Hamming),
            "levenshtein" | "edit" => Ok(Metric::Levenshtein),
            _ => Err(format!("Invalid metric: {}. Use: euclidean, hamming, levenshtein, all", s)),
        }
    }
}

/// Parse a `--metric` value into the list of metrics to compute
pub fn parse_metrics(s: &str) -> Result<Vec<Metric>, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(Metric::ALL.to_vec());
    }
    s.split(',')
        .map(|part| part.trim().parse::<Metric>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_metric() {
        assert_eq!("hamming".parse::<Metric>().unwrap(), Metric::Hamming);
        assert_eq!("VOSS".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert!("cosine".parse::<Metric>().is_err());
    }

    #[test]
    fn test_parse_metric_lists() {
        assert_eq!(parse_metrics("all").unwrap(), Metric::ALL.to_vec());
        assert_eq!(
            parse_metrics("levenshtein, euclidean").unwrap(),
            vec![Metric::Levenshtein, Metric::Euclidean]
        );
        assert!(parse_metrics("hamming,bogus").is_err());
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::Euclidean.to_string(), "euclidean");
        assert!(Metric::Hamming.description().contains("equal-length"));
    }
}
