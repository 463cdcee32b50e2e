//! Label check: read a score buffer, take the argmax, compare to the
//! expected label.
//!
//! The exit-status contract lives in `main`; this module produces the
//! [`Verdict`] and renders it.

use crate::error::{CliError, Result};
use crate::scores;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Outcome of a label check.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// Index of the maximum score (lowest index among ties)
    pub predicted: usize,
    /// Label the caller expected
    pub expected: usize,
    /// Whether predicted equals expected
    pub matched: bool,
    /// The decoded per-class scores
    pub scores: Vec<f32>,
}

/// Run the full check pipeline: read file, decode scores, argmax, parse the
/// expected label, compare.
pub fn check(path: &Path, label: &str) -> Result<Verdict> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }

    let data = fs::read(path)?;
    let scores = scores::decode(&data)?;
    let predicted = scores::argmax(&scores);

    // A negative label (e.g. "-1") fails the usize parse and is reported
    // as invalid rather than silently mismatching.
    let expected = label
        .trim()
        .parse::<usize>()
        .map_err(|_| CliError::InvalidLabel(label.to_string()))?;

    Ok(Verdict {
        predicted,
        expected,
        matched: predicted == expected,
        scores: scores.to_vec(),
    })
}

/// Run the check command and render the verdict.
pub fn run(path: &Path, label: &str, json: bool, verbose: bool, quiet: bool) -> Result<Verdict> {
    let verdict = check(path, label)?;

    if quiet {
        return Ok(verdict);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print_verdict(&verdict, verbose);
    }

    Ok(verdict)
}

fn print_verdict(verdict: &Verdict, verbose: bool) {
    if verbose {
        for (class, score) in verdict.scores.iter().enumerate() {
            println!("  class {class}: {score:.6}");
        }
    }

    if verdict.matched {
        println!(
            "{} predicted {} == expected {}",
            "[PASS]".green(),
            verdict.predicted,
            verdict.expected
        );
    } else {
        println!(
            "{} predicted {} != expected {}",
            "[FAIL]".red(),
            verdict.predicted,
            verdict.expected
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_scores(scores: &[f32; 10]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for s in scores {
            file.write_all(&s.to_le_bytes()).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_check_match() {
        let file = write_scores(&[0.1, 0.05, 0.7, 0.02, 0.01, 0.03, 0.02, 0.03, 0.02, 0.01]);
        let verdict = check(file.path(), "2").unwrap();
        assert_eq!(verdict.predicted, 2);
        assert_eq!(verdict.expected, 2);
        assert!(verdict.matched);
    }

    #[test]
    fn test_check_mismatch() {
        let file = write_scores(&[0.1, 0.05, 0.7, 0.02, 0.01, 0.03, 0.02, 0.03, 0.02, 0.01]);
        let verdict = check(file.path(), "0").unwrap();
        assert_eq!(verdict.predicted, 2);
        assert!(!verdict.matched);
    }

    #[test]
    fn test_check_all_zero_buffer_predicts_class_zero() {
        let file = write_scores(&[0.0; 10]);
        let verdict = check(file.path(), "0").unwrap();
        assert_eq!(verdict.predicted, 0);
        assert!(verdict.matched);
    }

    #[test]
    fn test_check_label_whitespace_ignored() {
        let file = write_scores(&[0.1, 0.05, 0.7, 0.02, 0.01, 0.03, 0.02, 0.03, 0.02, 0.01]);
        let verdict = check(file.path(), " 2 \n").unwrap();
        assert!(verdict.matched);
    }

    #[test]
    fn test_check_out_of_range_label_is_a_mismatch() {
        let file = write_scores(&[0.1, 0.05, 0.7, 0.02, 0.01, 0.03, 0.02, 0.03, 0.02, 0.01]);
        let verdict = check(file.path(), "42").unwrap();
        assert!(!verdict.matched);
    }

    #[test]
    fn test_check_invalid_label_fails() {
        let file = write_scores(&[0.0; 10]);
        let err = check(file.path(), "two").unwrap_err();
        assert!(matches!(err, CliError::InvalidLabel(_)));
    }

    #[test]
    fn test_check_negative_label_fails() {
        let file = write_scores(&[0.0; 10]);
        let err = check(file.path(), "-1").unwrap_err();
        assert!(matches!(err, CliError::InvalidLabel(_)));
    }

    #[test]
    fn test_check_missing_file_fails() {
        let err = check(Path::new("/nonexistent/scores.bin"), "0").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_check_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = check(dir.path(), "0").unwrap_err();
        assert!(matches!(err, CliError::NotAFile(_)));
    }

    #[test]
    fn test_check_short_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 12]).unwrap();
        file.flush().unwrap();
        let err = check(file.path(), "0").unwrap_err();
        assert!(matches!(err, CliError::BufferTooShort { .. }));
    }

    #[test]
    fn test_verdict_serializes_to_json() {
        let file = write_scores(&[0.0; 10]);
        let verdict = check(file.path(), "0").unwrap();
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["predicted"], 0);
        assert_eq!(json["matched"], true);
        assert_eq!(json["scores"].as_array().unwrap().len(), 10);
    }
}
