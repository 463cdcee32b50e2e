//! verificar library
//!
//! This library is the foundation for the verificar binary.
//! Exports the CLI structure and check pipeline for testing and reuse.
//!
//! verificar validates the output of an ML inference run: it decodes the
//! first 40 bytes of a binary file as 10 little-endian IEEE-754 f32 scores,
//! takes the argmax, and compares it to an expected class label. The verdict
//! is reported through the process exit status: 0 match, 1 mismatch,
//! 2 input/decoding error.

use clap::Parser;
use std::path::PathBuf;

pub mod check;
pub mod error;
pub mod scores;

pub use check::{check, Verdict};
pub use error::CliError;

/// verificar - Classifier Output Label Checker
///
/// Compare the argmax of a raw softmax score buffer to an expected label.
#[derive(Parser, Debug)]
#[command(name = "verificar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the raw score buffer (at least 40 bytes: 10 LE f32)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Expected class label (base-10 integer; surrounding whitespace ignored)
    #[arg(value_name = "LABEL")]
    pub label: String,

    /// Output the verdict as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the decoded per-class scores
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress stdout; exit status only
    #[arg(short, long)]
    pub quiet: bool,
}
