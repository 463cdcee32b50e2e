//! verificar - Classifier Output Label Checker
//!
//! Usage:
//!   verificar scores.bin 2            # exit 0 if argmax(scores) == 2
//!   verificar scores.bin 2 --verbose  # also print per-class scores
//!   verificar scores.bin 2 --json     # verdict as JSON
//!   verificar scores.bin 2 --quiet    # exit status only
//!
//! Exit status: 0 = match, 1 = mismatch, 2 = input/decoding error.

use clap::Parser;
use std::process::ExitCode;

use verificar::{check, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --quiet wins over the output flags; errors still go to stderr.
    match check::run(&cli.file, &cli.label, cli.json, cli.verbose, cli.quiet) {
        Ok(verdict) if verdict.matched => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
