//! Score vector decoding and argmax
//!
//! The input is a raw binary buffer whose first 40 bytes are 10 sequential
//! little-endian IEEE-754 f32 values, one per class. Anything past offset 40
//! is ignored.

use crate::error::{CliError, Result};

/// Number of classes in the softmax output vector.
pub const NUM_CLASSES: usize = 10;

/// Bytes consumed from the input buffer (10 LE f32).
pub const SCORE_BYTES: usize = NUM_CLASSES * 4;

/// Decode the first [`SCORE_BYTES`] bytes of `bytes` as a score vector.
///
/// A buffer shorter than the fixed decode window is a hard error, never a
/// silently short vector.
pub fn decode(bytes: &[u8]) -> Result<[f32; NUM_CLASSES]> {
    if bytes.len() < SCORE_BYTES {
        return Err(CliError::BufferTooShort {
            needed: SCORE_BYTES,
            actual: bytes.len(),
        });
    }

    let mut scores = [0.0f32; NUM_CLASSES];
    for (score, chunk) in scores.iter_mut().zip(bytes[..SCORE_BYTES].chunks_exact(4)) {
        *score = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(scores)
}

/// Index of the maximum score; ties resolve to the lowest index.
///
/// Uses a running max with strict `>`, so the first occurrence of the
/// maximum wins and a NaN entry never displaces an earlier candidate.
pub fn argmax(scores: &[f32]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}
