//! Small statistics helpers for the timing harnesses.
//!
//! Samples are signed microsecond deltas. All helpers return 0 for an empty
//! sample set.

use std::io::{self, Write};

/// Arithmetic mean, truncated toward zero.
pub fn mean(samples: &[i64]) -> i64 {
    if samples.is_empty() {
        return 0;
    }
    let sum: i128 = samples.iter().map(|&s| s as i128).sum();
    (sum / samples.len() as i128) as i64
}

/// Population standard deviation around the truncated mean.
pub fn deviation(samples: &[i64]) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let mean = mean(samples) as i128;
    let sqr_sum: i128 = samples
        .iter()
        .map(|&s| {
            let d = s as i128 - mean;
            d * d
        })
        .sum();
    ((sqr_sum / samples.len() as i128) as f64).sqrt() as u64
}

/// Write one sample per line.
pub fn write_samples<W: Write>(mut out: W, samples: &[i64]) -> io::Result<()> {
    for sample in samples {
        writeln!(out, "{sample}")?;
    }
    out.flush()
}
