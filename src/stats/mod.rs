//! Base composition statistics over the ACGT alphabet.
//!
//! Counting is by byte identity: any `A`, `C`, `G` or `T` in the input is a
//! base, wherever it came from, and everything else is skipped. Percentages
//! are each rounded to one decimal place independently, so the four base
//! values need not sum to exactly 100.0.

use std::error::Error;
use std::fmt;

/// Per-base percentages plus the combined CG ratio, one decimal place each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composition {
    pub a: f64,
    pub c: f64,
    pub g: f64,
    pub t: f64,
    pub cg: f64,
}

/// The input contained no ACGT bytes, so no percentages are defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyComposition;

impl fmt::Display for EmptyComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sequence contains no A, C, G or T characters")
    }
}

impl Error for EmptyComposition {}

/// Computes the composition of `sequence`, ignoring non-ACGT bytes.
pub fn composition(sequence: &[u8]) -> Result<Composition, EmptyComposition> {
    let mut counts = [0usize; 4];
    for &byte in sequence {
        match byte {
            b'A' => counts[0] += 1,
            b'C' => counts[1] += 1,
            b'G' => counts[2] += 1,
            b'T' => counts[3] += 1,
            _ => {}
        }
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        return Err(EmptyComposition);
    }

    Ok(Composition {
        a: percentage(counts[0], total),
        c: percentage(counts[1], total),
        g: percentage(counts[2], total),
        t: percentage(counts[3], total),
        // CG is derived from the raw counts, not from the rounded per-base values
        cg: percentage(counts[1] + counts[2], total),
    })
}

fn percentage(count: usize, total: usize) -> f64 {
    round_one_decimal(count as f64 / total as f64 * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_sequence() {
        let c = composition(b"ACGT").unwrap();
        assert_eq!(c.a, 25.0);
        assert_eq!(c.c, 25.0);
        assert_eq!(c.g, 25.0);
        assert_eq!(c.t, 25.0);
        assert_eq!(c.cg, 50.0);
    }

    #[test]
    fn annotated_sequence_counts_only_acgt() {
        // "Bo" spliced into "ACGTACGTAC" at offset 5; 'B' and 'o' are skipped
        let c = composition(b"ACGTABoCGTAC").unwrap();
        assert_eq!(c.a, 30.0);
        assert_eq!(c.c, 30.0);
        assert_eq!(c.g, 20.0);
        assert_eq!(c.t, 20.0);
        assert_eq!(c.cg, 50.0);
    }

    #[test]
    fn name_bases_are_indistinguishable_from_sequence_bases() {
        // A name made of ACGT letters inflates the counts
        let c = composition(b"AAAA").unwrap();
        assert_eq!(c.a, 100.0);
        let c = composition(b"AAAAGACA").unwrap();
        assert_eq!(c.a, 75.0);
    }

    #[test]
    fn lowercase_is_not_counted() {
        assert_eq!(composition(b"acgt"), Err(EmptyComposition));
        let c = composition(b"Aacgt").unwrap();
        assert_eq!(c.a, 100.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 2 of 3 bases -> 66.666... -> 66.7
        let c = composition(b"AAT").unwrap();
        assert_eq!(c.a, 66.7);
        assert_eq!(c.t, 33.3);
        assert_eq!(c.cg, 0.0);
    }

    #[test]
    fn percentages_stay_in_range() {
        let table: [&[u8]; 5] = [b"A", b"CCCC", b"ACGTACGT", b"GGGGGGC", b"TTTA"];
        for sequence in table {
            let c = composition(sequence).unwrap();
            for value in [c.a, c.c, c.g, c.t, c.cg] {
                assert!((0.0..=100.0).contains(&value));
            }
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(composition(b""), Err(EmptyComposition));
        assert_eq!(composition(b"xyz-123"), Err(EmptyComposition));
    }
}
