use rand::Rng;

pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Draws a random nucleotide sequence of exactly `length` bases, each chosen
/// uniformly and independently from ACGT.
pub fn generate<R: Rng>(length: usize, rng: &mut R) -> Vec<u8> {
    (0..length)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect()
}

/// Splices `name` into `sequence` at an offset drawn uniformly from
/// `0..=sequence.len()`, so the token may land before the first or after the
/// last base. Returns the annotated sequence and the chosen offset.
pub fn insert_name<R: Rng>(sequence: &[u8], name: &str, rng: &mut R) -> (Vec<u8>, usize) {
    let position = rng.gen_range(0..=sequence.len());
    (insert_name_at(sequence, name, position), position)
}

/// Deterministic splice at a fixed offset. `position` must be within
/// `0..=sequence.len()`.
pub fn insert_name_at(sequence: &[u8], name: &str, position: usize) -> Vec<u8> {
    let mut annotated = Vec::with_capacity(sequence.len() + name.len());
    annotated.extend_from_slice(&sequence[..position]);
    annotated.extend_from_slice(name.as_bytes());
    annotated.extend_from_slice(&sequence[position..]);
    annotated
}
