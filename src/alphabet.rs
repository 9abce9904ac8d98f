//! The symbol set genes are drawn from.

use rand::Rng;

/// Lowercase ASCII letters followed by a space.
pub const ALPHABET: [char; 27] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', ' ',
];

/// Draws one symbol uniformly from [`ALPHABET`].
pub fn random_gene<R: Rng>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

/// Draws `len` independent symbols.
pub fn random_genes<R: Rng>(rng: &mut R, len: usize) -> Vec<char> {
    (0..len).map(|_| random_gene(rng)).collect()
}

pub fn contains(symbol: char) -> bool {
    ALPHABET.contains(&symbol)
}
