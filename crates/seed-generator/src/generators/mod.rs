//! Individual value generators.
//!
//! Each generator draws from the RNG passed in, so callers control
//! determinism through the seed of that RNG.

pub mod address;
pub mod company;
pub mod line_items;
pub mod numeric;
pub mod pattern;
pub mod person;
pub mod text;

use rand::Rng;

/// Pick one entry of a non-empty word pool.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// `n` random decimal digits.
pub(crate) fn digits<R: Rng>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
