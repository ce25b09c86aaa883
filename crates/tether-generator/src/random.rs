use crate::Generator;
use rand::Rng;
use tether_core::ShortCode;

/// The 62-character alphabet generated codes are drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DEFAULT_LENGTH: usize = 6;

/// Draws codes uniformly at random, with replacement, from [`ALPHABET`].
///
/// Each call pulls from the thread-local RNG, which is seeded from the OS,
/// so concurrently running instances do not produce correlated sequences.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of [`DEFAULT_LENGTH`] characters.
    pub fn new() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }

    /// Creates a generator producing codes of `length` characters.
    ///
    /// A length of zero is bumped to one, an empty key is never useful.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::generated(code)
    }
}
