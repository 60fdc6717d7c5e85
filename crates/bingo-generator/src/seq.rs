use crate::Generator;
use bingo_core::{CardCode, CODE_ALPHABET, CODE_LENGTH};
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic generator that walks the code space in order.
///
/// The counter is written in base `CODE_ALPHABET.len()` using the alphabet
/// as digits, so it produces "AAAAAA", "AAAAAB", ... and wraps around after
/// the last code. Useful for tests and reproducible runs.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeqGenerator {
    /// Creates a generator starting at the first code.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state or handing disjoint ranges
    /// to separate processes.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }

    /// Total number of distinct codes.
    pub fn code_space() -> u64 {
        (CODE_ALPHABET.len() as u64).pow(CODE_LENGTH as u32)
    }

    /// Encodes `n` (modulo the code space) as a card code.
    pub fn encode(n: u64) -> CardCode {
        let base = CODE_ALPHABET.len() as u64;
        let mut value = n % Self::code_space();
        let mut symbols = [CODE_ALPHABET[0]; CODE_LENGTH];

        for slot in symbols.iter_mut().rev() {
            *slot = CODE_ALPHABET[(value % base) as usize];
            value /= base;
        }

        let code: String = symbols.iter().map(|&b| b as char).collect();
        CardCode::new_unchecked(code)
    }
}

impl Generator for SeqGenerator {
    type Output = CardCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Self::encode(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = SeqGenerator::new();

        assert_eq!(generator.generate().as_str(), "AAAAAA");
        assert_eq!(generator.generate().as_str(), "AAAAAB");
        assert_eq!(generator.generate().as_str(), "AAAAAC");
    }

    #[test]
    fn carries_into_next_position() {
        let base = CODE_ALPHABET.len() as u64;

        assert_eq!(SeqGenerator::encode(base - 1).as_str(), "AAAAA9");
        assert_eq!(SeqGenerator::encode(base).as_str(), "AAAABA");
    }

    #[test]
    fn wraps_after_last_code() {
        let last = SeqGenerator::code_space() - 1;

        assert_eq!(SeqGenerator::encode(last).as_str(), "999999");
        assert_eq!(SeqGenerator::encode(last + 1).as_str(), "AAAAAA");
    }

    #[test]
    fn with_offset() {
        let generator = SeqGenerator::with_offset(2);
        assert_eq!(generator.generate().as_str(), "AAAAAC");
    }

    #[test]
    fn codes_are_valid() {
        let generator = SeqGenerator::with_offset(123_456_789);
        for _ in 0..100 {
            let code = generator.generate();
            assert!(CardCode::parse(code.as_str()).is_ok());
        }
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::new();
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "AAAAAC");
        assert_eq!(cloned.generate().as_str(), "AAAAAC");
    }
}
