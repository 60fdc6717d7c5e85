use crate::Generator;
use bingo_core::{CardCode, CODE_ALPHABET, CODE_LENGTH};
use rand::Rng;

/// Draws a code from `rng`, each symbol uniformly and independently.
pub fn random_code<R: Rng + ?Sized>(rng: &mut R) -> CardCode {
    let code: String = (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    CardCode::new_unchecked(code)
}

/// Generates codes from the thread-local, non-cryptographic RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    type Output = CardCode;

    fn generate(&self) -> Self::Output {
        random_code(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn codes_have_fixed_length_and_alphabet() {
        let generator = RandomGenerator::new();

        for _ in 0..1_000 {
            let code = generator.generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().bytes().all(|b| CODE_ALPHABET.contains(&b)));
            // generated codes always survive a round through the parser
            assert_eq!(CardCode::parse(code.as_str()).unwrap(), code);
        }
    }

    #[test]
    fn symbols_are_uniformly_distributed() {
        const DRAWS: usize = 60_000;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts: HashMap<u8, usize> = HashMap::new();

        for _ in 0..DRAWS {
            for b in random_code(&mut rng).as_str().bytes() {
                *counts.entry(b).or_default() += 1;
            }
        }

        let expected = (DRAWS * CODE_LENGTH) as f64 / CODE_ALPHABET.len() as f64;
        let tolerance = expected * 0.05;

        assert_eq!(counts.len(), CODE_ALPHABET.len());
        for symbol in CODE_ALPHABET {
            let seen = counts[symbol] as f64;
            assert!(
                (seen - expected).abs() < tolerance,
                "symbol {} seen {} times, expected about {}",
                *symbol as char,
                seen,
                expected
            );
        }
    }

    #[test]
    fn same_seed_same_codes() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(random_code(&mut a), random_code(&mut b));
        }
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
