pub mod random;
pub mod seq;

use bingo_core::CardCode;

pub use random::{random_code, RandomGenerator};
pub use seq::SeqGenerator;

/// Trait for generating card codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is not their concern: the card writer relies on the
/// repository's unique constraint and retries on collision.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<CardCode>;

    /// Generates a candidate card code.
    fn generate(&self) -> Self::Output;
}
