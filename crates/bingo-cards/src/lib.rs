//! Card persistence with unique short codes.
//!
//! [`CardWriter`] saves cards under randomly generated codes and retries
//! with a fresh code whenever the repository reports that a code is
//! already taken.

pub mod writer;

pub use writer::{CardWriter, MAX_SAVE_ATTEMPTS};
