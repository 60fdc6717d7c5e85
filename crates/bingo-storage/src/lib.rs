pub mod memory;
pub mod postgres;

pub use bingo_core::repository::{CardRepository, EventRepository, Result, SignupRepository};
pub use bingo_core::StorageError;
pub use memory::{InMemoryRepository, MAX_EVENTS};
pub use postgres::PostgresRepository;
