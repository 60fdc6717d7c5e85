use crate::analytics::AnalyticsEvent;
use crate::card::{CardRecord, NewCard};
use crate::code::CardCode;
use crate::error::StorageError;
use crate::signup::PoolSignup;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage for saved cards, keyed uniquely by code.
#[async_trait]
pub trait CardRepository: Send + Sync + 'static {
    /// Inserts a card under `code` if no card holds that code yet.
    ///
    /// Returns `Err(StorageError::Conflict)` if the code is taken. The insert
    /// is atomic: a failed call leaves nothing behind, and two concurrent
    /// inserts of the same code cannot both succeed.
    async fn insert(&self, code: &CardCode, card: &NewCard) -> Result<()>;

    /// Retrieves the card saved under `code`.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &CardCode) -> Result<Option<CardRecord>>;
}

/// Storage for bingo pool registrations.
#[async_trait]
pub trait SignupRepository: Send + Sync + 'static {
    /// Records a signup. Returns `Err(StorageError::Conflict)` if the phone
    /// number is already registered.
    async fn insert_signup(&self, signup: &PoolSignup) -> Result<()>;
}

/// Append-only storage for analytics events.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    async fn record_event(&self, event: &AnalyticsEvent) -> Result<()>;
}
