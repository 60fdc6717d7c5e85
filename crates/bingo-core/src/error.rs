use thiserror::Error;

/// Validation errors for the domain types in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid card code: {0}")]
    InvalidCardCode(String),
    #[error("invalid card items: {0}")]
    InvalidItems(String),
    #[error("invalid customization: {0}")]
    InvalidCustomization(String),
    #[error("invalid signup: {0}")]
    InvalidSignup(String),
    #[error("invalid analytics event: {0}")]
    InvalidEvent(String),
}

/// Errors reported by repository implementations.
///
/// `Conflict` is the only variant the card writer treats as a collision.
/// Every other variant is a persistence failure.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("key already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage migration failed: {0}")]
    Migration(String),
}

/// Errors surfaced by [`CardService`](crate::CardService).
#[derive(Debug, Clone, Error)]
pub enum CardError {
    /// Every attempt in the budget collided with an existing code.
    #[error("no free card code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },
    /// The store failed for a reason other than a duplicate code.
    #[error("persistence failure: {0}")]
    PersistenceFailure(#[source] StorageError),
}
