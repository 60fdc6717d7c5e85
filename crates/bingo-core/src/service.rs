use crate::card::{CardRecord, NewCard};
use crate::code::CardCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::CardError>;

#[async_trait]
pub trait CardService: Send + Sync + 'static {
    /// Saves a card under a freshly generated code and returns that code.
    async fn save(&self, card: NewCard) -> Result<CardCode>;

    /// Loads a saved card by its code.
    /// Returns `None` if no card was saved under the code.
    async fn load(&self, code: &CardCode) -> Result<Option<CardRecord>>;
}
