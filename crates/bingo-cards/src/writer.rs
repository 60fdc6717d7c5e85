use async_trait::async_trait;
use bingo_core::{
    CardCode, CardError, CardRecord, CardRepository, CardService, NewCard, StorageError,
};
use bingo_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Number of insert attempts before a save gives up.
///
/// With 31^6 possible codes a collision is rare, so running out of attempts
/// points at a far larger data set than expected or a store that misreports
/// duplicates.
pub const MAX_SAVE_ATTEMPTS: u32 = 10;

/// Outcome of a single failed insert.
#[derive(Debug)]
enum AttemptFailure {
    /// The code is taken; try again with another one.
    Collision,
    /// Anything else; retrying with a new code would not help.
    Fatal(StorageError),
}

impl From<StorageError> for AttemptFailure {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(_) => Self::Collision,
            other => Self::Fatal(other),
        }
    }
}

/// Saves cards under unique codes.
///
/// Each save draws a code from the `Generator` and inserts the card. When
/// the repository answers with a conflict the code is discarded and a new
/// one is drawn, up to [`MAX_SAVE_ATTEMPTS`] inserts. Uniqueness itself is
/// enforced by the repository; the writer holds no locks.
#[derive(Debug)]
pub struct CardWriter<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for CardWriter<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: CardRepository, G: Generator> CardWriter<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    fn generate_code(&self) -> CardCode {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<R: CardRepository, G: Generator> CardService for CardWriter<R, G> {
    async fn save(&self, card: NewCard) -> Result<CardCode, CardError> {
        for attempt in 1..=MAX_SAVE_ATTEMPTS {
            let code = self.generate_code();

            match self
                .repository
                .insert(&code, &card)
                .await
                .map_err(AttemptFailure::from)
            {
                Ok(()) => {
                    info!(code = %code, attempt, "saved card");
                    return Ok(code);
                }
                Err(AttemptFailure::Collision) => {
                    debug!(code = %code, attempt, "card code already taken, retrying");
                }
                Err(AttemptFailure::Fatal(e)) => {
                    warn!(code = %code, attempt, error = %e, "failed to save card");
                    return Err(CardError::PersistenceFailure(e));
                }
            }
        }

        warn!(
            attempts = MAX_SAVE_ATTEMPTS,
            "every generated card code collided"
        );
        Err(CardError::CodeSpaceExhausted {
            attempts: MAX_SAVE_ATTEMPTS,
        })
    }

    async fn load(&self, code: &CardCode) -> Result<Option<CardRecord>, CardError> {
        self.repository
            .get(code)
            .await
            .map_err(CardError::PersistenceFailure)
    }
}
