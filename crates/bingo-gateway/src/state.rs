use std::sync::Arc;

use bingo_cards::CardWriter;
use bingo_core::{CardRepository, CardService, EventRepository, SignupRepository};
use bingo_generator::Generator;

#[derive(Clone)]
pub struct AppState {
    cards: Arc<dyn CardService>,
    signups: Arc<dyn SignupRepository>,
    events: Arc<dyn EventRepository>,
}

impl AppState {
    pub fn new(
        cards: Arc<dyn CardService>,
        signups: Arc<dyn SignupRepository>,
        events: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            cards,
            signups,
            events,
        }
    }

    /// Wires every service to one repository, with cards saved through a
    /// [`CardWriter`] drawing codes from `generator`.
    pub fn with_repository<R, G>(repository: R, generator: G) -> Self
    where
        R: CardRepository + SignupRepository + EventRepository + Clone,
        G: Generator,
    {
        Self::new(
            Arc::new(CardWriter::new(repository.clone(), generator)),
            Arc::new(repository.clone()),
            Arc::new(repository),
        )
    }

    pub fn cards(&self) -> &dyn CardService {
        self.cards.as_ref()
    }

    pub fn signups(&self) -> &dyn SignupRepository {
        self.signups.as_ref()
    }

    pub fn events(&self) -> &dyn EventRepository {
        self.events.as_ref()
    }
}
