use async_trait::async_trait;
use bingo_core::repository::{CardRepository, EventRepository, Result, SignupRepository};
use bingo_core::{
    AnalyticsEvent, CardCode, CardGrid, CardRecord, Customization, NewCard, PoolSignup,
    StorageError,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

/// Number of analytics events kept in memory. Older events are dropped first.
pub const MAX_EVENTS: usize = 10_000;

/// In-memory storage entry for a saved card.
#[derive(Debug, Clone)]
struct StoredCard {
    items: CardGrid,
    customization: Customization,
    created_at: Timestamp,
}

impl StoredCard {
    fn into_record(self, code: CardCode) -> CardRecord {
        CardRecord {
            code,
            items: self.items,
            customization: self.customization,
            created_at: self.created_at,
        }
    }
}

/// In-memory implementation of the repository traits using DashMap.
///
/// Card inserts go through the DashMap entry API, which holds the shard
/// lock between the existence check and the write, so two concurrent
/// inserts of one code cannot both succeed. Clones share the same storage.
///
/// Nothing survives a restart, so this backend is meant for local runs and
/// tests. Only the latest [`MAX_EVENTS`] analytics events are kept.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    cards: Arc<DashMap<CardCode, StoredCard>>,
    /// Registered names keyed by phone number.
    signups: Arc<DashMap<String, String>>,
    events: Arc<RwLock<VecDeque<AnalyticsEvent>>>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Name registered under a (digits only) phone number.
    pub fn signup_name(&self, phone_number: &str) -> Option<String> {
        self.signups
            .get(phone_number)
            .map(|entry| entry.value().clone())
    }

    /// Snapshot of the recorded analytics events, oldest first.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.read().iter().cloned().collect()
    }
}

#[async_trait]
impl CardRepository for InMemoryRepository {
    async fn insert(&self, code: &CardCode, card: &NewCard) -> Result<()> {
        match self.cards.entry(code.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(StoredCard {
                    items: card.items.clone(),
                    customization: card.customization.clone(),
                    created_at: Timestamp::now(),
                });
                Ok(())
            }
        }
    }

    async fn get(&self, code: &CardCode) -> Result<Option<CardRecord>> {
        Ok(self
            .cards
            .get(code)
            .map(|entry| entry.value().clone().into_record(code.clone())))
    }
}

#[async_trait]
impl SignupRepository for InMemoryRepository {
    async fn insert_signup(&self, signup: &PoolSignup) -> Result<()> {
        match self.signups.entry(signup.phone_number().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(signup.phone_number().to_owned())),
            Entry::Vacant(slot) => {
                slot.insert(signup.name().to_owned());
                Ok(())
            }
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn record_event(&self, event: &AnalyticsEvent) -> Result<()> {
        let mut events = self.events.write();
        if events.len() == MAX_EVENTS {
            events.pop_front();
        }
        events.push_back(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_core::{FREE_CELL, FREE_CELL_INDEX};

    fn code(s: &str) -> CardCode {
        CardCode::parse(s).unwrap()
    }

    fn card(label: &str) -> NewCard {
        let mut items: Vec<String> = (0..25).map(|i| format!("{label} {i}")).collect();
        items[FREE_CELL_INDEX] = FREE_CELL.to_string();
        NewCard::new(items, Customization::default()).unwrap()
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("HJK234"), &card("a")).await.unwrap();

        let record = repo.get(&code("HJK234")).await.unwrap().unwrap();
        assert_eq!(record.code, code("HJK234"));
        assert_eq!(record.items.cells()[0], "a 0");
        assert!(record.created_at <= Timestamp::now());
    }

    #[tokio::test]
    async fn get_is_case_insensitive() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("HJK234"), &card("a")).await.unwrap();

        assert!(repo.get(&code("hjk234")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        assert!(repo.get(&code("NNNNNN")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_conflict_keeps_first_card() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("HJK234"), &card("first")).await.unwrap();
        let err = repo
            .insert(&code("HJK234"), &card("second"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));
        let record = repo.get(&code("HJK234")).await.unwrap().unwrap();
        assert_eq!(record.items.cells()[0], "first 0");
        assert_eq!(repo.card_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_of_one_code_have_one_winner() {
        let repo = InMemoryRepository::new();
        let mut handles = vec![];

        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(&code("RACE22"), &card(&format!("task {i}")))
                    .await
                    .is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.card_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_phone_number_conflicts() {
        let repo = InMemoryRepository::new();
        let first = PoolSignup::new("Sam", "555-123-4567").unwrap();
        let second = PoolSignup::new("Alex", "(555) 123 4567").unwrap();

        repo.insert_signup(&first).await.unwrap();
        let err = repo.insert_signup(&second).await.unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));
        assert_eq!(repo.signup_name("5551234567").as_deref(), Some("Sam"));
    }

    #[tokio::test]
    async fn events_are_appended_in_order() {
        let repo = InMemoryRepository::new();

        for name in ["card_generated", "card_saved", "card_printed"] {
            let event = AnalyticsEvent::new(name, None).unwrap();
            repo.record_event(&event).await.unwrap();
        }

        let names: Vec<_> = repo
            .events()
            .into_iter()
            .map(|event| event.event_name)
            .collect();
        assert_eq!(names, ["card_generated", "card_saved", "card_printed"]);
    }

    #[tokio::test]
    async fn event_log_keeps_only_the_latest_events() {
        let repo = InMemoryRepository::new();

        for i in 0..MAX_EVENTS + 5 {
            let event = AnalyticsEvent::new(&format!("event_{i}"), None).unwrap();
            repo.record_event(&event).await.unwrap();
        }

        let events = repo.events();
        assert_eq!(events.len(), MAX_EVENTS);
        assert_eq!(events[0].event_name, "event_5");
        assert_eq!(
            events[MAX_EVENTS - 1].event_name,
            format!("event_{}", MAX_EVENTS + 4)
        );
    }
}
