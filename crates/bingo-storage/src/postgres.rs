use async_trait::async_trait;
use bingo_core::repository::{CardRepository, EventRepository, Result, SignupRepository};
use bingo_core::{
    AnalyticsEvent, CardCode, CardGrid, CardRecord, Customization, NewCard, PoolSignup,
    StorageError,
};
use jiff::Timestamp;
use sqlx::migrate::Migrator;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Unique constraint on `bingo_cards.code`.
const CARD_CODE_CONSTRAINT: &str = "bingo_cards_code_key";
/// Unique constraint on `pool_signups.phone_number`.
const PHONE_NUMBER_CONSTRAINT: &str = "pool_signups_phone_number_key";

/// Postgres implementation of the repository contracts.
///
/// Tables live in the `bingo` schema created by the embedded migrations.
/// Codes are stored in their uppercase form, which keeps lookups
/// case-insensitive without an expression index.
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a repository from an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        info!("database migrations applied");
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn parse_created_at(micros: i64) -> Result<Timestamp> {
    Timestamp::from_microsecond(micros).map_err(|e| {
        StorageError::InvalidData(format!("invalid created_at timestamp '{}': {e}", micros))
    })
}

/// True when `err` violates the unique constraint named `constraint`.
///
/// Unique violations on any other constraint are not collisions.
fn is_unique_violation_of(err: &sqlx::Error, constraint: &str) -> bool {
    err.as_database_error().is_some_and(|db| {
        db.is_unique_violation() && db.constraint() == Some(constraint)
    })
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        sqlx::Error::Migrate(_) => StorageError::Migration(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl CardRepository for PostgresRepository {
    async fn insert(&self, code: &CardCode, card: &NewCard) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO bingo.bingo_cards (code, items, customization)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(code.as_str())
        .bind(Json(card.items.cells()))
        .bind(Json(&card.customization))
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation_of(&err, CARD_CODE_CONSTRAINT) => {
                Err(StorageError::Conflict(code.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn get(&self, code: &CardCode) -> Result<Option<CardRecord>> {
        let row = sqlx::query(
            r#"
            SELECT items,
                   customization,
                   (EXTRACT(EPOCH FROM created_at) * 1000000)::BIGINT AS created_at_us
            FROM bingo.bingo_cards
            WHERE code = $1
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let Json(cells): Json<Vec<String>> = row.try_get("items").map_err(map_sqlx_error)?;
        let Json(customization): Json<Customization> =
            row.try_get("customization").map_err(map_sqlx_error)?;
        let created_at_us: i64 = row.try_get("created_at_us").map_err(map_sqlx_error)?;

        let items = CardGrid::from_cells(cells).map_err(|e| {
            StorageError::InvalidData(format!("card '{}' has invalid items: {e}", code))
        })?;

        Ok(Some(CardRecord {
            code: code.clone(),
            items,
            customization,
            created_at: parse_created_at(created_at_us)?,
        }))
    }
}

#[async_trait]
impl SignupRepository for PostgresRepository {
    async fn insert_signup(&self, signup: &PoolSignup) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO bingo.pool_signups (name, phone_number)
            VALUES ($1, $2)
            "#,
        )
        .bind(signup.name())
        .bind(signup.phone_number())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation_of(&err, PHONE_NUMBER_CONSTRAINT) => {
                Err(StorageError::Conflict(signup.phone_number().to_owned()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}

#[async_trait]
impl EventRepository for PostgresRepository {
    async fn record_event(&self, event: &AnalyticsEvent) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bingo.analytics_events
                (event_name, event_data, user_agent, referrer, page_url)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&event.event_name)
        .bind(Json(&event.event_data))
        .bind(event.user_agent.as_deref())
        .bind(event.referrer.as_deref())
        .bind(event.page_url.as_deref())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_map_to_availability() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StorageError::Timeout(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StorageError::Unavailable(_)
        ));
    }

    #[test]
    fn row_errors_map_to_invalid_data() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StorageError::InvalidData(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::ColumnNotFound("items".to_string())),
            StorageError::InvalidData(_)
        ));
    }

    #[test]
    fn non_database_errors_are_not_collisions() {
        assert!(!is_unique_violation_of(
            &sqlx::Error::PoolTimedOut,
            CARD_CODE_CONSTRAINT
        ));
    }

    #[test]
    fn created_at_from_microseconds() {
        let ts = parse_created_at(1_700_000_000_000_000).unwrap();
        assert_eq!(ts.as_second(), 1_700_000_000);
    }
}
