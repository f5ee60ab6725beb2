use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::category::Category;
use super::store::{FeedbackStore, StorageError};
use super::types::{FeedbackRecord, NewFeedback, Rating};

const COLUMNS: &str = "id, passenger_name, passenger_email, flight_number, departure_date, \
                       category, rating, title, comment, is_anonymous, created_at, updated_at";

/// Newest first; equal timestamps fall back to insert order, newest first.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, seq DESC";

/// Feedback table in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgFeedbackStore {
    pool: PgPool,
}

impl PgFeedbackStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct Row {
    id: Uuid,
    passenger_name: String,
    passenger_email: String,
    flight_number: Option<String>,
    departure_date: Option<String>,
    category: String,
    rating: i16,
    title: String,
    comment: String,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<Row> for FeedbackRecord {
    type Error = StorageError;

    fn try_from(row: Row) -> Result<Self, Self::Error> {
        let category = Category::from_code(&row.category).ok_or_else(|| {
            StorageError::new(format!("feedback {} has unknown category '{}'", row.id, row.category))
        })?;
        let rating = Rating::new(i64::from(row.rating)).ok_or_else(|| {
            StorageError::new(format!("feedback {} has out-of-range rating {}", row.id, row.rating))
        })?;
        Ok(FeedbackRecord {
            id: row.id,
            passenger_name: row.passenger_name,
            passenger_email: row.passenger_email,
            flight_number: row.flight_number,
            departure_date: row.departure_date,
            category,
            rating,
            title: row.title,
            comment: row.comment,
            is_anonymous: row.is_anonymous,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl FeedbackStore for PgFeedbackStore {
    async fn insert(&self, record: &NewFeedback) -> Result<FeedbackRecord, StorageError> {
        let sql = format!(
            "INSERT INTO feedback \
                 (passenger_name, passenger_email, flight_number, departure_date, \
                  category, rating, title, comment, is_anonymous) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Row>(&sql)
            .bind(record.passenger_name())
            .bind(record.passenger_email())
            .bind(record.flight_number())
            .bind(record.departure_date())
            .bind(record.category().code())
            .bind(i16::from(record.rating().value()))
            .bind(record.title())
            .bind(record.comment())
            .bind(record.is_anonymous())
            .fetch_one(&self.pool)
            .await?;

        FeedbackRecord::try_from(row)
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        let sql = format!("SELECT {COLUMNS} FROM feedback {NEWEST_FIRST}");
        let rows = sqlx::query_as::<_, Row>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(FeedbackRecord::try_from).collect()
    }
}
