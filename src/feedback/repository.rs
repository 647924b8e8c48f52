use sqlx::PgPool;
use uuid::Uuid;

use crate::feedback::models::{CreateFeedbackRequest, Feedback};

/// Repository for visitor feedback
#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    /// Create a new FeedbackRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a feedback message
    pub async fn create(&self, request: &CreateFeedbackRequest) -> Result<Feedback, sqlx::Error> {
        sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (id, name, surname, email, message, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, name, surname, email, message, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.surname)
        .bind(&request.email)
        .bind(&request.message)
        .fetch_one(&self.pool)
        .await
    }

    /// All feedback, newest first
    pub async fn list_all(&self) -> Result<Vec<Feedback>, sqlx::Error> {
        sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, name, surname, email, message, created_at
            FROM feedback
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
