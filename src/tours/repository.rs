use sqlx::PgPool;
use uuid::Uuid;

use crate::tours::models::{Tour, TourStatus, UpsertTourRequest};

const TOUR_COLUMNS: &str = "id, agent_id, agent_name, name, country, description, image_url, \
     duration_hours, price, has_coupon, status, created_at";

/// Repository for agent tour operations
#[derive(Clone)]
pub struct TourRepository {
    pool: PgPool,
}

impl TourRepository {
    /// Create a new TourRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a tour for an agent; new tours always start pending
    pub async fn create(
        &self,
        agent_id: Uuid,
        agent_name: &str,
        request: &UpsertTourRequest,
    ) -> Result<Tour, sqlx::Error> {
        sqlx::query_as::<_, Tour>(&format!(
            r#"
            INSERT INTO tours
                (id, agent_id, agent_name, name, country, description, image_url,
                 duration_hours, price, has_coupon, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'pending', NOW())
            RETURNING {TOUR_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(agent_id)
        .bind(agent_name)
        .bind(&request.name)
        .bind(&request.country)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(request.duration_hours)
        .bind(request.price)
        .bind(request.has_coupon)
        .fetch_one(&self.pool)
        .await
    }

    /// Update an agent's own tour; the moderation status is left as is
    pub async fn update_own(
        &self,
        tour_id: Uuid,
        agent_id: Uuid,
        request: &UpsertTourRequest,
    ) -> Result<Option<Tour>, sqlx::Error> {
        sqlx::query_as::<_, Tour>(&format!(
            r#"
            UPDATE tours
            SET name = $1, country = $2, description = $3, image_url = $4,
                duration_hours = $5, price = $6, has_coupon = $7
            WHERE id = $8 AND agent_id = $9
            RETURNING {TOUR_COLUMNS}
            "#
        ))
        .bind(&request.name)
        .bind(&request.country)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(request.duration_hours)
        .bind(request.price)
        .bind(request.has_coupon)
        .bind(tour_id)
        .bind(agent_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// An agent's own tours, newest first
    pub async fn list_by_agent(&self, agent_id: Uuid) -> Result<Vec<Tour>, sqlx::Error> {
        sqlx::query_as::<_, Tour>(&format!(
            "SELECT {TOUR_COLUMNS} FROM tours WHERE agent_id = $1 ORDER BY created_at DESC"
        ))
        .bind(agent_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Every tour regardless of status, newest first (admin view)
    pub async fn list_all(&self) -> Result<Vec<Tour>, sqlx::Error> {
        sqlx::query_as::<_, Tour>(&format!(
            "SELECT {TOUR_COLUMNS} FROM tours ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// Approved tours only, the traveller-facing listing
    pub async fn list_approved(&self) -> Result<Vec<Tour>, sqlx::Error> {
        sqlx::query_as::<_, Tour>(&format!(
            "SELECT {TOUR_COLUMNS} FROM tours WHERE status = 'approved' ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// Set a tour's moderation status (admin)
    pub async fn update_status(
        &self,
        tour_id: Uuid,
        status: TourStatus,
    ) -> Result<Option<Tour>, sqlx::Error> {
        sqlx::query_as::<_, Tour>(&format!(
            r#"
            UPDATE tours
            SET status = $1
            WHERE id = $2
            RETURNING {TOUR_COLUMNS}
            "#
        ))
        .bind(status)
        .bind(tour_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a tour (admin)
    pub async fn delete(&self, tour_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tours WHERE id = $1")
            .bind(tour_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
