use sqlx::PgPool;
use uuid::Uuid;

use crate::companies::models::{Company, CompanyStatus};

/// Repository for company application operations
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Create a new CompanyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all company applications, newest first
    pub async fn list_all(&self) -> Result<Vec<Company>, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            SELECT id, user_id, email, company_name, phone, address, license_number,
                   description, status, created_at
            FROM companies
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Find the company belonging to an agent account
    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Company>, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            SELECT id, user_id, email, company_name, phone, address, license_number,
                   description, status, created_at
            FROM companies
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Update a company's approval status
    pub async fn update_status(
        &self,
        company_id: Uuid,
        status: CompanyStatus,
    ) -> Result<Option<Company>, sqlx::Error> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET status = $1
            WHERE id = $2
            RETURNING id, user_id, email, company_name, phone, address, license_number,
                      description, status, created_at
            "#,
        )
        .bind(status)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
    }
}
