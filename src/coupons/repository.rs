use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::coupons::error::CouponError;
use crate::coupons::models::Coupon;

/// Repository for coupon ledger operations
#[derive(Clone)]
pub struct CouponRepository {
    pool: PgPool,
}

impl CouponRepository {
    /// Create a new CouponRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a user's coupons, newest first, claimed ones included
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Coupon>, sqlx::Error> {
        sqlx::query_as::<_, Coupon>(
            r#"
            SELECT id, user_id, code, description, points, is_used, created_at
            FROM coupons
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Claim a coupon: mark it used and credit its points to the
    /// owner's balance in one transaction
    ///
    /// The row lock makes concurrent claims of the same coupon
    /// serialize, so the points are credited at most once.
    pub async fn claim(&self, coupon_id: Uuid, user_id: Uuid) -> Result<Coupon, CouponError> {
        let mut tx = self.pool.begin().await?;

        let coupon = sqlx::query_as::<_, Coupon>(
            r#"
            SELECT id, user_id, code, description, points, is_used, created_at
            FROM coupons
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(coupon_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CouponError::NotFound(coupon_id))?;

        if coupon.is_used {
            return Err(CouponError::AlreadyClaimed);
        }
        if coupon.user_id != user_id {
            return Err(CouponError::NotOwner);
        }

        let coupon = sqlx::query_as::<_, Coupon>(
            r#"
            UPDATE coupons
            SET is_used = TRUE
            WHERE id = $1
            RETURNING id, user_id, code, description, points, is_used, created_at
            "#,
        )
        .bind(coupon_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE profiles
            SET balance = balance + $1
            WHERE user_id = $2
            "#,
        )
        .bind(coupon.points)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(coupon)
    }

    /// Insert a coupon into a user's ledger
    pub async fn insert(
        &self,
        user_id: Uuid,
        code: &str,
        description: &str,
        points: Decimal,
    ) -> Result<Coupon, sqlx::Error> {
        sqlx::query_as::<_, Coupon>(
            r#"
            INSERT INTO coupons (id, user_id, code, description, points, is_used, created_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, NOW())
            RETURNING id, user_id, code, description, points, is_used, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(code)
        .bind(description)
        .bind(points)
        .fetch_one(&self.pool)
        .await
    }
}
