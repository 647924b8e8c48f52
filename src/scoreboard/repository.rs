use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for scoreboard balance credits
#[derive(Clone)]
pub struct ScoreboardRepository {
    pool: PgPool,
}

impl ScoreboardRepository {
    /// Create a new ScoreboardRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Credit prize points to the given winners in one transaction
    pub async fn credit_prizes(&self, awards: &[(Uuid, Decimal)]) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        for (user_id, prize) in awards {
            sqlx::query(
                r#"
                UPDATE profiles
                SET balance = balance + $1
                WHERE user_id = $2
                "#,
            )
            .bind(prize)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
