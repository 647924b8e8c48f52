use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::reservations::models::{CreateReservationRequest, ItemType, Reservation};
use crate::reservations::pricing::{self, PriceQuote};

/// Repository for reservation persistence
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

/// A priced, coupon-aware item a reservation can target
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PricedItem {
    pub name: String,
    pub price: Decimal,
    pub has_coupon: bool,
}

const RESERVATION_COLUMNS: &str = "id, user_id, item_id, item_name, item_type, mountain_slug, \
     user_name, email, date, time, guests, special_requests, \
     original_price, final_price, discount_amount, coupon_code, created_at";

impl ReservationRepository {
    /// Create a new ReservationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a reservation together with its rewards
    ///
    /// For priced tour bookings the same transaction also inserts the
    /// cashback coupon and bumps the traveller's tours_attended
    /// counter. Either all three writes land or none do.
    pub async fn create_with_rewards(
        &self,
        user_id: Uuid,
        request: &CreateReservationRequest,
        item_name: &str,
        quote: Option<&PriceQuote>,
    ) -> Result<Reservation, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let reservation_id = Uuid::new_v4();

        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            r#"
            INSERT INTO reservations
                (id, user_id, item_id, item_name, item_type, mountain_slug,
                 user_name, email, date, time, guests, special_requests,
                 original_price, final_price, discount_amount, coupon_code, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, NOW())
            RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(reservation_id)
        .bind(user_id)
        .bind(request.item_id)
        .bind(item_name)
        .bind(request.item_type)
        .bind(&request.mountain_slug)
        .bind(&request.user_name)
        .bind(&request.email)
        .bind(request.date)
        .bind(&request.time)
        .bind(request.guests)
        .bind(&request.special_requests)
        .bind(quote.map(|q| q.original_price))
        .bind(quote.map(|q| q.final_price))
        .bind(quote.map(|q| q.discount_amount))
        .bind(quote.and_then(|q| {
            q.coupon_applied
                .then(|| request.coupon_code.clone())
                .flatten()
        }))
        .fetch_one(&mut *tx)
        .await?;

        if request.item_type == ItemType::Tour {
            if let Some(quote) = quote {
                sqlx::query(
                    r#"
                    INSERT INTO coupons (id, user_id, code, description, points, is_used, created_at)
                    VALUES ($1, $2, $3, $4, $5, FALSE, NOW())
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(user_id)
                .bind(pricing::cashback_code(reservation_id))
                .bind(format!("Cashback reward for {}", item_name))
                .bind(pricing::cashback_points(quote.final_price))
                .execute(&mut *tx)
                .await?;

                sqlx::query(
                    r#"
                    UPDATE profiles
                    SET tours_attended = tours_attended + 1
                    WHERE user_id = $1
                    "#,
                )
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(reservation)
    }

    /// Look up a bookable tour by id
    ///
    /// Agent tours must be approved to be bookable; mountain trips
    /// from the catalog are checked as a fallback since both surface
    /// as `tour` items to clients.
    pub async fn find_tour_item(&self, item_id: Uuid) -> Result<Option<PricedItem>, sqlx::Error> {
        let tour = sqlx::query_as::<_, PricedItem>(
            r#"
            SELECT name, price, has_coupon
            FROM tours
            WHERE id = $1 AND status = 'approved'
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        if tour.is_some() {
            return Ok(tour);
        }

        sqlx::query_as::<_, PricedItem>(
            r#"
            SELECT name, price, has_coupon
            FROM mountains
            WHERE id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Look up an info item's display name
    pub async fn find_info_item_name(&self, item_id: Uuid) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM info_items WHERE id = $1")
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List every reservation, newest first
    pub async fn list_all(&self) -> Result<Vec<Reservation>, sqlx::Error> {
        sqlx::query_as::<_, Reservation>(&format!(
            r#"
            SELECT {RESERVATION_COLUMNS}
            FROM reservations
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
    }
}
