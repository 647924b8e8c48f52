// Transactional tests against a disposable PostgreSQL container.
// These cover the write paths the router tests leave out: the
// all-or-nothing reservation reward transaction and the row-locked
// coupon claim under concurrency.

use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    GenericImage, ImageExt,
};
use uuid::Uuid;

use crate::coupons::{CouponError, CouponRepository};
use crate::reservations::models::{CreateReservationRequest, ItemType};
use crate::reservations::pricing;
use crate::reservations::repository::ReservationRepository;

/// Start a PostgreSQL container and return a migrated pool
///
/// The container stops when the returned handle is dropped.
async fn start_postgres() -> (testcontainers::ContainerAsync<GenericImage>, PgPool) {
    // The readiness message prints twice: once during initdb and once
    // when the server actually accepts connections, hence the short
    // sleep after the wait
    let image = GenericImage::new("postgres", "16")
        .with_exposed_port(5432.tcp())
        .with_wait_for(WaitFor::message_on_stdout(
            "database system is ready to accept connections",
        ));

    let container = image
        .with_env_var("POSTGRES_USER", "zirve")
        .with_env_var("POSTGRES_PASSWORD", "zirve")
        .with_env_var("POSTGRES_DB", "zirve")
        .with_startup_timeout(Duration::from_secs(60))
        .start()
        .await
        .expect("failed to start postgres container");

    tokio::time::sleep(Duration::from_secs(1)).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("failed to get mapped port");
    let host = container
        .get_host()
        .await
        .expect("failed to get container host");

    let pool = PgPool::connect(&format!("postgres://zirve:zirve@{}:{}/zirve", host, port))
        .await
        .expect("failed to connect to postgres");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    (container, pool)
}

/// Insert a bare user plus profile row, bypassing registration
async fn seed_traveller(pool: &PgPool) -> Uuid {
    let user_id = Uuid::new_v4();

    sqlx::query("INSERT INTO users (id, email, password_hash, role) VALUES ($1, $2, 'x', 'user')")
        .bind(user_id)
        .bind(format!("{}@example.com", user_id))
        .execute(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO profiles (user_id) VALUES ($1)")
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();

    user_id
}

fn booking_request(item_id: Uuid) -> CreateReservationRequest {
    CreateReservationRequest {
        item_id,
        item_type: ItemType::Tour,
        mountain_slug: None,
        user_name: "Aysel".to_string(),
        email: "aysel@example.com".to_string(),
        date: Utc::now().date_naive() + chrono::Duration::days(7),
        time: "09:30".to_string(),
        guests: 2,
        special_requests: None,
        coupon_code: Some("WELCOME10".to_string()),
    }
}

async fn coupon_count(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM coupons WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn tours_attended(pool: &PgPool, user_id: Uuid) -> i32 {
    sqlx::query_scalar("SELECT tours_attended FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_reservation_rewards_commit_and_roll_back_together() {
    let (_container, pool) = start_postgres().await;
    let repository = ReservationRepository::new(pool.clone());
    let user_id = seed_traveller(&pool).await;

    let quote = pricing::quote(dec!(100), true, Some("WELCOME10"));

    // Happy path: reservation, cashback coupon, and the attendance
    // counter land in one commit
    let reservation = repository
        .create_with_rewards(
            user_id,
            &booking_request(Uuid::new_v4()),
            "Khinalig Trek",
            Some(&quote),
        )
        .await
        .unwrap();

    assert_eq!(reservation.final_price, Some(dec!(90.00)));
    assert_eq!(coupon_count(&pool, user_id).await, 1);
    assert_eq!(tours_attended(&pool, user_id).await, 1);

    // Break the cashback insert mid-transaction: new coupon rows now
    // violate the check, so the failure must take the already-written
    // reservation and the counter bump down with it
    sqlx::query(
        "ALTER TABLE coupons ADD CONSTRAINT coupons_reject_new CHECK (points < 0) NOT VALID",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = repository
        .create_with_rewards(
            user_id,
            &booking_request(Uuid::new_v4()),
            "Khinalig Trek",
            Some(&quote),
        )
        .await;
    assert!(result.is_err());

    let reservations: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(reservations, 1);
    assert_eq!(coupon_count(&pool, user_id).await, 1);
    assert_eq!(tours_attended(&pool, user_id).await, 1);
}

#[tokio::test]
async fn test_concurrent_claims_credit_the_points_once() {
    let (_container, pool) = start_postgres().await;
    let repository = CouponRepository::new(pool.clone());
    let user_id = seed_traveller(&pool).await;

    let coupon = repository
        .insert(user_id, "WELCOME10", "Welcome bonus", dec!(10))
        .await
        .unwrap();
    let coupon_id = coupon.id;

    // Race two claims; the row lock serializes them so the loser sees
    // the coupon already used
    let first = tokio::spawn({
        let repository = repository.clone();
        async move { repository.claim(coupon_id, user_id).await }
    });
    let second = tokio::spawn({
        let repository = repository.clone();
        async move { repository.claim(coupon_id, user_id).await }
    });

    let outcomes = [first.await.unwrap(), second.await.unwrap()];
    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|o| matches!(o, Err(CouponError::AlreadyClaimed))));

    let balance: Decimal = sqlx::query_scalar("SELECT balance FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(balance, dec!(10));

    let is_used: bool = sqlx::query_scalar("SELECT is_used FROM coupons WHERE id = $1")
        .bind(coupon_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(is_used);
}
