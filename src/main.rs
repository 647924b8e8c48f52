mod auth;
mod catalog;
mod companies;
mod coupons;
mod db;
mod error;
mod feedback;
mod profiles;
mod reservations;
mod scoreboard;
mod tours;
mod validation;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::middleware::RequireRole;
use auth::repository::{TokenRepository, UserRepository};
use auth::route_guard::route_guard;
use auth::service::AuthService;
use auth::token::TokenService;
use catalog::models::{CreateInfoItemRequest, CreateMountainRequest, InfoCategory, InfoItem, Mountain};
use catalog::repository::{InfoItemRepository, MountainRepository};
use companies::CompanyRepository;
use coupons::{CouponRepository, CouponService};
use feedback::FeedbackRepository;
use profiles::ProfileRepository;
use reservations::{ReservationRepository, ReservationService};
use scoreboard::{ScoreboardRepository, ScoreboardService};
use tours::TourRepository;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::handlers::list_mountains_handler,
        catalog::handlers::get_mountain_handler,
        catalog::handlers::create_mountain_handler,
        catalog::handlers::update_mountain_handler,
        catalog::handlers::delete_mountain_handler,
        catalog::handlers::list_info_items_handler,
        catalog::handlers::get_info_item_handler,
        catalog::handlers::create_info_item_handler,
        catalog::handlers::update_info_item_handler,
        catalog::handlers::delete_info_item_handler,
    ),
    components(
        schemas(Mountain, CreateMountainRequest, InfoItem, CreateInfoItemRequest, InfoCategory)
    ),
    tags(
        (name = "catalog", description = "Mountain destinations and their info items")
    ),
    info(
        title = "Zirve Tourism API",
        version = "1.0.0",
        description = "RESTful API for the Zirve mountain tourism platform"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth_service: Arc<AuthService>,
    pub company_repo: CompanyRepository,
    pub coupon_service: CouponService,
    pub reservation_service: ReservationService,
    pub profile_repo: ProfileRepository,
    pub scoreboard_service: ScoreboardService,
    pub mountain_repo: MountainRepository,
    pub info_item_repo: InfoItemRepository,
    pub tour_repo: TourRepository,
    pub feedback_repo: FeedbackRepository,
}

impl AppState {
    fn new(db: PgPool, jwt_secret: String, admin_password: String) -> Self {
        let company_repo = CompanyRepository::new(db.clone());
        let profile_repo = ProfileRepository::new(db.clone());

        let auth_service = Arc::new(AuthService::new(
            UserRepository::new(db.clone()),
            TokenRepository::new(db.clone()),
            company_repo.clone(),
            TokenService::new(jwt_secret),
            admin_password,
        ));

        let coupon_service = CouponService::new(CouponRepository::new(db.clone()));
        let reservation_service = ReservationService::new(
            ReservationRepository::new(db.clone()),
            profile_repo.clone(),
        );
        let scoreboard_service = ScoreboardService::new(
            profile_repo.clone(),
            ScoreboardRepository::new(db.clone()),
        );

        Self {
            auth_service,
            company_repo,
            coupon_service,
            reservation_service,
            profile_repo,
            scoreboard_service,
            mountain_repo: MountainRepository::new(db.clone()),
            info_item_repo: InfoItemRepository::new(db.clone()),
            tour_repo: TourRepository::new(db.clone()),
            feedback_repo: FeedbackRepository::new(db.clone()),
            db,
        }
    }
}

fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_routes = Router::new()
        .route("/api/auth/register/user", post(auth::handlers::register_user_handler))
        .route("/api/auth/register/agent", post(auth::handlers::register_agent_handler))
        .route("/api/auth/login", post(auth::handlers::login_handler))
        .route("/api/auth/login/admin", post(auth::handlers::admin_login_handler))
        .route("/api/auth/refresh", post(auth::handlers::refresh_handler))
        .route("/api/auth/logout", post(auth::handlers::logout_handler))
        .route("/api/auth/me", get(auth::handlers::me_handler))
        .route("/api/mountains", get(catalog::handlers::list_mountains_handler))
        .route("/api/mountains/:slug", get(catalog::handlers::get_mountain_handler))
        .route("/api/info-items", get(catalog::handlers::list_info_items_handler))
        .route("/api/info-items/:id", get(catalog::handlers::get_info_item_handler))
        .route("/api/tours", get(tours::handlers::list_approved_tours_handler))
        .route("/api/feedback", post(feedback::handlers::create_feedback_handler))
        // Authenticated traveller endpoints; the extractor rejects
        // requests without a valid session
        .route("/api/profile", get(profiles::handlers::get_profile_handler))
        .route("/api/profile", patch(profiles::handlers::update_profile_handler))
        .route("/api/coupons", get(coupons::handlers::list_coupons_handler))
        .route("/api/coupons/:id/claim", post(coupons::handlers::claim_coupon_handler))
        .route("/api/reservations", post(reservations::handlers::create_reservation_handler))
        .route("/api/scoreboard", get(scoreboard::handlers::standings_handler));

    let agent_routes = Router::new()
        .route("/api/tours", post(tours::handlers::create_tour_handler))
        .route("/api/tours/mine", get(tours::handlers::list_own_tours_handler))
        .route("/api/tours/:id", put(tours::handlers::update_tour_handler))
        .route_layer(middleware::from_fn(
            |request: axum::extract::Request, next: middleware::Next| {
                RequireRole::agent().middleware(request, next)
            },
        ));

    let admin_routes = Router::new()
        .route("/api/reservations", get(reservations::handlers::list_reservations_handler))
        .route("/api/scoreboard/award", post(scoreboard::handlers::award_prizes_handler))
        .route("/api/companies", get(companies::handlers::list_companies_handler))
        .route("/api/companies/:id/approve", post(companies::handlers::approve_company_handler))
        .route("/api/companies/:id/reject", post(companies::handlers::reject_company_handler))
        .route("/api/tours/all", get(tours::handlers::list_all_tours_handler))
        .route("/api/tours/:id/approve", post(tours::handlers::approve_tour_handler))
        .route("/api/tours/:id/reject", post(tours::handlers::reject_tour_handler))
        .route("/api/tours/:id", delete(tours::handlers::delete_tour_handler))
        .route("/api/mountains", post(catalog::handlers::create_mountain_handler))
        .route("/api/mountains/:slug", put(catalog::handlers::update_mountain_handler))
        .route("/api/mountains/:slug", delete(catalog::handlers::delete_mountain_handler))
        .route("/api/info-items", post(catalog::handlers::create_info_item_handler))
        .route("/api/info-items/:id", put(catalog::handlers::update_info_item_handler))
        .route("/api/info-items/:id", delete(catalog::handlers::delete_info_item_handler))
        .route("/api/feedback", get(feedback::handlers::list_feedback_handler))
        .route_layer(middleware::from_fn(
            |request: axum::extract::Request, next: middleware::Next| {
                RequireRole::admin().middleware(request, next)
            },
        ));

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public_routes)
        .merge(agent_routes)
        .merge(admin_routes)
        // Page navigation guard; API paths pass straight through
        .layer(middleware::from_fn(route_guard))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Zirve API - Starting...");

    // Get configuration from environment variables
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set in environment");
    let jwt_secret = std::env::var("JWT_SECRET")
        .expect("JWT_SECRET must be set in environment");
    let admin_password = std::env::var("ADMIN_PASSWORD")
        .unwrap_or_else(|_| "Admin2025".to_string());
    let host = std::env::var("HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Create the application router
    let state = AppState::new(db_pool, jwt_secret, admin_password);
    let app = create_router(state);

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Zirve API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod db_tests;
#[cfg(test)]
mod tests;
