// Authentication module
// Provides JWT-based sessions for travellers, tour agents, and admins,
// plus the route guard that polices page navigation.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod route_guard;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use middleware::{AuthenticatedUser, RequireRole};
pub use models::{AuthResponse, LoginRequest, RegisterAgentRequest, RegisterUserRequest, Role, User, UserResponse};
pub use route_guard::{RouteDecision, SessionState};
pub use service::AuthService;

/// Session cookie carrying the bearer token
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";
/// Session cookie carrying the role tag the route guard dispatches on
pub const USER_ROLE_COOKIE: &str = "user_role";
/// Session cookie carrying the agent's company approval status
pub const COMPANY_STATUS_COOKIE: &str = "company_status";
