// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use crate::auth::{
    error::AuthError,
    models::{
        AdminLoginRequest, AdminSessionResponse, AuthResponse, LoginRequest,
        RegisterAgentRequest, RegisterUserRequest, RefreshRequest, Role, UserResponse,
    },
    AUTH_TOKEN_COOKIE, COMPANY_STATUS_COOKIE, USER_ROLE_COOKIE,
};
use crate::AppState;

fn session_cookie(name: &'static str, value: String, http_only: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(http_only)
        .build()
}

/// Install the session cookies the route guard reads on every navigation
fn with_session_cookies(jar: CookieJar, response: &AuthResponse) -> CookieJar {
    let mut jar = jar
        .add(session_cookie(
            AUTH_TOKEN_COOKIE,
            response.access_token.clone(),
            true,
        ))
        .add(session_cookie(
            USER_ROLE_COOKIE,
            response.user.role.to_string(),
            false,
        ));

    if let Some(status) = response.user.company_status {
        jar = jar.add(session_cookie(
            COMPANY_STATUS_COOKIE,
            status.to_string(),
            false,
        ));
    }

    jar
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, "")).path("/").build()
}

/// Register a traveller account
/// POST /api/auth/register/user
pub async fn register_user_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterUserRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let response = state.auth_service.register_user(request).await?;
    let jar = with_session_cookies(jar, &response);

    Ok((StatusCode::CREATED, jar, Json(response)))
}

/// Register a tour agent account
/// POST /api/auth/register/agent
pub async fn register_agent_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterAgentRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let response = state.auth_service.register_agent(request).await?;
    let jar = with_session_cookies(jar, &response);

    Ok((StatusCode::CREATED, jar, Json(response)))
}

/// Login with email and password
/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let response = state.auth_service.login(request).await?;
    let jar = with_session_cookies(jar, &response);

    Ok((jar, Json(response)))
}

/// Admin login against the configured password
/// POST /api/auth/login/admin
pub async fn admin_login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<AdminLoginRequest>,
) -> Result<(CookieJar, Json<AdminSessionResponse>), AuthError> {
    let response = state.auth_service.login_admin(&request.password).await?;

    let jar = jar
        .add(session_cookie(
            AUTH_TOKEN_COOKIE,
            response.access_token.clone(),
            true,
        ))
        .add(session_cookie(
            USER_ROLE_COOKIE,
            Role::Admin.to_string(),
            false,
        ));

    Ok((jar, Json(response)))
}

/// Exchange a refresh token for a fresh session
/// POST /api/auth/refresh
pub async fn refresh_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RefreshRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    let response = state.auth_service.refresh_tokens(&request.refresh_token).await?;
    let jar = with_session_cookies(jar, &response);

    Ok((jar, Json(response)))
}

/// Clear the session cookies
/// POST /api/auth/logout
pub async fn logout_handler(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar
        .remove(removal_cookie(AUTH_TOKEN_COOKIE))
        .remove(removal_cookie(USER_ROLE_COOKIE))
        .remove(removal_cookie(COMPANY_STATUS_COOKIE));

    (jar, StatusCode::NO_CONTENT)
}

/// Get current user information (protected endpoint)
/// GET /api/auth/me
pub async fn me_handler(
    State(state): State<AppState>,
    user: crate::auth::middleware::AuthenticatedUser,
) -> Result<Json<UserResponse>, AuthError> {
    let response = state.auth_service.get_current_user(user.user_id).await?;
    Ok(Json(response))
}
