// Authentication middleware for protected API routes

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{header, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{error::AuthError, models::Role, token::TokenService, AUTH_TOKEN_COOKIE};

/// Authenticated user extractor for protected routes
///
/// Accepts a bearer token in the Authorization header or, for browser
/// sessions, the auth cookie set at login.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Pull the raw token out of the request: Authorization header first,
/// session cookie second
fn extract_token(parts: &Parts) -> Result<String, AuthError> {
    if let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) {
        let value = auth_header.to_str().map_err(|_| AuthError::InvalidToken)?;
        return value
            .strip_prefix("Bearer ")
            .map(|token| token.to_string())
            .ok_or(AuthError::InvalidToken);
    }

    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(AUTH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AuthError::MissingToken)
}

fn token_service() -> Result<TokenService, AuthError> {
    let jwt_secret = std::env::var("JWT_SECRET")
        .map_err(|_| AuthError::ConfigError("JWT_SECRET not configured".to_string()))?;
    Ok(TokenService::new(jwt_secret))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;
        let claims = token_service()?.validate_access_token(&token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Authorization middleware that requires a specific role
#[derive(Debug, Clone)]
pub struct RequireRole {
    required_role: Role,
}

impl RequireRole {
    /// Create a new RequireRole middleware with the specified role requirement
    pub fn new(required_role: Role) -> Self {
        Self { required_role }
    }

    /// Create a middleware that requires the Admin role
    pub fn admin() -> Self {
        Self::new(Role::Admin)
    }

    /// Create a middleware that requires the Agent role
    pub fn agent() -> Self {
        Self::new(Role::Agent)
    }

    /// Middleware function that validates role-based access
    pub async fn middleware(
        self,
        request: Request<Body>,
        next: Next,
    ) -> Result<Response, AuthError> {
        let endpoint = request.uri().path().to_string();

        let (mut parts, body) = request.into_parts();
        let token = extract_token(&parts).map_err(|e| {
            warn!("Missing or malformed token for protected endpoint: {}", endpoint);
            e
        })?;

        let claims = token_service()?.validate_access_token(&token)?;

        if claims.role != self.required_role {
            warn!(
                "Authorization failed: user_id={}, required_role={}, actual_role={}, endpoint={}",
                claims.sub, self.required_role, claims.role, endpoint
            );
            return Err(AuthError::InsufficientPermissions {
                required: self.required_role,
                actual: claims.role,
            });
        }

        debug!(
            "Authorization successful: user_id={}, role={}, endpoint={}",
            claims.sub, claims.role, endpoint
        );

        parts.extensions.insert(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        });

        Ok(next.run(Request::from_parts(parts, body)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn set_test_secret() {
        std::env::set_var("JWT_SECRET", "test_secret_key_for_testing_purposes");
    }

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    fn parts_with_header(auth_value: &str) -> Parts {
        let req = Request::builder()
            .uri("/")
            .header(header::AUTHORIZATION, auth_value)
            .body(())
            .unwrap();
        req.into_parts().0
    }

    fn parts_with_cookie(cookie_value: &str) -> Parts {
        let req = Request::builder()
            .uri("/")
            .header(header::COOKIE, cookie_value)
            .body(())
            .unwrap();
        req.into_parts().0
    }

    fn bare_parts() -> Parts {
        Request::builder().uri("/").body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_valid_bearer_token_is_accepted() {
        set_test_secret();
        let user_id = Uuid::new_v4();
        let token = test_token_service()
            .generate_access_token(user_id, "test@example.com", Role::User)
            .unwrap();

        let mut parts = parts_with_header(&format!("Bearer {}", token));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_session_cookie_is_accepted() {
        set_test_secret();
        let user_id = Uuid::new_v4();
        let token = test_token_service()
            .generate_access_token(user_id, "cookie@example.com", Role::Agent)
            .unwrap();

        let mut parts = parts_with_cookie(&format!("{}={}", AUTH_TOKEN_COOKIE, token));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.role, Role::Agent);
    }

    #[tokio::test]
    async fn test_missing_token_is_rejected() {
        set_test_secret();
        let mut parts = bare_parts();
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_malformed_header_is_rejected() {
        set_test_secret();
        for auth_value in ["InvalidFormat token", "token_without_bearer", "Basic dXNlcjpwYXNz"] {
            let mut parts = parts_with_header(auth_value);
            let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
            assert!(result.is_err(), "{auth_value} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        set_test_secret();
        let mut parts = parts_with_header("Bearer not.a.valid.jwt");
        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }
}
