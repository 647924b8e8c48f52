// Authentication service - business logic layer

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::{
    error::AuthError,
    models::{
        AdminSessionResponse, AuthResponse, LoginRequest, RegisterAgentRequest,
        RegisterUserRequest, Role, UserResponse,
    },
    password::PasswordService,
    repository::{TokenRepository, UserRepository},
    token::TokenService,
};
use crate::companies::CompanyRepository;

/// Authentication service coordinating registration, login, and token refresh
pub struct AuthService {
    user_repo: UserRepository,
    token_repo: TokenRepository,
    company_repo: CompanyRepository,
    token_service: TokenService,
    admin_password: String,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        user_repo: UserRepository,
        token_repo: TokenRepository,
        company_repo: CompanyRepository,
        token_service: TokenService,
        admin_password: String,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            company_repo,
            token_service,
            admin_password,
        }
    }

    /// Register a traveller account with its profile and welcome coupon
    pub async fn register_user(&self, request: RegisterUserRequest) -> Result<AuthResponse, AuthError> {
        PasswordService::validate_password_strength(&request.password)?;
        let password_hash = PasswordService::hash_password(&request.password)?;

        let user = self.user_repo.register_user(&request, &password_hash).await?;
        tracing::info!("Registered user {} ({})", user.id, user.email);

        self.issue_session(user.id, &user.email, user.role, None).await
    }

    /// Register a tour agent account; the company application starts pending
    pub async fn register_agent(&self, request: RegisterAgentRequest) -> Result<AuthResponse, AuthError> {
        PasswordService::validate_password_strength(&request.password)?;
        let password_hash = PasswordService::hash_password(&request.password)?;

        let (user, company) = self.user_repo.register_agent(&request, &password_hash).await?;
        tracing::info!(
            "Registered agent {} for company '{}' (pending approval)",
            user.id,
            company.company_name
        );

        self.issue_session(user.id, &user.email, user.role, Some(company.status))
            .await
    }

    /// Login with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        // Agents carry their company approval status in the session so the
        // route guard can keep unapproved agents out of the agent area
        let company_status = if user.role == Role::Agent {
            self.company_repo
                .find_by_user_id(user.id)
                .await
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?
                .map(|company| company.status)
        } else {
            None
        };

        tracing::info!("User {} logged in as {}", user.id, user.role);
        self.issue_session(user.id, &user.email, user.role, company_status).await
    }

    /// Admin login against the configured admin password
    pub async fn login_admin(&self, password: &str) -> Result<AdminSessionResponse, AuthError> {
        if password != self.admin_password {
            return Err(AuthError::InvalidCredentials);
        }

        // The admin session is synthetic: there is no user row behind it
        let access_token =
            self.token_service
                .generate_access_token(Uuid::nil(), "admin", Role::Admin)?;

        tracing::info!("Admin session issued");
        Ok(AdminSessionResponse { access_token })
    }

    /// Exchange a valid refresh token for a new token pair
    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<AuthResponse, AuthError> {
        let claims = self.token_service.validate_refresh_token(refresh_token)?;

        let stored = self
            .token_repo
            .verify_refresh_token(refresh_token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let user = self
            .user_repo
            .find_by_id(stored.user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        // Rotate: the presented token is single-use
        self.token_repo.invalidate_token(refresh_token).await?;

        let company_status = if claims.role == Role::Agent {
            self.company_repo
                .find_by_user_id(user.id)
                .await
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?
                .map(|company| company.status)
        } else {
            None
        };

        self.issue_session(user.id, &user.email, user.role, company_status).await
    }

    /// Get current user information
    pub async fn get_current_user(&self, user_id: Uuid) -> Result<UserResponse, AuthError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let company_status = if user.role == Role::Agent {
            self.company_repo
                .find_by_user_id(user.id)
                .await
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?
                .map(|company| company.status)
        } else {
            None
        };

        let mut response = UserResponse::from(user);
        response.company_status = company_status;
        Ok(response)
    }

    async fn issue_session(
        &self,
        user_id: Uuid,
        email: &str,
        role: Role,
        company_status: Option<crate::companies::CompanyStatus>,
    ) -> Result<AuthResponse, AuthError> {
        let (access_token, refresh_token) =
            self.token_service.generate_token_pair(user_id, email, role)?;

        let expires_at = Utc::now() + Duration::days(7);
        self.token_repo
            .store_refresh_token(user_id, &refresh_token, expires_at)
            .await?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::DatabaseError("user vanished during login".to_string()))?;

        let mut user_response = UserResponse::from(user);
        user_response.company_status = company_status;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            user: user_response,
        })
    }
}
