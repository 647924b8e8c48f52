// Database repositories for users and refresh tokens
// Registration writes span several tables (user, profile, welcome coupon,
// company) and run as a single transaction: all rows appear or none do.

use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::error::AuthError;
use crate::auth::models::{RefreshToken, RegisterAgentRequest, RegisterUserRequest, Role, User};
use crate::companies::Company;
use crate::coupons::{WELCOME_COUPON_DESCRIPTION, WELCOME_COUPON_POINTS, WELCOME_COUPON_CODE};

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a traveller: user row, profile with zeroed counters, and the
    /// signup welcome coupon, committed together
    pub async fn register_user(
        &self,
        request: &RegisterUserRequest,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, role, created_at
            "#,
        )
        .bind(&request.email)
        .bind(password_hash)
        .bind(Role::User)
        .fetch_one(&mut *tx)
        .await
        .map_err(Self::map_insert_error)?;

        sqlx::query(
            r#"
            INSERT INTO profiles
                (user_id, name, balance, tours_attended, referred_by, referral_bonus_claimed,
                 emergency_contact_name, emergency_contact_phone, gender, age, family_size)
            VALUES ($1, $2, 0, 0, $3, FALSE, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id)
        .bind(&request.name)
        .bind(&request.referred_by)
        .bind(&request.emergency_contact_name)
        .bind(&request.emergency_contact_phone)
        .bind(&request.gender)
        .bind(request.age)
        .bind(request.family_size)
        .execute(&mut *tx)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO coupons (user_id, code, description, points, is_used)
            VALUES ($1, $2, $3, $4, FALSE)
            "#,
        )
        .bind(user.id)
        .bind(WELCOME_COUPON_CODE)
        .bind(WELCOME_COUPON_DESCRIPTION)
        .bind(WELCOME_COUPON_POINTS)
        .execute(&mut *tx)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Register a tour agent: user row, minimal profile, and a pending
    /// company application, committed together
    pub async fn register_agent(
        &self,
        request: &RegisterAgentRequest,
        password_hash: &str,
    ) -> Result<(User, Company), AuthError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, role, created_at
            "#,
        )
        .bind(&request.email)
        .bind(password_hash)
        .bind(Role::Agent)
        .fetch_one(&mut *tx)
        .await
        .map_err(Self::map_insert_error)?;

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, name, balance, tours_attended, referral_bonus_claimed)
            VALUES ($1, $2, 0, 0, FALSE)
            "#,
        )
        .bind(user.id)
        .bind(&request.company_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies
                (user_id, email, company_name, phone, address, license_number, description, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
            RETURNING id, user_id, email, company_name, phone, address, license_number,
                      description, status, created_at
            "#,
        )
        .bind(user.id)
        .bind(&request.email)
        .bind(&request.company_name)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(&request.license_number)
        .bind(request.description.as_deref().unwrap_or(""))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok((user, company))
    }

    /// Find a user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    fn map_insert_error(e: sqlx::Error) -> AuthError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return AuthError::EmailAlreadyExists;
            }
        }
        AuthError::DatabaseError(e.to_string())
    }
}

/// Token repository for refresh token operations
#[derive(Clone)]
pub struct TokenRepository {
    pool: PgPool,
}

impl TokenRepository {
    /// Create a new TokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hash a token using SHA-256 before it touches the database
    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Store a refresh token (hashed)
    pub async fn store_refresh_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), AuthError> {
        let token_hash = Self::hash_token(token);

        sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(token_hash)
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// Verify a refresh token exists and is not expired
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, AuthError> {
        let token_hash = Self::hash_token(token);

        let refresh_token = sqlx::query_as::<_, RefreshToken>(
            "SELECT id, user_id, token_hash, expires_at, created_at
             FROM refresh_tokens
             WHERE token_hash = $1 AND expires_at > NOW()",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(refresh_token)
    }

    /// Invalidate a refresh token
    pub async fn invalidate_token(&self, token: &str) -> Result<(), AuthError> {
        let token_hash = Self::hash_token(token);

        sqlx::query("DELETE FROM refresh_tokens WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
