use sqlx::PgPool;
use uuid::Uuid;

use crate::profiles::models::{UpdateProfileRequest, UserProfile};

const PROFILE_COLUMNS: &str = "user_id, name, balance, tours_attended, referred_by, \
     referral_bonus_claimed, emergency_contact_name, emergency_contact_phone, \
     gender, age, family_size";

/// Repository for profile operations
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new ProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by its owner's user id
    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Update the demographic fields of a profile
    ///
    /// Absent fields keep their stored values.
    pub async fn update_demographics(
        &self,
        user_id: Uuid,
        request: &UpdateProfileRequest,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(&format!(
            r#"
            UPDATE profiles
            SET name = COALESCE($1, name),
                emergency_contact_name = COALESCE($2, emergency_contact_name),
                emergency_contact_phone = COALESCE($3, emergency_contact_phone),
                gender = COALESCE($4, gender),
                age = COALESCE($5, age),
                family_size = COALESCE($6, family_size)
            WHERE user_id = $7
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&request.name)
        .bind(&request.emergency_contact_name)
        .bind(&request.emergency_contact_phone)
        .bind(&request.gender)
        .bind(request.age)
        .bind(request.family_size)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Profiles of all traveller accounts (role `user`), for ranking
    pub async fn list_players(&self) -> Result<Vec<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT p.user_id, p.name, p.balance, p.tours_attended, p.referred_by,
                   p.referral_bonus_claimed, p.emergency_contact_name,
                   p.emergency_contact_phone, p.gender, p.age, p.family_size
            FROM profiles p
            JOIN users u ON u.id = p.user_id
            WHERE u.role = 'user'
            ORDER BY p.user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
