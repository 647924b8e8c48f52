use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::models::{
    CreateInfoItemRequest, CreateMountainRequest, InfoCategory, InfoItem, Mountain,
};
use crate::catalog::slug::slugify;

const MOUNTAIN_COLUMNS: &str = "id, name, name_en, slug, image_url, description, description_en, \
     price, duration_hours, has_coupon, height, best_season, difficulty, \
     latitude, longitude, temperature";

const INFO_ITEM_COLUMNS: &str = "id, mountain_id, mountain_slug, category, name, name_en, \
     description, description_en, image_url, rating, price, google_maps_url, \
     ingredients, ingredients_en, menu, address, phone, entrance_fee, \
     nearby_restaurants, nearby_restaurant_image_url";

/// Repository for mountain catalog entries
#[derive(Clone)]
pub struct MountainRepository {
    pool: PgPool,
}

impl MountainRepository {
    /// Create a new MountainRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all mountains, alphabetically by name
    pub async fn list_all(&self) -> Result<Vec<Mountain>, sqlx::Error> {
        sqlx::query_as::<_, Mountain>(&format!(
            "SELECT {MOUNTAIN_COLUMNS} FROM mountains ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// Find a mountain by its slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Mountain>, sqlx::Error> {
        sqlx::query_as::<_, Mountain>(&format!(
            "SELECT {MOUNTAIN_COLUMNS} FROM mountains WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a mountain, deriving its slug from the name
    pub async fn create(&self, request: &CreateMountainRequest) -> Result<Mountain, sqlx::Error> {
        sqlx::query_as::<_, Mountain>(&format!(
            r#"
            INSERT INTO mountains
                (id, name, name_en, slug, image_url, description, description_en,
                 price, duration_hours, has_coupon, height, best_season, difficulty,
                 latitude, longitude, temperature)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {MOUNTAIN_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.name_en)
        .bind(slugify(&request.name))
        .bind(&request.image_url)
        .bind(&request.description)
        .bind(&request.description_en)
        .bind(request.price)
        .bind(request.duration_hours)
        .bind(request.has_coupon)
        .bind(request.height)
        .bind(&request.best_season)
        .bind(&request.difficulty)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.temperature)
        .fetch_one(&self.pool)
        .await
    }

    /// Replace a mountain's fields, rederiving the slug
    pub async fn update(
        &self,
        id: Uuid,
        request: &CreateMountainRequest,
    ) -> Result<Option<Mountain>, sqlx::Error> {
        sqlx::query_as::<_, Mountain>(&format!(
            r#"
            UPDATE mountains
            SET name = $1, name_en = $2, slug = $3, image_url = $4, description = $5,
                description_en = $6, price = $7, duration_hours = $8, has_coupon = $9,
                height = $10, best_season = $11, difficulty = $12, latitude = $13,
                longitude = $14, temperature = $15
            WHERE id = $16
            RETURNING {MOUNTAIN_COLUMNS}
            "#
        ))
        .bind(&request.name)
        .bind(&request.name_en)
        .bind(slugify(&request.name))
        .bind(&request.image_url)
        .bind(&request.description)
        .bind(&request.description_en)
        .bind(request.price)
        .bind(request.duration_hours)
        .bind(request.has_coupon)
        .bind(request.height)
        .bind(&request.best_season)
        .bind(&request.difficulty)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.temperature)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a mountain and everything attached to it
    ///
    /// The info items go in the same transaction so a half-deleted
    /// destination can never be observed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM info_items WHERE mountain_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM mountains WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Repository for info items attached to mountains
#[derive(Clone)]
pub struct InfoItemRepository {
    pool: PgPool,
}

impl InfoItemRepository {
    /// Create a new InfoItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every info item
    pub async fn list_all(&self) -> Result<Vec<InfoItem>, sqlx::Error> {
        sqlx::query_as::<_, InfoItem>(&format!(
            "SELECT {INFO_ITEM_COLUMNS} FROM info_items ORDER BY mountain_slug, category, name"
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// List the info items of one mountain
    pub async fn list_by_mountain(&self, slug: &str) -> Result<Vec<InfoItem>, sqlx::Error> {
        sqlx::query_as::<_, InfoItem>(&format!(
            "SELECT {INFO_ITEM_COLUMNS} FROM info_items WHERE mountain_slug = $1 ORDER BY category, name"
        ))
        .bind(slug)
        .fetch_all(&self.pool)
        .await
    }

    /// List one category of a mountain's info items
    pub async fn list_by_category(
        &self,
        slug: &str,
        category: InfoCategory,
    ) -> Result<Vec<InfoItem>, sqlx::Error> {
        sqlx::query_as::<_, InfoItem>(&format!(
            "SELECT {INFO_ITEM_COLUMNS} FROM info_items WHERE mountain_slug = $1 AND category = $2 ORDER BY name"
        ))
        .bind(slug)
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }

    /// Find an info item by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<InfoItem>, sqlx::Error> {
        sqlx::query_as::<_, InfoItem>(&format!(
            "SELECT {INFO_ITEM_COLUMNS} FROM info_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find an info item by exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<InfoItem>, sqlx::Error> {
        sqlx::query_as::<_, InfoItem>(&format!(
            "SELECT {INFO_ITEM_COLUMNS} FROM info_items WHERE name = $1 LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert an info item under its mountain
    ///
    /// The mountain slug is copied from the parent row so lookups by
    /// slug never need a join.
    pub async fn create(
        &self,
        request: &CreateInfoItemRequest,
        mountain_slug: &str,
    ) -> Result<InfoItem, sqlx::Error> {
        sqlx::query_as::<_, InfoItem>(&format!(
            r#"
            INSERT INTO info_items
                (id, mountain_id, mountain_slug, category, name, name_en,
                 description, description_en, image_url, rating, price, google_maps_url,
                 ingredients, ingredients_en, menu, address, phone, entrance_fee,
                 nearby_restaurants, nearby_restaurant_image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    $16, $17, $18, $19, $20)
            RETURNING {INFO_ITEM_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(request.mountain_id)
        .bind(mountain_slug)
        .bind(request.category)
        .bind(&request.name)
        .bind(&request.name_en)
        .bind(&request.description)
        .bind(&request.description_en)
        .bind(&request.image_url)
        .bind(request.rating)
        .bind(&request.price)
        .bind(&request.google_maps_url)
        .bind(&request.ingredients)
        .bind(&request.ingredients_en)
        .bind(&request.menu)
        .bind(&request.address)
        .bind(&request.phone)
        .bind(&request.entrance_fee)
        .bind(&request.nearby_restaurants)
        .bind(&request.nearby_restaurant_image_url)
        .fetch_one(&self.pool)
        .await
    }

    /// Replace an info item's fields
    pub async fn update(
        &self,
        id: Uuid,
        request: &CreateInfoItemRequest,
        mountain_slug: &str,
    ) -> Result<Option<InfoItem>, sqlx::Error> {
        sqlx::query_as::<_, InfoItem>(&format!(
            r#"
            UPDATE info_items
            SET mountain_id = $1, mountain_slug = $2, category = $3, name = $4,
                name_en = $5, description = $6, description_en = $7, image_url = $8,
                rating = $9, price = $10, google_maps_url = $11, ingredients = $12,
                ingredients_en = $13, menu = $14, address = $15, phone = $16,
                entrance_fee = $17, nearby_restaurants = $18,
                nearby_restaurant_image_url = $19
            WHERE id = $20
            RETURNING {INFO_ITEM_COLUMNS}
            "#
        ))
        .bind(request.mountain_id)
        .bind(mountain_slug)
        .bind(request.category)
        .bind(&request.name)
        .bind(&request.name_en)
        .bind(&request.description)
        .bind(&request.description_en)
        .bind(&request.image_url)
        .bind(request.rating)
        .bind(&request.price)
        .bind(&request.google_maps_url)
        .bind(&request.ingredients)
        .bind(&request.ingredients_en)
        .bind(&request.menu)
        .bind(&request.address)
        .bind(&request.phone)
        .bind(&request.entrance_fee)
        .bind(&request.nearby_restaurants)
        .bind(&request.nearby_restaurant_image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete an info item
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM info_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve a mountain's slug by id, for stamping onto new items
    pub async fn mountain_slug(&self, mountain_id: Uuid) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT slug FROM mountains WHERE id = $1")
            .bind(mountain_id)
            .fetch_optional(&self.pool)
            .await
    }
}
