//! Repository for the `system_settings` table.

use sqlx::PgPool;

use crate::models::setting::SystemSetting;

const COLUMNS: &str = "id, category, key, value, created_at, updated_at";

pub struct SettingRepo;

impl SettingRepo {
    /// Find the setting stored under `(category, key)`.
    pub async fn find(
        pool: &PgPool,
        category: &str,
        key: &str,
    ) -> Result<Option<SystemSetting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM system_settings WHERE category = $1 AND key = $2"
        );
        sqlx::query_as::<_, SystemSetting>(&query)
            .bind(category)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the value stored under `(category, key)`.
    pub async fn upsert(
        pool: &PgPool,
        category: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<SystemSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO system_settings (category, key, value) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (category, key) DO UPDATE SET value = EXCLUDED.value \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SystemSetting>(&query)
            .bind(category)
            .bind(key)
            .bind(value)
            .fetch_one(pool)
            .await
    }
}
