use sqlx::PgPool;
use uuid::Uuid;

use crate::models::media::{Media, MediaType};

/// Insert one media row for a completed attachment upload, returning
/// the created row.
pub async fn insert_media(
    pool: &PgPool,
    url: &str,
    media_type: MediaType,
) -> Result<Media, sqlx::Error> {
    sqlx::query_as::<_, Media>(
        r#"
        INSERT INTO media (id, url, type, created_at)
        VALUES ($1, $2, $3, NOW())
        RETURNING id, url, type, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(url)
    .bind(media_type)
    .fetch_one(pool)
    .await
}
