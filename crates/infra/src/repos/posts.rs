use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::PostRow;

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<Uuid>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<PostRow>> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id
        FROM posts
        ORDER BY title ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<Option<PostRow>> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

/// All posts written by any of the given authors.
pub async fn list_by_author_ids<'e>(
    executor: impl PgExecutor<'e>,
    author_ids: &[Uuid],
) -> Result<Vec<PostRow>> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id
        FROM posts
        WHERE author_id = ANY($1::uuid[])
        ORDER BY title ASC, id ASC
        "#,
    )
    .bind(author_ids)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePostData) -> Result<PostRow> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (title, content, author_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, author_id
        "#,
    )
    .bind(&data.title)
    .bind(&data.content)
    .bind(data.author_id)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdatePostData,
) -> Result<Option<PostRow>> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET title = COALESCE($2, title),
            content = COALESCE($3, content),
            author_id = COALESCE($4, author_id)
        WHERE id = $1
        RETURNING id, title, content, author_id
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.content)
    .bind(data.author_id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
