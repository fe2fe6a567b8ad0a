use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::UserRow;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<UserRow>> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, balance
        FROM users
        ORDER BY name ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>("SELECT id, name, balance FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row)
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateUserData) -> Result<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (name, balance)
        VALUES ($1, $2)
        RETURNING id, name, balance
        "#,
    )
    .bind(&data.name)
    .bind(data.balance)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Update an existing user; absent fields keep their stored value.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateUserData,
) -> Result<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET name = COALESCE($2, name),
            balance = COALESCE($3, balance)
        WHERE id = $1
        RETURNING id, name, balance
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.balance)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

/// Delete a user. Profile, posts and subscription edges go with it via
/// `ON DELETE CASCADE`.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
