use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::{SubscribedAuthorRow, SubscriberRow, SubscriptionEdgeRow};

/// Record that `subscriber_id` follows `author_id`.
///
/// Idempotent: returns `false` when the edge already existed. Fails with a
/// foreign-key violation when either user is missing.
pub async fn subscribe<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO subscribers_on_authors (subscriber_id, author_id)
        VALUES ($1, $2)
        ON CONFLICT (subscriber_id, author_id) DO NOTHING
        "#,
    )
    .bind(subscriber_id)
    .bind(author_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn unsubscribe<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query(
        "DELETE FROM subscribers_on_authors WHERE subscriber_id = $1 AND author_id = $2",
    )
    .bind(subscriber_id)
    .bind(author_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> Result<Option<SubscriptionEdgeRow>> {
    sqlx::query_as::<_, SubscriptionEdgeRow>(
        r#"
        SELECT subscriber_id, author_id
        FROM subscribers_on_authors
        WHERE subscriber_id = $1 AND author_id = $2
        "#,
    )
    .bind(subscriber_id)
    .bind(author_id)
    .fetch_optional(executor)
    .await
}

/// Authors followed by `subscriber_id`, each repeated once per subscriber of
/// that author. Ordered so rows for one author are contiguous.
pub async fn list_subscribed_authors<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
) -> Result<Vec<SubscribedAuthorRow>> {
    sqlx::query_as::<_, SubscribedAuthorRow>(
        r#"
        SELECT e.author_id,
               a.name AS author_name,
               inbound.subscriber_id AS author_subscriber_id
        FROM subscribers_on_authors e
        JOIN users a ON a.id = e.author_id
        LEFT JOIN subscribers_on_authors inbound ON inbound.author_id = e.author_id
        WHERE e.subscriber_id = $1
        ORDER BY a.name ASC, e.author_id ASC, inbound.subscriber_id ASC
        "#,
    )
    .bind(subscriber_id)
    .fetch_all(executor)
    .await
}

/// Subscribers of `author_id`, each repeated once per author that subscriber
/// follows. Ordered so rows for one subscriber are contiguous.
pub async fn list_subscribers<'e>(
    executor: impl PgExecutor<'e>,
    author_id: Uuid,
) -> Result<Vec<SubscriberRow>> {
    sqlx::query_as::<_, SubscriberRow>(
        r#"
        SELECT e.subscriber_id,
               s.name AS subscriber_name,
               outbound.author_id AS subscriber_author_id
        FROM subscribers_on_authors e
        JOIN users s ON s.id = e.subscriber_id
        LEFT JOIN subscribers_on_authors outbound ON outbound.subscriber_id = e.subscriber_id
        WHERE e.author_id = $1
        ORDER BY s.name ASC, e.subscriber_id ASC, outbound.author_id ASC
        "#,
    )
    .bind(author_id)
    .fetch_all(executor)
    .await
}
