use std::collections::HashMap;

use sqlx::{PgConnection, PgExecutor, PgPool};
use uuid::Uuid;

use infra::models::{SubscribedAuthorRow, SubscriberRow, UserRow};
use infra::repos::{subscriptions, users};

use super::types::{SubscribedAuthor, Subscriber, SubscriptionRef, SubscriptionView};

/// Authors `user_id` follows, each with its own subscriber list.
pub async fn load_subscribed_authors<'e>(
    executor: impl PgExecutor<'e>,
    user_id: Uuid,
) -> sqlx::Result<Vec<SubscribedAuthor>> {
    let rows = subscriptions::list_subscribed_authors(executor, user_id).await?;
    Ok(group_subscribed_authors(rows))
}

/// Followers of `user_id`, each with the authors it follows.
pub async fn load_subscribers<'e>(
    executor: impl PgExecutor<'e>,
    user_id: Uuid,
) -> sqlx::Result<Vec<Subscriber>> {
    let rows = subscriptions::list_subscribers(executor, user_id).await?;
    Ok(group_subscribers(rows))
}

/// Both directions, read on one connection.
pub async fn load_view(conn: &mut PgConnection, user_id: Uuid) -> sqlx::Result<SubscriptionView> {
    let user_subscribed_to = load_subscribed_authors(&mut *conn, user_id).await?;
    let subscribed_to_user = load_subscribers(&mut *conn, user_id).await?;

    Ok(SubscriptionView {
        user_subscribed_to,
        subscribed_to_user,
    })
}

/// Add the edge `subscriber_id -> author_id` and read back the subscriber's
/// view inside one transaction.
///
/// Returns `Ok(None)` when the subscriber does not exist. An unknown author
/// surfaces as a foreign-key violation from the insert.
pub async fn subscribe(
    pool: &PgPool,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> sqlx::Result<Option<(UserRow, SubscriptionView)>> {
    let mut tx = pool.begin().await?;

    let Some(user) = users::get_by_id(&mut *tx, subscriber_id).await? else {
        return Ok(None);
    };

    let inserted = subscriptions::subscribe(&mut *tx, subscriber_id, author_id).await?;
    if !inserted {
        tracing::debug!(%subscriber_id, %author_id, "subscription already present");
    }

    let view = load_view(&mut *tx, subscriber_id).await?;

    tx.commit().await?;

    Ok(Some((user, view)))
}

pub fn group_subscribed_authors(rows: Vec<SubscribedAuthorRow>) -> Vec<SubscribedAuthor> {
    group_by_user(
        rows.into_iter()
            .map(|r| (r.author_id, r.author_name, r.author_subscriber_id)),
        |id, name| SubscribedAuthor {
            id,
            name,
            subscribed_to_user: Vec::new(),
        },
        |author| &mut author.subscribed_to_user,
    )
}

pub fn group_subscribers(rows: Vec<SubscriberRow>) -> Vec<Subscriber> {
    group_by_user(
        rows.into_iter()
            .map(|r| (r.subscriber_id, r.subscriber_name, r.subscriber_author_id)),
        |id, name| Subscriber {
            id,
            name,
            user_subscribed_to: Vec::new(),
        },
        |subscriber| &mut subscriber.user_subscribed_to,
    )
}

/// Fold flat `(user, name, neighbour)` rows into one entry per user, in
/// first-seen order, collecting each user's own neighbours.
fn group_by_user<T>(
    rows: impl Iterator<Item = (Uuid, String, Option<Uuid>)>,
    build: impl Fn(Uuid, String) -> T,
    neighbours: impl Fn(&mut T) -> &mut Vec<SubscriptionRef>,
) -> Vec<T> {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut grouped: Vec<T> = Vec::new();

    for (id, name, neighbour) in rows {
        let slot = *index.entry(id).or_insert_with(|| {
            grouped.push(build(id, name));
            grouped.len() - 1
        });

        if let Some(neighbour) = neighbour {
            neighbours(&mut grouped[slot]).push(SubscriptionRef { id: neighbour });
        }
    }

    grouped
}
