use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub use crate::repos::member_types::MemberTypeId;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MemberTypeRow {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub member_type_id: MemberTypeId,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// One row of `subscribers_on_authors`: `subscriber_id` follows `author_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SubscriptionEdgeRow {
    pub subscriber_id: Uuid,
    pub author_id: Uuid,
}

/// An author the queried user follows, flattened with one of that author's
/// own subscribers. `author_subscriber_id` is `None` only when the author has
/// no subscribers at all, which cannot happen for a row reached through an
/// edge but is kept nullable because the join is a LEFT JOIN.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubscribedAuthorRow {
    pub author_id: Uuid,
    pub author_name: String,
    pub author_subscriber_id: Option<Uuid>,
}

/// A subscriber of the queried user, flattened with one of the authors that
/// subscriber follows.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubscriberRow {
    pub subscriber_id: Uuid,
    pub subscriber_name: String,
    pub subscriber_author_id: Option<Uuid>,
}
