use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::MemberTypeRow;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, serde::Serialize, serde::Deserialize,
)]
#[sqlx(type_name = "member_type_id", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl MemberTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "basic",
            MemberTypeId::Business => "business",
        }
    }
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<MemberTypeRow>> {
    sqlx::query_as::<_, MemberTypeRow>(
        r#"
        SELECT id, discount, posts_limit_per_month
        FROM member_types
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: MemberTypeId,
) -> SqlxResult<Option<MemberTypeRow>> {
    sqlx::query_as::<_, MemberTypeRow>(
        r#"
        SELECT id, discount, posts_limit_per_month
        FROM member_types
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Batch lookup used by the member type loader.
pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[MemberTypeId],
) -> SqlxResult<Vec<MemberTypeRow>> {
    let ids: Vec<&'static str> = ids.iter().map(MemberTypeId::as_str).collect();

    sqlx::query_as::<_, MemberTypeRow>(
        r#"
        SELECT id, discount, posts_limit_per_month
        FROM member_types
        WHERE id::text = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}
