use async_graphql::{Enum, SimpleObject};

/// Membership tier. Serialized as the lowercase literals `basic` / `business`.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(rename_items = "lowercase")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl From<infra::MemberTypeId> for MemberTypeId {
    fn from(id: infra::MemberTypeId) -> Self {
        match id {
            infra::MemberTypeId::Basic => MemberTypeId::Basic,
            infra::MemberTypeId::Business => MemberTypeId::Business,
        }
    }
}

impl From<MemberTypeId> for infra::MemberTypeId {
    fn from(id: MemberTypeId) -> Self {
        match id {
            MemberTypeId::Basic => infra::MemberTypeId::Basic,
            MemberTypeId::Business => infra::MemberTypeId::Business,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

impl From<infra::models::MemberTypeRow> for MemberType {
    fn from(row: infra::models::MemberTypeRow) -> Self {
        Self {
            id: row.id.into(),
            discount: row.discount,
            posts_limit_per_month: row.posts_limit_per_month,
        }
    }
}
