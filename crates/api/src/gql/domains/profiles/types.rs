use async_graphql::{
    dataloader::DataLoader, ComplexObject, Context, InputObject, Result, SimpleObject,
};
use uuid::Uuid;

use crate::gql::domains::member_types::types::{MemberType, MemberTypeId};
use crate::gql::error::IntoGqlResult;
use crate::gql::loaders::MemberTypeLoader;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Profile {
    pub id: Uuid,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub member_type_id: MemberTypeId,
    pub user_id: Uuid,
}

#[ComplexObject]
impl Profile {
    async fn member_type(&self, ctx: &Context<'_>) -> Result<Option<MemberType>> {
        let loader = ctx.data::<DataLoader<MemberTypeLoader>>()?;
        let key: infra::MemberTypeId = self.member_type_id.into();
        let row = loader.load_one(key).await.into_gql()?;
        Ok(row.map(MemberType::from))
    }
}

impl From<infra::models::ProfileRow> for Profile {
    fn from(row: infra::models::ProfileRow) -> Self {
        Self {
            id: row.id,
            is_male: row.is_male,
            year_of_birth: row.year_of_birth,
            member_type_id: row.member_type_id.into(),
            user_id: row.user_id,
        }
    }
}

#[derive(InputObject)]
pub struct CreateProfileInput {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub member_type_id: MemberTypeId,
    pub user_id: Uuid,
}

#[derive(InputObject, Default)]
pub struct ChangeProfileInput {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_type_id: Option<MemberTypeId>,
}
