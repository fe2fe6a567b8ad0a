use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::gql::common::helpers::deleted;
use crate::gql::error::{GqlError, IntoGqlResult};
use crate::state::AppState;
use infra::repos::{
    profiles,
    profiles::{CreateProfileData, UpdateProfileData},
};

use super::types::{ChangeProfileInput, CreateProfileInput, Profile};

#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let state = ctx.data::<AppState>()?;
        let rows = profiles::list(&state.db).await.into_gql()?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn profile(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Profile>> {
        let state = ctx.data::<AppState>()?;
        let row = profiles::get_by_id(&state.db, id).await.into_gql()?;
        Ok(row.map(Profile::from))
    }
}

#[derive(Default)]
pub struct ProfileMutation;

#[Object]
impl ProfileMutation {
    async fn create_profile(&self, ctx: &Context<'_>, dto: CreateProfileInput) -> Result<Profile> {
        let state = ctx.data::<AppState>()?;

        let create_data = CreateProfileData {
            is_male: dto.is_male,
            year_of_birth: dto.year_of_birth,
            member_type_id: dto.member_type_id.into(),
            user_id: dto.user_id,
        };

        let row = profiles::create(&state.db, create_data).await.into_gql()?;
        tracing::info!(profile_id = %row.id, user_id = %row.user_id, "profile created");

        Ok(row.into())
    }

    /// Fails with `NOT_FOUND` when no profile has this id; nothing is written.
    async fn change_profile(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        dto: ChangeProfileInput,
    ) -> Result<Profile> {
        let state = ctx.data::<AppState>()?;

        let update_data = UpdateProfileData {
            is_male: dto.is_male,
            year_of_birth: dto.year_of_birth,
            member_type_id: dto.member_type_id.map(Into::into),
        };

        let row = profiles::update(&state.db, id, update_data)
            .await
            .into_gql()?
            .ok_or_else(|| GqlError::not_found("Profile", id).extend())?;

        Ok(row.into())
    }

    async fn delete_profile(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(deleted("profile", id, profiles::delete(&state.db, id).await))
    }
}
