use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::gql::common::helpers::deleted;
use crate::gql::domains::subscriptions::service;
use crate::gql::error::{GqlError, IntoGqlResult};
use crate::state::AppState;
use infra::repos::{
    users,
    users::{CreateUserData, UpdateUserData},
};

use super::types::{ChangeUserInput, CreateUserInput, User};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// All users. Profile, member type and posts are batch-loaded per field.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let rows = users::list(&state.db).await.into_gql()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// A single user with both subscription directions resolved up front.
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;
        let mut conn = state.db.acquire().await.into_gql()?;

        let Some(row) = users::get_by_id(&mut *conn, id).await.into_gql()? else {
            return Ok(None);
        };

        let view = service::load_view(&mut *conn, id).await.into_gql()?;

        Ok(Some(User::from(row).with_subscriptions(view)))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, dto: CreateUserInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let create_data = CreateUserData {
            name: dto.name,
            balance: dto.balance,
        };

        let row = users::create(&state.db, create_data).await.into_gql()?;
        tracing::info!(user_id = %row.id, "user created");

        Ok(row.into())
    }

    async fn change_user(&self, ctx: &Context<'_>, id: Uuid, dto: ChangeUserInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let update_data = UpdateUserData {
            name: dto.name,
            balance: dto.balance,
        };

        let row = users::update(&state.db, id, update_data)
            .await
            .into_gql()?
            .ok_or_else(|| GqlError::not_found("User", id).extend())?;

        Ok(row.into())
    }

    /// Deleting a user also removes its profile, posts and subscription edges.
    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(deleted("user", id, users::delete(&state.db, id).await))
    }
}
