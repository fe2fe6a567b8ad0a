use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::gql::common::helpers::deleted;
use crate::gql::error::{GqlError, IntoGqlResult};
use crate::state::AppState;
use infra::repos::{
    posts,
    posts::{CreatePostData, UpdatePostData},
};

use super::types::{ChangePostInput, CreatePostInput, Post};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let state = ctx.data::<AppState>()?;
        let rows = posts::list(&state.db).await.into_gql()?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Post>> {
        let state = ctx.data::<AppState>()?;
        let row = posts::get_by_id(&state.db, id).await.into_gql()?;
        Ok(row.map(Post::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(&self, ctx: &Context<'_>, dto: CreatePostInput) -> Result<Post> {
        let state = ctx.data::<AppState>()?;

        let create_data = CreatePostData {
            title: dto.title,
            content: dto.content,
            author_id: dto.author_id,
        };

        let row = posts::create(&state.db, create_data).await.into_gql()?;
        tracing::info!(post_id = %row.id, author_id = %row.author_id, "post created");

        Ok(row.into())
    }

    async fn change_post(&self, ctx: &Context<'_>, id: Uuid, dto: ChangePostInput) -> Result<Post> {
        let state = ctx.data::<AppState>()?;

        let update_data = UpdatePostData {
            title: dto.title,
            content: dto.content,
            author_id: dto.author_id,
        };

        let row = posts::update(&state.db, id, update_data)
            .await
            .into_gql()?
            .ok_or_else(|| GqlError::not_found("Post", id).extend())?;

        Ok(row.into())
    }

    /// Returns `false` instead of an error when nothing could be deleted.
    async fn delete_post(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(deleted("post", id, posts::delete(&state.db, id).await))
    }
}
