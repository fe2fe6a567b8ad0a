use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::gql::common::helpers::deleted;
use crate::gql::domains::users::types::User;
use crate::gql::error::{GqlError, IntoGqlResult};
use crate::state::AppState;
use infra::repos::subscriptions;

use super::service;

#[derive(Default)]
pub struct SubscriptionMutation;

#[Object]
impl SubscriptionMutation {
    /// Make `subscriberId` follow `authorId` and return the subscriber's
    /// refreshed view. Subscribing twice is a no-op.
    async fn subscribe_to(
        &self,
        ctx: &Context<'_>,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let (user, view) = service::subscribe(&state.db, subscriber_id, author_id)
            .await
            .into_gql()?
            .ok_or_else(|| GqlError::not_found("User", subscriber_id).extend())?;

        tracing::info!(%subscriber_id, %author_id, "subscribed");

        Ok(User::from(user).with_subscriptions(view))
    }

    async fn unsubscribe_from(
        &self,
        ctx: &Context<'_>,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let result = subscriptions::unsubscribe(&state.db, subscriber_id, author_id).await;
        let edge = format!("{subscriber_id}->{author_id}");
        Ok(deleted("subscription", edge, result))
    }
}
