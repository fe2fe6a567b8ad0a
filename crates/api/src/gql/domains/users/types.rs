use async_graphql::{
    dataloader::DataLoader, ComplexObject, Context, InputObject, Result, SimpleObject,
};
use uuid::Uuid;

use crate::gql::domains::posts::types::Post;
use crate::gql::domains::profiles::types::Profile;
use crate::gql::domains::subscriptions::service;
use crate::gql::domains::subscriptions::types::{SubscribedAuthor, Subscriber, SubscriptionView};
use crate::gql::error::IntoGqlResult;
use crate::gql::loaders::{PostsByAuthorLoader, ProfileByUserLoader};
use crate::state::AppState;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    /// Preloaded by `user` and `subscribeTo`; resolved lazily otherwise.
    #[graphql(skip)]
    pub subscriptions: Option<SubscriptionView>,
}

impl User {
    pub fn with_subscriptions(mut self, view: SubscriptionView) -> Self {
        self.subscriptions = Some(view);
        self
    }
}

#[ComplexObject]
impl User {
    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        let loader = ctx.data::<DataLoader<ProfileByUserLoader>>()?;
        let row = loader.load_one(self.id).await.into_gql()?;
        Ok(row.map(Profile::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let loader = ctx.data::<DataLoader<PostsByAuthorLoader>>()?;
        let rows = loader.load_one(self.id).await.into_gql()?;
        Ok(rows
            .unwrap_or_default()
            .into_iter()
            .map(Post::from)
            .collect())
    }

    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<SubscribedAuthor>> {
        if let Some(view) = &self.subscriptions {
            return Ok(view.user_subscribed_to.clone());
        }
        let state = ctx.data::<AppState>()?;
        service::load_subscribed_authors(&state.db, self.id)
            .await
            .into_gql()
    }

    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> Result<Vec<Subscriber>> {
        if let Some(view) = &self.subscriptions {
            return Ok(view.subscribed_to_user.clone());
        }
        let state = ctx.data::<AppState>()?;
        service::load_subscribers(&state.db, self.id).await.into_gql()
    }
}

impl From<infra::models::UserRow> for User {
    fn from(row: infra::models::UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            balance: row.balance,
            subscriptions: None,
        }
    }
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub balance: f64,
}

#[derive(InputObject, Default)]
pub struct ChangeUserInput {
    pub name: Option<String>,
    pub balance: Option<f64>,
}
