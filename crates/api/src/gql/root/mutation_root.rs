use async_graphql::MergedObject;

use crate::gql::domains::posts::PostMutation;
use crate::gql::domains::profiles::ProfileMutation;
use crate::gql::domains::subscriptions::SubscriptionMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(PostMutation, ProfileMutation, SubscriptionMutation, UserMutation);
