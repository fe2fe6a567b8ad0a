use async_graphql::SimpleObject;
use uuid::Uuid;

/// Bare reference to a user on the far side of a subscription edge.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "SubscribedToFromUserId")]
pub struct SubscriptionRef {
    pub id: Uuid,
}

/// An author the user follows, with that author's own subscribers.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "UserSubscribedToArray")]
pub struct SubscribedAuthor {
    pub id: Uuid,
    pub name: String,
    pub subscribed_to_user: Vec<SubscriptionRef>,
}

/// A follower of the user, with the authors that follower subscribes to.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "SubscribedToUserArray")]
pub struct Subscriber {
    pub id: Uuid,
    pub name: String,
    pub user_subscribed_to: Vec<SubscriptionRef>,
}

/// Both directions of a user's subscription graph, one hop out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionView {
    pub user_subscribed_to: Vec<SubscribedAuthor>,
    pub subscribed_to_user: Vec<Subscriber>,
}
