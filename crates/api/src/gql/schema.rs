use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema, SchemaBuilder};

use super::loaders::{MemberTypeLoader, PostsByAuthorLoader, ProfileByUserLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

fn builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
}

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    let member_type_loader = DataLoader::new(MemberTypeLoader::new(state.db.clone()), tokio::spawn);
    let profile_loader = DataLoader::new(ProfileByUserLoader::new(state.db.clone()), tokio::spawn);
    let posts_loader = DataLoader::new(PostsByAuthorLoader::new(state.db.clone()), tokio::spawn);

    let config = state.config();
    let introspection_enabled = config.introspection_enabled;
    let depth_limit = config.depth_limit;
    let complexity_limit = config.complexity_limit;

    let mut builder = builder()
        .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
        .data(member_type_loader)
        .data(profile_loader)
        .data(posts_loader)
        .limit_depth(depth_limit)
        .limit_complexity(complexity_limit);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

/// Schema definition language for the public contract, without any runtime data.
pub fn schema_sdl() -> String {
    builder().finish().sdl()
}
