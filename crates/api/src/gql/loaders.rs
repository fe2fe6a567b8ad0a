use async_graphql::dataloader::Loader;
use infra::{
    db::Db,
    models::{MemberTypeRow, PostRow, ProfileRow},
    repos::{member_types, posts, profiles},
    MemberTypeId,
};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

// MemberTypeLoader - batch load member types for Profile.memberType
#[derive(Clone)]
pub struct MemberTypeLoader {
    pool: Db,
}

impl MemberTypeLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<MemberTypeId> for MemberTypeLoader {
    type Value = MemberTypeRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[MemberTypeId],
    ) -> impl Future<Output = std::result::Result<HashMap<MemberTypeId, Self::Value>, Self::Error>>
           + Send {
        let pool = self.pool.clone();
        let ids: Vec<MemberTypeId> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = member_types::list_by_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// ProfileByUserLoader - batch load the (single) profile of each user
#[derive(Clone)]
pub struct ProfileByUserLoader {
    pool: Db,
}

impl ProfileByUserLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for ProfileByUserLoader {
    type Value = ProfileRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let user_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if user_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = profiles::list_by_user_ids(&pool, &user_ids)
                .await
                .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.user_id, r)).collect())
        }
    }
}

// PostsByAuthorLoader - batch load all posts of each author
#[derive(Clone)]
pub struct PostsByAuthorLoader {
    pool: Db,
}

impl PostsByAuthorLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for PostsByAuthorLoader {
    type Value = Vec<PostRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let author_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if author_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = posts::list_by_author_ids(&pool, &author_ids)
                .await
                .map_err(Arc::new)?;

            // Authors without posts are absent from the map and resolve to an empty list
            let mut by_author: HashMap<Uuid, Vec<PostRow>> = HashMap::new();
            for row in rows {
                by_author.entry(row.author_id).or_default().push(row);
            }
            Ok(by_author)
        }
    }
}
