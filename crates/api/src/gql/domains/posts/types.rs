use async_graphql::{InputObject, SimpleObject};
use uuid::Uuid;

#[derive(SimpleObject, Clone, Debug)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

impl From<infra::models::PostRow> for Post {
    fn from(row: infra::models::PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
        }
    }
}

#[derive(InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

#[derive(InputObject, Default)]
pub struct ChangePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<Uuid>,
}
