use sqlx::PgPool;

/// Shared connection pool handle used by repos and loaders.
pub type Db = PgPool;
