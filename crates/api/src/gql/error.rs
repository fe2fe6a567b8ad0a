use std::sync::Arc;

use async_graphql::ErrorExtensions;
use sqlx::error::ErrorKind;

/// Unified error type for GraphQL resolvers.
///
/// Every variant is surfaced through [`ErrorExtensions`] with an
/// `extensions.code`:
///   - `NOT_FOUND`: the row a mutation targets does not exist
///   - `CONFLICT`: unique violation (e.g. a second profile for one user)
///   - `BAD_REQUEST`: foreign-key or other constraint violation
///   - `INTERNAL`: any other database fault; detail is logged, not returned
#[derive(Debug)]
pub enum GqlError {
    Sqlx(Arc<sqlx::Error>),
    NotFound(String),
}

impl GqlError {
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        GqlError::NotFound(format!("{resource} with id '{id}' not found"))
    }

    pub fn code(&self) -> &'static str {
        match self {
            GqlError::NotFound(_) => "NOT_FOUND",
            GqlError::Sqlx(e) => match db_error_kind(e) {
                Some(ErrorKind::UniqueViolation) => "CONFLICT",
                Some(
                    ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation,
                ) => "BAD_REQUEST",
                _ => "INTERNAL",
            },
        }
    }
}

fn db_error_kind(e: &sqlx::Error) -> Option<ErrorKind> {
    e.as_database_error().map(|db| db.kind())
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => match db_error_kind(e) {
                Some(ErrorKind::UniqueViolation) => write!(f, "Record already exists"),
                Some(ErrorKind::ForeignKeyViolation) => {
                    write!(f, "Referenced record does not exist")
                }
                Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => {
                    write!(f, "Invalid input")
                }
                _ => write!(f, "Internal database error"),
            },
            GqlError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(Arc::new(e))
    }
}

// DataLoader errors arrive shared
impl From<Arc<sqlx::Error>> for GqlError {
    fn from(e: Arc<sqlx::Error>) -> Self {
        GqlError::Sqlx(e)
    }
}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        if let GqlError::Sqlx(e) = self {
            // Real error stays server-side; clients get the sanitized text
            if self.code() == "INTERNAL" {
                tracing::error!("Database error: {e}");
            } else {
                tracing::debug!("Constraint violation: {e}");
            }
        }

        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Extension trait converting store results into coded GraphQL errors.
///
/// Usage: `posts::create(&state.db, data).await.into_gql()?`
pub trait IntoGqlResult<T> {
    fn into_gql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<GqlError>> IntoGqlResult<T> for std::result::Result<T, E> {
    fn into_gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.into().extend())
    }
}
