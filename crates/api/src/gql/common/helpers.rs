use std::fmt::Display;

/// Collapse a delete outcome into the boolean the schema exposes.
///
/// Missing rows and store failures both yield `false`; failures are logged
/// so the cause is not lost.
pub fn deleted(resource: &str, id: impl Display, result: sqlx::Result<bool>) -> bool {
    match result {
        Ok(true) => {
            tracing::info!(%id, "{resource} deleted");
            true
        }
        Ok(false) => {
            tracing::debug!(%id, "{resource} not found, nothing deleted");
            false
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "failed to delete {resource}");
            false
        }
    }
}
