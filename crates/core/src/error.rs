use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Weekly session limit of {limit} reached")]
    QuotaExceeded { limit: i32 },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
