#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by anything displayable
    /// (a slug, an id, a page number).
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
