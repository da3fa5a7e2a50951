//! Database error type

/// Errors surfaced by the pool and the repositories
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} {id} tidak ditemukan")]
    NotFound { resource: &'static str, id: String },

    #[error("database connection string is empty")]
    EmptyConnectionString,
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
