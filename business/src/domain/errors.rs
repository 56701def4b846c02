/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Carries the driver message for logs; never shown to clients.
    #[error("repository.database_error")]
    DatabaseError(String),
    #[error("repository.invalid_record")]
    InvalidRecord,
}
