use thiserror::Error;

pub mod db_error;
pub mod dispatch_error;
pub mod domain_error;

pub use db_error::DbError;
pub use dispatch_error::DispatchError;
pub use domain_error::DomainError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Broad classification of a failure, used by outer layers to pick a
/// response without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wiring defect: a command has no handler, or the registry is inconsistent.
    Configuration,
    NotFound,
    Forbidden,
    Duplicate,
    LimitExceeded,
    Validation,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Duplicate => "duplicate",
            ErrorKind::LimitExceeded => "limit_exceeded",
            ErrorKind::Validation => "validation",
            ErrorKind::Internal => "internal",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Domain(e) => e.kind(),
            ApplicationError::Dispatch(_) => ErrorKind::Configuration,
            ApplicationError::Db(_)
            | ApplicationError::Json(_)
            | ApplicationError::Infrastructure(_) => ErrorKind::Internal,
        }
    }
}
