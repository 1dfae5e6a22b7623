use thiserror::Error;

use crate::attributes::AttributeError;
use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Attribute error: {0}")]
    Attribute(#[from] AttributeError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QueryError {
    /// HTTP status a transport layer should answer with.
    ///
    /// Only request-shape failures map to 400; everything else is left for the
    /// caller's global handler.
    pub fn status_code(&self) -> u16 {
        match self {
            QueryError::Validation(_) | QueryError::Attribute(_) => 400,
            QueryError::NotFound(_) => 404,
            QueryError::Conflict(_) => 409,
            QueryError::Store(_)
            | QueryError::Config(_)
            | QueryError::Serialization(_)
            | QueryError::Io(_) => 500,
        }
    }

    /// Field-level errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            QueryError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for QueryError {
    fn from(errors: ValidationErrors) -> Self {
        QueryError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
