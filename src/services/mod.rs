use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod images;
pub mod main;
pub mod portfolio;

/// Failures surfaced by the service layer. Routes convert every variant into
/// a flash notification; none of them crash the application.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    /// A required field is missing; no remote call was made.
    #[error("{0}")]
    Validation(String),

    /// A local image could not be read; the save was aborted before any
    /// write.
    #[error("Failed to read file: {0}")]
    FileRead(String),

    /// Remote read/write failure, surfaced once and never retried.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
