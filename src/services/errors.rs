//! Service-layer errors.

use thiserror::Error;

use crate::domain::schedule::ScheduleError;
use crate::forms::upload::UploadFormError;
use crate::publisher::PublishError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The submitted form failed validation.
    #[error("{0}")]
    Form(String),
    /// The schedule string did not resolve to a valid instant.
    #[error("{0}")]
    InvalidSchedule(String),
    /// Publisher credentials are not configured.
    #[error("{0}")]
    MissingCredentials(String),
    /// The publish collaborator failed; surfaced without retry.
    #[error("{0}")]
    Publish(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    /// Whether the error is the caller's fault (a validation failure) rather
    /// than a downstream or internal one.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Form(_) | Self::InvalidSchedule(_))
    }
}

impl From<UploadFormError> for ServiceError {
    fn from(value: UploadFormError) -> Self {
        Self::Form(value.to_string())
    }
}

impl From<ScheduleError> for ServiceError {
    fn from(value: ScheduleError) -> Self {
        Self::InvalidSchedule(value.to_string())
    }
}

impl From<PublishError> for ServiceError {
    fn from(value: PublishError) -> Self {
        match value {
            PublishError::MissingCredentials(_) => Self::MissingCredentials(value.to_string()),
            _ => Self::Publish(value.to_string()),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
