use contacts_api::service;
use thiserror::Error;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the contacts API service layer
    #[error("Service error: {0}")]
    Service(#[from] service::Error),
}
