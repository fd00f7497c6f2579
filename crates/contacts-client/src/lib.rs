pub mod api;
pub mod app;
pub mod command;
pub mod form;
pub mod status;
#[cfg(test)]
mod tests;
pub mod view;

use thiserror::Error;

/// Generic client result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic client error type
#[derive(Debug, Error)]
pub enum Error {
    /// the request could not be sent or the response not be read
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),

    /// the server answered with a non-success status
    #[error("api error {status}: {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },
}

impl Error {
    /// The message the server put into its error body, if any
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
