//! Collection endpoint client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication rejected by collection endpoint")]
    Unauthorized,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}
