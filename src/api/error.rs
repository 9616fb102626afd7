//! Error types for the PokeAPI client.

use thiserror::Error;

/// Errors that can occur while fetching a record.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },

    /// Base URL plus id did not form a valid URL
    #[error("Invalid request URL '{url}'")]
    InvalidUrl { url: String },

    /// Failed to reach the server
    #[error("Connection failed for id {id}: {source}")]
    Connection {
        id: u16,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured deadline
    #[error("Request for id {id} timed out after {duration}s")]
    Timeout { id: u16, duration: u64 },

    /// Server answered with a non-success status
    #[error("Server returned {status} for id {id}")]
    Status { id: u16, status: u16 },

    /// Body was not a valid record
    #[error("Malformed record for id {id}: {source}")]
    Decode {
        id: u16,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Short message for the failure popup.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Build { .. } => "The HTTP client could not start",
            FetchError::InvalidUrl { .. } => "The API address is misconfigured",
            FetchError::Connection { .. } => "Could not reach PokeAPI",
            FetchError::Timeout { .. } => "PokeAPI took too long to answer",
            FetchError::Status { status: 404, .. } => "No Pokémon with that number",
            FetchError::Status { .. } => "PokeAPI returned an error",
            FetchError::Decode { .. } => "PokeAPI sent an unreadable record",
        }
    }
}
