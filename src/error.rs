//! Error types for server lookups.

/// Errors that can occur while resolving a server name.
///
/// A lookup that the API answers with a non-200 status is not an error:
/// it yields a [`crate::ServerInfo`] without a record.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller passed an empty server name.
    #[error("server name must not be empty")]
    EmptyServerName,
    /// Network or I/O failure while talking to the API.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A field the API is expected to always send was absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}
