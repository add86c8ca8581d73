//! HTTP resolution of a server name to its record.

use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::Error;
use crate::model::{ServerInfo, ServerRecord};

/// Production endpoint of the public server API.
pub const DEFAULT_BASE_URL: &str = "https://api.minehut.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Envelope the API wraps the record in: `{ "server": { ... } }`.
#[derive(Debug, Deserialize)]
struct ServerEnvelope {
    server: ServerRecord,
}

/// Blocking API client.
///
/// Holds a connection pool, so one client can serve any number of lookups.
/// Each lookup blocks the calling thread for the duration of the HTTP round
/// trip, bounded by a 10 second timeout.
pub struct MinehutClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl MinehutClient {
    /// Client against the production API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a server name via `GET /server/{name}?byName=true`.
    ///
    /// A non-200 answer, or a 200 body without the expected `server` object,
    /// means the server does not exist; the returned [`ServerInfo`] then
    /// carries no record and only the always-sent flag accessors will report
    /// an error. Transport failures (DNS, refused connection, timeout) are
    /// returned to the caller.
    pub fn server_by_name(&self, name: &str) -> Result<ServerInfo, Error> {
        if name.is_empty() {
            return Err(Error::EmptyServerName);
        }

        let url = format!("{}/server/{}?byName=true", self.base_url, name);
        debug!("Fetching server record from {}", url);
        let response = self.http.get(&url).send()?;

        if response.status() != reqwest::StatusCode::OK {
            warn!("Server '{}' not found ({})", name, response.status());
            return Ok(ServerInfo::not_found());
        }

        match response.json::<ServerEnvelope>() {
            Ok(envelope) => Ok(ServerInfo::resolved(envelope.server)),
            Err(err) => {
                warn!("Server '{}' not found (unexpected response: {})", name, err);
                Ok(ServerInfo::not_found())
            }
        }
    }
}
