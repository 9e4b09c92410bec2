use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Validated address of a Kea Control Agent.
///
/// Only `http` and `https` URLs with a host are accepted. The agent listens on
/// a single path, so whatever path the URL carries is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentEndpoint {
    url: Url,
}

impl AgentEndpoint {
    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the host name or address of the agent.
    #[must_use]
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Returns the port, falling back to the scheme default.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }
}

impl fmt::Display for AgentEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.url)
    }
}

impl FromStr for AgentEndpoint {
    type Err = EndpointParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(input.trim())?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointParseError::UnsupportedScheme(other.to_owned())),
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(EndpointParseError::MissingHost(input.to_owned()));
        }
        Ok(Self { url })
    }
}

impl TryFrom<String> for AgentEndpoint {
    type Error = EndpointParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgentEndpoint> for String {
    fn from(endpoint: AgentEndpoint) -> Self {
        endpoint.url.into()
    }
}

/// Errors encountered while parsing an [`AgentEndpoint`] from text.
#[derive(Debug, Error)]
pub enum EndpointParseError {
    /// Scheme was neither `http` nor `https`.
    #[error("unsupported endpoint scheme '{0}'")]
    UnsupportedScheme(String),
    /// The URL carried no host.
    #[error("missing host in '{0}'")]
    MissingHost(String),
    /// URL failed to parse.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
