//! Shared configuration for the `keactl` tooling.
//!
//! Values are layered by `ortho_config`: command-line flags override
//! `KEACTL_*` environment variables, which override the configuration file,
//! which overrides the built-in defaults. Every field is optional in the
//! loaded layers; the accessor methods apply the defaults so callers never
//! see a half-filled configuration.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod endpoint;
mod logging;

pub use defaults::{
    DEFAULT_ENDPOINT, DEFAULT_LOG_FILTER, DEFAULT_TIMEOUT_SECS, default_log_filter,
    default_log_format,
};
pub use endpoint::{AgentEndpoint, EndpointParseError};
pub use logging::{LogFormat, LogFormatParseError};

/// Layered configuration for talking to a Kea Control Agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "KEACTL")]
pub struct Config {
    /// URL of the Control Agent, for example `http://127.0.0.1:8000`.
    pub endpoint: Option<String>,
    /// User name for HTTP basic authentication.
    pub username: Option<String>,
    /// Password for HTTP basic authentication.
    pub password: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// `tracing` filter expression, for example `kea_ctrl=debug`.
    pub log_filter: Option<String>,
    /// Output format of the log lines written to stderr.
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Returns the configured agent endpoint, or the default one.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointParseError`] when the configured value is not an
    /// `http`/`https` URL with a host.
    pub fn endpoint(&self) -> Result<AgentEndpoint, EndpointParseError> {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT).parse()
    }

    /// Returns the basic-auth credentials when a user name is configured.
    ///
    /// A missing password is sent as an empty one.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.username
            .as_deref()
            .map(|user| (user, self.password.as_deref().unwrap_or_default()))
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Returns the log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Returns the log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(default_log_format)
    }
}
