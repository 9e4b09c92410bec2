//! Request/response transport to the Kea Control Agent.
//!
//! The transaction engine only needs a synchronous primitive that takes the
//! serialised request and hands back the raw response body. [`Transport`] is
//! that seam; [`HttpTransport`] is the production implementation, posting
//! the request to the agent with a blocking `reqwest` client. `https`
//! endpoints are served through rustls with the bundled web PKI roots.

use std::time::Duration;

use kea_ctrl_config::AgentEndpoint;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::debug;

use crate::error::{ContextError, TransportError};

/// Tracing target for transport operations.
const TRANSPORT_TARGET: &str = "kea_ctrl::transport";

/// Synchronous request/response exchange with the Control Agent.
///
/// Implementations block until the whole response body is available or the
/// exchange fails. They never retry.
///
/// # Example
///
/// ```
/// use kea_ctrl::{Context, Transport, TransportError};
///
/// struct Canned;
///
/// impl Transport for Canned {
///     fn send(&mut self, _body: &[u8]) -> Result<Vec<u8>, TransportError> {
///         Ok(br#"[{"result": 0, "text": "ok"}]"#.to_vec())
///     }
/// }
///
/// let mut context = Context::with_transport(Canned);
/// let response = context.status_get("dhcp4").expect("status succeeds");
/// assert_eq!(response.entries().len(), 1);
/// ```
pub trait Transport {
    /// Sends one request body and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the request cannot be delivered or
    /// the agent does not produce a readable success response.
    fn send(&mut self, body: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// Connection settings for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    endpoint: AgentEndpoint,
    credentials: Option<(String, String)>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
}

impl HttpSettings {
    /// Creates settings for `endpoint` with no authentication or timeout.
    #[must_use]
    pub const fn new(endpoint: AgentEndpoint) -> Self {
        Self {
            endpoint,
            credentials: None,
            timeout: None,
            headers: Vec::new(),
        }
    }

    /// Parses `endpoint` and creates settings for it.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidEndpoint`] when the text is not an
    /// `http`/`https` URL with a host.
    pub fn parse(endpoint: &str) -> Result<Self, ContextError> {
        endpoint
            .parse::<AgentEndpoint>()
            .map(Self::new)
            .map_err(|source| ContextError::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                source,
            })
    }

    /// Sends HTTP basic authentication with every request.
    #[must_use]
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some((username.to_owned(), password.to_owned()));
        self
    }

    /// Bounds every request by `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Returns the agent endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &AgentEndpoint {
        &self.endpoint
    }
}

/// Blocking HTTP transport posting JSON requests to the agent.
///
/// The client is built once and reused for every exchange, so connections
/// are kept alive between transactions on the same context.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    settings: HttpSettings,
}

impl HttpTransport {
    /// Builds the HTTP client for `settings`.
    ///
    /// The client itself carries no deadline; only the timeout in the
    /// settings bounds a request.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::TransportInit`] when the client cannot be
    /// initialised.
    pub fn new(settings: HttpSettings) -> Result<Self, ContextError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(ContextError::TransportInit)?;
        Ok(Self { client, settings })
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &HttpSettings {
        &self.settings
    }

    /// Replaces the request timeout; `None` waits indefinitely.
    pub const fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.settings.timeout = timeout;
    }

    /// Sets a persistent header, replacing any earlier value for `name`.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.settings
            .headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.settings
            .headers
            .push((name.to_owned(), value.to_owned()));
    }

    /// Removes every persistent header.
    pub fn clear_headers(&mut self) {
        self.settings.headers.clear();
    }

    fn endpoint_text(&self) -> String {
        self.settings.endpoint.to_string()
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        let settings = &self.settings;
        let mut request = self
            .client
            .post(settings.endpoint.url().clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body.to_vec());
        if let Some((username, password)) = &settings.credentials {
            request = request.basic_auth(username, Some(password));
        }
        for (name, value) in &settings.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = settings.timeout {
            request = request.timeout(timeout);
        }

        debug!(
            target: TRANSPORT_TARGET,
            endpoint = %settings.endpoint,
            request_bytes = body.len(),
            "posting request to control agent"
        );

        let response = request.send().map_err(|source| TransportError::Request {
            endpoint: self.endpoint_text(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint: self.endpoint_text(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|source| TransportError::Body {
            endpoint: self.endpoint_text(),
            source,
        })?;

        debug!(
            target: TRANSPORT_TARGET,
            response_bytes = bytes.len(),
            "received response from control agent"
        );

        Ok(bytes.to_vec())
    }
}
