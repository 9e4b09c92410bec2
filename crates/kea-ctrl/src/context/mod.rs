//! Client context shared by every transaction.
//!
//! A [`Context`] owns the transport handle and a bounded last-error slot. It
//! is created once, used for any number of transactions, and released either
//! with [`Context::destroy`] or by going out of scope. Operations take
//! `&mut self`, so one context serves one caller at a time.

use kea_ctrl_config::DEFAULT_ENDPOINT;

use crate::error::ContextError;
use crate::transport::{HttpSettings, HttpTransport};

/// Maximum length, in bytes, of the recorded last-error text.
pub const MAX_ERROR_LEN: usize = 256;

/// Last-error text after a transaction that did not fail.
pub const NO_ERROR: &str = "no error";

/// Connection to a Kea Control Agent.
#[derive(Debug)]
pub struct Context<T = HttpTransport> {
    transport: T,
    last_error: String,
}

impl Context<HttpTransport> {
    /// Creates an HTTP context for `endpoint`, or for the default agent
    /// address when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidEndpoint`] for a malformed address and
    /// [`ContextError::TransportInit`] when the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```
    /// use kea_ctrl::Context;
    ///
    /// let context = Context::create(None).expect("default endpoint is valid");
    /// assert_eq!(context.last_error(), kea_ctrl::NO_ERROR);
    /// context.destroy();
    /// ```
    pub fn create(endpoint: Option<&str>) -> Result<Self, ContextError> {
        let settings = HttpSettings::parse(endpoint.unwrap_or(DEFAULT_ENDPOINT))?;
        Self::with_settings(settings)
    }

    /// Creates an HTTP context from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::TransportInit`] when the HTTP client cannot be
    /// built.
    pub fn with_settings(settings: HttpSettings) -> Result<Self, ContextError> {
        HttpTransport::new(settings).map(Self::with_transport)
    }
}

impl<T> Context<T> {
    /// Creates a context over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            last_error: String::from(NO_ERROR),
        }
    }

    /// Releases the context together with its transport.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns the description of the most recent failure.
    ///
    /// Reads [`NO_ERROR`] when the last transaction succeeded or none has
    /// run yet. The text never exceeds [`MAX_ERROR_LEN`] bytes.
    #[must_use]
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Returns the transport handle.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the transport handle for reconfiguration between calls.
    pub const fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the context and returns its transport.
    #[must_use]
    pub fn into_transport(self) -> T {
        self.transport
    }

    pub(crate) fn clear_error(&mut self) {
        self.record_error(NO_ERROR);
    }

    pub(crate) fn record_error(&mut self, description: &str) {
        self.last_error.clear();
        self.last_error.push_str(bounded(description));
    }
}

/// Cuts `text` to at most [`MAX_ERROR_LEN`] bytes on a character boundary.
fn bounded(text: &str) -> &str {
    if text.len() <= MAX_ERROR_LEN {
        return text;
    }
    let mut end = MAX_ERROR_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.get(..end).unwrap_or_default()
}
