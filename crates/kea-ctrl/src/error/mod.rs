//! Error types for document construction, transport and transactions.
//!
//! Each concern has its own `thiserror` enum so callers can match on the
//! failure without parsing messages. [`TransactionError::kind`] collapses the
//! transaction failures into the four categories a caller usually branches
//! on.

use std::error::Error as StdError;
use std::sync::Arc;

use kea_ctrl_config::EndpointParseError;
use thiserror::Error;

/// Failure while composing a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The attach policy refused to place a child.
    #[error("attach refused at '{slot}'")]
    Rejected {
        /// Key or array index that was refused.
        slot: String,
    },

    /// The parent object already holds a value under the key.
    #[error("duplicate key '{key}'")]
    DuplicateKey {
        /// Key that was attached twice.
        key: String,
    },

    /// A required text field of a model record was empty.
    #[error("{entity} is missing required field '{field}'")]
    MissingField {
        /// Kind of record, for example `subnet4`.
        entity: &'static str,
        /// Kea key name of the missing field.
        field: &'static str,
    },

    /// An option-data entry carried neither a name nor a code.
    #[error("option data needs a name or a code")]
    OptionIdentity,

    /// A host reservation carried no host identifier.
    #[error("{entity} has no host identifier")]
    ReservationIdentifier {
        /// Kind of reservation, `reservation4` or `reservation6`.
        entity: &'static str,
    },
}

/// Failure while moving bytes to or from the Control Agent.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request could not be completed.
    #[error("request to {endpoint} failed: {}", with_causes(.source))]
    Request {
        /// Agent URL.
        endpoint: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The agent answered with a status outside the 2xx range.
    #[error("{endpoint} answered with HTTP status {status}")]
    Status {
        /// Agent URL.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be read.
    #[error("failed to read response body from {endpoint}: {}", with_causes(.source))]
    Body {
        /// Agent URL.
        endpoint: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// I/O failure raised by a custom transport.
    #[error("transport I/O error: {0}")]
    Io(#[source] Arc<std::io::Error>),
}

impl From<std::io::Error> for TransportError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

/// Renders `error` followed by every cause its message does not already
/// include. HTTP client errors keep the actual failure, such as a refused
/// connection, several sources down.
fn with_causes(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}

/// Broad category of a [`TransactionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be assembled.
    Construction,
    /// The exchange with the agent did not complete.
    Transport,
    /// The agent answered with something that is not a valid response.
    Protocol,
    /// The agent answered, reporting a failure.
    Remote,
}

/// Failure of a single command/response exchange.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The request could not be serialised.
    #[error("failed to serialise request: {0}")]
    Serialise(#[source] serde_json::Error),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not valid JSON.
    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),

    /// The response did not follow the result-array structure.
    #[error("malformed response: {reason}")]
    Protocol {
        /// Description of the structural violation.
        reason: String,
    },

    /// A targeted service reported a non-zero result code.
    #[error(
        "service at index {index} failed with result {code}: {}",
        text.as_deref().unwrap_or(UNKNOWN_REMOTE_ERROR)
    )]
    Remote {
        /// Position of the failing entry in the response array.
        index: usize,
        /// Result code reported by the service.
        code: i64,
        /// Explanation supplied by the service, if any.
        text: Option<String>,
    },
}

/// Description recorded when a failing service supplies no text.
pub const UNKNOWN_REMOTE_ERROR: &str = "unknown error";

impl TransactionError {
    /// Returns the category of this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Serialise(_) => ErrorKind::Construction,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Parse(_) | Self::Protocol { .. } => ErrorKind::Protocol,
            Self::Remote { .. } => ErrorKind::Remote,
        }
    }

    /// Returns the text stored in the context's last-error slot.
    ///
    /// Remote failures record the service's own explanation verbatim; every
    /// other failure records its display form.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Remote { text, .. } => text
                .as_deref()
                .unwrap_or(UNKNOWN_REMOTE_ERROR)
                .to_owned(),
            other => other.to_string(),
        }
    }
}

/// Failure while creating a [`Context`](crate::Context).
#[derive(Debug, Error)]
pub enum ContextError {
    /// The endpoint is not a usable `http`/`https` URL.
    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        /// Endpoint text as given.
        endpoint: String,
        /// Why it was rejected.
        #[source]
        source: EndpointParseError,
    },

    /// The HTTP client could not be initialised.
    #[error("failed to initialise HTTP client: {0}")]
    TransportInit(#[source] reqwest::Error),
}
