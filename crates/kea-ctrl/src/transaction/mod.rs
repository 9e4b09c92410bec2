//! Command/response exchange with the Control Agent.
//!
//! One transaction serialises a request object, hands it to the context's
//! [`Transport`], parses the reply and checks every result entry. The
//! outcome is either an owned [`Response`] or a [`TransactionError`]; in the
//! failure case the context's last-error slot holds a description and the
//! context stays usable.

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::context::Context;
use crate::error::{ErrorKind, TransactionError};
use crate::transport::Transport;

/// Tracing target for transaction operations.
const TRANSACTION_TARGET: &str = "kea_ctrl::transaction";

/// Services a command is addressed to.
///
/// The agent expects a list of service names. A single name and several
/// names are both sent as a list; [`Service::Unscoped`] and an empty list
/// leave the field out so the agent handles the command itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Service {
    /// The command is handled by the Control Agent itself.
    #[default]
    Unscoped,
    /// One named service, for example `dhcp4`.
    Single(String),
    /// Several named services, answered with one result entry each.
    Multiple(Vec<String>),
}

impl Service {
    /// Addresses one named service.
    #[must_use]
    pub fn single(name: &str) -> Self {
        Self::Single(name.to_owned())
    }

    /// Returns the targeted service names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self {
            Self::Unscoped => &[],
            Self::Single(name) => std::slice::from_ref(name),
            Self::Multiple(names) => names,
        }
    }

    /// Reports whether the service field is left out of the request.
    #[must_use]
    pub fn is_unscoped(&self) -> bool {
        self.names().is_empty()
    }
}

impl From<&str> for Service {
    fn from(name: &str) -> Self {
        Self::single(name)
    }
}

impl Serialize for Service {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

#[derive(serde::Serialize)]
struct Request<'a> {
    command: &'a str,
    #[serde(skip_serializing_if = "Service::is_unscoped")]
    service: Service,
    #[serde(skip_serializing_if = "Option::is_none")]
    arguments: Option<Value>,
}

/// One service's answer within a [`Response`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResultEntry {
    /// Result code; zero means success.
    pub result: i64,
    /// Explanation supplied by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Command-specific payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

/// Successful reply: one entry per targeted service, in response order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Response {
    entries: Vec<ResultEntry>,
}

impl Response {
    /// Returns every result entry.
    #[must_use]
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    /// Returns the payload of the first entry, if it carries one.
    #[must_use]
    pub fn arguments(&self) -> Option<&Value> {
        self.entries.first().and_then(|entry| entry.arguments.as_ref())
    }

    /// Consumes the response and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ResultEntry> {
        self.entries
    }
}

impl<T: Transport> Context<T> {
    /// Runs one command against `service` and returns the validated reply.
    ///
    /// `arguments` moves into the request and is released with it on every
    /// path. The last-error slot is reset on entry and written on failure.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::Serialise`] when the request cannot be
    /// encoded, [`TransactionError::Transport`] when the exchange fails,
    /// [`TransactionError::Parse`] or [`TransactionError::Protocol`] when the
    /// reply is not a well-formed result array, and
    /// [`TransactionError::Remote`] for the first entry with a non-zero
    /// result.
    pub fn execute(
        &mut self,
        command: &str,
        service: Service,
        arguments: Option<Value>,
    ) -> Result<Response, TransactionError> {
        self.clear_error();
        let outcome = self.exchange(command, service, arguments);
        match &outcome {
            Ok(response) => debug!(
                target: TRANSACTION_TARGET,
                command,
                entries = response.entries.len(),
                "transaction succeeded"
            ),
            Err(error) => self.note_failure(command, error),
        }
        outcome
    }

    fn exchange(
        &mut self,
        command: &str,
        service: Service,
        arguments: Option<Value>,
    ) -> Result<Response, TransactionError> {
        let request = Request {
            command,
            service,
            arguments,
        };
        let body = serde_json::to_vec(&request).map_err(TransactionError::Serialise)?;
        drop(request);

        debug!(
            target: TRANSACTION_TARGET,
            command,
            request_bytes = body.len(),
            "sending command"
        );

        let reply = self.transport_mut().send(&body)?;
        let document: Value = serde_json::from_slice(&reply).map_err(TransactionError::Parse)?;
        let entries = validate(document)?;
        interpret(&entries)?;
        Ok(Response { entries })
    }

    fn note_failure(&mut self, command: &str, error: &TransactionError) {
        let description = error.description();
        match error.kind() {
            ErrorKind::Remote => debug!(
                target: TRANSACTION_TARGET,
                command,
                error = %description,
                "service reported failure"
            ),
            ErrorKind::Construction | ErrorKind::Transport | ErrorKind::Protocol => warn!(
                target: TRANSACTION_TARGET,
                command,
                kind = ?error.kind(),
                error = %description,
                "transaction failed"
            ),
        }
        self.record_error(&description);
    }
}

/// Checks the reply is a non-empty array of well-formed result objects.
fn validate(document: Value) -> Result<Vec<ResultEntry>, TransactionError> {
    let Value::Array(elements) = document else {
        return Err(protocol(String::from("response is not an array")));
    };
    if elements.is_empty() {
        return Err(protocol(String::from("response array is empty")));
    }
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| entry(index, element))
        .collect()
}

fn entry(index: usize, element: Value) -> Result<ResultEntry, TransactionError> {
    let Value::Object(mut members) = element else {
        return Err(protocol(format!("element {index} is not an object")));
    };
    let result = members
        .get("result")
        .and_then(Value::as_i64)
        .ok_or_else(|| protocol(format!("element {index} has no integer result")))?;
    let text = take_text(index, &mut members)?;
    Ok(ResultEntry {
        result,
        text,
        arguments: members.remove("arguments"),
    })
}

fn take_text(
    index: usize,
    members: &mut Map<String, Value>,
) -> Result<Option<String>, TransactionError> {
    match members.remove("text") {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(protocol(format!("element {index} has a non-string text"))),
    }
}

/// Fails on the first entry reporting a non-zero result.
fn interpret(entries: &[ResultEntry]) -> Result<(), TransactionError> {
    entries
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.result != 0)
        .map_or(Ok(()), |(index, failed)| {
            Err(TransactionError::Remote {
                index,
                code: failed.result,
                text: failed.text.clone(),
            })
        })
}

const fn protocol(reason: String) -> TransactionError {
    TransactionError::Protocol { reason }
}

#[cfg(test)]
mod tests;
