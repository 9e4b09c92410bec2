//! Crate-level test doubles and behaviour tests.

use std::cell::Cell;

use mockall::mock;
use serde_json::Value;

use crate::document::{AttachPolicy, Slot};
use crate::error::{BuildError, TransportError};
use crate::transport::Transport;

mod behaviour;
mod builder_behaviour;

mock! {
    pub Agent {}
    impl Transport for Agent {
        fn send(&mut self, body: &[u8]) -> Result<Vec<u8>, TransportError>;
    }
}

/// Agent that answers one request with `reply`, whatever it contains.
pub(crate) fn agent_replying(reply: &'static str) -> MockAgent {
    let mut agent = MockAgent::new();
    agent
        .expect_send()
        .times(1)
        .returning(move |_| Ok(reply.as_bytes().to_vec()));
    agent
}

/// Agent that answers one request with `reply` once the body equals
/// `expected` as JSON.
pub(crate) fn agent_expecting(expected: Value, reply: &'static str) -> MockAgent {
    let mut agent = MockAgent::new();
    agent
        .expect_send()
        .withf(move |body: &[u8]| {
            serde_json::from_slice::<Value>(body).ok().as_ref() == Some(&expected)
        })
        .times(1)
        .returning(move |_| Ok(reply.as_bytes().to_vec()));
    agent
}

/// Attach policy refusing the attach with the given zero-based position.
#[derive(Debug, Default)]
pub(crate) struct RefuseNth {
    target: usize,
    attempts: Cell<usize>,
}

impl RefuseNth {
    pub(crate) const fn new(target: usize) -> Self {
        Self {
            target,
            attempts: Cell::new(0),
        }
    }

    /// Number of attaches seen so far, refused ones included.
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl AttachPolicy for RefuseNth {
    fn admit(&self, slot: Slot<'_>) -> Result<(), BuildError> {
        let position = self.attempts.get();
        self.attempts.set(position + 1);
        if position == self.target {
            return Err(BuildError::Rejected {
                slot: slot.to_string(),
            });
        }
        Ok(())
    }
}
