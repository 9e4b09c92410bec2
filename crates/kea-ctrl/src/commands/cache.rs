//! Host cache commands (`host_cache` hook).

use crate::context::Context;
use crate::error::TransactionError;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

impl<T: Transport> Context<T> {
    /// Empties the host cache (`cache-clear`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn cache_clear(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("cache-clear", Service::single(service), None)
    }

    /// Reports the number of cached hosts (`cache-size`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn cache_size(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("cache-size", Service::single(service), None)
    }

    /// Dumps the cached hosts (`cache-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn cache_get(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("cache-get", Service::single(service), None)
    }
}
