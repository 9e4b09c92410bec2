//! Configuration management commands.

use serde_json::Value;

use crate::context::Context;
use crate::error::TransactionError;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

use super::arguments;

/// Returns the key a configuration is wrapped in for `service`: the name
/// with its first letter upper-cased, so `dhcp4` becomes `Dhcp4`.
#[must_use]
pub fn config_root_key(service: &str) -> String {
    let mut chars = service.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl<T: Transport> Context<T> {
    /// Fetches the running configuration of `service` (`config-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn config_get(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("config-get", Service::single(service), None)
    }

    /// Replaces the configuration of `service` (`config-set`).
    ///
    /// `config` is the body of the configuration; it is wrapped under the
    /// service's root key before sending.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn config_set(
        &mut self,
        service: &str,
        config: Value,
    ) -> Result<Response, TransactionError> {
        let wrapped = arguments([(config_root_key(service).as_str(), config)]);
        self.execute("config-set", Service::single(service), wrapped)
    }

    /// Asks `service` to reload its configuration file (`config-reload`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn config_reload(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("config-reload", Service::single(service), None)
    }

    /// Checks a configuration without applying it (`config-test`).
    ///
    /// `config` is wrapped the same way as for [`Context::config_set`].
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn config_test(
        &mut self,
        service: &str,
        config: Value,
    ) -> Result<Response, TransactionError> {
        let wrapped = arguments([(config_root_key(service).as_str(), config)]);
        self.execute("config-test", Service::single(service), wrapped)
    }

    /// Writes the running configuration of `service` to `filename`
    /// (`config-write`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn config_write(
        &mut self,
        service: &str,
        filename: &str,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("filename", Value::from(filename))]);
        self.execute("config-write", Service::single(service), args)
    }

    /// Pulls configuration from the configuration backend
    /// (`config-backend-pull`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn config_backend_pull(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("config-backend-pull", Service::single(service), None)
    }

    /// Fetches the hash of the running configuration (`config-hash-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn config_hash_get(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("config-hash-get", Service::single(service), None)
    }
}
