//! Statistics commands.

use serde_json::Value;

use crate::context::Context;
use crate::error::TransactionError;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

use super::arguments;

impl<T: Transport> Context<T> {
    fn named_statistic(
        &mut self,
        command: &str,
        service: &str,
        name: &str,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("name", Value::from(name))]);
        self.execute(command, Service::single(service), args)
    }

    /// Fetches one statistic (`statistic-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn statistic_get(
        &mut self,
        service: &str,
        name: &str,
    ) -> Result<Response, TransactionError> {
        self.named_statistic("statistic-get", service, name)
    }

    /// Fetches every statistic (`statistic-get-all`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn statistic_get_all(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("statistic-get-all", Service::single(service), None)
    }

    /// Resets one statistic (`statistic-reset`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn statistic_reset(
        &mut self,
        service: &str,
        name: &str,
    ) -> Result<Response, TransactionError> {
        self.named_statistic("statistic-reset", service, name)
    }

    /// Resets every statistic (`statistic-reset-all`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn statistic_reset_all(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("statistic-reset-all", Service::single(service), None)
    }

    /// Removes one statistic (`statistic-remove`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn statistic_remove(
        &mut self,
        service: &str,
        name: &str,
    ) -> Result<Response, TransactionError> {
        self.named_statistic("statistic-remove", service, name)
    }

    /// Removes every statistic (`statistic-remove-all`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn statistic_remove_all(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("statistic-remove-all", Service::single(service), None)
    }
}
