//! Client class commands (`class_cmds` hook).

use serde_json::Value;

use crate::context::Context;
use crate::error::TransactionError;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

use super::arguments;

impl<T: Transport> Context<T> {
    /// Adds client classes (`class-add`); `args` is sent as given.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn class_add(&mut self, service: &str, args: Value) -> Result<Response, TransactionError> {
        self.execute("class-add", Service::single(service), Some(args))
    }

    /// Deletes the client class `name` (`class-del`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn class_del(&mut self, service: &str, name: &str) -> Result<Response, TransactionError> {
        let args = arguments([("name", Value::from(name))]);
        self.execute("class-del", Service::single(service), args)
    }

    /// Lists client classes (`class-list`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn class_list(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("class-list", Service::single(service), None)
    }
}
