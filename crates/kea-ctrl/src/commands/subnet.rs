//! Subnet commands (`subnet_cmds` hook).

use serde_json::Value;

use crate::context::Context;
use crate::error::TransactionError;
use crate::model::Family;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

use super::arguments;

impl<T: Transport> Context<T> {
    fn subnet_command(
        &mut self,
        family: Family,
        action: &str,
        args: Option<Value>,
    ) -> Result<Response, TransactionError> {
        let command = family.command("subnet", action);
        self.execute(&command, Service::single(family.service()), args)
    }

    /// Lists IPv4 subnets (`subnet4-list`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet4_list(&mut self) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V4, "list", None)
    }

    /// Lists IPv6 subnets (`subnet6-list`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet6_list(&mut self) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V6, "list", None)
    }

    /// Fetches one IPv4 subnet by identifier (`subnet4-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet4_get(&mut self, id: u32) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V4, "get", arguments([("id", Value::from(id))]))
    }

    /// Fetches one IPv6 subnet by identifier (`subnet6-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet6_get(&mut self, id: u32) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V6, "get", arguments([("id", Value::from(id))]))
    }

    /// Adds IPv4 subnets (`subnet4-add`); `args` is sent as given.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet4_add(&mut self, args: Value) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V4, "add", Some(args))
    }

    /// Adds IPv6 subnets (`subnet6-add`); `args` is sent as given.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet6_add(&mut self, args: Value) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V6, "add", Some(args))
    }

    /// Deletes an IPv4 subnet (`subnet4-del`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet4_del(&mut self, id: u32) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V4, "del", arguments([("id", Value::from(id))]))
    }

    /// Deletes an IPv6 subnet (`subnet6-del`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet6_del(&mut self, id: u32) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V6, "del", arguments([("id", Value::from(id))]))
    }

    /// Updates IPv4 subnets (`subnet4-update`); `args` is sent as given.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet4_update(&mut self, args: Value) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V4, "update", Some(args))
    }

    /// Updates IPv6 subnets (`subnet6-update`); `args` is sent as given.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn subnet6_update(&mut self, args: Value) -> Result<Response, TransactionError> {
        self.subnet_command(Family::V6, "update", Some(args))
    }
}
