//! Lease commands (`lease_cmds` hook).

use serde_json::Value;

use crate::context::Context;
use crate::error::TransactionError;
use crate::model::Family;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

use super::arguments;

impl<T: Transport> Context<T> {
    fn lease_command(
        &mut self,
        family: Family,
        action: &str,
        args: Option<Value>,
    ) -> Result<Response, TransactionError> {
        let command = family.command("lease", action);
        self.execute(&command, Service::single(family.service()), args)
    }

    fn lease_by_address(
        &mut self,
        family: Family,
        action: &str,
        ip: &str,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("ip-address", Value::from(ip))]);
        self.lease_command(family, action, args)
    }

    fn lease_get_all(
        &mut self,
        family: Family,
        subnet_id: u32,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("subnets", Value::from(vec![subnet_id]))]);
        self.lease_command(family, "get-all", args)
    }

    fn lease_wipe(&mut self, family: Family, subnet_id: u32) -> Result<Response, TransactionError> {
        let args = arguments([("subnet-id", Value::from(subnet_id))]);
        self.lease_command(family, "wipe", args)
    }

    /// Adds an IPv4 lease (`lease4-add`); `args` is sent as given.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease4_add(&mut self, args: Value) -> Result<Response, TransactionError> {
        self.lease_command(Family::V4, "add", Some(args))
    }

    /// Adds an IPv6 lease (`lease6-add`); `args` is sent as given.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease6_add(&mut self, args: Value) -> Result<Response, TransactionError> {
        self.lease_command(Family::V6, "add", Some(args))
    }

    /// Deletes the IPv4 lease for `ip` (`lease4-del`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease4_del(&mut self, ip: &str) -> Result<Response, TransactionError> {
        self.lease_by_address(Family::V4, "del", ip)
    }

    /// Deletes the IPv6 lease for `ip` (`lease6-del`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease6_del(&mut self, ip: &str) -> Result<Response, TransactionError> {
        self.lease_by_address(Family::V6, "del", ip)
    }

    /// Fetches the IPv4 lease for `ip` (`lease4-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease4_get_by_ip(&mut self, ip: &str) -> Result<Response, TransactionError> {
        self.lease_by_address(Family::V4, "get", ip)
    }

    /// Fetches the IPv6 lease for `ip` (`lease6-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease6_get_by_ip(&mut self, ip: &str) -> Result<Response, TransactionError> {
        self.lease_by_address(Family::V6, "get", ip)
    }

    /// Fetches IPv4 leases held by a hardware address
    /// (`lease4-get-by-hw-address`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease4_get_by_hw_address(
        &mut self,
        hw_address: &str,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("hw-address", Value::from(hw_address))]);
        self.lease_command(Family::V4, "get-by-hw-address", args)
    }

    /// Fetches IPv4 leases held by a client identifier
    /// (`lease4-get-by-client-id`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease4_get_by_client_id(
        &mut self,
        client_id: &str,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("client-id", Value::from(client_id))]);
        self.lease_command(Family::V4, "get-by-client-id", args)
    }

    /// Fetches IPv6 leases held by a DUID and IAID (`lease6-get-by-duid`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease6_get_by_duid(
        &mut self,
        duid: &str,
        iaid: u32,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("duid", Value::from(duid)), ("iaid", Value::from(iaid))]);
        self.lease_command(Family::V6, "get-by-duid", args)
    }

    /// Fetches every IPv4 lease in one subnet (`lease4-get-all`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease4_get_all(&mut self, subnet_id: u32) -> Result<Response, TransactionError> {
        self.lease_get_all(Family::V4, subnet_id)
    }

    /// Fetches every IPv6 lease in one subnet (`lease6-get-all`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease6_get_all(&mut self, subnet_id: u32) -> Result<Response, TransactionError> {
        self.lease_get_all(Family::V6, subnet_id)
    }

    /// Removes every IPv4 lease in one subnet (`lease4-wipe`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease4_wipe(&mut self, subnet_id: u32) -> Result<Response, TransactionError> {
        self.lease_wipe(Family::V4, subnet_id)
    }

    /// Removes every IPv6 lease in one subnet (`lease6-wipe`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn lease6_wipe(&mut self, subnet_id: u32) -> Result<Response, TransactionError> {
        self.lease_wipe(Family::V6, subnet_id)
    }
}
