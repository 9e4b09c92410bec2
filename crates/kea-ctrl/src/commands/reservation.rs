//! Host reservation commands (`host_cmds` hook).

use serde_json::Value;

use crate::context::Context;
use crate::error::TransactionError;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

use super::arguments;

impl<T: Transport> Context<T> {
    /// Adds a host reservation (`reservation-add`).
    ///
    /// `reservation` is the reservation object; it is sent under the
    /// `reservation` key.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn reservation_add(
        &mut self,
        service: &str,
        reservation: Value,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("reservation", reservation)]);
        self.execute("reservation-add", Service::single(service), args)
    }

    /// Deletes the reservation for `ip` in `subnet_id` (`reservation-del`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn reservation_del_by_ip(
        &mut self,
        service: &str,
        subnet_id: u32,
        ip: &str,
    ) -> Result<Response, TransactionError> {
        let args = arguments([
            ("subnet-id", Value::from(subnet_id)),
            ("identifier-type", Value::from("ip-address")),
            ("identifier", Value::from(ip)),
        ]);
        self.execute("reservation-del", Service::single(service), args)
    }

    /// Fetches reservations for `ip` (`reservation-get-by-address`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn reservation_get_by_ip(
        &mut self,
        service: &str,
        ip: &str,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("ip-address", Value::from(ip))]);
        self.execute("reservation-get-by-address", Service::single(service), args)
    }

    /// Fetches every reservation in one subnet (`reservation-get-all`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn reservation_get_all(
        &mut self,
        service: &str,
        subnet_id: u32,
    ) -> Result<Response, TransactionError> {
        let args = arguments([("subnet-id", Value::from(subnet_id))]);
        self.execute("reservation-get-all", Service::single(service), args)
    }
}
