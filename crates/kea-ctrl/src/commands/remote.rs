//! Configuration backend commands (`cb_cmds` hook).

use crate::context::Context;
use crate::error::TransactionError;
use crate::model::Family;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

impl<T: Transport> Context<T> {
    fn remote_server_get(&mut self, family: Family) -> Result<Response, TransactionError> {
        let command = family.command("remote-server", "get");
        self.execute(&command, Service::single(family.service()), None)
    }

    /// Fetches the remote server record of the DHCPv4 server
    /// (`remote-server4-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn remote_server4_get(&mut self) -> Result<Response, TransactionError> {
        self.remote_server_get(Family::V4)
    }

    /// Fetches the remote server record of the DHCPv6 server
    /// (`remote-server6-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn remote_server6_get(&mut self) -> Result<Response, TransactionError> {
        self.remote_server_get(Family::V6)
    }
}
