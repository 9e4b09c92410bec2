//! Commands every Kea daemon understands.

use crate::context::Context;
use crate::error::TransactionError;
use crate::transaction::{Response, Service};
use crate::transport::Transport;

impl<T: Transport> Context<T> {
    /// Lists the commands `service` supports (`list-commands`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn list_commands(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("list-commands", Service::single(service), None)
    }

    /// Reports the version of each selected daemon (`version-get`).
    ///
    /// [`Service::Unscoped`] asks the Control Agent itself.
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn version_get(&mut self, service: Service) -> Result<Response, TransactionError> {
        self.execute("version-get", service, None)
    }

    /// Reports the runtime status of `service` (`status-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn status_get(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("status-get", Service::single(service), None)
    }

    /// Asks `service` to shut down (`shutdown`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn shutdown(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("shutdown", Service::single(service), None)
    }

    /// Fetches the build report of `service` (`build-report`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn build_report(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("build-report", Service::single(service), None)
    }

    /// Fetches the server tag of `service` (`server-tag-get`).
    ///
    /// # Errors
    ///
    /// See [`Context::execute`].
    pub fn server_tag_get(&mut self, service: &str) -> Result<Response, TransactionError> {
        self.execute("server-tag-get", Service::single(service), None)
    }
}
