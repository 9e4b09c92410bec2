//! Client library for the Kea Control Agent.
//!
//! The crate has two halves that meet at [`serde_json::Value`]:
//!
//! - A [`Context`] owns a [`Transport`] and runs command transactions:
//!   one JSON request goes out, one JSON array of result entries comes back,
//!   and the outcome is either a validated [`Response`] or a
//!   [`TransactionError`]. The most recent failure text is kept on the
//!   context for callers that only want a message. The [`commands`] module
//!   adds one method per Control Agent command on top of
//!   [`Context::execute`].
//! - The [`builder`] turns a typed [`model::ConfigModel`] into `Dhcp4`,
//!   `Dhcp6` and `DhcpDdns` configuration documents. Every attach goes
//!   through a [`Composer`], so a failed build returns a [`BuildError`] and
//!   nothing else: partially built subtrees are dropped where they fail.
//!
//! ```no_run
//! use kea_ctrl::Context;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut context = Context::create(Some("http://127.0.0.1:8000"))?;
//! let response = context.subnet4_list()?;
//! for entry in response.entries() {
//!     println!("{}: {:?}", entry.result, entry.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod commands;
mod context;
pub mod document;
mod error;
pub mod model;
mod transaction;
mod transport;

pub use builder::{
    ConfigBuilder, build_d2_config, build_dhcp4_config, build_dhcp6_config, build_protocol_config,
};
pub use context::{Context, MAX_ERROR_LEN, NO_ERROR};
pub use document::{AttachPolicy, BuildResult, Composer, Unbounded};
pub use error::{
    BuildError, ContextError, ErrorKind, TransactionError, TransportError, UNKNOWN_REMOTE_ERROR,
};
pub use model::{ConfigModel, Family};
pub use transaction::{Response, ResultEntry, Service};
pub use transport::{HttpSettings, HttpTransport, Transport};

#[cfg(test)]
mod tests;
