//! Named Control Agent commands.
//!
//! Each method is a single [`Context::execute`](crate::Context::execute)
//! call with a fixed command name and argument shape. They share its error
//! contract: every method returns the validated [`Response`](crate::Response)
//! or a [`TransactionError`](crate::TransactionError), and records failures
//! in the context's last-error slot.
//!
//! Service names are passed as text (`dhcp4`, `dhcp6`, `d2`, ...). Family
//! specific commands such as `subnet4-list` address the matching DHCP
//! service themselves.

use serde_json::{Map, Value};

mod cache;
mod class;
mod config;
mod generic;
mod lease;
mod remote;
mod reservation;
mod statistic;
mod subnet;

pub use config::config_root_key;

/// Builds an arguments object from key/value pairs.
fn arguments<const N: usize>(members: [(&str, Value); N]) -> Option<Value> {
    let map: Map<String, Value> = members
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect();
    Some(Value::Object(map))
}
