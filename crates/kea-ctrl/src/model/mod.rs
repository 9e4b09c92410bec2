//! Typed configuration model read by the document builder.
//!
//! The records mirror the Kea configuration schema closely enough that a
//! model can be loaded from a JSON file with kebab-case keys. Empty text in a
//! required field is accepted here and reported by the builder, so one
//! validation path covers both hand-built and deserialised models.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

mod ddns;
mod dhcp4;
mod dhcp6;

pub use ddns::{DdnsDomain, DdnsSettings, DnsServer, TsigKey};
pub use dhcp4::{Dhcp4Settings, Pool4, Reservation4, SharedNetwork4, Subnet4};
pub use dhcp6::{Dhcp6Settings, Pool6, Reservation6, ServerId, SharedNetwork6, Subnet6};

/// Address family of a DHCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// DHCPv4, served by `kea-dhcp4`.
    V4,
    /// DHCPv6, served by `kea-dhcp6`.
    V6,
}

impl Family {
    /// Returns the Control Agent service name, `dhcp4` or `dhcp6`.
    #[must_use]
    pub const fn service(self) -> &'static str {
        match self {
            Self::V4 => "dhcp4",
            Self::V6 => "dhcp6",
        }
    }

    /// Returns the configuration root key, `Dhcp4` or `Dhcp6`.
    #[must_use]
    pub const fn root_key(self) -> &'static str {
        match self {
            Self::V4 => "Dhcp4",
            Self::V6 => "Dhcp6",
        }
    }

    /// Joins a command stem and action into a family command name, for
    /// example `subnet` and `list` into `subnet4-list`.
    #[must_use]
    pub fn command(self, stem: &str, action: &str) -> String {
        let digit = match self {
            Self::V4 => '4',
            Self::V6 => '6',
        };
        format!("{stem}{digit}-{action}")
    }
}

impl fmt::Display for Family {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.service())
    }
}

/// Field where "not given" and "explicitly null" mean different things.
///
/// Deserialising a missing field yields [`Tristate::Absent`] (via
/// `#[serde(default)]`), a JSON `null` yields [`Tristate::Null`], anything
/// else [`Tristate::Value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tristate<T> {
    /// The field is left out of the document.
    #[default]
    Absent,
    /// The field is emitted as `null`.
    Null,
    /// The field is emitted with this value.
    Value(T),
}

impl<T> Tristate<T> {
    /// Reports whether the field is left out.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tristate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}

/// Complete server configuration model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConfigModel {
    /// Interfaces the servers listen on.
    pub interfaces: Vec<String>,
    /// Whether the DHCPv4 server is authoritative.
    pub authoritative: Option<bool>,
    /// Lease storage backend.
    pub lease_database: LeaseDatabase,
    /// Loggers, filtered per document by name.
    pub loggers: Vec<Logger>,
    /// Management socket of the servers.
    pub control_socket: Option<ControlSocket>,
    /// Dynamic DNS settings shared by the DHCP servers and D2.
    pub ddns: Option<DdnsSettings>,
    /// Hook libraries loaded by the servers.
    pub hooks_libraries: Vec<HookLibrary>,
    /// DHCPv4 specific settings.
    pub dhcp4: Dhcp4Settings,
    /// DHCPv6 specific settings.
    pub dhcp6: Dhcp6Settings,
}

/// Lease storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LeaseDatabase {
    /// Backend type, `memfile` unless overridden.
    #[serde(rename = "type")]
    pub db_type: String,
    /// Lease file path or database name.
    pub name: Option<String>,
    /// Whether leases are written to disk.
    pub persist: bool,
    /// Lease file cleanup interval in seconds.
    pub lfc_interval: Option<u32>,
}

impl Default for LeaseDatabase {
    fn default() -> Self {
        Self {
            db_type: String::from("memfile"),
            name: None,
            persist: false,
            lfc_interval: None,
        }
    }
}

/// Logger definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Logger {
    /// Logger name, for example `kea-dhcp4`.
    pub name: String,
    /// Minimum severity, for example `INFO`.
    pub severity: Option<String>,
    /// Debug verbosity when the severity is `DEBUG`.
    pub debuglevel: Option<u32>,
    /// Output sinks.
    pub output_options: Vec<LoggerOutput>,
}

/// Logger output sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LoggerOutput {
    /// Destination: a file path, `stdout`, `stderr` or `syslog`.
    pub output: String,
    /// Rotation size in bytes.
    pub maxsize: Option<u64>,
    /// Number of rotated files to keep.
    pub maxver: Option<u32>,
    /// Whether every message is flushed.
    pub flush: Option<bool>,
}

/// Management socket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ControlSocket {
    /// Socket type, `unix` unless overridden.
    pub socket_type: String,
    /// Socket path.
    pub socket_name: String,
}

impl Default for ControlSocket {
    fn default() -> Self {
        Self {
            socket_type: String::from("unix"),
            socket_name: String::new(),
        }
    }
}

/// Hook library entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HookLibrary {
    /// Path of the shared library.
    pub library: String,
    /// Library-specific parameters, passed through unchanged.
    pub parameters: Option<Value>,
}

/// Lifetime and timer settings shared by globals, networks and subnets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Lifetimes {
    /// Lease valid lifetime in seconds.
    pub valid_lifetime: Option<u32>,
    /// Lower bound a client may request.
    pub min_valid_lifetime: Option<u32>,
    /// Upper bound a client may request.
    pub max_valid_lifetime: Option<u32>,
    /// T1 timer in seconds.
    pub renew_timer: Option<u32>,
    /// T2 timer in seconds.
    pub rebind_timer: Option<u32>,
    /// DHCPv6 preferred lifetime in seconds.
    pub preferred_lifetime: Option<u32>,
}

/// DHCP option value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OptionData {
    /// Option name, for example `domain-name-servers`.
    pub name: Option<String>,
    /// Option code, for example `6`.
    pub code: Option<u16>,
    /// Option space when not the default one.
    pub space: Option<String>,
    /// Option value in Kea's textual form.
    pub data: String,
    /// Whether the option is sent even when not requested.
    pub always_send: Option<bool>,
    /// Whether `data` is comma-separated text rather than hex.
    pub csv_format: Option<bool>,
}

/// Client classification rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClientClass {
    /// Class name.
    pub name: String,
    /// Classification expression.
    pub test: Option<String>,
    /// Options assigned to members of the class.
    pub option_data: Vec<OptionData>,
}
