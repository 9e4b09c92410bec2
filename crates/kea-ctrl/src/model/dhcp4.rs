//! DHCPv4 model records.

use serde::Deserialize;
use serde_json::Value;

use super::{ClientClass, Lifetimes, OptionData, Tristate};

/// Settings that only apply to the DHCPv4 document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Dhcp4Settings {
    /// Global lifetimes and timers.
    #[serde(flatten)]
    pub lifetimes: Lifetimes,
    /// Global options.
    pub option_data: Vec<OptionData>,
    /// Client classes.
    pub client_classes: Vec<ClientClass>,
    /// Subnets outside any shared network.
    pub subnets: Vec<Subnet4>,
    /// Shared networks.
    pub shared_networks: Vec<SharedNetwork4>,
}

/// IPv4 subnet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Subnet4 {
    /// Subnet identifier.
    pub id: u32,
    /// Prefix in CIDR notation, for example `192.0.2.0/24`.
    pub subnet: String,
    /// Subnet-level lifetimes and timers.
    #[serde(flatten)]
    pub lifetimes: Lifetimes,
    /// Interface the subnet is reachable on.
    pub interface: Option<String>,
    /// Class a client must belong to.
    pub client_class: Option<String>,
    /// Dynamic address pools.
    pub pools: Vec<Pool4>,
    /// Subnet options.
    pub option_data: Vec<OptionData>,
    /// Host reservations.
    pub reservations: Vec<Reservation4>,
    /// Opaque user context.
    pub user_context: Tristate<Value>,
}

/// IPv4 address pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Pool4 {
    /// Range text, for example `192.0.2.10 - 192.0.2.200`.
    pub pool: String,
    /// Class a client must belong to.
    pub client_class: Option<String>,
    /// Pool options.
    pub option_data: Vec<OptionData>,
}

/// IPv4 host reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Reservation4 {
    /// Hardware address identifier.
    pub hw_address: Option<String>,
    /// Client identifier.
    pub client_id: Option<String>,
    /// Relay agent circuit identifier.
    pub circuit_id: Option<String>,
    /// Reserved address.
    pub ip_address: Option<String>,
    /// Reserved host name.
    pub hostname: Option<String>,
    /// Classes assigned to the host.
    pub client_classes: Vec<String>,
    /// Host options.
    pub option_data: Vec<OptionData>,
}

/// IPv4 shared network.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SharedNetwork4 {
    /// Network name.
    pub name: String,
    /// Interface the network is reachable on.
    pub interface: Option<String>,
    /// Network options.
    pub option_data: Vec<OptionData>,
    /// Member subnets.
    pub subnets: Vec<Subnet4>,
}
