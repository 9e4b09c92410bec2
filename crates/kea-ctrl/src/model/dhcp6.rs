//! DHCPv6 model records.

use serde::Deserialize;
use serde_json::Value;

use super::{ClientClass, Lifetimes, OptionData, Tristate};

/// Settings that only apply to the DHCPv6 document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Dhcp6Settings {
    /// Global lifetimes and timers.
    #[serde(flatten)]
    pub lifetimes: Lifetimes,
    /// Server DUID settings.
    pub server_id: Option<ServerId>,
    /// Global options.
    pub option_data: Vec<OptionData>,
    /// Client classes.
    pub client_classes: Vec<ClientClass>,
    /// Subnets outside any shared network.
    pub subnets: Vec<Subnet6>,
    /// Shared networks.
    pub shared_networks: Vec<SharedNetwork6>,
}

/// Server DUID settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerId {
    /// DUID type: `LLT`, `EN` or `LL`.
    #[serde(rename = "type")]
    pub id_type: String,
    /// Explicit identifier in hex.
    pub identifier: Option<String>,
}

/// IPv6 subnet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Subnet6 {
    /// Subnet identifier.
    pub id: u32,
    /// Prefix in CIDR notation, for example `2001:db8:1::/64`.
    pub subnet: String,
    /// Subnet-level lifetimes and timers.
    #[serde(flatten)]
    pub lifetimes: Lifetimes,
    /// Interface the subnet is reachable on.
    pub interface: Option<String>,
    /// Class a client must belong to.
    pub client_class: Option<String>,
    /// Address and prefix-delegation pools.
    pub pools: Vec<Pool6>,
    /// Subnet options.
    pub option_data: Vec<OptionData>,
    /// Host reservations.
    pub reservations: Vec<Reservation6>,
    /// Opaque user context.
    pub user_context: Tristate<Value>,
}

/// IPv6 pool: either an address range or a delegated prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum Pool6 {
    /// Address range, emitted under `pools`.
    Address {
        /// Range text or prefix, for example `2001:db8:1::/80`.
        pool: String,
        /// Class a client must belong to.
        #[serde(default)]
        client_class: Option<String>,
    },
    /// Delegated prefix, emitted under `pd-pools`.
    Prefix {
        /// Pool prefix, for example `2001:db8:8::`.
        prefix: String,
        /// Length of the pool prefix.
        prefix_len: u8,
        /// Length of each delegated prefix.
        delegated_len: u8,
        /// Class a client must belong to.
        #[serde(default)]
        client_class: Option<String>,
    },
}

/// IPv6 host reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Reservation6 {
    /// DHCP unique identifier.
    pub duid: Option<String>,
    /// Hardware address identifier.
    pub hw_address: Option<String>,
    /// Reserved host name.
    pub hostname: Option<String>,
    /// Reserved addresses.
    pub ip_addresses: Vec<String>,
    /// Reserved delegated prefixes.
    pub prefixes: Vec<String>,
    /// Classes assigned to the host.
    pub client_classes: Vec<String>,
    /// Host options.
    pub option_data: Vec<OptionData>,
}

/// IPv6 shared network.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SharedNetwork6 {
    /// Network name.
    pub name: String,
    /// Interface the network is reachable on.
    pub interface: Option<String>,
    /// Network options.
    pub option_data: Vec<OptionData>,
    /// Member subnets.
    pub subnets: Vec<Subnet6>,
}
