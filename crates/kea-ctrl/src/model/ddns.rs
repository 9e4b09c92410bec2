//! Dynamic DNS model records.

use serde::Deserialize;

/// Dynamic DNS settings.
///
/// The DHCP servers use the client-side fields to reach D2; the D2 document
/// is built from the listener, key and domain fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DdnsSettings {
    /// Whether the DHCP servers send name change requests.
    pub enable_updates: bool,
    /// Address of D2 as seen by the DHCP servers.
    pub server_ip: Option<String>,
    /// Port of D2 as seen by the DHCP servers.
    pub server_port: Option<u16>,
    /// Suffix appended to partial client names.
    pub qualifying_suffix: Option<String>,
    /// Address D2 listens on.
    pub listen_ip: Option<String>,
    /// Port D2 listens on.
    pub listen_port: Option<u16>,
    /// TSIG keys available to the domains.
    pub tsig_keys: Vec<TsigKey>,
    /// Forward zones.
    pub forward_domains: Vec<DdnsDomain>,
    /// Reverse zones.
    pub reverse_domains: Vec<DdnsDomain>,
}

/// TSIG key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TsigKey {
    /// Key name referenced by domains.
    pub name: String,
    /// Algorithm, for example `HMAC-SHA256`.
    pub algorithm: String,
    /// Base64 secret.
    pub secret: String,
}

/// DNS zone updated by D2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DdnsDomain {
    /// Zone name.
    pub name: String,
    /// TSIG key used for this zone.
    pub key_name: Option<String>,
    /// Authoritative servers of the zone.
    pub dns_servers: Vec<DnsServer>,
}

/// DNS server receiving updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DnsServer {
    /// Server address.
    pub ip_address: String,
    /// Server port.
    pub port: Option<u16>,
}
