//! Command-line interface definitions for `keactl`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use kea_ctrl::Family;

/// Output format selection for command responses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    #[default]
    Auto,
    /// Always render human-readable output.
    Human,
    /// Always emit the agent's JSON response.
    Json,
}

/// Output format after resolving `auto` against the terminal state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// One line per result entry, arguments pretty-printed.
    Human,
    /// The JSON document as received or built.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto if stdout_is_terminal => ResolvedOutputFormat::Human,
            Self::Auto | Self::Json => ResolvedOutputFormat::Json,
            Self::Human => ResolvedOutputFormat::Human,
        }
    }
}

/// Command-line client for the Kea Control Agent.
#[derive(Parser, Debug)]
#[command(name = "keactl", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Controls how responses are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
    /// Command to run.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Address family selector used by subnet and lease commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum FamilyArg {
    /// DHCPv4.
    #[default]
    #[value(name = "4")]
    V4,
    /// DHCPv6.
    #[value(name = "6")]
    V6,
}

impl From<FamilyArg> for Family {
    fn from(value: FamilyArg) -> Self {
        match value {
            FamilyArg::V4 => Self::V4,
            FamilyArg::V6 => Self::V6,
        }
    }
}

/// Configuration document a model is built into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum DocumentTarget {
    /// `Dhcp4` document for `kea-dhcp4`.
    Dhcp4,
    /// `Dhcp6` document for `kea-dhcp6`.
    Dhcp6,
    /// `DhcpDdns` document for `kea-dhcp-ddns`.
    D2,
}

impl DocumentTarget {
    /// Control Agent service that receives the document.
    pub(crate) const fn service(self) -> &'static str {
        match self {
            Self::Dhcp4 => "dhcp4",
            Self::Dhcp6 => "dhcp6",
            Self::D2 => "d2",
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Lists the commands a service supports.
    ListCommands {
        /// Target service, for example `dhcp4`.
        service: String,
    },
    /// Reports daemon versions; without services the agent answers itself.
    VersionGet {
        /// Target services.
        services: Vec<String>,
    },
    /// Reports the runtime status of a service.
    StatusGet {
        /// Target service.
        service: String,
    },
    /// Asks a service to shut down.
    Shutdown {
        /// Target service.
        service: String,
    },
    /// Prints the build report of a service.
    BuildReport {
        /// Target service.
        service: String,
    },
    /// Prints the server tag of a service.
    ServerTagGet {
        /// Target service.
        service: String,
    },
    /// Prints the remote server record held by the configuration backend.
    RemoteServerGet {
        /// Address family.
        #[arg(long, value_enum, default_value_t = FamilyArg::V4)]
        family: FamilyArg,
    },
    /// Builds a configuration document from a model file and prints it
    /// without contacting the agent.
    Build {
        /// Document to build.
        #[arg(value_enum)]
        target: DocumentTarget,
        /// JSON model file.
        model: PathBuf,
    },
    /// Configuration management.
    Config {
        /// Configuration action.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Subnet management.
    Subnet {
        /// Address family.
        #[arg(long, value_enum, default_value_t = FamilyArg::V4)]
        family: FamilyArg,
        /// Subnet action.
        #[command(subcommand)]
        action: SubnetAction,
    },
    /// Lease management.
    Lease {
        /// Address family.
        #[arg(long, value_enum, default_value_t = FamilyArg::V4)]
        family: FamilyArg,
        /// Lease action.
        #[command(subcommand)]
        action: LeaseAction,
    },
    /// Host reservation management.
    Reservation {
        /// Target service.
        #[arg(long, default_value = "dhcp4")]
        service: String,
        /// Reservation action.
        #[command(subcommand)]
        action: ReservationAction,
    },
    /// Statistics.
    Statistic {
        /// Target service.
        #[arg(long, default_value = "dhcp4")]
        service: String,
        /// Statistic action.
        #[command(subcommand)]
        action: StatisticAction,
    },
    /// Client class management.
    Class {
        /// Target service.
        #[arg(long, default_value = "dhcp4")]
        service: String,
        /// Class action.
        #[command(subcommand)]
        action: ClassAction,
    },
    /// Host cache management.
    Cache {
        /// Target service.
        #[arg(long, default_value = "dhcp4")]
        service: String,
        /// Cache action.
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Configuration actions.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ConfigAction {
    /// Prints the running configuration.
    Get {
        /// Target service.
        service: String,
    },
    /// Replaces the configuration with the body read from a JSON file.
    Set {
        /// Target service.
        service: String,
        /// File holding the configuration body.
        file: PathBuf,
    },
    /// Checks a configuration body read from a JSON file.
    Test {
        /// Target service.
        service: String,
        /// File holding the configuration body.
        file: PathBuf,
    },
    /// Reloads the configuration file.
    Reload {
        /// Target service.
        service: String,
    },
    /// Writes the running configuration to a file on the server.
    Write {
        /// Target service.
        service: String,
        /// Destination path on the server.
        filename: String,
    },
    /// Pulls configuration from the configuration backend.
    BackendPull {
        /// Target service.
        service: String,
    },
    /// Prints the hash of the running configuration.
    HashGet {
        /// Target service.
        service: String,
    },
    /// Builds a document from a model file and sends it to the agent.
    Apply {
        /// Document to build.
        #[arg(value_enum)]
        target: DocumentTarget,
        /// JSON model file.
        model: PathBuf,
        /// Checks the document with `config-test` instead of applying it.
        #[arg(long)]
        check_only: bool,
    },
}

/// Subnet actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubnetAction {
    /// Lists subnets.
    List,
    /// Prints one subnet.
    Get {
        /// Subnet identifier.
        id: u32,
    },
    /// Adds subnets from a JSON arguments file.
    Add {
        /// File holding the command arguments.
        file: PathBuf,
    },
    /// Deletes a subnet.
    Del {
        /// Subnet identifier.
        id: u32,
    },
    /// Updates subnets from a JSON arguments file.
    Update {
        /// File holding the command arguments.
        file: PathBuf,
    },
}

/// Lease actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum LeaseAction {
    /// Adds a lease from a JSON arguments file.
    Add {
        /// File holding the command arguments.
        file: PathBuf,
    },
    /// Deletes the lease for an address.
    Del {
        /// Leased address.
        ip: String,
    },
    /// Prints the lease for an address.
    Get {
        /// Leased address.
        ip: String,
    },
    /// Prints the leases held by a hardware address (DHCPv4 only).
    GetByHwAddress {
        /// Hardware address.
        hw_address: String,
    },
    /// Prints the leases held by a client identifier (DHCPv4 only).
    GetByClientId {
        /// Client identifier.
        client_id: String,
    },
    /// Prints the leases held by a DUID and IAID (DHCPv6 only).
    GetByDuid {
        /// DHCP unique identifier.
        duid: String,
        /// Identity association identifier.
        iaid: u32,
    },
    /// Prints every lease in a subnet.
    GetAll {
        /// Subnet identifier.
        subnet_id: u32,
    },
    /// Removes every lease in a subnet.
    Wipe {
        /// Subnet identifier.
        subnet_id: u32,
    },
}

/// Reservation actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReservationAction {
    /// Adds a reservation read from a JSON file.
    Add {
        /// File holding the reservation object.
        file: PathBuf,
    },
    /// Deletes the reservation for an address.
    Del {
        /// Subnet identifier.
        subnet_id: u32,
        /// Reserved address.
        ip: String,
    },
    /// Prints the reservations for an address.
    Get {
        /// Reserved address.
        ip: String,
    },
    /// Prints every reservation in a subnet.
    GetAll {
        /// Subnet identifier.
        subnet_id: u32,
    },
}

/// Statistic actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatisticAction {
    /// Prints one statistic.
    Get {
        /// Statistic name.
        name: String,
    },
    /// Prints every statistic.
    GetAll,
    /// Resets one statistic.
    Reset {
        /// Statistic name.
        name: String,
    },
    /// Resets every statistic.
    ResetAll,
    /// Removes one statistic.
    Remove {
        /// Statistic name.
        name: String,
    },
    /// Removes every statistic.
    RemoveAll,
}

/// Client class actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClassAction {
    /// Adds classes from a JSON arguments file.
    Add {
        /// File holding the command arguments.
        file: PathBuf,
    },
    /// Deletes a class.
    Del {
        /// Class name.
        name: String,
    },
    /// Lists classes.
    List,
}

/// Host cache actions.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CacheAction {
    /// Empties the cache.
    Clear,
    /// Prints the number of cached hosts.
    Size,
    /// Dumps the cached hosts.
    Get,
}
