//! Builds Kea configuration documents from a [`ConfigModel`].
//!
//! Every node is produced by a function returning a [`BuildResult`] and
//! attached through a [`Composer`], so the first failure unwinds the whole
//! partial tree through ordinary drops. Builders borrow the model and never
//! modify it.
//!
//! ```
//! use kea_ctrl::builder::build_dhcp4_config;
//! use kea_ctrl::model::{ConfigModel, Pool4, Subnet4};
//!
//! let mut model = ConfigModel::default();
//! model.interfaces.push("eth0".into());
//! model.dhcp4.subnets.push(Subnet4 {
//!     id: 1,
//!     subnet: "192.0.2.0/24".into(),
//!     pools: vec![Pool4 {
//!         pool: "192.0.2.10 - 192.0.2.20".into(),
//!         ..Pool4::default()
//!     }],
//!     ..Subnet4::default()
//! });
//!
//! let document = build_dhcp4_config(&model).expect("model is complete");
//! assert_eq!(document["subnet4"][0]["pools"][0]["pool"], "192.0.2.10 - 192.0.2.20");
//! ```

use tracing::debug;

use crate::document::{AttachPolicy, BuildResult, Composer, Unbounded};
use crate::model::{ConfigModel, Family};

mod leaf;
mod protocol;
mod section;
mod subnet;

/// Tracing target for document construction.
const BUILDER_TARGET: &str = "kea_ctrl::builder";

/// Daemon a document is built for; decides which loggers it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Daemon {
    Dhcp4,
    Dhcp6,
    D2,
}

impl Daemon {
    const fn root_key(self) -> &'static str {
        match self {
            Self::Dhcp4 => "Dhcp4",
            Self::Dhcp6 => "Dhcp6",
            Self::D2 => "DhcpDdns",
        }
    }

    /// Loggers named after another daemon are left out.
    fn accepts_logger(self, name: &str) -> bool {
        let owner = if name.starts_with("kea-dhcp4") {
            Some(Self::Dhcp4)
        } else if name.starts_with("kea-dhcp6") {
            Some(Self::Dhcp6)
        } else if name.starts_with("kea-dhcp-ddns") {
            Some(Self::D2)
        } else {
            None
        };
        owner.is_none_or(|daemon| daemon == self)
    }
}

/// Configuration document builder.
///
/// The attach policy is [`Unbounded`] in production; tests install one that
/// refuses chosen attaches.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder<P = Unbounded> {
    composer: Composer<P>,
}

impl ConfigBuilder {
    /// Creates a builder that admits every attach.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            composer: Composer::new(),
        }
    }
}

impl<P> ConfigBuilder<P> {
    /// Creates a builder whose attaches are governed by `policy`.
    #[must_use]
    pub const fn with_policy(policy: P) -> Self {
        Self {
            composer: Composer::with_policy(policy),
        }
    }

    /// Returns the attach policy.
    #[must_use]
    pub const fn policy(&self) -> &P {
        self.composer.policy()
    }
}

impl<P: AttachPolicy> ConfigBuilder<P> {
    /// Builds the body of the `Dhcp4` configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`](crate::BuildError) met while
    /// composing the document.
    pub fn dhcp4(&self, model: &ConfigModel) -> BuildResult {
        finish(Daemon::Dhcp4, self.dhcp4_document(model))
    }

    /// Builds the body of the `Dhcp6` configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`](crate::BuildError) met while
    /// composing the document.
    pub fn dhcp6(&self, model: &ConfigModel) -> BuildResult {
        finish(Daemon::Dhcp6, self.dhcp6_document(model))
    }

    /// Builds the body of the `DhcpDdns` configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`](crate::BuildError) met while
    /// composing the document.
    pub fn d2(&self, model: &ConfigModel) -> BuildResult {
        finish(Daemon::D2, self.d2_document(model))
    }

    /// Builds the server document for `family`.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigBuilder::dhcp4`] and [`ConfigBuilder::dhcp6`].
    pub fn protocol(&self, family: Family, model: &ConfigModel) -> BuildResult {
        match family {
            Family::V4 => self.dhcp4(model),
            Family::V6 => self.dhcp6(model),
        }
    }
}

/// Builds the body of the `Dhcp4` configuration with the default policy.
///
/// # Errors
///
/// Returns the first [`BuildError`](crate::BuildError) met while composing
/// the document.
pub fn build_dhcp4_config(model: &ConfigModel) -> BuildResult {
    ConfigBuilder::new().dhcp4(model)
}

/// Builds the body of the `Dhcp6` configuration with the default policy.
///
/// # Errors
///
/// Returns the first [`BuildError`](crate::BuildError) met while composing
/// the document.
pub fn build_dhcp6_config(model: &ConfigModel) -> BuildResult {
    ConfigBuilder::new().dhcp6(model)
}

/// Builds the body of the `DhcpDdns` configuration with the default policy.
///
/// # Errors
///
/// Returns the first [`BuildError`](crate::BuildError) met while composing
/// the document.
pub fn build_d2_config(model: &ConfigModel) -> BuildResult {
    ConfigBuilder::new().d2(model)
}

/// Builds the server document for `family` with the default policy.
///
/// # Errors
///
/// Returns the first [`BuildError`](crate::BuildError) met while composing
/// the document.
pub fn build_protocol_config(family: Family, model: &ConfigModel) -> BuildResult {
    ConfigBuilder::new().protocol(family, model)
}

fn finish(daemon: Daemon, outcome: BuildResult) -> BuildResult {
    match &outcome {
        Ok(document) => debug!(
            target: BUILDER_TARGET,
            document = daemon.root_key(),
            keys = document.as_object().map_or(0, serde_json::Map::len),
            "configuration built"
        ),
        Err(error) => debug!(
            target: BUILDER_TARGET,
            document = daemon.root_key(),
            %error,
            "configuration build failed"
        ),
    }
    outcome
}

/// Returns the text when it is present and not empty.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}
