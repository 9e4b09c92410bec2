//! Log output of `keactl`.
//!
//! Events go to stderr; stdout is reserved for agent replies and built
//! documents. The subscriber is process-global and installed at most once.

use std::io::{self, IsTerminal};

use kea_ctrl_config::{Config, LogFormat};
use once_cell::sync::OnceCell;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Returned once logging is in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Why logging could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// `log_filter` is not a valid list of `tracing` directives.
    #[error("log filter '{directives}' does not parse: {reason}")]
    Filter {
        /// Directives as configured.
        directives: String,
        /// Parser message.
        reason: String,
    },
    /// Some other global subscriber got there first.
    #[error("a log subscriber is already installed: {0}")]
    Subscriber(#[source] SetGlobalDefaultError),
}

/// Sets up logging from `config` unless an earlier call already did.
///
/// Only the first successful call has an effect; its filter and format stay
/// in force for the rest of the process.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for a malformed `log_filter` and
/// [`TelemetryError::Subscriber`] when the process already has a global
/// subscriber.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED
        .get_or_try_init(|| install(config))
        .map(|_| TelemetryHandle)
}

fn install(config: &Config) -> Result<(), TelemetryError> {
    let subscriber = Registry::default()
        .with(event_layer(config.log_format()))
        .with(filter(config.log_filter())?);
    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

fn filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|error| TelemetryError::Filter {
        directives: directives.to_owned(),
        reason: error.to_string(),
    })
}

/// Colour is used only when stderr is a terminal.
fn event_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true);
    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_filter_names_the_directives() {
        let error = filter("kea_ctrl=loud").expect_err("filter must not parse");
        let TelemetryError::Filter { directives, .. } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(directives, "kea_ctrl=loud");
    }

    #[test]
    fn malformed_filter_stops_installation() {
        let config = Config {
            log_filter: Some(String::from("kea_ctrl=loud")),
            ..Config::default()
        };
        assert!(matches!(install(&config), Err(TelemetryError::Filter { .. })));
    }
}
