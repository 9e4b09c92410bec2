//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use kea_ctrl::{BuildError, ContextError, TransactionError};
use kea_ctrl_config::EndpointParseError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] EndpointParseError),
    #[error("failed to create agent context: {0}")]
    Context(#[from] ContextError),
    #[error("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to build configuration: {0}")]
    Build(#[from] BuildError),
    #[error("{command} is only available for DHCPv{family}")]
    FamilyMismatch {
        command: &'static str,
        family: u8,
    },
    #[error("{0}")]
    Transaction(#[from] TransactionError),
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}
