//! Command-line runtime for `keactl`.
//!
//! The runtime splits configuration flags from the command, loads layered
//! configuration, installs logging and then either builds a configuration
//! document locally or runs one Control Agent command. Configuration loading
//! and the output streams can be substituted so tests drive the same path as
//! the binary.

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use kea_ctrl::{Context, HttpSettings};
use kea_ctrl_config::Config;
use tracing::debug;

mod cli;
mod command;
mod config;
mod errors;
mod output;
mod telemetry;

pub use cli::{OutputFormat, ResolvedOutputFormat};
use cli::Cli;
use command::Outcome;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
use errors::AppError;
pub use telemetry::{TelemetryError, TelemetryHandle};

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(
        args,
        stdout,
        stderr,
        &OrthoConfigLoader,
        io::stdout().is_terminal(),
    )
}

/// Runs the CLI with an explicit configuration loader.
///
/// Every failure is printed once to `stderr` and reported as
/// [`ExitCode::FAILURE`].
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
    stdout_is_terminal: bool,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    match dispatch(&args, stdout, loader, stdout_is_terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch<W, L>(
    args: &[OsString],
    stdout: &mut W,
    loader: &L,
    stdout_is_terminal: bool,
) -> Result<(), AppError>
where
    W: Write,
    L: ConfigLoader,
{
    let split = split_config_arguments(args);
    let cli = match Cli::try_parse_from(&split.command_arguments) {
        Ok(cli) => cli,
        Err(error)
            if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            return write!(stdout, "{}", error.render()).map_err(AppError::WriteOutput);
        }
        Err(error) => return Err(AppError::CliUsage(error)),
    };
    let config = loader.load(&split.config_arguments)?;
    telemetry::initialise(&config)?;

    let mut context = Context::with_settings(http_settings(&config)?)?;
    debug!(target: "kea_ctrl_cli", command = ?cli.command, "dispatching command");
    match command::execute(&mut context, &cli.command)? {
        Outcome::Response(response) => {
            output::write_response(stdout, &response, cli.output.resolve(stdout_is_terminal))
        }
        Outcome::Document(document) => output::write_document(stdout, &document),
    }
}

fn http_settings(config: &Config) -> Result<HttpSettings, AppError> {
    let mut settings = HttpSettings::new(config.endpoint()?).with_timeout(config.timeout());
    if let Some((username, password)) = config.credentials() {
        settings = settings.with_credentials(username, password);
    }
    Ok(settings)
}

#[cfg(test)]
mod tests;
