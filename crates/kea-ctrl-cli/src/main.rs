//! Entry point for `keactl`.
//!
//! The binary delegates to [`kea_ctrl_cli::run`], which loads configuration,
//! parses the command line and talks to the configured Control Agent.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    kea_ctrl_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
