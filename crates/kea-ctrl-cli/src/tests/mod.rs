//! Test support for the CLI runtime: a static configuration loader and a
//! loopback agent that answers one request.

use std::ffi::OsString;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::{Context as _, Result};
use kea_ctrl_config::Config;
use serde_json::Value;

use crate::errors::AppError;
use crate::{ConfigLoader, run_with_loader};

mod unit;

pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

/// Loopback agent serving exactly one request with a canned reply.
///
/// The request body is forwarded before the reply is written, so it is
/// available as soon as the client has its response.
pub(super) struct FakeAgent {
    url: String,
    requests: Receiver<Value>,
}

impl FakeAgent {
    pub(super) fn spawn(reply: &str) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("bind fake agent")?;
        let url = format!("http://{}/", listener.local_addr().context("local addr")?);
        let reply = reply.to_owned();
        let (sender, requests) = mpsc::channel();
        thread::spawn(move || -> Result<()> {
            let (stream, _) = listener.accept()?;
            let mut reader = BufReader::new(stream.try_clone()?);
            let mut length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line)?;
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    length = value.trim().parse()?;
                }
            }
            let mut body = vec![0; length];
            reader.read_exact(&mut body)?;
            sender.send(serde_json::from_slice(&body)?)?;
            let mut writer = stream;
            write!(
                writer,
                concat!(
                    "HTTP/1.1 200 OK\r\n",
                    "Content-Type: application/json\r\n",
                    "Content-Length: {}\r\n",
                    "Connection: close\r\n\r\n{}",
                ),
                reply.len(),
                reply
            )?;
            writer.flush()?;
            Ok(())
        });
        Ok(Self { url, requests })
    }

    pub(super) fn url(&self) -> &str {
        &self.url
    }

    /// Returns the request the agent received, if any.
    pub(super) fn request(&self) -> Option<Value> {
        self.requests.try_recv().ok()
    }
}

/// Output of one CLI run.
#[derive(Debug)]
pub(super) struct RunOutput {
    pub(super) exit_code: ExitCode,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

/// Runs the CLI with `config`, splitting `command` on whitespace.
pub(super) fn run_cli(config: Config, command: &str) -> RunOutput {
    let args = std::iter::once(OsString::from("keactl"))
        .chain(command.split_whitespace().map(OsString::from))
        .collect::<Vec<_>>();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit_code = run_with_loader(
        args,
        &mut stdout,
        &mut stderr,
        &StaticConfigLoader::new(config),
        false,
    );
    RunOutput {
        exit_code,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    }
}

/// Configuration pointing at `url`.
pub(super) fn config_for(url: &str) -> Config {
    Config {
        endpoint: Some(url.to_owned()),
        ..Config::default()
    }
}
