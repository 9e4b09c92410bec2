//! Configuration loading helpers for `keactl`.
//!
//! Configuration flags come first on the command line. They are split off
//! and handed to `ortho_config`, while the remaining tokens are parsed as
//! the command.

use std::ffi::{OsStr, OsString};

use kea_ctrl_config::Config;
use ortho_config::OrthoConfig;

use crate::errors::AppError;

/// CLI flags recognised by the configuration loader.
///
/// Keep in sync with the fields of [`kea_ctrl_config::Config`].
pub(crate) const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--endpoint",
    "--username",
    "--password",
    "--timeout-secs",
    "--log-filter",
    "--log-format",
];

pub(crate) trait ConfigLoader {
    /// Loads configuration for the CLI.
    ///
    /// Configuration flags must appear before the command. Flags after the
    /// command are parsed as command arguments.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Include { needs_value: bool },
    Stop,
}

impl FlagAction {
    const fn needs_value(self) -> bool {
        matches!(self, Self::Include { needs_value: true })
    }
}

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned())
            .map_err(AppError::LoadConfiguration)
    }
}

impl OrthoConfigLoader {
    fn process_config_flag(argument: &OsStr) -> FlagAction {
        let text = argument.to_string_lossy();
        let Some(flag) = text.split('=').next().filter(|flag| flag.starts_with("--")) else {
            return FlagAction::Stop;
        };
        if CONFIG_CLI_FLAGS.contains(&flag) {
            return FlagAction::Include {
                needs_value: !text.contains('='),
            };
        }
        FlagAction::Stop
    }
}

pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_arguments: Vec<OsString>,
}

/// Splits the leading configuration flags from the command tokens.
///
/// Both halves keep the program name so each can be parsed on its own.
pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ConfigArgumentSplit {
            config_arguments: Vec::new(),
            command_arguments: Vec::new(),
        };
    };

    let mut config_arguments = vec![program.clone()];
    let mut remaining = rest.iter().peekable();
    while let Some(argument) = remaining.next_if(|argument| {
        matches!(
            OrthoConfigLoader::process_config_flag(argument),
            FlagAction::Include { .. }
        )
    }) {
        config_arguments.push(argument.clone());
        if OrthoConfigLoader::process_config_flag(argument).needs_value()
            && let Some(value) = remaining.next()
        {
            config_arguments.push(value.clone());
        }
    }

    let mut command_arguments = vec![program.clone()];
    command_arguments.extend(remaining.cloned());
    ConfigArgumentSplit {
        config_arguments,
        command_arguments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn inline_value_flags_do_not_need_follow_up_value() {
        let result = OrthoConfigLoader::process_config_flag(OsStr::new("--log-filter=debug"));
        assert_eq!(result, FlagAction::Include { needs_value: false });
    }

    #[test]
    fn separate_value_flags_consume_following_argument() {
        let result = OrthoConfigLoader::process_config_flag(OsStr::new("--endpoint"));
        assert_eq!(result, FlagAction::Include { needs_value: true });
    }

    #[test]
    fn non_flag_arguments_signal_stop() {
        let result = OrthoConfigLoader::process_config_flag(OsStr::new("status-get"));
        assert_eq!(result, FlagAction::Stop);
    }

    #[test]
    fn unknown_flags_signal_stop() {
        let result = OrthoConfigLoader::process_config_flag(OsStr::new("--output"));
        assert_eq!(result, FlagAction::Stop);
    }

    #[test]
    fn leading_config_flags_are_split_from_the_command() {
        let split = split_config_arguments(&os_args(&[
            "keactl",
            "--endpoint",
            "http://192.0.2.1:8000",
            "--log-format=json",
            "--output",
            "json",
            "status-get",
            "dhcp4",
        ]));
        assert_eq!(
            split.config_arguments,
            os_args(&["keactl", "--endpoint", "http://192.0.2.1:8000", "--log-format=json"])
        );
        assert_eq!(
            split.command_arguments,
            os_args(&["keactl", "--output", "json", "status-get", "dhcp4"])
        );
    }

    #[test]
    fn config_flags_after_the_command_stay_with_it() {
        let arguments = os_args(&["keactl", "config-get", "dhcp4", "--endpoint", "x"]);
        let split = split_config_arguments(&arguments);
        assert_eq!(split.config_arguments, os_args(&["keactl"]));
        assert_eq!(
            split.command_arguments,
            os_args(&["keactl", "config-get", "dhcp4", "--endpoint", "x"])
        );
    }

    #[test]
    fn empty_arguments_split_into_nothing() {
        let split = split_config_arguments(&[]);
        assert!(split.config_arguments.is_empty());
        assert!(split.command_arguments.is_empty());
    }
}
