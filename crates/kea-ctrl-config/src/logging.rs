//! Rendering of the `keactl` log stream.
//!
//! The format name is accepted in any letter case on the command line and in
//! the environment; configuration files use the lower-case spelling.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// How log events are written to stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LogFormat {
    /// One terse line per event, meant for an operator at a terminal.
    #[default]
    Compact,
    /// One JSON object per event with the event fields at the top level.
    Json,
}

/// A log format name that matches no [`LogFormat`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{given}', expected one of: {known}")]
pub struct LogFormatParseError {
    given: String,
    known: String,
}

impl FromStr for LogFormat {
    type Err = LogFormatParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let name = text.trim();
        Self::iter()
            .find(|format| format.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| LogFormatParseError {
                given: name.to_owned(),
                known: Self::iter()
                    .map(|format| format.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("json", LogFormat::Json)]
    #[case("JSON", LogFormat::Json)]
    #[case(" Compact ", LogFormat::Compact)]
    fn names_match_in_any_case(#[case] input: &str, #[case] expected: LogFormat) {
        let parsed: LogFormat = input.parse().expect("known format");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn unknown_name_lists_the_known_formats() {
        let error = "pretty".parse::<LogFormat>().expect_err("not a format");
        assert_eq!(
            error.to_string(),
            "unknown log format 'pretty', expected one of: compact, json"
        );
    }
}
