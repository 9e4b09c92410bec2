//! Rendering of agent responses and built documents.

use std::io::Write;

use kea_ctrl::Response;
use serde_json::Value;

use crate::cli::ResolvedOutputFormat;
use crate::errors::AppError;

/// Writes a response in the selected format.
///
/// Human output prints one `result: text` line per entry followed by its
/// arguments; JSON output prints the response array.
pub(crate) fn write_response<W: Write>(
    stdout: &mut W,
    response: &Response,
    format: ResolvedOutputFormat,
) -> Result<(), AppError> {
    match format {
        ResolvedOutputFormat::Json => write_json(stdout, response),
        ResolvedOutputFormat::Human => {
            for entry in response.entries() {
                match entry.text.as_deref() {
                    Some(text) => writeln!(stdout, "{}: {text}", entry.result),
                    None => writeln!(stdout, "{}", entry.result),
                }
                .map_err(AppError::WriteOutput)?;
                if let Some(arguments) = &entry.arguments {
                    write_json(stdout, arguments)?;
                }
            }
            stdout.flush().map_err(AppError::WriteOutput)
        }
    }
}

/// Writes a built configuration document; both formats print JSON.
pub(crate) fn write_document<W: Write>(stdout: &mut W, document: &Value) -> Result<(), AppError> {
    write_json(stdout, document)
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    stdout: &mut W,
    value: &T,
) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *stdout, value).map_err(AppError::SerialiseOutput)?;
    stdout.write_all(b"\n").map_err(AppError::WriteOutput)?;
    stdout.flush().map_err(AppError::WriteOutput)
}
