/// Control Agent address used when neither configuration nor caller names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Default request timeout, in seconds, applied to the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binary.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binary.
pub fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Compact
}
