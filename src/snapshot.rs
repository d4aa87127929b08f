//! Per-request facts about the host
//!
//! Nothing here is cached: every call reads the clock or asks the OS again.

use std::ffi::OsString;
use std::io;

use chrono::{SecondsFormat, Utc};

/// Fallback reported when the OS hostname cannot be read
pub const UNKNOWN_HOST: &str = "unknown";

/// Current UTC time as ISO-8601 with millisecond precision (`...T12:00:00.123Z`)
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resolve the machine hostname, falling back to [`UNKNOWN_HOST`]
pub fn resolve_hostname() -> String {
    hostname_or_fallback(hostname::get())
}

/// A lookup error, a non-UTF-8 name and an empty name all map to [`UNKNOWN_HOST`]
fn hostname_or_fallback(lookup: io::Result<OsString>) -> String {
    lookup
        .ok()
        .and_then(|h| h.into_string().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

/// Operating system the binary was built for (`linux`, `macos`, `windows`, ...)
pub const fn platform() -> &'static str {
    std::env::consts::OS
}

/// Runtime identifier reported in place of a language VM version
pub fn runtime_version() -> String {
    let rust = option_env!("CARGO_PKG_RUST_VERSION")
        .filter(|v| !v.is_empty())
        .unwrap_or("stable");
    format!(
        "rust {rust} ({} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Values sampled once per response
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub timestamp: String,
    pub hostname: String,
}

impl Snapshot {
    pub fn capture() -> Self {
        Self {
            timestamp: now_iso8601(),
            hostname: resolve_hostname(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let ts = now_iso8601();
        // 2024-05-01T12:00:00.123Z
        assert_eq!(ts.len(), 24, "unexpected timestamp: {ts}");
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_timestamps_not_decreasing() {
        let first = now_iso8601();
        let second = now_iso8601();
        assert!(second >= first);
    }

    #[test]
    fn test_hostname_never_empty() {
        assert!(!resolve_hostname().is_empty());
    }

    #[test]
    fn test_hostname_lookup_result() {
        assert_eq!(hostname_or_fallback(Ok(OsString::from("web-1"))), "web-1");
        assert_eq!(
            hostname_or_fallback(Err(io::Error::from(io::ErrorKind::PermissionDenied))),
            UNKNOWN_HOST
        );
        assert_eq!(hostname_or_fallback(Ok(OsString::new())), UNKNOWN_HOST);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_hostname_is_unknown() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'h', 0xff, 0xfe]);
        assert_eq!(hostname_or_fallback(Ok(raw)), UNKNOWN_HOST);
    }

    #[test]
    fn test_runtime_version_mentions_rust() {
        let version = runtime_version();
        assert!(version.starts_with("rust "));
        assert!(version.contains(env!("CARGO_PKG_VERSION")));
    }
}
