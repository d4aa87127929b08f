//! Request log line format module
//!
//! Supported formats:
//! - `default`: `2024-05-01T12:00:00.123Z - GET /api/info`
//! - `json`: `{"timestamp":"...","method":"GET","uri":"/api/info"}`

use serde::Serialize;

/// Output format of the per-request log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestLogFormat {
    Default,
    Json,
}

impl RequestLogFormat {
    /// Parse a configured format name; unknown names fall back to `Default`
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Default
        }
    }
}

/// One inbound request as it appears in the access log
#[derive(Debug, Clone, Serialize)]
pub struct RequestLogEntry {
    /// ISO-8601 time the request was received
    pub timestamp: String,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI including the query string
    pub uri: String,
}

impl RequestLogEntry {
    pub fn new(timestamp: String, method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            timestamp,
            method: method.into(),
            uri: uri.into(),
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: RequestLogFormat) -> String {
        match format {
            RequestLogFormat::Default => {
                format!("{} - {} {}", self.timestamp, self.method, self.uri)
            }
            RequestLogFormat::Json => serde_json::to_string(self)
                .unwrap_or_else(|_| format!("{} - {} {}", self.timestamp, self.method, self.uri)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> RequestLogEntry {
        RequestLogEntry::new(
            "2024-05-01T12:00:00.123Z".to_string(),
            "GET",
            "/api/info?verbose=1",
        )
    }

    #[test]
    fn test_format_default() {
        let log = create_test_entry().format(RequestLogFormat::Default);
        assert_eq!(log, "2024-05-01T12:00:00.123Z - GET /api/info?verbose=1");
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format(RequestLogFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["uri"], "/api/info?verbose=1");
        assert_eq!(value["timestamp"], "2024-05-01T12:00:00.123Z");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(RequestLogFormat::parse("json"), RequestLogFormat::Json);
        assert_eq!(RequestLogFormat::parse("JSON"), RequestLogFormat::Json);
        assert_eq!(RequestLogFormat::parse("default"), RequestLogFormat::Default);
        assert_eq!(RequestLogFormat::parse("combined"), RequestLogFormat::Default);
    }
}
