use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Reported when the caller supplied no URL at all.
pub const INPUT_REQUIRED_MESSAGE: &str = "URLが指定されていません。";

/// Reported whenever reachability could not be determined.
/// Internal error details are logged, never echoed back.
pub const CHECK_FAILED_MESSAGE: &str = "チェック中にエラーが発生しました。";

/// The outcome of a single reachability probe.
///
/// `online` is true only when a response arrived with a 2xx status.
/// `error` is reserved for cases where reachability could not be
/// determined at all; a remote 500 is `online == false` without an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub online: bool,
    pub status: Option<u16>,
    #[serde(rename = "responseTime")]
    pub response_time_ms: Option<u64>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_url: Option<String>,
}

impl CheckResult {
    /// No URL was given; nothing was dispatched.
    pub fn input_required(timestamp: String) -> Self {
        Self {
            online: false,
            status: None,
            response_time_ms: None,
            timestamp,
            error: Some(INPUT_REQUIRED_MESSAGE.to_string()),
            checked_url: None,
        }
    }

    /// A response was obtained. Only 2xx counts as online.
    pub fn responded(
        status: u16,
        response_time_ms: u64,
        checked_url: String,
        timestamp: String,
    ) -> Self {
        Self {
            online: (200..300).contains(&status),
            status: Some(status),
            response_time_ms: Some(response_time_ms),
            timestamp,
            error: None,
            checked_url: Some(checked_url),
        }
    }

    /// Reachability could not be determined (transport failure, timeout,
    /// malformed request body, internal fault).
    pub fn check_failed(checked_url: Option<String>, timestamp: String) -> Self {
        Self {
            online: false,
            status: None,
            response_time_ms: None,
            timestamp,
            error: Some(CHECK_FAILED_MESSAGE.to_string()),
            checked_url,
        }
    }

    pub fn is_input_required(&self) -> bool {
        self.error.as_deref() == Some(INPUT_REQUIRED_MESSAGE)
    }
}

/// Renders the current instant the way a ja-JP locale prints local time,
/// e.g. `2025/1/5 9:03:07`.
pub fn capture_timestamp(offset: FixedOffset) -> String {
    Utc::now()
        .with_timezone(&offset)
        .format("%Y/%-m/%-d %-H:%M:%S")
        .to_string()
}

/// Builds the fixed offset timestamps are rendered in, falling back to UTC
/// when `hours` is out of range.
pub fn utc_offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or(Utc.fix())
}
