use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("invalid webhook signature")]
    InvalidSignature,

    #[error("failed to parse webhook payload: {0}")]
    ParseError(String),

    #[error("LINE API request failed (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("handler failed: {0}")]
    HandlerError(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(error: serde_json::Error) -> Self {
        BotError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for BotError {
    fn from(error: anyhow::Error) -> Self {
        BotError::HandlerError(error.to_string())
    }
}

/// Log-severity classification for handler failures.
///
/// Critical errors point at platform-side trouble (rate limits, quota,
/// server errors) and are logged loudly; everything else is logged tersely.
/// Classification never changes control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Standard,
}

const CRITICAL_KEYWORDS: &[&str] = &[
    "rate", "limit", "timeout", "server", "quota", "429", "500", "503",
];

impl Severity {
    #[must_use]
    pub fn of(error: &BotError) -> Self {
        let message = error.to_string().to_lowercase();
        let critical = message
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| CRITICAL_KEYWORDS.contains(&token));

        if critical {
            Severity::Critical
        } else {
            Severity::Standard
        }
    }
}

impl BotError {
    /// HTTP status carried by the error, when the LINE API reported one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            BotError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a retry of the failed call could plausibly succeed.
    ///
    /// Only used to enrich critical-error log lines; this crate never
    /// schedules a retry of a failed event itself (the platform redelivers).
    #[must_use]
    pub fn retryable(&self) -> bool {
        match self {
            BotError::ApiError { status, .. } => matches!(status, 429 | 500 | 502 | 503),
            BotError::HttpError(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_is_critical() {
        let error = BotError::ApiError {
            status: 429,
            message: "rate limit exceeded".to_string(),
        };
        assert_eq!(Severity::of(&error), Severity::Critical);
        assert!(error.retryable());
    }

    #[test]
    fn plain_handler_error_is_standard() {
        let error = BotError::HandlerError("missing reply token".to_string());
        assert_eq!(Severity::of(&error), Severity::Standard);
        assert!(!error.retryable());
    }

    #[test]
    fn keyword_match_is_whole_token() {
        // "separate" contains "rate" as a substring but not as a token.
        let error = BotError::HandlerError("separate fields".to_string());
        assert_eq!(Severity::of(&error), Severity::Standard);
    }
}
