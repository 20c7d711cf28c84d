use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Categories and codes
// ---------------------------------------------------------------------------

/// Who is expected to act on an error: the person typing, or the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    User,
    System,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }

    /// Banner heading shown above an error of this category.
    pub fn heading(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Update the amount/location",
            ErrorCategory::System => "We ran into a problem",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifiers attached to every [`RequestError`].
///
/// The string form (`USER-LOCATION-FORMAT`, `SYS-UPSTREAM-ERROR`, ...) is what
/// users see in banners and what shows up in the log file, so it must never
/// change once released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    LocationPlaceholder,
    LocationLength,
    LocationCoordsNumeric,
    LocationCoordsRange,
    LocationFormat,
    LocationShort,
    CurrencyAmountMissing,
    CurrencyAmountNumeric,
    CurrencyAmountRange,
    CurrencyAmountLimit,
    LocationNotFound,
    ResourceNotFound,
    RequestInvalid,
    UpstreamError,
    NetworkIssue,
    UnexpectedResponse,
    Unexpected,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::LocationPlaceholder => "USER-LOCATION-PLACEHOLDER",
            ErrorCode::LocationLength => "USER-LOCATION-LENGTH",
            ErrorCode::LocationCoordsNumeric => "USER-LOCATION-COORDS-NUMERIC",
            ErrorCode::LocationCoordsRange => "USER-LOCATION-COORDS-RANGE",
            ErrorCode::LocationFormat => "USER-LOCATION-FORMAT",
            ErrorCode::LocationShort => "USER-LOCATION-SHORT",
            ErrorCode::CurrencyAmountMissing => "USER-CURRENCY-AMOUNT-MISSING",
            ErrorCode::CurrencyAmountNumeric => "USER-CURRENCY-AMOUNT-NUMERIC",
            ErrorCode::CurrencyAmountRange => "USER-CURRENCY-AMOUNT-RANGE",
            ErrorCode::CurrencyAmountLimit => "USER-CURRENCY-AMOUNT-LIMIT",
            ErrorCode::LocationNotFound => "USER-LOCATION-NOT-FOUND",
            ErrorCode::ResourceNotFound => "USER-RESOURCE-NOT-FOUND",
            ErrorCode::RequestInvalid => "USER-REQUEST-INVALID",
            ErrorCode::UpstreamError => "SYS-UPSTREAM-ERROR",
            ErrorCode::NetworkIssue => "SYS-NETWORK-ISSUE",
            ErrorCode::UnexpectedResponse => "SYS-UNEXPECTED-RESPONSE",
            ErrorCode::Unexpected => "SYS-UNEXPECTED",
            ErrorCode::Unknown => "SYS-UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Client-level failures
// ---------------------------------------------------------------------------

/// Failure reported by [`InfoHubClient`](crate::InfoHubClient).
///
/// `status` is the HTTP status of the response, or `0` when the server was
/// never reached.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiClientError {
    pub message: String,
    pub status: u16,
    #[source]
    transport: Option<reqwest::Error>,
}

impl ApiClientError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            transport: None,
        }
    }

    /// A failure that happened before any response arrived.
    pub(crate) fn network(message: impl Into<String>, transport: reqwest::Error) -> Self {
        Self {
            message: message.into(),
            status: 0,
            transport: Some(transport),
        }
    }

    pub fn is_network(&self) -> bool {
        self.status == 0
    }
}

/// Everything an [`InfoHubApi`](crate::InfoHubApi) call can fail with.
///
/// - `Client`: transport or non-2xx HTTP failure (see [`ApiClientError`])
/// - `Decode`: a 2xx body that does not have the expected shape
/// - `Other`: any other failure that carries a message
/// - `Unknown`: a failure with no usable shape; `received` keeps what we got
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Client(#[from] ApiClientError),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),

    #[error("Unrecognized failure: {received}")]
    Unknown { received: Value },
}

// ---------------------------------------------------------------------------
// Normalized, user-facing error
// ---------------------------------------------------------------------------

/// The error shape every panel displays and logs.
///
/// Created by the validators or by [`normalize_error`](crate::normalize_error)
/// and never modified afterwards.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct RequestError {
    code: ErrorCode,
    message: String,
    hint: Option<String>,
    category: ErrorCategory,
    context: Option<Map<String, Value>>,
    #[source]
    cause: Option<Arc<FetchError>>,
}

impl RequestError {
    pub fn new(category: ErrorCategory, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hint: None,
            category,
            context: None,
            cause: None,
        }
    }

    /// A problem with what the user entered.
    pub fn user(code: ErrorCode, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::new(ErrorCategory::User, code, message).with_hint(hint)
    }

    /// A problem on our side or the network's.
    pub fn system(code: ErrorCode, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::new(ErrorCategory::System, code, message).with_hint(hint)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attach machine-readable context. A non-object value is stored under
    /// the `value` key.
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(match context {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".into(), other);
                map
            }
        });
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Arc<FetchError>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn context(&self) -> Option<&Map<String, Value>> {
        self.context.as_ref()
    }

    /// Look up a single context entry.
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.as_ref().and_then(|c| c.get(key))
    }

    pub fn cause(&self) -> Option<&FetchError> {
        self.cause.as_deref()
    }

    pub fn heading(&self) -> &'static str {
        self.category.heading()
    }

    /// Write the full error to the diagnostic log.
    pub fn log(&self) {
        tracing::error!(
            code = %self.code,
            category = %self.category,
            hint = ?self.hint,
            context = ?self.context,
            cause = ?self.cause,
            "{}",
            self.message
        );
    }
}
