//! Turn a failed [`FetchError`] into the [`RequestError`] a panel shows.
//!
//! The wording depends on which logical request failed, so every table here is
//! keyed by `Option<RequestName>`; `None` gets the generic wording.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::error::{ApiClientError, ErrorCode, FetchError, RequestError};

/// The logical requests the dashboard makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestName {
    Weather,
    Currency,
    Quotes,
}

impl RequestName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestName::Weather => "weather.summary",
            RequestName::Currency => "currency.conversion",
            RequestName::Quotes => "quotes.random",
        }
    }
}

impl fmt::Display for RequestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Message tables
// ---------------------------------------------------------------------------

const NETWORK_HINT: &str = "Check your internet connection and try again.";

fn user_hint(name: Option<RequestName>) -> &'static str {
    match name {
        Some(RequestName::Weather) => {
            "Verify the city, country code, or coordinates (for example, \"Hyderabad,IN\" or \"17.3850,78.4867\")."
        }
        Some(RequestName::Currency) => "Enter a positive INR amount using digits only.",
        Some(RequestName::Quotes) | None => {
            "Double-check the information you entered and try again."
        }
    }
}

fn system_hint(name: Option<RequestName>) -> &'static str {
    match name {
        Some(RequestName::Weather) => {
            "The weather service may be temporarily unavailable. Please try again shortly."
        }
        Some(RequestName::Currency) => {
            "The currency service may be temporarily unavailable. Please try again shortly."
        }
        Some(RequestName::Quotes) => {
            "The quotes service may be temporarily unavailable. Please try again shortly."
        }
        None => "Please try again shortly. If the problem continues, restart the dashboard.",
    }
}

fn user_message_fallback(status: u16, name: Option<RequestName>) -> &'static str {
    match (status, name) {
        (404, Some(RequestName::Weather)) => "We could not find weather data for that location.",
        (404, _) => "We could not find matching data for that request.",
        _ => "We could not process that request. Please review your input and try again.",
    }
}

fn system_message_fallback(status: u16, name: Option<RequestName>) -> &'static str {
    if status < 500 {
        return "We could not complete that request. Please try again shortly.";
    }
    match name {
        Some(RequestName::Weather) => "The weather service is unavailable right now.",
        Some(RequestName::Currency) => "The currency rates service is unavailable right now.",
        Some(RequestName::Quotes) => "The quotes service is unavailable right now.",
        None => "The InfoHub service is unavailable right now.",
    }
}

// ---------------------------------------------------------------------------
// Technical-message heuristic
// ---------------------------------------------------------------------------

static TECHNICAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)request failed|upstream|not found$").expect("technical pattern compiles")
});

/// Whether an upstream message reads like plumbing rather than advice.
///
/// Blank messages count as technical. This is a guess based on wording: a
/// legitimate short message ending in "not found" is also replaced by the
/// friendly fallback, and technical text phrased differently slips through.
pub fn is_technical_message(message: &str) -> bool {
    let trimmed = message.trim();
    trimmed.is_empty() || TECHNICAL_PATTERN.is_match(trimmed)
}

fn friendly_or(message: &str, fallback: &'static str) -> String {
    if is_technical_message(message) {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Map any failure of `name` to a categorized, coded [`RequestError`].
///
/// The original failure is kept as the error's cause.
pub fn normalize_error(failure: FetchError, name: Option<RequestName>) -> RequestError {
    let request_name = name.map(|n| n.as_str());

    let error = match &failure {
        FetchError::Client(client) => map_client_error(client, name),
        FetchError::Decode(_) | FetchError::Other(_) => {
            let text = failure.to_string();
            let message = if text.trim().is_empty() {
                "An unexpected problem prevented completing the request.".to_string()
            } else {
                text
            };
            RequestError::system(ErrorCode::Unexpected, message, system_hint(name))
                .with_context(json!({ "requestName": request_name }))
        }
        FetchError::Unknown { received } => RequestError::system(
            ErrorCode::Unknown,
            "An unexpected issue prevented completing the request.",
            system_hint(name),
        )
        .with_context(json!({ "requestName": request_name, "received": received })),
    };

    error.with_cause(failure)
}

fn map_client_error(error: &ApiClientError, name: Option<RequestName>) -> RequestError {
    let status = error.status;
    let request_name = name.map(|n| n.as_str());
    let context = json!({ "status": status, "requestName": request_name });

    match status {
        400..=499 => {
            let code = match (status, name) {
                (404, Some(RequestName::Weather)) => ErrorCode::LocationNotFound,
                (404, _) => ErrorCode::ResourceNotFound,
                _ => ErrorCode::RequestInvalid,
            };
            let message = friendly_or(&error.message, user_message_fallback(status, name));
            RequestError::user(code, message, user_hint(name)).with_context(context)
        }
        500..=u16::MAX => {
            let message = friendly_or(&error.message, system_message_fallback(status, name));
            RequestError::system(ErrorCode::UpstreamError, message, system_hint(name))
                .with_context(context)
        }
        0 => RequestError::system(ErrorCode::NetworkIssue, error.message.clone(), NETWORK_HINT)
            .with_context(json!({ "requestName": request_name })),
        _ => {
            let message = friendly_or(&error.message, system_message_fallback(status, name));
            RequestError::system(ErrorCode::UnexpectedResponse, message, system_hint(name))
                .with_context(context)
        }
    }
}
