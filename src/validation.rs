//! Input checks that run before anything touches the network.
//!
//! Each validator takes the raw text the user typed and returns either the
//! normalized value to send or a [`RequestError`] explaining what to change.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::error::{ErrorCode, RequestError};

/// Outcome of validating one input field.
#[derive(Debug, Clone)]
pub enum Validation<T> {
    Valid(T),
    Invalid(RequestError),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Validation::Valid(v) => Some(v),
            Validation::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<T, RequestError> {
        match self {
            Validation::Valid(v) => Ok(v),
            Validation::Invalid(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

pub const MAX_LOCATION_LENGTH: usize = 80;
pub const MIN_LOCATION_LENGTH: usize = 3;

/// Values people type when they have nothing real to enter.
pub const PLACEHOLDER_VALUES: [&str; 9] = [
    "unknown",
    "unkown",
    "n/a",
    "na",
    "none",
    "null",
    "undefined",
    "test",
    "sample",
];

static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?\s*,\s*-?[0-9]+(\.[0-9]+)?$")
        .expect("coordinate pattern compiles")
});

static CITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\s'.-]+(?:,[A-Za-z\s'.-]{2,})?$").expect("city pattern compiles")
});

/// Validate a city name or `lat,lon` pair.
///
/// Blank input is valid and yields `None`, meaning "use the server default".
/// Anything else yields the trimmed input unchanged.
pub fn validate_location_input(raw: &str) -> Validation<Option<String>> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Validation::Valid(None);
    }

    let lower = trimmed.to_lowercase();
    if PLACEHOLDER_VALUES.contains(&lower.as_str()) {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::LocationPlaceholder,
                "The location looks like a placeholder value.",
                "Enter a real place such as \"Hyderabad,IN\" or coordinates like \"17.3850,78.4867\".",
            )
            .with_context(json!({ "value": trimmed })),
        );
    }

    let length = trimmed.chars().count();
    if length > MAX_LOCATION_LENGTH {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::LocationLength,
                "Location descriptions must be 80 characters or fewer.",
                "Try shortening the location to something like \"Hyderabad,IN\" or a latitude/longitude pair.",
            )
            .with_context(json!({ "value": trimmed, "length": length })),
        );
    }

    if COORDINATE_PATTERN.is_match(trimmed) {
        return validate_coordinates(trimmed);
    }

    if !CITY_PATTERN.is_match(trimmed) {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::LocationFormat,
                "We could not understand that location.",
                "Use \"City\" or \"City,CountryCode\" (for example, \"Hyderabad,IN\") or provide coordinates like \"17.3850,78.4867\".",
            )
            .with_context(json!({ "value": trimmed })),
        );
    }

    if length < MIN_LOCATION_LENGTH {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::LocationShort,
                "Location details are too short to search.",
                "Provide at least three characters, such as \"Rio\" or \"Delhi,IN\".",
            )
            .with_context(json!({ "value": trimmed })),
        );
    }

    Validation::Valid(Some(trimmed.to_string()))
}

fn parse_degrees(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `trimmed` already matched [`COORDINATE_PATTERN`].
fn validate_coordinates(trimmed: &str) -> Validation<Option<String>> {
    let (lat_token, lon_token) = trimmed.split_once(',').unwrap_or((trimmed, ""));

    let (Some(latitude), Some(longitude)) = (parse_degrees(lat_token), parse_degrees(lon_token))
    else {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::LocationCoordsNumeric,
                "Latitude and longitude must be valid decimal numbers.",
                "Use decimal degrees such as \"17.3850,78.4867\".",
            )
            .with_context(json!({ "latitude": lat_token, "longitude": lon_token })),
        );
    };

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::LocationCoordsRange,
                "Coordinates are outside the supported ranges (-90 to 90 for latitude, -180 to 180 for longitude).",
                "Check the values and submit something like \"17.3850,78.4867\".",
            )
            .with_context(json!({ "latitude": latitude, "longitude": longitude })),
        );
    }

    Validation::Valid(Some(trimmed.to_string()))
}

// ---------------------------------------------------------------------------
// Currency amounts
// ---------------------------------------------------------------------------

/// Largest INR amount converted in one request.
pub const MAX_AMOUNT: f64 = 10_000_000.0;

/// Inline warning shown when a keystroke is refused by the amount field.
pub const AMOUNT_KEYSTROKE_WARNING: &str = "Only numbers and decimal values are allowed.";

/// Validate an INR amount. Thousands separators (`,`) are ignored.
pub fn validate_currency_amount(raw: &str) -> Validation<f64> {
    let cleaned = raw.trim().replace(',', "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::CurrencyAmountMissing,
                "Enter an amount in INR to convert.",
                "For example, try \"100\" or \"2500\".",
            )
            .with_context(json!({ "value": raw })),
        );
    }

    let Some(amount) = cleaned.parse::<f64>().ok().filter(|v| v.is_finite()) else {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::CurrencyAmountNumeric,
                "Amounts must be numbers.",
                "Use digits only, such as \"100\" or \"2500\".",
            )
            .with_context(json!({ "value": raw })),
        );
    };

    if amount <= 0.0 {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::CurrencyAmountRange,
                "Amounts must be greater than zero.",
                "Enter a positive value like \"100\" or \"2500\".",
            )
            .with_context(json!({ "amount": amount })),
        );
    }

    if amount > MAX_AMOUNT {
        return Validation::Invalid(
            RequestError::user(
                ErrorCode::CurrencyAmountLimit,
                "We can only convert up to 10,000,000 INR at once.",
                "Try a smaller amount or split the conversion into multiple requests.",
            )
            .with_context(json!({ "amount": amount, "max": MAX_AMOUNT })),
        );
    }

    Validation::Valid(amount)
}

/// Decide whether `ch` may be typed into an amount field holding `current`.
///
/// Digits and `,` are always accepted, `.` once, and `-` only as the first
/// character so that negative values still reach [`validate_currency_amount`]
/// and get a proper explanation.
pub fn accept_amount_keystroke(current: &str, ch: char) -> Result<(), &'static str> {
    let accepted = match ch {
        '0'..='9' | ',' => true,
        '.' => !current.contains('.'),
        '-' => current.is_empty(),
        _ => false,
    };
    if accepted {
        Ok(())
    } else {
        Err(AMOUNT_KEYSTROKE_WARNING)
    }
}
