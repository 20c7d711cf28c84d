//! Text formatting for the panel cards.

use chrono::{DateTime, Local};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Group an integer digit string in threes: `1234567` → `1,234,567`.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Indian grouping: last three digits, then pairs. `10000000` → `1,00,00,000`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut result = String::new();
    for (i, c) in head.chars().rev().enumerate() {
        if i > 0 && i % 2 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    format!("{result},{tail}")
}

fn sign(value: f64) -> &'static str {
    if value < 0.0 {
        "-"
    } else {
        ""
    }
}

/// An INR amount as shown in the currency card: up to three decimals,
/// trailing zeros dropped, Indian digit grouping.
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = format!("{}{}", sign(amount), group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// A converted amount with its currency symbol and exactly two decimals,
/// e.g. `$1,234.50`.
pub fn format_money(value: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{symbol}{}.{frac_part}", sign(value), group_thousands(int_part))
}

pub fn format_temperature(celsius: f64, fahrenheit: f64) -> String {
    format!("{celsius:.1}°C / {fahrenheit:.1}°F")
}

pub fn format_humidity(humidity: Option<f64>) -> String {
    match humidity {
        Some(h) => format!("{h}%"),
        None => "—".to_string(),
    }
}

/// RFC 3339 timestamp in local time; anything unparseable is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%d %b %Y, %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}@2x.png")
}
