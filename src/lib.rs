//! InfoHub client library and terminal dashboard.
//!
//! Weather for a city, INR to USD/EUR conversion, and motivational quotes from
//! the InfoHub API. Input is validated before anything is sent, and every
//! failure ends up as a [`RequestError`] with a stable code, a message, and a
//! hint the user can act on.
//!
//! # Quick Start
//!
//! ```no_run
//! use infohub::{validate_location_input, ClientConfig, InfoHubApi, InfoHubClient};
//!
//! let client = InfoHubClient::new(&ClientConfig::from_env()).unwrap();
//!
//! let city = validate_location_input("Hyderabad,IN").into_result().unwrap();
//! let weather = client.weather(city.as_deref()).unwrap();
//! println!("{}: {}", weather.location.name, weather.conditions.description);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod panels;
pub mod request;
pub mod tui;
pub mod validation;

// Re-export the main public types at the crate root for convenience.
pub use client::{InfoHubApi, InfoHubClient, NETWORK_FAILURE_MESSAGE};
pub use config::{normalize_base_url, ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ApiClientError, ErrorCategory, ErrorCode, FetchError, RequestError};
pub use models::{
    CurrencyConversion, ExchangeRates, Quote, WeatherConditions, WeatherLocation, WeatherSummary,
};
pub use normalize::{is_technical_message, normalize_error, RequestName};
pub use panels::{CurrencyPanel, QuotesPanel, WeatherPanel};
pub use request::{RequestEvent, RequestOptions, RequestState, RequestStatus, RequestTicket};
pub use validation::{
    accept_amount_keystroke, validate_currency_amount, validate_location_input, Validation,
};
