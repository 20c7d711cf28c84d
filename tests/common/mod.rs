//! Shared fixtures: sample payloads and a scripted `InfoHubApi` double.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use infohub::{
    ApiClientError, CurrencyConversion, ExchangeRates, FetchError, InfoHubApi, Quote,
    WeatherConditions, WeatherLocation, WeatherSummary,
};

pub fn sample_weather(name: &str) -> WeatherSummary {
    WeatherSummary {
        location: WeatherLocation {
            name: name.to_string(),
            country: "IN".to_string(),
        },
        conditions: WeatherConditions {
            temperature_c: 28.4,
            temperature_f: 83.12,
            description: "scattered clouds".to_string(),
            icon: Some("03d".to_string()),
            humidity: Some(72.0),
        },
        observed_at: "2025-02-01T09:30:00.000Z".to_string(),
    }
}

pub fn sample_conversion(amount: f64) -> CurrencyConversion {
    CurrencyConversion {
        base: "INR".to_string(),
        amount,
        rates: ExchangeRates {
            usd: amount * 0.012,
            eur: amount * 0.011,
        },
        fetched_at: "2025-02-01T09:30:00.000Z".to_string(),
    }
}

pub fn sample_quote() -> Quote {
    Quote {
        text: "Small steps every day.".to_string(),
        author: "InfoHub".to_string(),
        source: None,
    }
}

pub fn client_error(status: u16, message: &str) -> FetchError {
    FetchError::Client(ApiClientError::new(status, message))
}

/// Answers each endpoint from its own queue and records every call.
///
/// An empty queue answers with a canned success so tests only need to script
/// the calls they care about.
#[derive(Default)]
pub struct ScriptedApi {
    pub weather_replies: RefCell<VecDeque<Result<WeatherSummary, FetchError>>>,
    pub currency_replies: RefCell<VecDeque<Result<CurrencyConversion, FetchError>>>,
    pub quote_replies: RefCell<VecDeque<Result<Quote, FetchError>>>,
    pub weather_calls: RefCell<Vec<Option<String>>>,
    pub currency_calls: RefCell<Vec<f64>>,
    pub quote_calls: RefCell<usize>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weather(self, reply: Result<WeatherSummary, FetchError>) -> Self {
        self.weather_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_currency(self, reply: Result<CurrencyConversion, FetchError>) -> Self {
        self.currency_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_quote(self, reply: Result<Quote, FetchError>) -> Self {
        self.quote_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn weather_call_count(&self) -> usize {
        self.weather_calls.borrow().len()
    }

    pub fn currency_call_count(&self) -> usize {
        self.currency_calls.borrow().len()
    }
}

impl InfoHubApi for ScriptedApi {
    fn weather(&self, city: Option<&str>) -> Result<WeatherSummary, FetchError> {
        self.weather_calls.borrow_mut().push(city.map(str::to_string));
        self.weather_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_weather(city.unwrap_or("Hyderabad"))))
    }

    fn convert_currency(&self, amount: f64) -> Result<CurrencyConversion, FetchError> {
        self.currency_calls.borrow_mut().push(amount);
        self.currency_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_conversion(amount)))
    }

    fn quote(&self) -> Result<Quote, FetchError> {
        *self.quote_calls.borrow_mut() += 1;
        self.quote_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_quote()))
    }
}

/// Hands a [`ScriptedApi`] to an owner (such as `AppState`) while the test
/// keeps a handle to inspect the recorded calls.
#[derive(Clone, Default)]
pub struct SharedApi(pub std::rc::Rc<ScriptedApi>);

impl SharedApi {
    pub fn new(api: ScriptedApi) -> Self {
        Self(std::rc::Rc::new(api))
    }
}

impl InfoHubApi for SharedApi {
    fn weather(&self, city: Option<&str>) -> Result<WeatherSummary, FetchError> {
        self.0.weather(city)
    }

    fn convert_currency(&self, amount: f64) -> Result<CurrencyConversion, FetchError> {
        self.0.convert_currency(amount)
    }

    fn quote(&self) -> Result<Quote, FetchError> {
        self.0.quote()
    }
}
