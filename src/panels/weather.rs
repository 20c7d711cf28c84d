use crate::client::InfoHubApi;
use crate::error::RequestError;
use crate::models::WeatherSummary;
use crate::normalize::RequestName;
use crate::request::{RequestOptions, RequestState};
use crate::validation::{validate_location_input, Validation};

/// Weather for a typed city or coordinate pair, or the server default.
pub struct WeatherPanel {
    input: String,
    active_city: Option<String>,
    validation_error: Option<RequestError>,
    request: RequestState<WeatherSummary>,
}

impl Default for WeatherPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherPanel {
    /// Starts with the server default location queued.
    pub fn new() -> Self {
        Self {
            input: String::new(),
            active_city: None,
            validation_error: None,
            request: RequestState::new(RequestOptions::named(RequestName::Weather)),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// The city sent with the last queued request; `None` means server default.
    pub fn active_city(&self) -> Option<&str> {
        self.active_city.as_deref()
    }

    pub fn request_state(&self) -> &RequestState<WeatherSummary> {
        &self.request
    }

    pub fn request_state_mut(&mut self) -> &mut RequestState<WeatherSummary> {
        &mut self.request
    }

    /// The error to show: a rejected input wins over a failed request.
    pub fn banner(&self) -> Option<&RequestError> {
        self.validation_error.as_ref().or(self.request.error())
    }

    /// Validate the input and, if it is usable, queue a fetch for it.
    ///
    /// Returns whether a fetch was queued.
    pub fn submit(&mut self) -> bool {
        if self.request.is_loading() {
            return false;
        }

        match validate_location_input(&self.input) {
            Validation::Invalid(error) => {
                tracing::warn!(code = %error.code(), input = %self.input, "location rejected");
                self.validation_error = Some(error);
                false
            }
            Validation::Valid(city) => {
                tracing::info!(city = ?city, "weather location updated");
                self.validation_error = None;
                self.active_city = city;
                self.request.request();
                true
            }
        }
    }

    /// Clear the input and go back to the server's default location.
    pub fn reset(&mut self) -> bool {
        if self.request.is_loading() {
            return false;
        }
        self.input.clear();
        self.active_city = None;
        self.validation_error = None;
        self.request.request();
        true
    }

    /// Fetch the current location again.
    pub fn refresh(&mut self) -> bool {
        if self.request.is_loading() {
            return false;
        }
        self.request.request();
        true
    }

    /// Run the queued fetch, if any.
    pub fn poll(&mut self, api: &dyn InfoHubApi) -> bool {
        let city = self.active_city.as_deref();
        self.request.poll(|| api.weather(city))
    }
}
