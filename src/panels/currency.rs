use crate::client::InfoHubApi;
use crate::error::RequestError;
use crate::models::CurrencyConversion;
use crate::normalize::RequestName;
use crate::request::{RequestOptions, RequestState};
use crate::validation::{accept_amount_keystroke, validate_currency_amount, Validation};

/// Amount converted when the panel first loads.
pub const DEFAULT_AMOUNT: f64 = 100.0;

/// INR to USD/EUR conversion.
pub struct CurrencyPanel {
    input: String,
    selected_amount: f64,
    validation_error: Option<RequestError>,
    keystroke_warning: Option<&'static str>,
    request: RequestState<CurrencyConversion>,
}

impl Default for CurrencyPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyPanel {
    /// Starts with a conversion of [`DEFAULT_AMOUNT`] queued.
    pub fn new() -> Self {
        Self {
            input: "100".to_string(),
            selected_amount: DEFAULT_AMOUNT,
            validation_error: None,
            keystroke_warning: None,
            request: RequestState::new(RequestOptions::named(RequestName::Currency)),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.keystroke_warning = None;
    }

    /// Type one character; anything that cannot be part of an amount is
    /// refused and leaves an inline warning instead.
    pub fn push_char(&mut self, c: char) -> bool {
        match accept_amount_keystroke(&self.input, c) {
            Ok(()) => {
                self.input.push(c);
                self.keystroke_warning = None;
                true
            }
            Err(warning) => {
                self.keystroke_warning = Some(warning);
                false
            }
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.keystroke_warning = None;
    }

    pub fn keystroke_warning(&self) -> Option<&'static str> {
        self.keystroke_warning
    }

    pub fn selected_amount(&self) -> f64 {
        self.selected_amount
    }

    pub fn request_state(&self) -> &RequestState<CurrencyConversion> {
        &self.request
    }

    pub fn request_state_mut(&mut self) -> &mut RequestState<CurrencyConversion> {
        &mut self.request
    }

    pub fn banner(&self) -> Option<&RequestError> {
        self.validation_error.as_ref().or(self.request.error())
    }

    /// Validate the amount and queue a conversion.
    ///
    /// Submitting the amount that is already selected refreshes the rates.
    pub fn submit(&mut self) -> bool {
        if self.request.is_loading() {
            return false;
        }

        match validate_currency_amount(&self.input) {
            Validation::Invalid(error) => {
                tracing::warn!(code = %error.code(), input = %self.input, "amount rejected");
                self.validation_error = Some(error);
                false
            }
            Validation::Valid(amount) => {
                self.validation_error = None;
                self.input = self.input.trim().to_string();
                if amount == self.selected_amount {
                    tracing::info!(amount, "same amount submitted, refreshing rates");
                } else {
                    tracing::info!(amount, "conversion amount updated");
                    self.selected_amount = amount;
                }
                self.request.request();
                true
            }
        }
    }

    pub fn refresh(&mut self) -> bool {
        if self.request.is_loading() {
            return false;
        }
        self.request.request();
        true
    }

    pub fn poll(&mut self, api: &dyn InfoHubApi) -> bool {
        let amount = self.selected_amount;
        self.request.poll(|| api.convert_currency(amount))
    }
}
