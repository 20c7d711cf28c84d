use crate::client::InfoHubApi;
use crate::error::RequestError;
use crate::models::Quote;
use crate::normalize::RequestName;
use crate::request::{RequestOptions, RequestState};

/// A motivational quote, replaced on demand.
pub struct QuotesPanel {
    request: RequestState<Quote>,
}

impl Default for QuotesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotesPanel {
    pub fn new() -> Self {
        Self {
            request: RequestState::new(RequestOptions::named(RequestName::Quotes)),
        }
    }

    pub fn request_state(&self) -> &RequestState<Quote> {
        &self.request
    }

    pub fn request_state_mut(&mut self) -> &mut RequestState<Quote> {
        &mut self.request
    }

    pub fn banner(&self) -> Option<&RequestError> {
        self.request.error()
    }

    pub fn next_quote(&mut self) -> bool {
        if self.request.is_loading() {
            return false;
        }
        self.request.request();
        true
    }

    pub fn poll(&mut self, api: &dyn InfoHubApi) -> bool {
        self.request.poll(|| api.quote())
    }
}
