use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ApiClientError, FetchError};
use crate::models::*;

/// Message used whenever the server could not be reached at all.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "We could not reach the InfoHub service. Check your connection and retry.";

// ---------------------------------------------------------------------------
// The seam panels talk to
// ---------------------------------------------------------------------------

/// Operations offered by the InfoHub backend.
///
/// [`InfoHubClient`] is the HTTP implementation; tests and alternative
/// frontends can provide their own.
pub trait InfoHubApi {
    /// Current weather for `city`, or for the server's default location.
    fn weather(&self, city: Option<&str>) -> Result<WeatherSummary, FetchError>;

    /// Convert an INR `amount` to USD and EUR.
    fn convert_currency(&self, amount: f64) -> Result<CurrencyConversion, FetchError>;

    /// A random motivational quote.
    fn quote(&self) -> Result<Quote, FetchError>;
}

// ---------------------------------------------------------------------------
// Internal response handling
// ---------------------------------------------------------------------------

/// Error body convention used by the backend: `{ "error": "..." }`.
#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
}

/// Message for a failed response whose body did not explain itself.
fn fallback_message(status: StatusCode) -> &'static str {
    if status == StatusCode::NOT_FOUND {
        "We couldn't find any results for that request. Try adjusting what you entered and try again."
    } else if status.is_client_error() {
        "We couldn't process that request. Check what you entered and try again."
    } else if status.is_server_error() {
        "The InfoHub service is having trouble right now. Please try again in a moment."
    } else {
        "Something went wrong while contacting the InfoHub service."
    }
}

struct BaseClient {
    base_url: String,
    http: Client,
}

impl BaseClient {
    fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiClientError::network(format!("Could not set up the HTTP client: {e}"), e))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Send a GET and decode the JSON body into `T`.
    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| ApiClientError::network(NETWORK_FAILURE_MESSAGE, e))?;
        self.handle_response(response)
    }

    /// Map the status code to either a decoded body or an [`ApiClientError`].
    fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, FetchError> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "response");

        if status.is_success() {
            let body = response
                .text()
                .map_err(|e| ApiClientError::network(NETWORK_FAILURE_MESSAGE, e))?;
            return Ok(serde_json::from_str(&body)?);
        }

        // An unreadable error body is not worth surfacing; the status says enough.
        let message = response
            .json::<ErrorPayload>()
            .ok()
            .and_then(|payload| payload.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback_message(status).to_string());

        Err(ApiClientError::new(status.as_u16(), message).into())
    }
}

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the InfoHub API.
///
/// ```no_run
/// use infohub::{ClientConfig, InfoHubApi, InfoHubClient};
///
/// let client = InfoHubClient::new(&ClientConfig::new("http://localhost:3001/api")).unwrap();
/// let quote = client.quote().unwrap();
/// println!("{} — {}", quote.text, quote.author);
/// ```
pub struct InfoHubClient {
    base: BaseClient,
}

impl InfoHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        Ok(Self {
            base: BaseClient::new(config)?,
        })
    }

    /// The normalized base URL every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base.base_url
    }
}

impl InfoHubApi for InfoHubClient {
    fn weather(&self, city: Option<&str>) -> Result<WeatherSummary, FetchError> {
        let query: Vec<(&str, String)> = match city {
            Some(c) if !c.is_empty() => vec![("city", c.to_string())],
            _ => Vec::new(),
        };
        self.base.get("/weather", &query)
    }

    fn convert_currency(&self, amount: f64) -> Result<CurrencyConversion, FetchError> {
        self.base.get("/currency", &[("amount", amount.to_string())])
    }

    fn quote(&self) -> Result<Quote, FetchError> {
        self.base.get("/quote", &[])
    }
}
