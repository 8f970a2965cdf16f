//! Pre-configured client for the waifu.pics image API.

use once_cell::sync::Lazy;
use reqwest::{Client, Response, StatusCode};
use std::collections::HashMap;
use thiserror::Error;

/// Default base URL of the image API.
pub const DEFAULT_BASE_URL: &str = "https://api.waifu.pics";

/// Path of the safe-for-work waifu endpoint, relative to the base URL.
pub const WAIFU_PATH: &str = "/sfw/waifu";

/// API client errors.
///
/// Use [`ApiError::status`] to get the HTTP status when the server answered.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("API returned status {0}")]
    Status(StatusCode),
}

impl ApiError {
    /// HTTP status carried by the failure, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::RequestFailed(e) => e.status(),
            ApiError::Status(status) => Some(*status),
        }
    }
}

/// Connection defaults for the image API.
///
/// Only the base URL can be changed; the header set is fixed.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    headers: HashMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers,
        }
    }
}

impl ApiConfig {
    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Client for the waifu.pics API.
///
/// The configuration is fixed at construction. Calls are independent of each
/// other and may run concurrently.
///
/// # Example
/// ```rust,no_run
/// use waifu_client::WaifuClient;
///
/// # async fn run() -> Result<(), waifu_client::ApiError> {
/// let client = WaifuClient::with_defaults();
/// let response = client.get_waifu().await?;
/// println!("{}", response.text().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WaifuClient {
    config: ApiConfig,
    client: Client,
}

impl WaifuClient {
    /// Create a new WaifuClient with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a new WaifuClient with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ApiConfig::default())
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full URL targeted by [`WaifuClient::get_waifu`].
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), WAIFU_PATH)
    }

    /// Fetch a random SFW waifu.
    ///
    /// Issues a single `GET` to the waifu endpoint and hands back the response
    /// untouched. Non-2xx statuses come back as an [`ApiError`] exposing the
    /// status code. No retries are attempted and no timeout is imposed beyond
    /// what the HTTP stack does by default.
    pub async fn get_waifu(&self) -> Result<Response, ApiError> {
        let url = self.endpoint_url();
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        for (name, value) in &self.config.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response)
    }
}

static WAIFU_API: Lazy<WaifuClient> = Lazy::new(WaifuClient::with_defaults);

/// Process-wide client built from [`ApiConfig::default`] on first use.
pub fn default_client() -> &'static WaifuClient {
    &WAIFU_API
}

/// Fetch a random SFW waifu using the process-wide default client.
pub async fn get_waifu() -> Result<Response, ApiError> {
    default_client().get_waifu().await
}
