//! Pooled async client for the Betfair historical data API.

use std::time::{Duration, Instant};

use historicdata_types::{ApiError, ApiErrorCause, CollectionParams};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::url;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Configuration for the historical data client.
///
/// Read-only once the client is constructed; the base URLs default to the
/// fixed production endpoints and are never mutated at runtime.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Session token sent as the `ssoid` header on every request.
    pub session_token: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Read timeout applied to each request.
    pub read_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Base URL of the JSON API.
    pub base_url: String,
    /// URL of the file download endpoint.
    pub download_url: String,
}

impl ClientConfig {
    /// Creates a configuration with the given session token and default
    /// timeouts and endpoints.
    pub fn new(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_token: String::new(),
            connect_timeout: Duration::from_millis(3_050),
            read_timeout: Duration::from_secs(16),
            user_agent: format!("historicdata/{}", env!("CARGO_PKG_VERSION")),
            base_url: url::BASE_URL.to_string(),
            download_url: url::DOWNLOAD_URL.to_string(),
        }
    }
}

/// Errors returned by [`HistoricalDataClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failure in the shared JSON request path.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body that could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport failure on the file download path.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure on the file download path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Async client for the Betfair historical data REST API.
///
/// Holds one pooled [`reqwest::Client`], so sequential calls through the same
/// instance reuse connections. Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct HistoricalDataClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl HistoricalDataClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            // Keep connections alive for reuse across sequential calls
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { http, config })
    }

    /// Creates a client around a caller-supplied HTTP session instead of
    /// building a new one.
    ///
    /// Pool and connect-timeout settings already baked into `http` take
    /// precedence over the config's.
    #[must_use]
    pub const fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns descriptions of the data purchased by the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn my_data(&self) -> Result<Value> {
        let (response, _) = self.request(url::GET_MY_DATA, &empty_params()).await?;
        Ok(response)
    }

    /// Returns file counts grouped by market type, country and file type for
    /// the collections matching `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn collection_options(&self, params: &CollectionParams) -> Result<Value> {
        let (response, _) = self.request(url::GET_COLLECTION_OPTIONS, params).await?;
        Ok(response)
    }

    /// Returns the file count and combined size of the collections matching
    /// `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn data_size(&self, params: &CollectionParams) -> Result<Value> {
        let (response, _) = self.request(url::GET_ADV_BASKET_DATA_SIZE, params).await?;
        Ok(response)
    }

    /// Returns the list of downloadable files matching `params`.
    ///
    /// Each entry carries a server-relative path that can be fed to
    /// [`Self::download_file`](Self::download_file).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn file_list(&self, params: &CollectionParams) -> Result<Value> {
        let (response, _) = self.request(url::DOWNLOAD_LIST_OF_FILES, params).await?;
        Ok(response)
    }

    /// Shared execution path for the JSON API methods.
    ///
    /// Returns the parsed body and the wall-clock duration of the call; the
    /// duration is diagnostic only and discarded by the public operations.
    async fn request(&self, method: &str, params: &impl Serialize) -> Result<(Value, Duration)> {
        // Serialized here with an explicit serde_json call so the codec is
        // wired in as configuration, never through reqwest's own JSON helper.
        let params = serde_json::to_value(params)?;
        let body = params.to_string();

        let started = Instant::now();
        let send_result = self
            .http
            .post(url::method_url(&self.config.base_url, method))
            .header("ssoid", &self.config.session_token)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.config.read_timeout)
            .body(body)
            .send()
            .await;

        let response = match send_result {
            Ok(response) => response,
            Err(e) => return Err(api_error(method, params, None, transport_cause(&e)).into()),
        };
        let status = response.status();
        let raw = match response.bytes().await {
            Ok(raw) => raw,
            Err(e) => {
                let cause = ApiErrorCause::Transport(e.to_string());
                return Err(api_error(method, params, None, cause).into());
            }
        };
        let elapsed = started.elapsed();

        // Parsed before the status check: a non-success reply with an
        // unparsable body surfaces as a JSON error, not a status error.
        let parsed: Value = serde_json::from_slice(&raw)?;
        if !status.is_success() {
            let cause = ApiErrorCause::Status {
                status: status.as_u16(),
            };
            return Err(api_error(method, params, Some(parsed), cause).into());
        }

        tracing::debug!(
            method,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "request completed"
        );
        Ok((parsed, elapsed))
    }
}

fn empty_params() -> Value {
    Value::Object(serde_json::Map::new())
}

fn api_error(method: &str, params: Value, response: Option<Value>, cause: ApiErrorCause) -> ApiError {
    ApiError {
        response,
        method: method.to_string(),
        params,
        cause,
    }
}

fn transport_cause(e: &reqwest::Error) -> ApiErrorCause {
    if e.is_connect() {
        ApiErrorCause::Connection
    } else {
        ApiErrorCause::Transport(e.to_string())
    }
}
