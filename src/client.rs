//! Postcode API async client implementation.

use crate::{Address, ApiError, Error, LookupLogger, Result, TracingLogger};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Async client for the Dutch Postcode API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like a different endpoint, timeout, proxy, or failure logger.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    api_key: HeaderValue,
    base_url: String,
    logger: Arc<dyn LookupLogger>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the given API key with default settings.
    ///
    /// Fails with [`Error::Config`] when the key is empty.
    ///
    /// # Examples
    /// ```
    /// # use postcode_api::Client;
    /// let client = Client::new("my-api-key")?;
    /// # Ok::<(), postcode_api::Error>(())
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// The endpoint requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up the first address matching a postcode and optional house number.
    ///
    /// Without a house number the API is queried for every address at the
    /// postcode, and the first one is returned.
    ///
    /// Every failure (invalid key, no match, server error, network or JSON
    /// problems) is reported to the configured [`LookupLogger`] and turned
    /// into `None`. Use [`Client::try_get_address`] to get the error instead.
    ///
    /// # Examples
    /// ```no_run
    /// # use postcode_api::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postcode_api::Error> {
    /// let client = Client::new("my-api-key")?;
    /// if let Some(address) = client.get_address("6545CA", Some("29")).await {
    ///     println!("{:?} {:?}", address.street(), address.town());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_address(
        &self,
        postcode: &str,
        house_number: Option<&str>,
    ) -> Option<Address> {
        match self.try_get_address(postcode, house_number).await {
            Ok(address) => address,
            Err(err) => {
                self.logger
                    .lookup_failed(postcode, house_number.unwrap_or_default(), &err);
                None
            }
        }
    }

    /// Look up the first address matching a postcode and optional house number.
    ///
    /// Returns `Ok(None)` when the API answers successfully without any
    /// address, and an [`Error`] for every failure.
    ///
    /// # Examples
    /// ```no_run
    /// # use postcode_api::{ApiError, Client, Error};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postcode_api::Error> {
    /// let client = Client::new("my-api-key")?;
    /// match client.try_get_address("6545CA", None).await {
    ///     Ok(Some(address)) => println!("{:?}", address.town()),
    ///     Ok(None) | Err(Error::Api(ApiError::NotFound)) => println!("no match"),
    ///     Err(err) => return Err(err),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn try_get_address(
        &self,
        postcode: &str,
        house_number: Option<&str>,
    ) -> Result<Option<Address>> {
        let query = [
            ("postcode", postcode),
            ("number", house_number.unwrap_or_default()),
        ];

        Ok(self.request(ADDRESSES_PATH, &query).await?.map(Address::new))
    }

    /// Common GET API request pattern.
    ///
    /// Returns the first address of the `_embedded.addresses` envelope, or
    /// `None` when the list is missing, empty, or starts with a non-object.
    async fn request(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<Map<String, Value>>> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .headers(self.headers())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::from_status(status.as_u16()).into());
        }

        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        let address = envelope
            .embedded
            .and_then(|embedded| embedded.addresses)
            .and_then(|addresses| addresses.into_iter().next())
            .and_then(|first| match first {
                Value::Object(map) => Some(map),
                _ => None,
            });

        tracing::debug!(%url, found = address.is_some(), "Postcode API response");
        Ok(address)
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, self.api_key.clone());
        headers
    }
}

/// Response wrapper around the list of matching addresses.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "_embedded", default)]
    embedded: Option<Embedded>,
}

#[derive(Debug, Deserialize)]
struct Embedded {
    #[serde(default)]
    addresses: Option<Vec<Value>>,
}

const BASE_URL: &str = "https://postcode-api.apiwise.nl/v2/";
const ADDRESSES_PATH: &str = "addresses/";
const API_KEY_HEADER: &str = "x-api-key";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Postcode API client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    proxy: Option<String>,
    logger: Arc<dyn LookupLogger>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No API key (must be set before [`build`](Self::build))
    /// - `https://postcode-api.apiwise.nl/v2/` endpoint
    /// - 10 second request timeout
    /// - `postcode-api/<version>` user agent
    /// - No proxy
    /// - [`TracingLogger`] for swallowed failures
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT_VALUE.to_string(),
            proxy: None,
            logger: Arc::new(TracingLogger),
        }
    }

    /// Set the API key sent as `X-Api-Key`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API endpoint. A trailing `/` is added when missing.
    ///
    /// Useful for testing or when the API moves.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set the per-request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Replace the sink that receives failures swallowed by
    /// [`Client::get_address`].
    pub fn logger(mut self, logger: Arc<dyn LookupLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Config`] when no API key, or an empty one, was
    /// given, or when the key cannot be sent as a header value.
    pub fn build(self) -> Result<Client> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::Config("missing api key".to_string())),
        };
        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|_| Error::Config("api key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            default_headers.insert(USER_AGENT, value);
        }

        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(default_headers);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            api_key,
            base_url: self.base_url,
            logger: self.logger,
        })
    }
}
