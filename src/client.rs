//! Hunter.io async client implementation.

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::models::{
    Account, DomainSearch, DomainSearchQuery, EmailFinderQuery, EmailVerification, FoundEmail,
    LeadList, LeadsQuery,
};
use crate::{Error, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Async client for the Hunter.io v2 API.
///
/// Use [`Client::new`] or [`Client::from_config`] for defaults, or
/// [`Client::builder`] for custom settings like the endpoint base, timeout,
/// proxy, and user agent.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    proxy: Option<String>,
    user_agent: HeaderValue,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the public Hunter.io API with the given key.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::Client;
    /// # fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Create a client from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        ClientBuilder::new()
            .api_key(config.api_key.clone())
            .base_url(config.base_url.clone())
            .timeout(config.timeout)
            .build()
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verify the deliverability of an email address.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let verification = client.verification_email("patrick@stripe.com").await?;
    /// println!("{:?} ({:?})", verification.status, verification.score);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn verification_email(&self, email: &str) -> Result<EmailVerification> {
        let params = [("email", email.to_string())];
        self.get_api("verification_email", "email-verifier", &params, &self.api_key)
            .await
    }

    /// Get plan and usage information for the configured account.
    pub async fn get_info_about_account(&self) -> Result<Account> {
        self.get_api("get_info_about_account", "account", &[], &self.api_key)
            .await
    }

    /// Get account information using a different key than the configured one.
    pub async fn get_info_about_account_with_key(&self, api_key: &str) -> Result<Account> {
        self.get_api("get_info_about_account", "account", &[], api_key)
            .await
    }

    /// List the addresses the service knows for a domain or company.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::{Client, DomainSearchQuery};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let query = DomainSearchQuery::domain("intercom.io").company("Intercom").limit(1);
    /// let result = client.search_domain(&query).await?;
    /// for email in result.emails {
    ///     println!("{} ({:?})", email.value, email.confidence);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_domain(&self, query: &DomainSearchQuery) -> Result<DomainSearch> {
        self.get_api(
            "search_domain",
            "domain-search",
            &query.params(),
            &self.api_key,
        )
        .await
    }

    /// Guess the most likely address for a person at a domain or company.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::{Client, EmailFinderQuery};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let query = EmailFinderQuery::new("reddit.com", "Alexis", "Ohanian");
    /// let found = client.email_finder(&query).await?;
    /// println!("{:?} ({:?})", found.email, found.score);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn email_finder(&self, query: &EmailFinderQuery) -> Result<FoundEmail> {
        self.get_api(
            "email_finder",
            "email-finder",
            &query.params(),
            &self.api_key,
        )
        .await
    }

    /// List the leads saved on the account.
    pub async fn get_list_of_lead(&self, query: &LeadsQuery) -> Result<LeadList> {
        self.get_api("get_list_of_lead", "leads", &query.params(), &self.api_key)
            .await
    }

    /// Common GET API request pattern.
    ///
    /// Non-2xx responses become [`Error::Status`] without their body being
    /// decoded as a payload, so they are never reported as parse failures.
    async fn get_api<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        endpoint: &str,
        params: &[(&'static str, String)],
        api_key: &str,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("{operation}: GET {url}");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("api_key", api_key)])
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::request(operation, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::request(operation, e))?;

        if !status.is_success() {
            warn!("{operation}: {endpoint} answered {status}");
            return Err(Error::status_with_body(operation, status, body));
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| Error::parse(operation, e))?;
        serde_json::from_value(Self::unwrap_data(value)).map_err(|e| Error::parse(operation, e))
    }

    /// Strip the `{"data": ..., "meta": ...}` envelope when present.
    fn unwrap_data(value: serde_json::Value) -> serde_json::Value {
        match value {
            serde_json::Value::Object(mut map) if map.get("data").is_some_and(|d| d.is_object()) => {
                map.remove("data").unwrap_or_default()
            }
            other => other,
        }
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

const USER_AGENT_VALUE: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

/// Builder for configuring a Hunter.io client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
    user_agent: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No API key (must be set before [`build`](Self::build))
    /// - Public Hunter.io v2 endpoint
    /// - 30 second request timeout
    /// - No proxy
    /// - Browser-like user agent
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Set the key appended as `api_key` to every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Total time allowed for each request, including reading the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// No network traffic happens here.
    ///
    /// # Errors
    /// [`Error::MissingApiKey`] if no non-blank key was set, and
    /// [`Error::InvalidConfig`] if the user agent is not a valid header value,
    /// or the proxy URL or TLS backend is unusable.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::time::Duration;
    /// # use hunter_client::Client;
    /// # fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::builder()
    ///     .api_key("your-api-key")
    ///     .timeout(Duration::from_secs(10))
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        let user_agent =
            HeaderValue::from_str(&self.user_agent).map_err(|e| Error::InvalidConfig {
                key: "user agent",
                reason: e.to_string(),
            })?;

        let mut builder = reqwest::Client::builder().timeout(self.timeout);

        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| Error::InvalidConfig {
                key: "proxy",
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let http = builder.build().map_err(|e| Error::InvalidConfig {
            key: "http client",
            reason: e.to_string(),
        })?;

        Ok(Client {
            http,
            api_key,
            base_url: self.base_url,
            proxy: self.proxy,
            user_agent,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
