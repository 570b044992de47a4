//! Main Fody API client implementation.

use crate::api::*;
use crate::config::ClientConfig;
use fody_core::{Contact, FodyError, Handler, OrgIdList, Query, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main Fody API client.
///
/// Holds one HTTP session (connection pool plus the login token). Every call
/// is a single awaited round trip; nothing is cached, retried or run in
/// parallel. The underlying [`reqwest::Client`] is `Send + Sync`, so a client
/// can be shared across tasks. Clones share the connection pool but each
/// carries its own copy of the token.
#[derive(Clone)]
pub struct FodyClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for FodyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FodyClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl FodyClient {
    /// Create an unauthenticated client for `base_url` using default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        FodyClientBuilder::new(base_url).build()
    }

    /// Create a client and log in with the given credentials
    pub async fn connect(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        FodyClientBuilder::new(base_url)
            .credentials(username, password)
            .connect()
            .await
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> FodyClientBuilder {
        FodyClientBuilder::new(base_url)
    }

    /// Access contact database endpoints
    #[must_use]
    pub fn contactdb(&self) -> ContactDbApi<'_> {
        ContactDbApi::new(self)
    }

    /// Access event database endpoints
    #[must_use]
    pub fn events(&self) -> EventsApi<'_> {
        EventsApi::new(self)
    }

    /// Access ticket database endpoints
    #[must_use]
    pub fn tickets(&self) -> TicketsApi<'_> {
        TicketsApi::new(self)
    }

    /// Access ticket/event cross-check endpoints
    #[must_use]
    pub fn check_ticket(&self) -> CheckTicketApi<'_> {
        CheckTicketApi::new(self)
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true once a login token is attached to the session
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Log in and attach the returned token to all further requests.
    ///
    /// On failure any previously stored token is kept.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}/api/login", self.base_url);
        debug!(url = %url, username, "POST login");

        let request = self
            .http
            .post(&url)
            .form(&[("username", username), ("password", password)]);
        let body: Value = self.execute(request).await?;

        let token = match body.get("login_token") {
            Some(Value::String(token)) => token.clone(),
            Some(other) => {
                return Err(FodyError::Decode(format!(
                    "login_token is not a string: {other}"
                )));
            }
            None => return Err(FodyError::MissingToken),
        };

        info!(username, "logged in to Fody");
        self.token = Some(token);
        Ok(())
    }

    /// Fetch the API documentation the backend serves at its base URL
    pub async fn api_documentation(&self) -> Result<Value> {
        debug!(url = %self.base_url, "GET request");
        let request = self.authorized(self.http.get(&self.base_url));
        self.execute(request).await
    }

    /// Generic search against `/api/{handler}/{endpoint}`.
    ///
    /// `handler` must be one of `contactdb`, `events`, `tickets` or
    /// `checkticket`; anything else fails with [`FodyError::UnknownHandler`]
    /// without touching the network.
    pub async fn search(&self, handler: &str, endpoint: &str, query: &Query) -> Result<Value> {
        let handler: Handler = handler.parse()?;
        self.dispatch(handler, endpoint, query).await
    }

    /// Fetch the full contact record for every ID in `ids`.
    ///
    /// Manual contacts come first, then automatic ones, each in the order
    /// returned by the backend. This issues one request per ID, one after the
    /// other, so latency grows linearly with the number of matches. The first
    /// failing lookup aborts the whole resolution.
    pub async fn resolve_contacts(&self, ids: &OrgIdList) -> Result<Vec<Contact>> {
        debug!(
            manual = ids.manual.len(),
            auto = ids.auto.len(),
            "resolving contact IDs"
        );

        let mut contacts = Vec::with_capacity(ids.len());
        for path in ids.org_paths() {
            contacts.push(self.dispatch(Handler::ContactDb, &path, &Query::new()).await?);
        }
        Ok(contacts)
    }

    /// Close the session.
    ///
    /// Clones share the connection pool, so pooled connections are released
    /// only once the last clone is closed or dropped.
    pub fn close(self) {
        debug!(url = %self.base_url, "closing Fody session");
    }

    /// GET `/api/{handler}/{endpoint}` with `query` form-encoded in the body.
    ///
    /// The backend expects the parameters in the body even on GET.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        handler: Handler,
        endpoint: &str,
        query: &Query,
    ) -> Result<T> {
        let url = format!("{}/api/{handler}/{endpoint}", self.base_url);
        debug!(url = %url, params = query.len(), "GET request");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.form(query);
        }

        self.execute(self.authorized(request)).await
    }

    /// GET `/api/{resource}?id={id}`, bypassing the handler whitelist
    pub(crate) async fn get_by_id<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> Result<T> {
        let url = format!("{}/api/{resource}", self.base_url);
        debug!(url = %url, id, "GET request");

        let request = self.http.get(&url).query(&[("id", id)]);
        self.execute(self.authorized(request)).await
    }

    /// Attach the login token, if any
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, token),
            None => request,
        }
    }

    /// Send a request and decode a 200 response as JSON
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Fody rejected request");
            return Err(FodyError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(FodyError::from)
    }
}

/// Map a reqwest failure onto our error taxonomy
fn transport_error(err: reqwest::Error) -> FodyError {
    if err.is_timeout() {
        FodyError::Timeout
    } else {
        FodyError::Transport(err.to_string())
    }
}

/// Builder for configuring a [`FodyClient`]
pub struct FodyClientBuilder {
    base_url: String,
    credentials: Option<(String, String)>,
    token: Option<String>,
    verify_tls: bool,
    timeout: Duration,
    user_agent: String,
}

impl FodyClientBuilder {
    /// Create a new builder for the backend at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            token: None,
            verify_tls: true,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("fody-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a builder from a [`ClientConfig`]
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new(config.url.clone())
            .verify_tls(config.verify_tls)
            .timeout(config.timeout());

        if let Some((username, password)) = config.credentials() {
            builder = builder.credentials(username, password);
        }
        if let Some(token) = &config.token {
            builder = builder.token(token.clone());
        }
        builder
    }

    /// Username and password used by [`connect`](Self::connect)
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Use an already issued login token instead of logging in
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Verify the backend's TLS certificate (default: on)
    #[must_use]
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client without contacting the backend
    pub fn build(self) -> Result<FodyClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| FodyError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FodyError::InvalidUrl(format!(
                "{base_url}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = tls_settings(HttpClient::builder(), self.verify_tls)
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| FodyError::Config(e.to_string()))?;

        Ok(FodyClient {
            http,
            base_url,
            token: self.token,
        })
    }

    /// Build the client and log in if credentials were given
    pub async fn connect(mut self) -> Result<FodyClient> {
        let credentials = self.credentials.take();
        let mut client = self.build()?;

        if let Some((username, password)) = credentials {
            client.login(&username, &password).await?;
        }
        Ok(client)
    }
}

#[cfg(any(feature = "rustls", feature = "native-tls"))]
fn tls_settings(builder: reqwest::ClientBuilder, verify: bool) -> reqwest::ClientBuilder {
    builder.danger_accept_invalid_certs(!verify)
}

#[cfg(not(any(feature = "rustls", feature = "native-tls")))]
fn tls_settings(builder: reqwest::ClientBuilder, _verify: bool) -> reqwest::ClientBuilder {
    builder
}
