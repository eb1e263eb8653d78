//! Main client implementation for the ToDo API

use std::sync::{Arc, OnceLock, Weak};
use std::time::Duration;

use http::Method;
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::RequestBuilder,
    resources::ToDos,
};

/// Client for the ToDo API.
///
/// Cloning is cheap: clones share one connection pool and configuration.
///
/// # Example
///
/// ```rust,no_run
/// use todo_blackbird::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder()
///     .base_url("https://todo-blackbird-3.onrender.com/api/")
///     .build()?;
///
/// let items = client.todos().list().await?;
/// println!("{} active items", items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    /// Always ends in `/` so endpoint segments land beneath it
    base_url: Url,
    timeout: Option<Duration>,
    default_headers: http::HeaderMap,

    /// Holds a weak handle back to this inner
    todos: OnceLock<ToDos>,
}

/// Handle to a [`Client`] that does not keep its connection pool alive.
#[derive(Clone)]
pub(crate) struct WeakClient(Weak<ClientInner>);

impl WeakClient {
    /// Get the client back, if any [`Client`] handle still exists.
    pub(crate) fn upgrade(&self) -> Result<Client> {
        self.0
            .upgrade()
            .map(|inner| Client { inner })
            .ok_or_else(|| Error::HttpClient("client has been dropped".to_string()))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty, unparseable, or not http/https.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client configured from `TODO_API_*` environment variables.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env())
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(config.base_url.as_deref().unwrap_or(crate::DEFAULT_BASE_URL))?;

        let mut http_builder =
            reqwest::Client::builder().user_agent(format!("todo-blackbird-rust/{}", crate::VERSION));
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|e| Error::HttpClient(format!("Invalid proxy '{}': {}", proxy, e)))?;
            http_builder = http_builder.proxy(proxy);
        }
        let http_client = http_builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                timeout: config.timeout,
                default_headers: config.default_headers,
                todos: OnceLock::new(),
            }),
        })
    }

    /// Access the ToDo endpoints.
    pub fn todos(&self) -> &ToDos {
        self.inner.todos.get_or_init(|| ToDos::new(self.downgrade()))
    }

    pub(crate) fn downgrade(&self) -> WeakClient {
        WeakClient(Arc::downgrade(&self.inner))
    }

    /// Base URL all endpoint paths are resolved against.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Build a request for the endpoint made of `segments` under the base URL.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/` or
    /// `?` stays a single path segment.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = endpoint_url(&self.inner.base_url, segments)?;

        Ok(
            RequestBuilder::new(self.inner.http_client.clone(), method, url)
                .timeout(self.inner.timeout)
                .headers(&self.inner.default_headers),
        )
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let mut url: Url = raw
        .trim()
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::InvalidUrl(format!(
                "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                scheme
            )));
        }
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Render `segments` the way [`Client::request`] puts them on the wire,
/// without a base URL.
pub(crate) fn encode_segments(segments: &[&str]) -> String {
    let Ok(base) = Url::parse("http://localhost/") else {
        return segments.join("/");
    };
    match endpoint_url(&base, segments) {
        Ok(url) => url.path().trim_start_matches('/').to_string(),
        Err(_) => segments.join("/"),
    }
}

fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Builder for creating a configured [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Layer `config` over what has been set so far.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = self.config.merge(config);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
