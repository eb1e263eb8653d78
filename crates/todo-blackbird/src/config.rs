//! Configuration for the ToDo API client

use http::HeaderMap;
use std::time::Duration;

/// Configuration for the ToDo API client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (defaults to [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL))
    pub base_url: Option<String>,

    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    ///
    /// This will look for:
    /// - `TODO_API_BASE_URL` for the API base URL
    /// - `TODO_API_TIMEOUT` for request timeout (in seconds)
    /// - `TODO_API_PROXY` for HTTP proxy
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_url) = env::var("TODO_API_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var("TODO_API_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Some(Duration::from_secs(timeout_secs));
        }

        if let Ok(proxy) = env::var("TODO_API_PROXY") {
            config.proxy = Some(proxy);
        }

        config
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }

        self
    }
}

/// Server-side records the contract cases rely on.
///
/// The positive cases need ids that already exist on the server; the negative
/// cases need one that never will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    /// Item fetched by id
    pub existing_id: String,
    /// Item whose name and description are rewritten
    pub update_id: String,
    /// Item whose status is changed
    pub status_id: String,
    /// Item that gets soft-deleted
    pub delete_id: String,
    /// Id that no item has
    pub missing_id: String,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            existing_id: "66edc6866001ea84da10b60b".to_string(),
            update_id: "66edc6856001ea84da10b60a".to_string(),
            status_id: "66fb3490215a0ba7a87f0fba".to_string(),
            delete_id: "66fb3aab215a0ba7a87f0fbe".to_string(),
            missing_id: "nonexistent-id".to_string(),
        }
    }
}

impl Fixtures {
    /// Load fixture ids from the environment, keeping defaults for unset ones.
    ///
    /// Reads `TODO_API_EXISTING_ID`, `TODO_API_UPDATE_ID`, `TODO_API_STATUS_ID`,
    /// `TODO_API_DELETE_ID` and `TODO_API_MISSING_ID`.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut fixtures = Self::default();
        let slots = [
            ("TODO_API_EXISTING_ID", &mut fixtures.existing_id),
            ("TODO_API_UPDATE_ID", &mut fixtures.update_id),
            ("TODO_API_STATUS_ID", &mut fixtures.status_id),
            ("TODO_API_DELETE_ID", &mut fixtures.delete_id),
            ("TODO_API_MISSING_ID", &mut fixtures.missing_id),
        ];
        for (var, slot) in slots {
            if let Ok(value) = std::env::var(var)
                && !value.trim().is_empty()
            {
                *slot = value;
            }
        }

        fixtures
    }
}
