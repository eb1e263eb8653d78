//! HTTP request builder

use super::Response;
use crate::error::{Error, Result};
use crate::observability::{RequestMetadata, RequestTimer, ResponseMetadata};
use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Builder for a single HTTP request.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
    http_client: reqwest::Client,
}

impl RequestBuilder {
    /// Create a new request builder sending through `http_client`.
    pub fn new(http_client: reqwest::Client, method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
            http_client,
        }
    }

    /// Set a header, returning an error if the name or value is invalid.
    ///
    /// # Errors
    /// Returns an error if the header name or value contains invalid characters.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Merge a set of already-validated headers into the request.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Set the raw request body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` as the JSON request body.
    ///
    /// # Errors
    /// Returns an error if the value cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body)?;
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(bytes);
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request once and return the response, whatever its status.
    ///
    /// # Errors
    /// Only transport failures are errors: connection problems, timeouts, or a
    /// body that could not be read. A 4xx/5xx status is returned as `Ok`.
    pub async fn send(self) -> Result<Response> {
        let Self {
            method,
            url,
            headers,
            body,
            timeout,
            http_client,
        } = self;

        let mut metadata = RequestMetadata::new(method.as_str(), url.as_str());
        if let Some(body) = &body {
            metadata = metadata.with_body_size(body.len());
        }
        metadata.log_request();

        let mut req = http_client.request(method, url).headers(headers);
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }
        if let Some(body) = body {
            req = req.body(body);
        }

        let timer = RequestTimer::start();
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                metadata.log_transport_error(timer.elapsed(), &e.to_string());
                return Err(map_transport_error(e, timeout));
            }
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| map_transport_error(e, timeout))?;
        let elapsed = timer.elapsed();

        ResponseMetadata::new(status.as_u16(), body.len(), elapsed).log(&metadata);

        Ok(Response::new(status, headers, body, elapsed))
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn header_map(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the body, if one was set.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Get the timeout.
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }
}

fn map_transport_error(err: reqwest::Error, timeout: Option<Duration>) -> Error {
    if err.is_timeout() {
        Error::Timeout(timeout.unwrap_or_default())
    } else {
        Error::from(err)
    }
}
