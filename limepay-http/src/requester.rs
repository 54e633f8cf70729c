//! The request executor shared by every resource client.
//!
//! A [`Requester`] sends one authenticated request and hands back the raw
//! response body. [`Requester::execute`] adds JSON encoding of the request
//! body and decoding of the response into a [`ResponseTarget`]:
//!
//! - `()` discards the body without looking at it
//! - [`String`] takes the body verbatim as text
//! - [`Json<T>`] decodes a JSON object (or scalar) into `T`
//! - [`JsonList<T>`] decodes a JSON array into `Vec<T>`
//!
//! Responses with a status of 400 or above never reach the target. Their body
//! is read as a [`ClassifiedError`] and returned as [`Error::Api`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use http::{Method, StatusCode, header};
use limepay::ClassifiedError;
use serde::Serialize;
use serde::de::{self, DeserializeOwned};

use crate::config::RequesterConfig;
use crate::error::Error;

#[cfg(feature = "telemetry")]
use tracing::{Instrument, Span};

/// Passed as the body of requests that carry none.
pub const NO_BODY: Option<&()> = None;

/// Shape a successful response body is delivered in.
pub trait ResponseTarget: Sized {
    /// Builds the target from the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body does not match the shape.
    fn from_body(body: Vec<u8>) -> Result<Self, Error>;
}

impl ResponseTarget for () {
    fn from_body(_body: Vec<u8>) -> Result<Self, Error> {
        Ok(())
    }
}

/// Invalid UTF-8 sequences are replaced rather than rejected.
impl ResponseTarget for String {
    fn from_body(body: Vec<u8>) -> Result<Self, Error> {
        Ok(Self::from_utf8(body)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}

/// A JSON response decoded into `T`.
///
/// A top-level JSON array is rejected even when `T` could be built from a
/// sequence; use [`JsonList`] for array responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwraps the decoded value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> ResponseTarget for Json<T> {
    fn from_body(body: Vec<u8>) -> Result<Self, Error> {
        if body.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'[') {
            return Err(Error::Decode {
                context: "expected a JSON object, got an array",
                source: de::Error::invalid_type(de::Unexpected::Seq, &"a JSON object"),
            });
        }
        decode(&body).map(Json)
    }
}

/// A JSON array response decoded into `Vec<T>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonList<T>(pub Vec<T>);

impl<T> JsonList<T> {
    /// Unwraps the decoded items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: DeserializeOwned> ResponseTarget for JsonList<T> {
    fn from_body(body: Vec<u8>) -> Result<Self, Error> {
        decode(&body).map(JsonList)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        context: "failed to parse response body",
        source,
    })
}

/// Transport that executes authenticated requests against the API.
///
/// Implementations must be safe to share between tasks.
pub trait Requester: Send + Sync {
    /// Sends `body` with `method` to `route` and returns the full response
    /// body of a successful (below 400) response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the method is invalid, the request
    /// cannot be sent, or the body cannot be read, and [`Error::Api`] if the
    /// server answers with a status of 400 or above.
    fn send(
        &self,
        method: &str,
        route: &str,
        body: Option<Vec<u8>>,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    /// Encodes `body` as JSON, sends it, and decodes the response into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if `body` cannot be encoded, any error of
    /// [`Requester::send`], or [`Error::Decode`] if the response does not
    /// match `R`.
    fn execute<B, R>(
        &self,
        method: &str,
        route: &str,
        body: Option<&B>,
    ) -> impl Future<Output = Result<R, Error>> + Send
    where
        B: Serialize + ?Sized,
        R: ResponseTarget + Send,
    {
        let body = body.map(serde_json::to_vec).transpose();
        async move {
            let body = body.map_err(|e| Error::transport("failed to encode request body", e))?;
            let response = self.send(method, route, body).await?;
            R::from_body(response)
        }
    }
}

impl<T: Requester> Requester for Arc<T> {
    fn send(
        &self,
        method: &str,
        route: &str,
        body: Option<Vec<u8>>,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send {
        (**self).send(method, route, body)
    }
}

/// Basic Auth credentials, fixed at construction.
struct Credentials {
    api_key: String,
    api_secret: String,
}

/// [`Requester`] over HTTP, authenticating with Basic Auth.
///
/// Cloning is cheap: clones share the connection pool and credentials.
#[derive(Clone)]
pub struct HttpRequester {
    /// Base endpoint routes are appended to
    base_url: Arc<str>,
    /// API key and secret
    credentials: Arc<Credentials>,
    /// Shared Reqwest HTTP client
    client: reqwest::Client,
    /// Optional request timeout
    timeout: Option<Duration>,
}

impl std::fmt::Debug for HttpRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequester")
            .field("base_url", &self.base_url)
            .field("api_key", &self.credentials.api_key)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpRequester {
    /// Creates a requester from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if no HTTP client was supplied and one
    /// cannot be built.
    pub fn new(config: RequesterConfig) -> Result<Self, Error> {
        let client = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| Error::transport("failed to build HTTP client", e))?,
        };
        Ok(Self {
            base_url: config.base_url.into(),
            credentials: Arc::new(Credentials {
                api_key: config.api_key,
                api_secret: config.api_secret,
            }),
            client,
            timeout: config.timeout,
        })
    }

    /// Returns the full URL of `route`: the base endpoint followed by the
    /// route, without slash normalization.
    #[must_use]
    pub fn url_for(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }

    async fn send_inner(
        &self,
        method: &str,
        route: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        let result = self.round_trip(method, route, body).await;
        record_result_on_span(&result);
        result
    }

    async fn round_trip(
        &self,
        method: &str,
        route: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|e| Error::transport("invalid HTTP method", e))?;
        let mut req = self
            .client
            .request(method, self.url_for(route))
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret));
        if let Some(body) = body {
            req = req.header(header::CONTENT_TYPE, "application/json").body(body);
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::transport("failed to send request", e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport("failed to read response body", e))?;

        if is_error_status(status) {
            return Err(Error::Api {
                status,
                error: ClassifiedError::from_body(&body),
            });
        }
        Ok(body.to_vec())
    }
}

impl Requester for HttpRequester {
    #[cfg(feature = "telemetry")]
    async fn send(
        &self,
        method: &str,
        route: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        with_span(
            self.send_inner(method, route, body),
            tracing::info_span!(
                "limepay.request",
                method,
                route,
                timeout = ?self.timeout,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty,
            ),
        )
        .await
    }

    #[cfg(not(feature = "telemetry"))]
    async fn send(
        &self,
        method: &str,
        route: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        self.send_inner(method, route, body).await
    }
}

fn is_error_status(status: StatusCode) -> bool {
    status.as_u16() >= 400
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R>(result: &Result<R, Error>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "LimePay request failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R>(_result: &Result<R, Error>) {}

#[cfg(feature = "telemetry")]
fn with_span<F: Future>(fut: F, span: Span) -> impl Future<Output = F::Output> {
    fut.instrument(span)
}
