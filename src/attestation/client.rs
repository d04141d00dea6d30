//! HTTP transport for EAS GraphQL queries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure of a single GraphQL POST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server replied with a non-success status.
    #[error("status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// The request was sent but no reply arrived (connect failure, timeout).
    #[error("no response received, {0}")]
    NoResponse(String),

    /// Anything else, such as an undecodable body.
    #[error("{0}")]
    Other(String),
}

/// Posts a JSON body to a GraphQL endpoint and returns the JSON reply.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Send `body` to `endpoint` with a single POST.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request fails or the reply is not
    /// a successful JSON response.
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, TransportError>;
}

/// [`GraphqlTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with an optional per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Option<Duration>) -> crate::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    #[tracing::instrument(skip_all, fields(%endpoint))]
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, TransportError> {
        debug!("Posting GraphQL query");

        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response.text().await.map_err(classify)?;
        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            debug!("Reply is not JSON, treating as empty: {e}");
            Value::Null
        }))
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() {
        TransportError::NoResponse(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
