use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::utils::error::TransportError;

/// What the ingestion server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

/// Posts raw packet bytes to the ingestion endpoint.
///
/// One request per call and no retries: a transport failure is handed back
/// to the caller untouched.
#[derive(Debug, Clone)]
pub struct HttpSender {
    client: Client,
    url: Url,
}

impl HttpSender {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends `bytes` as the request body and waits for the full response.
    pub async fn send(&self, bytes: &[u8]) -> Result<Response, TransportError> {
        let request_error = |source| TransportError::Request {
            url: self.url.to_string(),
            source,
        };

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"))
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response.text().await.map_err(request_error)?;
        debug!(%status, bytes = bytes.len(), "POST {}", self.url);

        Ok(Response { status, body })
    }
}
