//! API gateway: one entry point for every backend call.
//!
//! [`ApiClient`] prefixes the configured base URL, attaches the bearer token, enforces the
//! request timeout and maps non-success statuses to [`ApiError`]. A 401 ends the session before
//! the error is returned.

pub mod endpoints;
#[cfg(feature = "web")]
pub mod reqwasm;
pub mod session;
pub mod transport;

#[cfg(test)]
mod tests;

use std::time::Duration;

use dioxus_logger::tracing;
use futures::future::{self, Either};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    error::api::ApiError,
    export::{filename_from_content_disposition, Download},
    util::time::sleep,
};

pub use self::{
    session::{MemorySession, Session},
    transport::{HttpRequest, HttpResponse, Method, Transport, TransportError},
};

#[cfg(feature = "web")]
pub use self::{reqwasm::ReqwasmTransport, session::BrowserSession};

pub struct ApiClient<T, S> {
    base_url: String,
    timeout: Duration,
    transport: T,
    session: S,
}

impl<T: Transport, S: Session> ApiClient<T, S> {
    pub fn new(config: &Config, transport: T, session: S) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            timeout: config.api_timeout,
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Sends a request and checks its status.
    ///
    /// # Returns
    /// - `Ok(HttpResponse)` - The backend answered with a 2xx status
    /// - `Err(ApiError::Timeout)` - No answer within the configured timeout
    /// - `Err(ApiError::Unauthorized)` - 401, the session has been ended
    /// - `Err(ApiError)` - Any other transport failure or non-success status
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
        };

        tracing::debug!("{} {}", method.as_str(), request.url);

        let send = self.transport.send(request);
        let deadline = sleep(self.timeout);
        futures::pin_mut!(send, deadline);

        let response = match future::select(send, deadline).await {
            Either::Left((result, _)) => result?,
            Either::Right(_) => {
                tracing::warn!(
                    "{} {} timed out after {:?}",
                    method.as_str(),
                    endpoint,
                    self.timeout
                );

                return Err(ApiError::Timeout);
            }
        };

        match ApiError::from_status(response.status, &response.body) {
            None => Ok(response),
            Some(ApiError::Unauthorized) => {
                self.session.end();

                Err(ApiError::Unauthorized)
            }
            Some(err) => Err(err),
        }
    }

    /// GET with query parameters. Parameters whose value is `None` are left out.
    pub async fn get<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<R, ApiError> {
        let endpoint = with_query(endpoint, query);
        let response = self.request(Method::Get, &endpoint, None).await?;

        decode(&response)
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.send_json(Method::Post, endpoint, Some(encode(body)?))
            .await
    }

    /// POST without a body, used by state transitions such as approving an offer.
    pub async fn post_empty<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.send_json(Method::Post, endpoint, None).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.send_json(Method::Put, endpoint, Some(encode(body)?))
            .await
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.send_json(Method::Patch, endpoint, Some(encode(body)?))
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, endpoint, None).await?;

        Ok(())
    }

    /// Fetches a binary file.
    ///
    /// The file name comes from `Content-Disposition` when present, otherwise `fallback_name`.
    pub async fn download(
        &self,
        endpoint: &str,
        query: &[(&str, Option<String>)],
        fallback_name: &str,
    ) -> Result<Download, ApiError> {
        let endpoint = with_query(endpoint, query);
        let response = self.request(Method::Get, &endpoint, None).await?;

        let filename = response
            .header("content-disposition")
            .and_then(filename_from_content_disposition)
            .unwrap_or_else(|| fallback_name.to_string());
        let mime_type = response
            .header("content-type")
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Download::new(filename, mime_type, response.body))
    }

    async fn send_json<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let response = self.request(method, endpoint, body).await?;

        decode(&response)
    }
}

/// Appends the url-encoded query string, skipping `None` values.
pub fn with_query(endpoint: &str, query: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in query {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }

    if any {
        format!("{}?{}", endpoint, serializer.finish())
    } else {
        endpoint.to_string()
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decodes a JSON body. An empty body decodes as `null`, so `()` and `Option` targets accept
/// `204 No Content`.
fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };

    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}
