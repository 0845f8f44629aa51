use reqwasm::http::{Method as FetchMethod, Request, RequestCredentials};

use super::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Response headers read back from `fetch`. Other headers are not needed by the gateway.
const FORWARDED_HEADERS: [&str; 2] = ["content-type", "content-disposition"];

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwasmTransport;

impl Transport for ReqwasmTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => FetchMethod::GET,
            Method::Post => FetchMethod::POST,
            Method::Put => FetchMethod::PUT,
            Method::Patch => FetchMethod::PATCH,
            Method::Delete => FetchMethod::DELETE,
        };

        let mut fetch = Request::new(&request.url)
            .method(method)
            .credentials(RequestCredentials::Include);
        for (name, value) in &request.headers {
            fetch = fetch.header(name, value);
        }
        if let Some(body) = request.body {
            fetch = fetch.body(body);
        }

        let response = fetch
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let headers = FORWARDED_HEADERS
            .iter()
            .filter_map(|name| {
                response
                    .headers()
                    .get(name)
                    .map(|value| (name.to_string(), value))
            })
            .collect();

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
