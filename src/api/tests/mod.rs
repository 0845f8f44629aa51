use std::{cell::RefCell, collections::VecDeque, time::Duration};

use super::*;

mod download;
mod request;

/// Transport answering with queued responses and recording every request.
#[derive(Default)]
struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    delay: Duration,
}

impl ScriptedTransport {
    fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    fn respond_with(self, response: HttpResponse) -> Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    fn fail(self, err: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().unwrap()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        sleep(self.delay).await;

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(TransportError::Network("no scripted response".to_string())))
    }
}

fn client(
    transport: ScriptedTransport,
    token: Option<&str>,
) -> ApiClient<ScriptedTransport, MemorySession> {
    let config = Config {
        api_url: "http://backend.test/api/v1/".to_string(),
        api_timeout: Duration::from_millis(50),
        ..Config::default()
    };

    ApiClient::new(&config, transport, MemorySession::new(token))
}
