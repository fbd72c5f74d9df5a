use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::chat::conversation::Conversation;
use crate::chat::error::CompletionError;
use crate::chat::models::{parse_completion_body, CompletionRequest, Message};

pub trait CompletionClient {
    /// Sends the whole conversation and resolves to the assistant reply.
    async fn complete(&self, conversation: &Conversation) -> Result<Message, CompletionError>;
}

/// Completion client backed by the browser fetch API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpCompletionClient {
    endpoint: String,
    timeout_ms: u32,
}

impl HttpCompletionClient {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u32) -> Self {
        Self { endpoint: endpoint.into(), timeout_ms }
    }

    async fn post(&self, conversation: &Conversation) -> Result<Message, CompletionError> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&CompletionRequest { messages: conversation.messages() })
            .map_err(|e| CompletionError::MalformedBody(e.to_string()))?
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let (ok, status) = (response.ok(), response.status());
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::MalformedBody(e.to_string()));
        read_completion(ok, status, body)
    }
}

/// Turns a finished HTTP exchange into a reply. A non-2xx status wins over
/// whatever the body holds.
pub fn read_completion(
    ok: bool,
    status: u16,
    body: Result<String, CompletionError>,
) -> Result<Message, CompletionError> {
    if !ok {
        return Err(CompletionError::Status(status));
    }
    parse_completion_body(&body?)
}

impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, conversation: &Conversation) -> Result<Message, CompletionError> {
        let request = self.post(conversation);
        let timer = TimeoutFuture::new(self.timeout_ms);
        race_timeout(request, timer, self.timeout_ms).await
    }
}

/// Resolves to the request's outcome, or `Timeout` if `timer` fires first.
/// The losing request is dropped, which lets the browser abandon it.
pub async fn race_timeout<R, T>(request: R, timer: T, timeout_ms: u32) -> Result<Message, CompletionError>
where
    R: Future<Output = Result<Message, CompletionError>>,
    T: Future<Output = ()>,
{
    pin_mut!(request);
    pin_mut!(timer);
    match select(request, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(CompletionError::Timeout(timeout_ms)),
    }
}
