use thiserror::Error;

/// Why a completion round trip produced no reply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("completion endpoint returned HTTP {0}")]
    Status(u16),
    #[error("malformed completion body: {0}")]
    MalformedBody(String),
    #[error("completion response has no choices[0].message.content")]
    MissingChoice,
    #[error("completion timed out after {0} ms")]
    Timeout(u32),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,
    #[error("a reply is still pending")]
    Busy,
    #[error("completion failed: {0}")]
    CompletionFailed(CompletionError),
}
