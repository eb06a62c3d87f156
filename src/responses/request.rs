use serde::Serialize;

use crate::core::CompletionRequest;

/// Body of `POST /responses`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Request {
    pub model: String,

    /// Plain text input. The API treats it as a single user message.
    pub input: String,

    pub max_output_tokens: u32,
}

impl From<&CompletionRequest> for Request {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            model: request.model().to_string(),
            input: request.prompt().to_string(),
            max_output_tokens: request.max_output_tokens(),
        }
    }
}
