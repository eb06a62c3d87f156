use std::fmt;

use super::error::FoundryError;

/// Opaque bearer credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"<redacted>").finish()
    }
}

/// A single completion request: immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    model: String,
    prompt: String,
    max_output_tokens: u32,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        max_output_tokens: u32,
    ) -> Result<Self, FoundryError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(FoundryError::Configuration(
                "Model identifier must not be empty.".to_string(),
            ));
        }
        if max_output_tokens == 0 {
            return Err(FoundryError::Configuration(
                "max_output_tokens must be a positive integer.".to_string(),
            ));
        }

        Ok(Self {
            model,
            prompt: prompt.into(),
            max_output_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }
}
