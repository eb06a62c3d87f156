use crate::core::FoundryError;
use crate::provider::constants::foundry;

/// Where requests go and how they are authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    base_url: String,
    api_version: Option<String>,
}

impl EndpointConfig {
    /// Build from a project endpoint such as `https://<resource>.services.ai.azure.com/api/projects/<name>/`.
    pub fn new(endpoint: &str) -> Result<Self, FoundryError> {
        Ok(Self {
            base_url: normalize_base_url(endpoint)?,
            api_version: None,
        })
    }

    pub fn with_api_version(mut self, api_version: Option<String>) -> Self {
        self.api_version = api_version;
        self
    }

    /// Normalized base URL, already ending in the API path suffix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }
}

/// Strip trailing slashes and append the fixed API path suffix exactly once.
pub fn normalize_base_url(endpoint: &str) -> Result<String, FoundryError> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(FoundryError::Configuration(
            "Endpoint URL must not be empty.".to_string(),
        ));
    }

    Ok(format!("{trimmed}{}", foundry::API_PATH_SUFFIX))
}
