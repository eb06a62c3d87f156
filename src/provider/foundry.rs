//! Microsoft Foundry Models provider.
//!
//! Foundry exposes the OpenAI responses API under `<project endpoint>/openai/v1`,
//! so a bearer credential plus the normalized endpoint is all a client needs.

use crate::config::EndpointConfig;
use crate::core::{
    BearerToken, CompletionRequest, CredentialProvider, FoundryError, HttpClientConfig,
};
use crate::provider::constants::foundry;
use crate::responses::{Response, ResponsesClient, ResponsesProviderConfig};

/// Foundry-specific configuration for the responses client
#[derive(Debug, Clone)]
pub struct FoundryConfig {
    pub endpoint: EndpointConfig,
    pub credential: BearerToken,
    pub http_config: HttpClientConfig,
}

impl FoundryConfig {
    pub fn new(endpoint: EndpointConfig, credential: BearerToken) -> Self {
        Self {
            endpoint,
            credential,
            http_config: HttpClientConfig::default(),
        }
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }
}

impl ResponsesProviderConfig for FoundryConfig {
    fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    fn endpoint(&self) -> &str {
        foundry::RESPONSES_ENDPOINT
    }

    fn auth_header(&self) -> (String, String) {
        ("Authorization".to_string(), self.credential.header_value())
    }

    fn query_params(&self) -> Vec<(String, String)> {
        self.endpoint
            .api_version()
            .map(|version| {
                vec![(
                    foundry::API_VERSION_QUERY_PARAM.to_string(),
                    version.to_string(),
                )]
            })
            .unwrap_or_default()
    }

    fn http_config(&self) -> HttpClientConfig {
        self.http_config.clone()
    }
}

pub struct FoundryClient {
    responses_client: ResponsesClient<FoundryConfig>,
}

impl FoundryClient {
    pub fn new(config: FoundryConfig) -> Result<Self, FoundryError> {
        Ok(Self {
            responses_client: ResponsesClient::new(config)?,
        })
    }

    /// Resolve the credential once and build a client bound to it.
    pub async fn connect(
        endpoint: EndpointConfig,
        credential: &dyn CredentialProvider,
    ) -> Result<Self, FoundryError> {
        let token = credential.resolve().await?;
        Self::new(FoundryConfig::new(endpoint, token))
    }

    pub fn url(&self) -> String {
        self.responses_client.url()
    }

    pub async fn complete(&self, request: &CompletionRequest) -> Result<Response, FoundryError> {
        self.responses_client.complete(request).await
    }
}
