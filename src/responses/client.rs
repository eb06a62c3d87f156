//! Client for the OpenAI-style responses API.
//!
//! A provider supplies its endpoint, credential and transport settings through
//! [`ResponsesProviderConfig`]; [`ResponsesClient`] turns a [`CompletionRequest`]
//! into a single `POST` and parses the reply.

use crate::core::{CompletionRequest, FoundryError, HttpClient, HttpClientConfig};
use crate::responses::{request::Request, response::Response};

/// Configuration trait for providers that use the OpenAI-style responses API
pub trait ResponsesProviderConfig {
    /// Normalized base URL (e.g., `https://<resource>.services.ai.azure.com/openai/v1`)
    fn base_url(&self) -> &str;

    /// API endpoint for responses (e.g., `/responses`)
    fn endpoint(&self) -> &str;

    /// Authentication header as (header_name, header_value) tuple
    fn auth_header(&self) -> (String, String);

    /// Query parameters appended to every request
    fn query_params(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::default()
    }
}

pub struct ResponsesClient<P: ResponsesProviderConfig> {
    pub config: P,
    http: HttpClient,
}

impl<P: ResponsesProviderConfig> ResponsesClient<P> {
    pub fn new(config: P) -> Result<Self, FoundryError> {
        let http = HttpClient::new(&config.http_config())?;
        Ok(Self { config, http })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.config.base_url(), self.config.endpoint())
    }

    /// Send one completion request and return the parsed response.
    #[tracing::instrument(
        name = "complete",
        skip(self, request),
        fields(model = %request.model(), max_output_tokens = request.max_output_tokens()),
        err
    )]
    pub async fn complete(&self, request: &CompletionRequest) -> Result<Response, FoundryError> {
        let response = self.make_api_request(&Request::from(request)).await?;

        tracing::debug!(
            id = %response.id,
            status = %response.status,
            output_tokens = ?response.output_tokens(),
            "Received response"
        );
        if let Some(reason) = response
            .incomplete_details
            .as_ref()
            .and_then(|details| details.reason.as_deref())
        {
            tracing::warn!(reason, "Response is incomplete");
        }

        Ok(response)
    }

    /// Make an API request to the responses endpoint
    pub async fn make_api_request(&self, request: &Request) -> Result<Response, FoundryError> {
        let headers = [self.config.auth_header()];

        self.http
            .post_json(&self.url(), &self.config.query_params(), &headers, request)
            .await
    }
}
