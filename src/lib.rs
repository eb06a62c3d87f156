//! # foundry-responses
//!
//! Minimal client for the OpenAI-compatible responses API served by Microsoft Foundry
//! Models, plus the two walkthroughs used by the bundled binaries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foundry_responses::{ApiKeyCredential, CompletionRequest, EndpointConfig, FoundryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = EndpointConfig::new("https://my-resource.services.ai.azure.com/")?;
//!     let credential = ApiKeyCredential::new("<api key>")?;
//!     let client = FoundryClient::connect(endpoint, &credential).await?;
//!
//!     let request = CompletionRequest::new("gpt-4.1-mini", "Explain quantum computing in 3 sentences.", 500)?;
//!     let response = client.complete(&request).await?;
//!
//!     println!("{} ({})", response.output_text(), response.status);
//!     Ok(())
//! }
//! ```
//!
//! Keyless authentication uses [`DefaultIdentityCredential`], which tries a service
//! principal secret, managed identity and the Azure CLI in that order.

pub mod config;
pub mod core;
pub mod credential;
pub mod provider;
pub mod responses;
pub mod runner;

pub use config::{EndpointConfig, EnvSource, ProcessEnv};
pub use crate::core::{
    BearerToken, CompletionRequest, CredentialProvider, FoundryError, HttpClientConfig,
};
pub use credential::{ApiKeyCredential, DefaultIdentityCredential};
pub use provider::{FoundryClient, FoundryConfig};
pub use responses::{Response, Status, Usage};
