use super::{endpoint::EndpointConfig, env::EnvSource};
use crate::core::FoundryError;
use crate::provider::constants::foundry;

/// Models exercised by the walkthroughs, after environment overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSelection {
    pub openai_model: String,
    pub non_openai_model: String,
}

impl ModelSelection {
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self {
            openai_model: env.or_default(
                foundry::OPENAI_MODEL_ENV_VAR,
                foundry::DEFAULT_OPENAI_MODEL,
            ),
            non_openai_model: env.or_default(
                foundry::NON_OPENAI_MODEL_ENV_VAR,
                foundry::DEFAULT_NON_OPENAI_MODEL,
            ),
        }
    }
}

/// Settings for the identity-token variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSettings {
    pub endpoint: EndpointConfig,
    pub models: ModelSelection,
}

impl ProjectSettings {
    pub fn from_env(env: &impl EnvSource) -> Result<Self, FoundryError> {
        let endpoint = env.required(foundry::PROJECT_ENDPOINT_ENV_VAR)?;
        let endpoint = EndpointConfig::new(&endpoint)?
            .with_api_version(env.non_empty(foundry::API_VERSION_ENV_VAR));

        Ok(Self {
            endpoint,
            models: ModelSelection::from_env(env),
        })
    }
}

/// Settings for the static API key variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiKeySettings {
    pub endpoint: EndpointConfig,
    pub model: String,
}

impl ApiKeySettings {
    /// Both the endpoint and the key are required; the key itself is read by
    /// [`crate::credential::ApiKeyCredential`].
    pub fn from_env(env: &impl EnvSource) -> Result<Self, FoundryError> {
        let endpoint = env.non_empty(foundry::FOUNDRY_ENDPOINT_ENV_VAR);
        let api_key = env.non_empty(foundry::API_KEY_ENV_VAR);

        let Some(endpoint) = endpoint.filter(|_| api_key.is_some()) else {
            return Err(FoundryError::Configuration(format!(
                "{} and {} must be set.",
                foundry::FOUNDRY_ENDPOINT_ENV_VAR,
                foundry::API_KEY_ENV_VAR
            )));
        };

        let endpoint = EndpointConfig::new(&endpoint)?
            .with_api_version(env.non_empty(foundry::API_VERSION_ENV_VAR));

        Ok(Self {
            endpoint,
            model: env.or_default(
                foundry::OPENAI_MODEL_ENV_VAR,
                foundry::DEFAULT_OPENAI_MODEL,
            ),
        })
    }
}
