use async_trait::async_trait;

use crate::config::EnvSource;
use crate::core::{BearerToken, CredentialProvider, FoundryError};
use crate::provider::constants::foundry;

/// Pre-shared API key. Resolution is local, no I/O.
#[derive(Debug, Clone)]
pub struct ApiKeyCredential {
    key: BearerToken,
}

impl ApiKeyCredential {
    pub fn new(key: impl Into<String>) -> Result<Self, FoundryError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(FoundryError::Configuration(format!(
                "{} must be set.",
                foundry::API_KEY_ENV_VAR
            )));
        }

        Ok(Self {
            key: BearerToken::new(key.trim()),
        })
    }

    pub fn from_env(env: &impl EnvSource) -> Result<Self, FoundryError> {
        Self::new(env.required(foundry::API_KEY_ENV_VAR)?)
    }
}

#[async_trait]
impl CredentialProvider for ApiKeyCredential {
    fn name(&self) -> &'static str {
        "api_key"
    }

    async fn resolve(&self) -> Result<BearerToken, FoundryError> {
        Ok(self.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_resolves_key_from_env() {
        let env = HashMap::from([("AZURE_AI_API_KEY", " abc123 ")]);
        let credential = ApiKeyCredential::from_env(&env).unwrap();

        let token = credential.resolve().await.unwrap();
        assert_eq!(token.secret(), "abc123");
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let env = HashMap::from([("AZURE_AI_API_KEY", "")]);
        assert!(matches!(
            ApiKeyCredential::from_env(&env),
            Err(FoundryError::Configuration(_))
        ));
        assert!(ApiKeyCredential::new("   ").is_err());
    }
}
