//! Identity-token credentials.
//!
//! [`DefaultIdentityCredential`] tries each configured source in order and returns the
//! first token obtained:
//!
//! 1. [`ClientSecretCredential`]: service principal from `AZURE_TENANT_ID`,
//!    `AZURE_CLIENT_ID` and `AZURE_CLIENT_SECRET`
//! 2. [`ManagedIdentityCredential`]: App Service identity endpoint or the instance
//!    metadata service
//! 3. [`AzureCliCredential`]: `az account get-access-token`
//!
//! Tokens are fetched once per call. Expiry and refresh are left to the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::EnvSource;
use crate::core::{BearerToken, CredentialProvider, FoundryError, HttpClient, HttpClientConfig};
use crate::provider::constants::identity;

/// How long to wait for the instance metadata service before giving up on it.
const IMDS_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Token endpoint response shared by the OAuth and managed identity flows.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Output of `az account get-access-token --output json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CliTokenResponse {
    access_token: String,
}

/// Resource form of a scope: `https://ai.azure.com/.default` -> `https://ai.azure.com`.
pub fn scope_to_resource(scope: &str) -> &str {
    scope.strip_suffix("/.default").unwrap_or(scope)
}

fn non_empty_token(token: String, source: &str) -> Result<BearerToken, FoundryError> {
    if token.trim().is_empty() {
        return Err(FoundryError::Credential(format!(
            "{source} returned an empty access token"
        )));
    }
    Ok(BearerToken::new(token))
}

/// OAuth2 client credentials grant against Microsoft Entra ID.
pub struct ClientSecretCredential {
    http: HttpClient,
    authority_host: String,
    tenant_id: String,
    client_id: String,
    client_secret: String,
    scope: String,
}

impl ClientSecretCredential {
    pub fn new(
        http: HttpClient,
        authority_host: &str,
        tenant_id: String,
        client_id: String,
        client_secret: String,
        scope: &str,
    ) -> Self {
        Self {
            http,
            authority_host: authority_host.trim_end_matches('/').to_string(),
            tenant_id,
            client_id,
            client_secret,
            scope: scope.to_string(),
        }
    }

    /// `None` unless tenant, client id and secret are all present.
    pub fn from_env(env: &impl EnvSource, http: HttpClient, scope: &str) -> Option<Self> {
        let tenant_id = env.non_empty(identity::TENANT_ID_ENV_VAR)?;
        let client_id = env.non_empty(identity::CLIENT_ID_ENV_VAR)?;
        let client_secret = env.non_empty(identity::CLIENT_SECRET_ENV_VAR)?;
        let authority_host = env.or_default(
            identity::AUTHORITY_HOST_ENV_VAR,
            identity::DEFAULT_AUTHORITY_HOST,
        );

        Some(Self::new(
            http,
            &authority_host,
            tenant_id,
            client_id,
            client_secret,
            scope,
        ))
    }

    pub fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority_host, self.tenant_id
        )
    }
}

#[async_trait]
impl CredentialProvider for ClientSecretCredential {
    fn name(&self) -> &'static str {
        "client_secret"
    }

    #[tracing::instrument(name = "client_secret_token", skip(self), fields(tenant = %self.tenant_id), err)]
    async fn resolve(&self) -> Result<BearerToken, FoundryError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];

        let res: TokenResponse = self.http.post_form(&self.token_url(), &form).await?;
        non_empty_token(res.access_token, self.name())
    }
}

/// Where the managed identity token comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ManagedIdentitySource {
    /// App Service / Functions style endpoint guarded by a secret header.
    AppService { endpoint: String, header: String },
    /// Instance metadata service (VMs, AKS, Container Instances).
    Imds { endpoint: String },
}

pub struct ManagedIdentityCredential {
    http: HttpClient,
    source: ManagedIdentitySource,
    client_id: Option<String>,
    resource: String,
}

impl ManagedIdentityCredential {
    pub fn new(
        http: HttpClient,
        source: ManagedIdentitySource,
        client_id: Option<String>,
        scope: &str,
    ) -> Self {
        Self {
            http,
            source,
            client_id,
            resource: scope_to_resource(scope).to_string(),
        }
    }

    pub fn from_env(env: &impl EnvSource, http: HttpClient, scope: &str) -> Self {
        let source = match (
            env.non_empty(identity::IDENTITY_ENDPOINT_ENV_VAR),
            env.non_empty(identity::IDENTITY_HEADER_ENV_VAR),
        ) {
            (Some(endpoint), Some(header)) => ManagedIdentitySource::AppService { endpoint, header },
            _ => ManagedIdentitySource::Imds {
                endpoint: identity::IMDS_ENDPOINT.to_string(),
            },
        };

        Self::new(
            http,
            source,
            env.non_empty(identity::CLIENT_ID_ENV_VAR),
            scope,
        )
    }

    pub fn source(&self) -> &ManagedIdentitySource {
        &self.source
    }
}

#[async_trait]
impl CredentialProvider for ManagedIdentityCredential {
    fn name(&self) -> &'static str {
        "managed_identity"
    }

    #[tracing::instrument(name = "managed_identity_token", skip(self), err)]
    async fn resolve(&self) -> Result<BearerToken, FoundryError> {
        let mut query = vec![("resource", self.resource.as_str())];
        if let Some(client_id) = &self.client_id {
            query.push(("client_id", client_id.as_str()));
        }

        let res: TokenResponse = match &self.source {
            ManagedIdentitySource::AppService { endpoint, header } => {
                query.push(("api-version", identity::APP_SERVICE_API_VERSION));
                self.http
                    .get_json(endpoint, &query, &[("X-IDENTITY-HEADER", header.as_str())], None)
                    .await?
            }
            ManagedIdentitySource::Imds { endpoint } => {
                query.push(("api-version", identity::IMDS_API_VERSION));
                self.http
                    .get_json(
                        endpoint,
                        &query,
                        &[("Metadata", "true")],
                        Some(IMDS_PROBE_TIMEOUT),
                    )
                    .await?
            }
        };

        non_empty_token(res.access_token, self.name())
    }
}

/// Token from a signed-in Azure CLI session.
#[derive(Debug, Clone)]
pub struct AzureCliCredential {
    program: String,
    scope: String,
}

impl AzureCliCredential {
    pub fn new(scope: &str) -> Self {
        Self {
            program: "az".to_string(),
            scope: scope.to_string(),
        }
    }

    /// Use a different executable in place of `az`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self) -> tokio::process::Command {
        let args = [
            "account",
            "get-access-token",
            "--scope",
            self.scope.as_str(),
            "--output",
            "json",
        ];

        // `az` ships as a .cmd script on Windows, which CreateProcess cannot launch directly.
        let mut command = if cfg!(windows) {
            let mut command = tokio::process::Command::new("cmd");
            command.arg("/C").arg(&self.program);
            command
        } else {
            tokio::process::Command::new(&self.program)
        };
        command.args(args).kill_on_drop(true);
        command
    }
}

pub(crate) fn parse_cli_output(stdout: &[u8]) -> Result<BearerToken, FoundryError> {
    let res: CliTokenResponse = serde_json::from_slice(stdout)
        .map_err(|e| FoundryError::parse("Failed to parse Azure CLI token output", e))?;
    non_empty_token(res.access_token, "azure_cli")
}

#[async_trait]
impl CredentialProvider for AzureCliCredential {
    fn name(&self) -> &'static str {
        "azure_cli"
    }

    #[tracing::instrument(name = "azure_cli_token", skip(self), fields(program = %self.program), err)]
    async fn resolve(&self) -> Result<BearerToken, FoundryError> {
        let output = self.command().output().await.map_err(|e| {
            FoundryError::Credential(format!("Failed to run `{}`: {e}", self.program))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FoundryError::Credential(format!(
                "`{} account get-access-token` failed ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        parse_cli_output(&output.stdout)
    }
}

/// Chained identity credential. The first source that yields a token wins.
pub struct DefaultIdentityCredential {
    scope: String,
    sources: Vec<Box<dyn CredentialProvider>>,
}

impl DefaultIdentityCredential {
    /// Build the standard chain for `scope` from environment settings.
    pub fn from_env(env: &impl EnvSource, scope: &str) -> Result<Self, FoundryError> {
        let http = HttpClient::new(&HttpClientConfig::default())?;

        let mut sources: Vec<Box<dyn CredentialProvider>> = Vec::new();
        if let Some(client_secret) = ClientSecretCredential::from_env(env, http.clone(), scope) {
            sources.push(Box::new(client_secret));
        }
        sources.push(Box::new(ManagedIdentityCredential::from_env(env, http, scope)));
        sources.push(Box::new(AzureCliCredential::new(scope)));

        Ok(Self::with_sources(scope, sources))
    }

    pub fn with_sources(scope: &str, sources: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self {
            scope: scope.to_string(),
            sources,
        }
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.name()).collect()
    }
}

#[async_trait]
impl CredentialProvider for DefaultIdentityCredential {
    fn name(&self) -> &'static str {
        "default_identity"
    }

    async fn resolve(&self) -> Result<BearerToken, FoundryError> {
        let mut failures = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            match source.resolve().await {
                Ok(token) => {
                    info!(source = source.name(), "Acquired identity token");
                    return Ok(token);
                }
                Err(e) => {
                    debug!(source = source.name(), error = %e, "Identity source unavailable");
                    failures.push(format!("{}: {e}", source.name()));
                }
            }
        }

        if failures.is_empty() {
            return Err(FoundryError::Credential(
                "No identity sources configured".to_string(),
            ));
        }

        Err(FoundryError::Credential(format!(
            "Failed to acquire a token for {}. {}",
            self.scope,
            failures.join("; ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        name: &'static str,
        token: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CredentialProvider for FixedSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn resolve(&self) -> Result<BearerToken, FoundryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.token {
                Some(token) => Ok(BearerToken::new(token)),
                None => Err(FoundryError::Credential(format!("{} unavailable", self.name))),
            }
        }
    }

    fn source(
        name: &'static str,
        token: Option<&'static str>,
        calls: &Arc<AtomicUsize>,
    ) -> Box<dyn CredentialProvider> {
        Box::new(FixedSource {
            name,
            token,
            calls: calls.clone(),
        })
    }

    #[test]
    fn test_scope_to_resource() {
        assert_eq!(
            scope_to_resource("https://ai.azure.com/.default"),
            "https://ai.azure.com"
        );
        assert_eq!(scope_to_resource("https://ai.azure.com"), "https://ai.azure.com");
    }

    #[tokio::test]
    async fn test_chain_returns_first_token_and_stops() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = DefaultIdentityCredential::with_sources(
            identity::SCOPE,
            vec![
                source("first", None, &calls),
                source("second", Some("token-2"), &calls),
                source("third", Some("token-3"), &calls),
            ],
        );

        let token = chain.resolve().await.unwrap();
        assert_eq!(token.secret(), "token-2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_chain_aggregates_failures() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = DefaultIdentityCredential::with_sources(
            identity::SCOPE,
            vec![source("first", None, &calls), source("second", None, &calls)],
        );

        match chain.resolve().await {
            Err(FoundryError::Credential(message)) => {
                assert!(message.contains("https://ai.azure.com/.default"));
                assert!(message.contains("first: Credential error: first unavailable"));
                assert!(message.contains("second: Credential error: second unavailable"));
            }
            other => panic!("Expected credential error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_chain() {
        let chain = DefaultIdentityCredential::with_sources(identity::SCOPE, Vec::new());
        assert!(matches!(
            chain.resolve().await,
            Err(FoundryError::Credential(_))
        ));
    }

    #[test]
    fn test_client_secret_requires_all_variables() {
        let http = HttpClient::new(&HttpClientConfig::default()).unwrap();
        let env = HashMap::from([("AZURE_TENANT_ID", "tenant"), ("AZURE_CLIENT_ID", "client")]);
        assert!(ClientSecretCredential::from_env(&env, http.clone(), identity::SCOPE).is_none());

        let env = HashMap::from([
            ("AZURE_TENANT_ID", "tenant"),
            ("AZURE_CLIENT_ID", "client"),
            ("AZURE_CLIENT_SECRET", "secret"),
        ]);
        let credential = ClientSecretCredential::from_env(&env, http, identity::SCOPE).unwrap();
        assert_eq!(
            credential.token_url(),
            "https://login.microsoftonline.com/tenant/oauth2/v2.0/token"
        );
    }

    #[test]
    fn test_default_chain_order() {
        let env = HashMap::from([
            ("AZURE_TENANT_ID", "tenant"),
            ("AZURE_CLIENT_ID", "client"),
            ("AZURE_CLIENT_SECRET", "secret"),
        ]);
        let chain = DefaultIdentityCredential::from_env(&env, identity::SCOPE).unwrap();
        assert_eq!(
            chain.source_names(),
            vec!["client_secret", "managed_identity", "azure_cli"]
        );

        let env: HashMap<&str, &str> = HashMap::new();
        let chain = DefaultIdentityCredential::from_env(&env, identity::SCOPE).unwrap();
        assert_eq!(chain.source_names(), vec!["managed_identity", "azure_cli"]);
    }

    #[test]
    fn test_managed_identity_source_selection() {
        let http = HttpClient::new(&HttpClientConfig::default()).unwrap();

        let env: HashMap<&str, &str> = HashMap::new();
        let credential = ManagedIdentityCredential::from_env(&env, http.clone(), identity::SCOPE);
        assert_eq!(
            credential.source(),
            &ManagedIdentitySource::Imds {
                endpoint: identity::IMDS_ENDPOINT.to_string()
            }
        );

        let env = HashMap::from([
            ("IDENTITY_ENDPOINT", "http://localhost:4141/msi/token"),
            ("IDENTITY_HEADER", "header-secret"),
        ]);
        let credential = ManagedIdentityCredential::from_env(&env, http, identity::SCOPE);
        assert!(matches!(
            credential.source(),
            ManagedIdentitySource::AppService { .. }
        ));
    }

    #[test]
    fn test_parse_cli_output() {
        let stdout = br#"{
            "accessToken": "eyJ0eXAi",
            "expiresOn": "2026-10-18 12:00:00.000000",
            "subscription": "00000000-0000-0000-0000-000000000000",
            "tenant": "11111111-1111-1111-1111-111111111111",
            "tokenType": "Bearer"
        }"#;
        assert_eq!(parse_cli_output(stdout).unwrap().secret(), "eyJ0eXAi");

        assert!(matches!(
            parse_cli_output(b"ERROR: Please run 'az login'"),
            Err(FoundryError::Parse { .. })
        ));
        assert!(matches!(
            parse_cli_output(br#"{"accessToken": ""}"#),
            Err(FoundryError::Credential(_))
        ));
    }

    #[tokio::test]
    async fn test_cli_missing_program() {
        let credential = AzureCliCredential::new(identity::SCOPE)
            .with_program("foundry-responses-no-such-az-binary");
        assert!(credential.resolve().await.is_err());
    }
}
