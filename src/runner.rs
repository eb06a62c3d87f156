//! The two example walkthroughs behind the binaries.
//!
//! Each walkthrough validates its configuration, resolves a credential once, then
//! runs its scenarios in order and writes a short report per completion. The first
//! failure aborts the run.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use crate::config::{ApiKeySettings, EnvSource, ModelSelection, ProjectSettings};
use crate::core::{CompletionRequest, CredentialProvider, FoundryError};
use crate::credential::ApiKeyCredential;
use crate::provider::FoundryClient;
use crate::provider::constants::foundry;

pub const QUANTUM_PROMPT: &str = "Explain quantum computing in 3 sentences.";
pub const CLOUD_PROMPT: &str = "What are the top 3 benefits of cloud computing? Be concise.";

const WAITING: &str = "Waiting for response...";
const WAITING_REASONING: &str = "Waiting for response (reasoning models can take 30-60s)...";

/// One completion to run and report.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub heading: String,
    pub request: CompletionRequest,
    pub waiting: &'static str,
}

/// Example 1 (OpenAI model) and Example 2 (non-OpenAI reasoning model).
pub fn identity_scenarios(models: &ModelSelection) -> Result<Vec<Scenario>, FoundryError> {
    Ok(vec![
        Scenario {
            heading: format!("Example 1: OpenAI model ({})", models.openai_model),
            request: CompletionRequest::new(
                &models.openai_model,
                QUANTUM_PROMPT,
                foundry::DEFAULT_MAX_OUTPUT_TOKENS,
            )?,
            waiting: WAITING,
        },
        Scenario {
            heading: format!("Example 2: Non-OpenAI model ({})", models.non_openai_model),
            request: CompletionRequest::new(
                &models.non_openai_model,
                CLOUD_PROMPT,
                foundry::DEFAULT_MAX_OUTPUT_TOKENS,
            )?,
            waiting: WAITING_REASONING,
        },
    ])
}

pub fn api_key_scenarios(model: &str) -> Result<Vec<Scenario>, FoundryError> {
    Ok(vec![Scenario {
        heading: format!("Model: {model}"),
        request: CompletionRequest::new(model, QUANTUM_PROMPT, foundry::DEFAULT_MAX_OUTPUT_TOKENS)?,
        waiting: WAITING,
    }])
}

/// Identity-token walkthrough. Configuration is checked before the credential is touched.
pub async fn run_identity(
    env: &impl EnvSource,
    credential: &dyn CredentialProvider,
    out: &mut impl Write,
) -> Result<(), FoundryError> {
    writeln!(
        out,
        "Microsoft Foundry Models - Responses API (Plain OpenAI SDK - Rust)\n"
    )?;

    let settings = ProjectSettings::from_env(env)?;
    let scenarios = identity_scenarios(&settings.models)?;

    let client = FoundryClient::connect(settings.endpoint, credential).await?;
    run_scenarios(&client, &scenarios, out).await
}

/// Static API key walkthrough.
pub async fn run_api_key(env: &impl EnvSource, out: &mut impl Write) -> Result<(), FoundryError> {
    writeln!(
        out,
        "Microsoft Foundry Models - Responses API (API Key Auth - Rust)\n"
    )?;

    let settings = ApiKeySettings::from_env(env)?;
    let credential = ApiKeyCredential::from_env(env)?;
    let scenarios = api_key_scenarios(&settings.model)?;

    let client = FoundryClient::connect(settings.endpoint, &credential).await?;
    run_scenarios(&client, &scenarios, out).await
}

async fn run_scenarios(
    client: &FoundryClient,
    scenarios: &[Scenario],
    out: &mut impl Write,
) -> Result<(), FoundryError> {
    for (index, scenario) in scenarios.iter().enumerate() {
        writeln!(out, "{}\n", scenario.heading)?;
        writeln!(out, "{}", scenario.waiting)?;
        out.flush()?;

        let response = client.complete(&scenario.request).await?;

        writeln!(out, "Response: {}", response.output_text())?;
        writeln!(out, "Status:   {}", response.status)?;
        if let Some(message) = response.error_message() {
            writeln!(out, "Error:    {message}")?;
        }
        if let Some(output_tokens) = response.output_tokens() {
            writeln!(out, "Output tokens: {output_tokens}")?;
        }
        if index + 1 < scenarios.len() {
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Print a failure to `err` and map the outcome to a process exit status.
pub fn report(result: Result<(), FoundryError>, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            e.exit_code()
        }
    }
}

/// Log to stderr so stdout only carries the report. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
