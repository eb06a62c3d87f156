//! Responses API walkthrough authenticated with an identity token.
//!
//! Requires `AZURE_AI_PROJECT_ENDPOINT`. Model names can be overridden with
//! `AZURE_MODEL_2_DEPLOYMENT_NAME` and `AZURE_MODEL_DEPLOYMENT_NAME`.

use std::process::ExitCode;

use dotenv::dotenv;
use foundry_responses::provider::constants::identity;
use foundry_responses::{DefaultIdentityCredential, FoundryError, ProcessEnv, runner};

async fn run() -> Result<(), FoundryError> {
    let env = ProcessEnv;
    let credential = DefaultIdentityCredential::from_env(&env, identity::SCOPE)?;
    runner::run_identity(&env, &credential, &mut std::io::stdout()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    runner::init_tracing();

    let result = run().await;
    ExitCode::from(runner::report(result, &mut std::io::stderr()))
}
