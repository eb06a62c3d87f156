//! Responses API walkthrough authenticated with a static API key.
//!
//! For quick dev/test only; prefer the identity-token binary elsewhere.
//! Requires `AZURE_AI_FOUNDRY_ENDPOINT` and `AZURE_AI_API_KEY`.

use std::process::ExitCode;

use dotenv::dotenv;
use foundry_responses::{ProcessEnv, runner};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    runner::init_tracing();

    let result = runner::run_api_key(&ProcessEnv, &mut std::io::stdout()).await;
    ExitCode::from(runner::report(result, &mut std::io::stderr()))
}
