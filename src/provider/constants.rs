pub mod foundry {
    /// Appended to the normalized project endpoint.
    pub const API_PATH_SUFFIX: &str = "/openai/v1";
    pub const RESPONSES_ENDPOINT: &str = "/responses";
    pub const API_VERSION_QUERY_PARAM: &str = "api-version";

    pub const PROJECT_ENDPOINT_ENV_VAR: &str = "AZURE_AI_PROJECT_ENDPOINT";
    pub const FOUNDRY_ENDPOINT_ENV_VAR: &str = "AZURE_AI_FOUNDRY_ENDPOINT";
    pub const API_KEY_ENV_VAR: &str = "AZURE_AI_API_KEY";
    pub const API_VERSION_ENV_VAR: &str = "AZURE_AI_API_VERSION";

    pub const OPENAI_MODEL_ENV_VAR: &str = "AZURE_MODEL_2_DEPLOYMENT_NAME";
    pub const NON_OPENAI_MODEL_ENV_VAR: &str = "AZURE_MODEL_DEPLOYMENT_NAME";
    pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
    pub const DEFAULT_NON_OPENAI_MODEL: &str = "DeepSeek-R1-0528";

    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;
}

pub mod identity {
    pub const SCOPE: &str = "https://ai.azure.com/.default";
    pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

    pub const TENANT_ID_ENV_VAR: &str = "AZURE_TENANT_ID";
    pub const CLIENT_ID_ENV_VAR: &str = "AZURE_CLIENT_ID";
    pub const CLIENT_SECRET_ENV_VAR: &str = "AZURE_CLIENT_SECRET";
    pub const AUTHORITY_HOST_ENV_VAR: &str = "AZURE_AUTHORITY_HOST";

    pub const IDENTITY_ENDPOINT_ENV_VAR: &str = "IDENTITY_ENDPOINT";
    pub const IDENTITY_HEADER_ENV_VAR: &str = "IDENTITY_HEADER";
    pub const APP_SERVICE_API_VERSION: &str = "2019-08-01";

    pub const IMDS_ENDPOINT: &str = "http://169.254.169.254/metadata/identity/oauth2/token";
    pub const IMDS_API_VERSION: &str = "2018-02-01";
}
