//! Shared HTTP client used by the responses client and the identity token sources.

use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::FoundryError;

/// Configuration for the underlying transport.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for a single request. Reasoning models can take a minute or more.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(180),
            user_agent: format!("foundry-responses/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Thin wrapper over `reqwest::Client` that decodes JSON bodies and API errors.
///
/// Every call is a single round trip. Failures are returned as-is, never retried.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, FoundryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                FoundryError::Configuration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// POST a JSON body and decode the JSON response.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, query, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        query: &[(String, String)],
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, FoundryError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        if !query.is_empty() {
            req_builder = req_builder.query(query);
        }
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        self.execute(req_builder).await
    }

    /// POST an urlencoded form and decode the JSON response.
    pub async fn post_form<Res>(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<Res, FoundryError>
    where
        Res: DeserializeOwned,
    {
        self.execute(self.client.post(url).form(form)).await
    }

    /// GET with query parameters and headers, decoding the JSON response.
    pub async fn get_json<Res>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<Res, FoundryError>
    where
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.get(url).query(query);
        for (name, value) in headers {
            req_builder = req_builder.header(*name, *value);
        }
        if let Some(timeout) = timeout {
            req_builder = req_builder.timeout(timeout);
        }

        self.execute(req_builder).await
    }

    async fn execute<Res>(&self, req_builder: reqwest::RequestBuilder) -> Result<Res, FoundryError>
    where
        Res: DeserializeOwned,
    {
        let res = req_builder
            .send()
            .await
            .map_err(|e| FoundryError::transport("Request failed", e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FoundryError::transport("Failed to read response body", e))?;

        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            return Err(api_error(status.as_u16(), &body));
        }

        debug!(status = %status, bytes = body.len(), "HTTP request successful");

        serde_json::from_str(&body)
            .map_err(|e| FoundryError::parse("Failed to parse API response", e))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    /// `{"error": {"message": "...", "type": "...", "code": "..."}}`
    Structured { error: ApiErrorBody },
    /// `{"error": "invalid_client", "error_description": "..."}` as returned by token endpoints.
    OAuth {
        error: String,
        error_description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    r#type: Option<String>,
    code: Option<serde_json::Value>,
}

/// Build an `Api` error from a non-success status and its body.
pub(crate) fn api_error(status_code: u16, body: &str) -> FoundryError {
    let (message, code) = match serde_json::from_str::<ErrorPayload>(body) {
        Ok(ErrorPayload::Structured { error }) => {
            let code = match error.code {
                Some(serde_json::Value::String(code)) => Some(code),
                Some(serde_json::Value::Null) | None => error.r#type,
                Some(other) => Some(other.to_string()),
            };
            (error.message.unwrap_or_else(|| body.to_string()), code)
        }
        Ok(ErrorPayload::OAuth {
            error,
            error_description,
        }) => (error_description.unwrap_or_else(|| error.clone()), Some(error)),
        Err(_) if body.trim().is_empty() => ("Empty error response".to_string(), None),
        Err(_) => (body.trim().to_string(), None),
    };

    FoundryError::Api {
        message,
        status_code: Some(status_code),
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unpack(err: FoundryError) -> (String, Option<u16>, Option<String>) {
        match err {
            FoundryError::Api {
                message,
                status_code,
                code,
            } => (message, status_code, code),
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_structured_error_body() {
        let body = r#"{"error":{"message":"Invalid model","type":"invalid_request_error","code":"model_not_found"}}"#;
        let (message, status, code) = unpack(api_error(404, body));
        assert_eq!(message, "Invalid model");
        assert_eq!(status, Some(404));
        assert_eq!(code.as_deref(), Some("model_not_found"));
    }

    #[test]
    fn test_structured_error_without_code_falls_back_to_type() {
        let body = r#"{"error":{"message":"Bad","type":"invalid_request_error","code":null}}"#;
        let (_, _, code) = unpack(api_error(400, body));
        assert_eq!(code.as_deref(), Some("invalid_request_error"));
    }

    #[test]
    fn test_oauth_error_body() {
        let body = r#"{"error":"invalid_client","error_description":"AADSTS7000215: Invalid client secret provided."}"#;
        let (message, _, code) = unpack(api_error(401, body));
        assert!(message.starts_with("AADSTS7000215"));
        assert_eq!(code.as_deref(), Some("invalid_client"));
    }

    #[test]
    fn test_plain_text_error_body_is_kept_verbatim() {
        let (message, status, code) = unpack(api_error(502, "Bad Gateway\n"));
        assert_eq!(message, "Bad Gateway");
        assert_eq!(status, Some(502));
        assert_eq!(code, None);
    }
}
