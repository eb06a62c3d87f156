use std::fmt;

use serde::{Deserialize, Deserializer};

/// Body returned by `POST /responses`.
///
/// Only the fields the client reads are modelled. Unknown output items and
/// content parts are kept as `Other` so new item kinds never break parsing.
#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,

    #[serde(default, deserialize_with = "null_as_default")]
    pub output: Vec<OutputItem>,

    pub usage: Option<Usage>,

    pub incomplete_details: Option<IncompleteDetails>,

    pub error: Option<ResponseError>,
}

impl Response {
    /// All output text fragments concatenated in document order, no separator.
    ///
    /// Walks message items, then their content parts, keeping only `output_text`.
    /// Refusals and non-message items (reasoning, tool calls) contribute nothing.
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for item in &self.output {
            let OutputItem::Message(message) = item else {
                continue;
            };
            for content in &message.content {
                if let MessageContent::OutputText(output) = content {
                    text.push_str(&output.text);
                }
            }
        }
        text
    }

    pub fn output_tokens(&self) -> Option<u64> {
        self.usage.as_ref().map(|usage| usage.output_tokens)
    }

    /// Message of the service-side error carried by a `failed` response.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|error| error.message.as_deref())
    }
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response status. Strings this client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Completed,
    Incomplete,
    Failed,
    InProgress,
    Cancelled,
    Queued,
    Other(String),
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Completed => "completed",
            Status::Incomplete => "incomplete",
            Status::Failed => "failed",
            Status::InProgress => "in_progress",
            Status::Cancelled => "cancelled",
            Status::Queued => "queued",
            Status::Other(status) => status.as_str(),
        }
    }
}

impl From<String> for Status {
    fn from(status: String) -> Self {
        match status.as_str() {
            "completed" => Status::Completed,
            "incomplete" => Status::Incomplete,
            "failed" => Status::Failed,
            "in_progress" => Status::InProgress,
            "cancelled" => Status::Cancelled,
            "queued" => Status::Queued,
            _ => Status::Other(status),
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Status::from)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message(OutputMessage),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct OutputMessage {
    pub id: Option<String>,

    pub status: Option<Status>,

    /// This is always `assistant`
    pub role: Option<String>,

    #[serde(default)]
    pub content: Vec<MessageContent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    OutputText(OutputText),
    Refusal(Refusal),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct OutputText {
    pub text: String,

    #[serde(default)]
    pub annotations: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct Refusal {
    /// The refusal explanation from the model.
    pub refusal: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IncompleteDetails {
    /// e.g. `max_output_tokens` or `content_filter`
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ResponseError {
    pub code: Option<String>,
    pub message: Option<String>,
}
