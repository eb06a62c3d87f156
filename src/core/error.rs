use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum FoundryError {
    /// A required input is missing or invalid. Raised before any network call.
    #[error("{0}")]
    Configuration(String),

    #[error("Network error: {message}")]
    Transport {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("API error ({}): {message}", status_label(.status_code, .code))]
    Api {
        message: String,
        status_code: Option<u16>,
        code: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    /// No identity source could produce a token.
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

fn status_label(status_code: &Option<u16>, code: &Option<String>) -> String {
    match (status_code, code) {
        (Some(status), Some(code)) => format!("{status} {code}"),
        (Some(status), None) => status.to_string(),
        (None, Some(code)) => code.to_string(),
        (None, None) => "unknown status".to_string(),
    }
}

impl FoundryError {
    pub(crate) fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        FoundryError::Transport {
            message: message.into(),
            source: Box::new(source),
        }
    }

    pub(crate) fn parse(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FoundryError::Parse {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
