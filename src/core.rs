pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::FoundryError;
pub use http::{HttpClient, HttpClientConfig};
pub use traits::CredentialProvider;
pub use types::{BearerToken, CompletionRequest};
