//! Credential resolvers: a static API key or an identity token.

pub mod api_key;
pub mod identity;

pub use api_key::ApiKeyCredential;
pub use identity::{
    AzureCliCredential, ClientSecretCredential, DefaultIdentityCredential,
    ManagedIdentityCredential, ManagedIdentitySource,
};
