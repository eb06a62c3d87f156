pub mod endpoint;
pub mod env;
pub mod settings;

pub use endpoint::{EndpointConfig, normalize_base_url};
pub use env::{EnvSource, ProcessEnv};
pub use settings::{ApiKeySettings, ModelSelection, ProjectSettings};
