pub mod constants;
pub(crate) mod foundry;

pub use foundry::{FoundryClient, FoundryConfig};
