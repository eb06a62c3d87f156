//! Environment-style configuration access.
//!
//! Everything that reads configuration goes through [`EnvSource`], so tests can
//! hand in a map instead of mutating the process environment.

use std::collections::HashMap;

use crate::core::FoundryError;

pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating empty and whitespace-only values as absent.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, key: &str) -> Result<String, FoundryError> {
        self.non_empty(key)
            .ok_or_else(|| FoundryError::Configuration(format!("{key} must be set.")))
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        self.non_empty(key).unwrap_or_else(|| default.to_string())
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|value| value.to_string())
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
