//! Minimal string key/value configuration for the admin workflow.
//!
//! Keys are dotted paths (`store.backend`, `rest.base_url`). Environment
//! overrides use the `MENAGERIE__` prefix with `__` as the separator:
//! `MENAGERIE__REST__BASE_URL` becomes `rest.base_url`.

use std::collections::HashMap;

pub const ENV_PREFIX: &str = "MENAGERIE__";

#[derive(Debug, Default)]
pub struct AdminConfig {
    values: HashMap<String, String>,
}

impl AdminConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// New config pre-loaded from `MENAGERIE__*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.load_env(ENV_PREFIX);
        config
    }

    /// Set a configuration key to a string value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Layer environment variables with the given prefix over this config.
    pub fn load_env(&mut self, prefix: &str) {
        for (key, value) in std::env::vars() {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                self.set(normalized, value);
            }
        }
    }

    pub fn snapshot(&self) -> AdminConfigSnapshot {
        AdminConfigSnapshot {
            map: self.values.clone(),
        }
    }
}

/// Immutable view of a config, cheap to clone into components.
#[derive(Debug, Clone, Default)]
pub struct AdminConfigSnapshot {
    map: HashMap<String, String>,
}

impl AdminConfigSnapshot {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }
}
