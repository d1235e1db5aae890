// src/config/api_key.rs
// DOCUMENTATION: Credential input for the Places client
// PURPOSE: Accept either a literal key or a closure producing one

use std::fmt;

/// API key given directly or through a zero-argument provider
/// DOCUMENTATION: Resolved exactly once, when the search client is constructed
pub enum ApiKey {
    Literal(String),
    Provider(Box<dyn FnOnce() -> String + Send>),
}

impl ApiKey {
    /// Wrap a key provider (secret store lookup, env read, etc.)
    pub fn provider<F>(f: F) -> Self
    where
        F: FnOnce() -> String + Send + 'static,
    {
        ApiKey::Provider(Box::new(f))
    }

    /// Produce the key string, invoking the provider if there is one
    pub fn resolve(self) -> String {
        match self {
            ApiKey::Literal(key) => key,
            ApiKey::Provider(provider) => provider(),
        }
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        ApiKey::Literal(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        ApiKey::Literal(key.to_string())
    }
}

// Never print the key itself
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Literal(_) => f.write_str("ApiKey::Literal(..)"),
            ApiKey::Provider(_) => f.write_str("ApiKey::Provider(..)"),
        }
    }
}
