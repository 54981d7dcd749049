//! Application state shared across handlers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration, the immutable
/// catalog, and the in-memory newsletter subscriber set. Per-session cart
/// state lives in the session layer, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    subscribers: Mutex<HashSet<String>>,
}

impl AppState {
    /// Create a new application state with the built-in catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::builtin(),
                subscribers: Mutex::new(HashSet::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Record a newsletter subscriber.
    ///
    /// Returns `true` if the email was newly added, `false` if it was
    /// already subscribed.
    pub fn add_subscriber(&self, email: &str) -> bool {
        self.inner
            .subscribers
            .lock()
            .map(|mut set| set.insert(email.to_string()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(StorefrontConfig {
            host: "127.0.0.1".parse().expect("valid addr"),
            port: 0,
            static_dir: None,
            cors_allow_origin: None,
            sentry_dsn: None,
        })
    }

    #[test]
    fn test_add_subscriber_dedupes() {
        let state = test_state();
        assert!(state.add_subscriber("a@example.com"));
        assert!(!state.add_subscriber("a@example.com"));
        assert!(state.add_subscriber("b@example.com"));
    }

    #[test]
    fn test_state_clones_share_subscribers() {
        let state = test_state();
        let clone = state.clone();
        assert!(state.add_subscriber("a@example.com"));
        assert!(!clone.add_subscriber("a@example.com"));
    }
}
