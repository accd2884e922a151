//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::{InMemoryCatalog, PlanRepository};
use crate::services::{TelegramClient, TelegramError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the plan catalog, the notification client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn PlanRepository>,
    telegram: Option<TelegramClient>,
}

impl AppState {
    /// Create application state with a freshly seeded in-memory catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the Telegram HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, TelegramError> {
        Self::with_catalog(config, Arc::new(InMemoryCatalog::seeded()))
    }

    /// Create application state around an existing catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the Telegram HTTP client cannot be built.
    pub fn with_catalog(
        config: StorefrontConfig,
        catalog: Arc<dyn PlanRepository>,
    ) -> Result<Self, TelegramError> {
        let telegram = config
            .telegram
            .as_ref()
            .map(TelegramClient::new)
            .transpose()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                telegram,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the plan catalog.
    #[must_use]
    pub fn catalog(&self) -> &dyn PlanRepository {
        self.inner.catalog.as_ref()
    }

    /// Get the payment notification client, if notifications are configured.
    #[must_use]
    pub fn telegram(&self) -> Option<&TelegramClient> {
        self.inner.telegram.as_ref()
    }
}
