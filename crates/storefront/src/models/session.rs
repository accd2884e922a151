//! Session-related types.
//!
//! Everything the storefront remembers about a visitor lives in one typed
//! [`VisitorSession`] value stored under [`keys::VISITOR`].

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use otthub_core::CartIds;

/// Per-visitor state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorSession {
    /// Plans in the visitor's cart.
    #[serde(default)]
    pub cart: CartIds,
    /// Set after a successful admin login.
    #[serde(default)]
    pub admin: bool,
}

impl VisitorSession {
    /// Load the visitor state, starting fresh if none is stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        Ok(session
            .get::<Self>(keys::VISITOR)
            .await?
            .unwrap_or_default())
    }

    /// Persist the visitor state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn save(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(keys::VISITOR, self).await
    }
}

/// Session keys.
pub mod keys {
    /// Key for the typed visitor state (cart and admin flag).
    pub const VISITOR: &str = "visitor";

    /// Key for flash notices awaiting display.
    pub const FLASH: &str = "flash";
}
