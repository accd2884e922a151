//! One-shot notices carried across a redirect.
//!
//! A handler queues a notice before redirecting; the next rendered page
//! takes every queued notice out of the session and displays it once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::session::keys;

/// Notice category, doubling as the CSS modifier in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Danger,
}

impl FlashLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Danger => "danger",
        }
    }
}

/// A queued notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

/// Queue a notice for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn push(
    session: &Session,
    level: FlashLevel,
    text: impl Into<String>,
) -> Result<(), tower_sessions::session::Error> {
    let mut queued = session
        .get::<Vec<FlashMessage>>(keys::FLASH)
        .await?
        .unwrap_or_default();
    queued.push(FlashMessage {
        level,
        text: text.into(),
    });
    session.insert(keys::FLASH, queued).await
}

/// Remove and return every queued notice.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn take(session: &Session) -> Result<Vec<FlashMessage>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<FlashMessage>>(keys::FLASH)
        .await?
        .unwrap_or_default())
}
