//! Session-backed models for the storefront.

pub mod flash;
pub mod session;

pub use flash::{FlashLevel, FlashMessage};
pub use session::{VisitorSession, keys as session_keys};
