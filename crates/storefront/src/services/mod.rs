//! Business logic services for storefront.
//!
//! - `checkout` - Cart resolution, UTR validation and the notification text
//! - `telegram` - Delivery of payment notifications to the operator chat

pub mod checkout;
pub mod telegram;

pub use checkout::{CartSummary, CheckoutError, CheckoutStage, PaymentSubmission, UtrForm};
pub use telegram::{TelegramClient, TelegramError};
