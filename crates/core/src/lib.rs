//! OTT Hub Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! - `storefront` - Public catalog, cart, UTR checkout and the admin console
//! - `integration-tests` - Router-level tests against the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no session handling. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for plan IDs, prices, UTRs, plans and carts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
