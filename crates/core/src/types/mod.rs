//! Core types for OTT Hub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod plan;
pub mod price;
pub mod utr;

pub use cart::CartIds;
pub use id::*;
pub use plan::{DEFAULT_LOGO, NewPlan, Plan, PlanFields, parse_lenient};
pub use price::Price;
pub use utr::{Utr, UtrError};
