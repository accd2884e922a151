//! Catalog storage.
//!
//! The catalog lives in process memory and is reset to [`seed_plans`] on
//! every restart. Handlers reach it through the [`PlanRepository`] trait so a
//! persistent backend can replace [`InMemoryCatalog`] without touching routes.

pub mod plans;

use otthub_core::{NewPlan, Plan, PlanId, Price};

pub use plans::InMemoryCatalog;

/// Catalog operations used by the storefront and admin console.
///
/// None of these operations fail: lookups of unknown IDs return `None` and
/// deleting an unknown ID is a no-op.
pub trait PlanRepository: Send + Sync {
    /// Get a plan by ID.
    fn get(&self, id: PlanId) -> Option<Plan>;

    /// All plans in insertion order.
    fn list(&self) -> Vec<Plan>;

    /// Insert a plan with ID `max(existing) + 1`, or 1 when the catalog is empty.
    fn create(&self, plan: NewPlan) -> Plan;

    /// Delete a plan. Returns `true` if a plan was removed.
    fn delete(&self, id: PlanId) -> bool;
}

/// The catalog every process starts with.
#[must_use]
pub fn seed_plans() -> Vec<Plan> {
    [
        (1, "Netflix Premium", 199, "netflix.png", "4K UHD • 30 Days", 10),
        (2, "Amazon Prime Video", 149, "prime.png", "HD • 30 Days", 12),
        (3, "Disney+ Hotstar", 299, "hotstar.png", "Sports + Movies", 8),
        (4, "Sony LIV Premium", 129, "sonyliv.png", "TV Shows + Movies", 15),
        (5, "Zee5 Premium", 99, "zee5.png", "HD Content", 20),
    ]
    .into_iter()
    .map(|(id, name, price, logo, desc, stock)| Plan {
        id: PlanId::new(id),
        name: name.to_string(),
        price: Price::new(price),
        logo: logo.to_string(),
        desc: desc.to_string(),
        stock,
    })
    .collect()
}
