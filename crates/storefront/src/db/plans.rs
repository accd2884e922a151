//! In-memory plan repository.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use otthub_core::{NewPlan, Plan, PlanId};

use super::{PlanRepository, seed_plans};

/// Plan catalog held in process memory.
///
/// Plans are keyed by ID. New IDs are always greater than every existing ID,
/// so ID order is insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    plans: RwLock<BTreeMap<PlanId, Plan>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the startup plans.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_plans(seed_plans())
    }

    /// Create a catalog holding `plans`. Later duplicates of an ID replace earlier ones.
    #[must_use]
    pub fn with_plans(plans: impl IntoIterator<Item = Plan>) -> Self {
        Self {
            plans: RwLock::new(plans.into_iter().map(|plan| (plan.id, plan)).collect()),
        }
    }
}

// Every mutation is a single insert or remove, so a poisoned lock still
// guards a consistent map.
impl PlanRepository for InMemoryCatalog {
    fn get(&self, id: PlanId) -> Option<Plan> {
        self.plans
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn list(&self) -> Vec<Plan> {
        self.plans
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn create(&self, plan: NewPlan) -> Plan {
        let mut plans = self.plans.write().unwrap_or_else(PoisonError::into_inner);
        let id = plans
            .last_key_value()
            .map_or(PlanId::FIRST, |(last, _)| last.next());

        let plan = plan.with_id(id);
        plans.insert(id, plan.clone());
        plan
    }

    fn delete(&self, id: PlanId) -> bool {
        self.plans
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use otthub_core::{PlanFields, Price};

    use super::*;

    fn new_plan(name: &str) -> NewPlan {
        NewPlan::from_fields(PlanFields {
            name: Some(name),
            price: Some("59"),
            ..PlanFields::default()
        })
    }

    fn ids(catalog: &InMemoryCatalog) -> Vec<u32> {
        catalog.list().iter().map(|plan| plan.id.as_u32()).collect()
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = InMemoryCatalog::seeded();
        assert_eq!(ids(&catalog), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            catalog.get(PlanId::new(2)).map(|plan| plan.price),
            Some(Price::new(149))
        );
    }

    #[test]
    fn test_get_unknown_is_none() {
        assert!(InMemoryCatalog::seeded().get(PlanId::new(42)).is_none());
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let catalog = InMemoryCatalog::seeded();
        catalog.delete(PlanId::new(3));

        let plan = catalog.create(new_plan("Aha Video"));
        assert_eq!(plan.id, PlanId::new(6));
        assert_eq!(ids(&catalog), vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_create_after_deleting_max_reuses_id() {
        let catalog = InMemoryCatalog::seeded();
        catalog.delete(PlanId::new(5));

        let plan = catalog.create(new_plan("Sun NXT"));
        assert_eq!(plan.id, PlanId::new(5));
        assert_eq!(ids(&catalog).last(), Some(&5));
    }

    #[test]
    fn test_create_on_empty_catalog_starts_at_one() {
        let catalog = InMemoryCatalog::new();
        assert_eq!(catalog.create(new_plan("First")).id, PlanId::FIRST);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let catalog = InMemoryCatalog::new();
        let a = catalog.create(new_plan("Netflix Premium"));
        let b = catalog.create(new_plan("Netflix Premium"));
        assert_ne!(a.id, b.id);
        assert_eq!(catalog.list().len(), 2);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let catalog = InMemoryCatalog::seeded();
        assert!(catalog.delete(PlanId::new(1)));
        assert!(!catalog.delete(PlanId::new(1)));
        assert_eq!(catalog.list().len(), 4);
    }
}
