//! Cart contents.

use serde::{Deserialize, Serialize};

use super::PlanId;

/// An ordered set of plan IDs.
///
/// Preserves first-insertion order and never holds the same ID twice. The
/// set stores IDs only; resolving them against the catalog (and dropping
/// IDs whose plan was deleted) is the reader's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PlanId>", into = "Vec<PlanId>")]
pub struct CartIds(Vec<PlanId>);

impl CartIds {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append `id` unless it is already present.
    ///
    /// Returns `true` if the cart changed.
    pub fn insert(&mut self, id: PlanId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove `id` if present.
    ///
    /// Returns `true` if the cart changed.
    pub fn remove(&mut self, id: PlanId) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| *existing != id);
        self.0.len() != before
    }

    /// Whether `id` is in the cart.
    #[must_use]
    pub fn contains(&self, id: PlanId) -> bool {
        self.0.contains(&id)
    }

    /// Remove every ID.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of IDs in the cart, including stale ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate IDs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PlanId> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<PlanId>> for CartIds {
    fn from(ids: Vec<PlanId>) -> Self {
        let mut cart = Self::new();
        for id in ids {
            cart.insert(id);
        }
        cart
    }
}

impl From<CartIds> for Vec<PlanId> {
    fn from(cart: CartIds) -> Self {
        cart.0
    }
}

impl FromIterator<PlanId> for CartIds {
    fn from_iter<I: IntoIterator<Item = PlanId>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
