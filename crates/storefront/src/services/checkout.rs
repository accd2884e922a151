//! Cart resolution and the UTR checkout flow.
//!
//! # Stages
//!
//! ```text
//! Browsing --add--> CartNonEmpty --GET /payment--> AwaitingPayment --UTR--> Submitted
//!                                      |
//!                                      +-- cart resolves empty --> back to /plans
//! ```
//!
//! No order is persisted. The operator notification is the only record of a
//! submitted payment.

use otthub_core::{CartIds, Plan, Price, Utr, UtrError};
use serde::Deserialize;
use thiserror::Error;

use crate::db::PlanRepository;

/// Placeholder for optional contact fields left blank.
const BLANK_FIELD: &str = "-";

/// Checkout errors shown to the visitor as notices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Every carted plan is missing from the catalog (or the cart is empty).
    #[error("Cart is empty")]
    EmptyCart,

    /// The submitted UTR is blank.
    #[error("Please enter UTR")]
    MissingUtr(#[from] UtrError),
}

/// Where a visitor is in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    Browsing,
    CartNonEmpty,
    AwaitingPayment,
    Submitted,
}

impl CheckoutStage {
    /// Stage implied by the resolved cart contents.
    #[must_use]
    pub fn for_cart(summary: &CartSummary) -> Self {
        if summary.is_empty() {
            Self::Browsing
        } else {
            Self::CartNonEmpty
        }
    }

    /// Move to the payment page.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] unless the cart has resolvable items.
    pub const fn begin_payment(self) -> Result<Self, CheckoutError> {
        match self {
            Self::CartNonEmpty | Self::AwaitingPayment => Ok(Self::AwaitingPayment),
            Self::Browsing | Self::Submitted => Err(CheckoutError::EmptyCart),
        }
    }

    /// Accept a validated UTR.
    ///
    /// The UTR is the only gate: a cart that resolves empty still submits,
    /// with a total of zero. The cart is cleared afterwards, so a second
    /// `begin_payment` from here fails until something is added again.
    #[must_use]
    pub const fn submit(self, _submission: &PaymentSubmission) -> Self {
        Self::Submitted
    }
}

/// Cart contents resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Plans still present in the catalog, in cart order.
    pub items: Vec<Plan>,
    /// Sum of `items` prices.
    pub total: Price,
}

impl CartSummary {
    /// Resolve `cart` against `catalog`.
    ///
    /// IDs whose plan no longer exists are skipped. The stored cart is left
    /// as is.
    #[must_use]
    pub fn resolve(cart: &CartIds, catalog: &dyn PlanRepository) -> Self {
        let items: Vec<Plan> = cart.iter().filter_map(|id| catalog.get(id)).collect();
        let total = items.iter().map(|plan| plan.price).sum();
        Self { items, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Comma-separated plan names.
    #[must_use]
    pub fn item_names(&self) -> String {
        self.items
            .iter()
            .map(|plan| plan.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// UTR form data.
#[derive(Debug, Default, Deserialize)]
pub struct UtrForm {
    #[serde(default)]
    pub utr: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A validated UTR submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSubmission {
    pub utr: Utr,
    /// Trimmed; may be empty.
    pub name: String,
    /// Trimmed; may be empty.
    pub phone: String,
}

impl PaymentSubmission {
    /// Validate the submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingUtr`] if the UTR is missing or blank.
    pub fn from_form(form: &UtrForm) -> Result<Self, CheckoutError> {
        let utr = Utr::parse(form.utr.as_deref().unwrap_or_default())?;
        Ok(Self {
            utr,
            name: trimmed(form.name.as_deref()),
            phone: trimmed(form.phone.as_deref()),
        })
    }

    /// Operator notification text (Telegram Markdown).
    #[must_use]
    pub fn notification_text(&self, summary: &CartSummary) -> String {
        format!(
            "*New payment received*\nName: {}\nPhone: {}\nUTR: `{}`\nAmount: {}\nItems: {}",
            or_blank(&self.name),
            or_blank(&self.phone),
            self.utr,
            summary.total,
            summary.item_names(),
        )
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_owned()
}

fn or_blank(value: &str) -> &str {
    if value.is_empty() { BLANK_FIELD } else { value }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use otthub_core::PlanId;

    use super::*;
    use crate::db::InMemoryCatalog;

    fn cart(ids: &[u32]) -> CartIds {
        ids.iter().copied().map(PlanId::new).collect()
    }

    fn form(utr: &str, name: &str, phone: &str) -> UtrForm {
        UtrForm {
            utr: Some(utr.to_string()),
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    #[test]
    fn test_resolve_sums_prices() {
        let catalog = InMemoryCatalog::seeded();
        let summary = CartSummary::resolve(&cart(&[2, 4]), &catalog);

        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.total, Price::new(278));
        assert_eq!(summary.item_names(), "Amazon Prime Video, Sony LIV Premium");
    }

    #[test]
    fn test_resolve_skips_stale_ids() {
        let catalog = InMemoryCatalog::seeded();
        catalog.delete(PlanId::new(3));

        let stored = cart(&[3, 5]);
        let summary = CartSummary::resolve(&stored, &catalog);

        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.total, Price::new(99));
        // Reading does not rewrite the stored cart
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_stage_transitions() {
        let catalog = InMemoryCatalog::seeded();

        let empty = CartSummary::resolve(&CartIds::new(), &catalog);
        assert_eq!(CheckoutStage::for_cart(&empty), CheckoutStage::Browsing);
        assert_eq!(
            CheckoutStage::for_cart(&empty).begin_payment(),
            Err(CheckoutError::EmptyCart)
        );

        let full = CartSummary::resolve(&cart(&[1]), &catalog);
        assert_eq!(
            CheckoutStage::for_cart(&full).begin_payment(),
            Ok(CheckoutStage::AwaitingPayment)
        );
    }

    #[test]
    fn test_submit_ends_checkout() {
        let catalog = InMemoryCatalog::seeded();
        let submission = PaymentSubmission::from_form(&form("ABC123", "", "")).unwrap();

        let full = CartSummary::resolve(&cart(&[2, 4]), &catalog);
        let stage = CheckoutStage::for_cart(&full)
            .begin_payment()
            .unwrap()
            .submit(&submission);
        assert_eq!(stage, CheckoutStage::Submitted);
        assert_eq!(stage.begin_payment(), Err(CheckoutError::EmptyCart));

        // An empty cart still accepts a UTR
        let empty = CartSummary::resolve(&CartIds::new(), &catalog);
        assert_eq!(
            CheckoutStage::for_cart(&empty).submit(&submission),
            CheckoutStage::Submitted
        );
    }

    #[test]
    fn test_submission_requires_utr() {
        assert_eq!(
            PaymentSubmission::from_form(&form("   ", "Asha", "98")),
            Err(CheckoutError::MissingUtr(UtrError::Empty))
        );
        assert!(PaymentSubmission::from_form(&UtrForm::default()).is_err());
    }

    #[test]
    fn test_submission_trims_fields() {
        let submission = PaymentSubmission::from_form(&form(" ABC123 ", " Asha ", " 98450 ")).unwrap();
        assert_eq!(submission.utr.as_str(), "ABC123");
        assert_eq!(submission.name, "Asha");
        assert_eq!(submission.phone, "98450");
    }

    #[test]
    fn test_notification_text() {
        let catalog = InMemoryCatalog::seeded();
        let summary = CartSummary::resolve(&cart(&[2, 4]), &catalog);
        let submission = PaymentSubmission::from_form(&form("ABC123", "", "")).unwrap();

        assert_eq!(
            submission.notification_text(&summary),
            "*New payment received*\nName: -\nPhone: -\nUTR: `ABC123`\nAmount: ₹278\nItems: Amazon Prime Video, Sony LIV Premium"
        );
    }
}
