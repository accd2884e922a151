//! Subscription plan records.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PlanId, Price};

/// Logo used when a plan is created without one.
pub const DEFAULT_LOGO: &str = "netflix.png";

/// A purchasable catalog entry.
///
/// `stock` is advisory: it is displayed but never decremented on purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub price: Price,
    /// Asset file name under `/static/img/`.
    pub logo: String,
    pub desc: String,
    pub stock: u32,
}

/// Raw, untrusted plan fields as submitted by the admin form.
///
/// Every field is optional; see [`NewPlan::from_fields`] for the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanFields<'a> {
    pub name: Option<&'a str>,
    pub price: Option<&'a str>,
    pub logo: Option<&'a str>,
    pub desc: Option<&'a str>,
    pub stock: Option<&'a str>,
}

/// A plan that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlan {
    pub name: String,
    pub price: Price,
    pub logo: String,
    pub desc: String,
    pub stock: u32,
}

impl NewPlan {
    /// Build a plan from raw form fields without ever failing.
    ///
    /// - missing name or description become empty strings
    /// - a missing or empty logo becomes [`DEFAULT_LOGO`]
    /// - price and stock that are missing, negative or non-numeric become 0
    #[must_use]
    pub fn from_fields(fields: PlanFields<'_>) -> Self {
        let logo = fields
            .logo
            .map(str::trim)
            .filter(|logo| !logo.is_empty())
            .unwrap_or(DEFAULT_LOGO);

        Self {
            name: fields.name.unwrap_or_default().to_owned(),
            price: Price::new(parse_lenient(fields.price)),
            logo: logo.to_owned(),
            desc: fields.desc.unwrap_or_default().to_owned(),
            stock: parse_lenient(fields.stock),
        }
    }

    /// Attach an ID, producing a catalog record.
    #[must_use]
    pub fn with_id(self, id: PlanId) -> Plan {
        Plan {
            id,
            name: self.name,
            price: self.price,
            logo: self.logo,
            desc: self.desc,
            stock: self.stock,
        }
    }
}

/// Parse a numeric form value, substituting the type's default on any failure.
///
/// Surrounding whitespace is ignored.
///
/// ```
/// use otthub_core::parse_lenient;
///
/// assert_eq!(parse_lenient::<u32>(Some(" 12 ")), 12);
/// assert_eq!(parse_lenient::<u32>(Some("twelve")), 0);
/// assert_eq!(parse_lenient::<u32>(None), 0);
/// ```
#[must_use]
pub fn parse_lenient<T>(raw: Option<&str>) -> T
where
    T: FromStr + Default,
{
    raw.map(str::trim)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_all_present() {
        let plan = NewPlan::from_fields(PlanFields {
            name: Some("JioCinema Premium"),
            price: Some("89"),
            logo: Some("jio.png"),
            desc: Some("HD • 30 Days"),
            stock: Some("7"),
        });

        assert_eq!(plan.name, "JioCinema Premium");
        assert_eq!(plan.price, Price::new(89));
        assert_eq!(plan.logo, "jio.png");
        assert_eq!(plan.desc, "HD • 30 Days");
        assert_eq!(plan.stock, 7);
    }

    #[test]
    fn test_from_fields_defaults_when_missing() {
        let plan = NewPlan::from_fields(PlanFields::default());

        assert_eq!(plan.name, "");
        assert_eq!(plan.price, Price::ZERO);
        assert_eq!(plan.logo, DEFAULT_LOGO);
        assert_eq!(plan.desc, "");
        assert_eq!(plan.stock, 0);
    }

    #[test]
    fn test_from_fields_defaults_invalid_numbers() {
        let plan = NewPlan::from_fields(PlanFields {
            name: Some("Broken"),
            price: Some("abc"),
            stock: Some("-3"),
            ..PlanFields::default()
        });

        assert_eq!(plan.price, Price::ZERO);
        assert_eq!(plan.stock, 0);
    }

    #[test]
    fn test_from_fields_empty_logo_uses_default() {
        let plan = NewPlan::from_fields(PlanFields {
            logo: Some("   "),
            ..PlanFields::default()
        });
        assert_eq!(plan.logo, DEFAULT_LOGO);
    }

    #[test]
    fn test_parse_lenient_trims() {
        assert_eq!(parse_lenient::<u64>(Some(" 299\n")), 299);
        assert_eq!(parse_lenient::<u64>(Some("")), 0);
        assert_eq!(parse_lenient::<u64>(Some("1.5")), 0);
    }

    #[test]
    fn test_with_id() {
        let plan = NewPlan::from_fields(PlanFields {
            name: Some("Zee5 Premium"),
            ..PlanFields::default()
        })
        .with_id(PlanId::new(6));

        assert_eq!(plan.id, PlanId::new(6));
        assert_eq!(plan.name, "Zee5 Premium");
    }
}
