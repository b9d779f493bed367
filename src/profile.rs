// Per-record-type export profiles: name replacements and ignored fields
//
// These lists are explicit static configuration. A field is either
// exported under its own name, exported under a replaced name, or listed
// as ignored; anything else fails the completeness check.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Replacement map plus ignore set for one record type. The replacement
/// map sends an exported column name to the record field it covers; the
/// ignore set lists fields intentionally left out of the export (internal
/// ids, navigation references, audit timestamps).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportProfile {
    #[serde(default)]
    replacements: HashMap<String, String>,
    #[serde(default)]
    ignored: HashSet<String>,
}

impl ExportProfile {
    pub fn add_replacement(&mut self, column: &str, field: &str) -> &mut Self {
        self.replacements
            .insert(column.to_string(), field.to_string());
        self
    }

    pub fn ignore(&mut self, field: &str) -> &mut Self {
        self.ignored.insert(field.to_string());
        self
    }

    /// The field a column name covers through the replacement map, if any.
    pub fn replacement(&self, column: &str) -> Option<&str> {
        self.replacements.get(column).map(String::as_str)
    }

    pub fn is_ignored(&self, field: &str) -> bool {
        self.ignored.contains(field)
    }

    /// All configured replacement pairs as (column, field).
    pub fn replacements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.replacements
            .iter()
            .map(|(column, field)| (column.as_str(), field.as_str()))
    }

    /// Resolves a column name to the record field it reads: the replaced
    /// name when one is configured, the column name itself otherwise.
    pub fn field_for_column<'a>(&'a self, column: &'a str) -> &'a str {
        self.replacement(column).unwrap_or(column)
    }

    fn with(replacements: &[(&str, &str)], ignored: &[&str]) -> Self {
        ExportProfile {
            replacements: replacements
                .iter()
                .map(|(column, field)| (column.to_string(), field.to_string()))
                .collect(),
            ignored: ignored.iter().map(|field| field.to_string()).collect(),
        }
    }
}

lazy_static! {
    /// Built-in profiles keyed by record type name.
    pub static ref DEFAULT_PROFILES: HashMap<String, ExportProfile> = {
        let mut profiles = HashMap::new();
        profiles.insert("Order".to_string(), order_profile());
        profiles.insert("Customer".to_string(), customer_profile());
        profiles.insert("Manufacturer".to_string(), manufacturer_profile());
        profiles.insert("Category".to_string(), category_profile());
        profiles.insert("Product".to_string(), product_profile());
        profiles
    };
}

pub fn order_profile() -> ExportProfile {
    ExportProfile::with(
        &[
            ("OrderId", "Id"),
            ("OrderStatusId", "OrderStatus"),
            ("PaymentStatusId", "PaymentStatus"),
            ("ShippingStatusId", "ShippingStatus"),
            ("ShippingPickUpInStore", "PickUpInStore"),
        ],
        &[
            // Flattened into Billing*/Shipping* columns or exported elsewhere
            "Customer",
            "BillingAddress",
            "ShippingAddress",
            // Intentionally not exported
            "CustomerTaxDisplayType",
            "PaidDateUtc",
            "Deleted",
        ],
    )
}

pub fn customer_profile() -> ExportProfile {
    ExportProfile::with(&[], &["Id", "AdminComment", "Deleted"])
}

pub fn manufacturer_profile() -> ExportProfile {
    ExportProfile::with(
        &[],
        &["PictureId", "CreatedOnUtc", "UpdatedOnUtc", "Deleted"],
    )
}

pub fn category_profile() -> ExportProfile {
    ExportProfile::with(
        &[],
        &["PictureId", "CreatedOnUtc", "UpdatedOnUtc", "Deleted"],
    )
}

pub fn product_profile() -> ExportProfile {
    ExportProfile::with(
        &[("ProductId", "Id")],
        &["CreatedOnUtc", "UpdatedOnUtc", "Deleted"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles_cover_supported_record_types() {
        for record_type in ["Order", "Customer", "Manufacturer", "Category", "Product"] {
            assert!(
                DEFAULT_PROFILES.contains_key(record_type),
                "missing default profile for {}",
                record_type
            );
        }
    }

    #[test]
    fn test_order_profile_replacements() {
        let profile = order_profile();
        assert_eq!(profile.replacement("OrderId"), Some("Id"));
        assert_eq!(profile.replacement("OrderStatusId"), Some("OrderStatus"));
        assert_eq!(profile.field_for_column("OrderTotal"), "OrderTotal");
    }

    #[test]
    fn test_manufacturer_profile_ignores_picture_id() {
        let profile = manufacturer_profile();
        assert!(profile.is_ignored("PictureId"));
        assert!(!profile.is_ignored("Name"));
    }
}
