use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// Warranty coverage state shown as a badge on product cards.
///
/// Presentation-only: the value is fixed per fixture record and nothing
/// transitions between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantyStatus {
    Active,
    Expiring,
    Expired,
}

impl WarrantyStatus {
    pub fn label(self) -> &'static str {
        match self {
            WarrantyStatus::Active => "ACTIVE",
            WarrantyStatus::Expiring => "EXPIRING",
            WarrantyStatus::Expired => "EXPIRED",
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            WarrantyStatus::Active => "badge badge-active",
            WarrantyStatus::Expiring => "badge badge-expiring",
            WarrantyStatus::Expired => "badge badge-expired",
        }
    }
}

/// A product under warranty, as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub installation_date: NaiveDate,
    pub warranty_status: WarrantyStatus,
    pub warranty_expiry: NaiveDate,
    /// Display string like "2 Years"; no expiry math is derived from it.
    pub warranty_period: String,
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
}

impl Product {
    /// Case-insensitive substring match over name, model and serial number.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.model.to_lowercase().contains(&q)
            || self.serial_number.to_lowercase().contains(&q)
    }
}

/// Dashboard search: products whose name, model or serial number contain
/// the query. An empty query keeps everything.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_empty_query_keeps_all() {
        let products = fixtures::products();
        assert_eq!(filter_products(&products, "").len(), products.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = fixtures::products();
        let hits = filter_products(&products, "xr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Smart Refrigerator XR-500");

        // Same query, different case
        let hits = filter_products(&products, "XR");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_covers_model_and_serial() {
        let products = fixtures::products();
        let by_model = filter_products(&products, "pc-800");
        assert_eq!(by_model.len(), 1);
        assert_eq!(by_model[0].name, "Washing Machine ProClean");

        let by_serial = filter_products(&products, "ac2022");
        assert_eq!(by_serial.len(), 1);
        assert_eq!(by_serial[0].name, "Air Conditioner CoolBreeze");
    }

    #[test]
    fn test_search_miss_returns_empty() {
        let products = fixtures::products();
        assert!(filter_products(&products, "dishwasher").is_empty());
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(WarrantyStatus::Active.label(), "ACTIVE");
        assert_eq!(WarrantyStatus::Expiring.badge_class(), "badge badge-expiring");
        assert_eq!(WarrantyStatus::Expired.badge_class(), "badge badge-expired");
    }

    #[test]
    fn test_product_serializes_with_lowercase_status() {
        let products = fixtures::products();
        let json = serde_json::to_string(&products[0]).unwrap();
        assert!(json.contains("\"warranty_status\":\"active\""));
    }
}
