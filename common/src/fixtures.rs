//! Hardcoded sample records standing in for a real data source.

use chrono::NaiveDate;

use crate::forms::ProfileForm;
use crate::product::{Product, ProductId, WarrantyStatus};
use crate::service::{ServiceId, ServiceRecord, ServiceStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

/// The product catalogue shown on the dashboard.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId("1".into()),
            name: "Smart Refrigerator XR-500".into(),
            model: "XR-500-2023".into(),
            serial_number: "REF2024001".into(),
            purchase_date: date(2024, 1, 15),
            installation_date: date(2024, 1, 20),
            warranty_status: WarrantyStatus::Active,
            warranty_expiry: date(2026, 1, 15),
            warranty_period: "2 Years".into(),
            invoice_number: "INV2024-001".into(),
            customer_name: "John Doe".into(),
            customer_phone: "9876543210".into(),
            customer_email: "john@example.com".into(),
        },
        Product {
            id: ProductId("2".into()),
            name: "Washing Machine ProClean".into(),
            model: "PC-800-DLX".into(),
            serial_number: "WM2023045".into(),
            purchase_date: date(2023, 8, 20),
            installation_date: date(2023, 8, 25),
            warranty_status: WarrantyStatus::Expiring,
            warranty_expiry: date(2024, 12, 20),
            warranty_period: "16 Months".into(),
            invoice_number: "INV2023-078".into(),
            customer_name: "John Doe".into(),
            customer_phone: "9876543210".into(),
            customer_email: "john@example.com".into(),
        },
        Product {
            id: ProductId("3".into()),
            name: "Air Conditioner CoolBreeze".into(),
            model: "CB-1.5T-INV".into(),
            serial_number: "AC2022089".into(),
            purchase_date: date(2022, 5, 10),
            installation_date: date(2022, 5, 14),
            warranty_status: WarrantyStatus::Expired,
            warranty_expiry: date(2023, 5, 10),
            warranty_period: "1 Year".into(),
            invoice_number: "INV2022-114".into(),
            customer_name: "Amit Patel".into(),
            customer_phone: "9876543211".into(),
            customer_email: "amit@example.com".into(),
        },
    ]
}

/// Look up a single product by its id.
pub fn product(id: &str) -> Option<Product> {
    products().into_iter().find(|p| p.id.0 == id)
}

/// Past and ongoing service tickets for the history view.
pub fn service_history() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord {
            id: ServiceId("1".into()),
            product_name: "Smart Refrigerator XR-500".into(),
            request_date: date(2024, 3, 15),
            status: ServiceStatus::Completed,
            description: "Cooling issue - Temperature not maintaining".into(),
            resolution: Some("Replaced thermostat and refilled refrigerant".into()),
            completed_date: Some(date(2024, 3, 18)),
            scheduled_date: None,
            technician_name: Some("Mike Johnson".into()),
        },
        ServiceRecord {
            id: ServiceId("2".into()),
            product_name: "Washing Machine ProClean".into(),
            request_date: date(2024, 3, 10),
            status: ServiceStatus::InProgress,
            description: "Water leakage from bottom".into(),
            resolution: None,
            completed_date: None,
            scheduled_date: Some(date(2024, 3, 20)),
            technician_name: None,
        },
        ServiceRecord {
            id: ServiceId("3".into()),
            product_name: "Air Conditioner CoolBreeze".into(),
            request_date: date(2023, 12, 5),
            status: ServiceStatus::Completed,
            description: "Not cooling properly, making noise".into(),
            resolution: Some("Cleaned filters and fixed compressor".into()),
            completed_date: Some(date(2023, 12, 8)),
            scheduled_date: None,
            technician_name: Some("Sarah Williams".into()),
        },
    ]
}

/// Starting values for the profile editor. The phone field is filled
/// from the session at render time.
pub fn default_profile() -> ProfileForm {
    ProfileForm {
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        phone: String::new(),
        address: "123 Main Street, Apartment 4B".into(),
        city: "Mumbai".into(),
        state: "Maharashtra".into(),
        pincode: "400001".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_products_with_unique_ids() {
        let products = products();
        assert_eq!(products.len(), 3);
        let mut ids: Vec<_> = products.iter().map(|p| p.id.0.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let p = product("2").expect("product 2 exists");
        assert_eq!(p.name, "Washing Machine ProClean");
        assert_eq!(p.warranty_status, WarrantyStatus::Expiring);
        assert!(product("99").is_none());
    }

    #[test]
    fn test_completed_tickets_carry_resolution() {
        for record in service_history() {
            match record.status {
                ServiceStatus::Completed => {
                    assert!(record.resolution.is_some());
                    assert!(record.completed_date.is_some());
                    assert!(record.technician_name.is_some());
                }
                ServiceStatus::InProgress => {
                    assert!(record.resolution.is_none());
                    assert!(record.scheduled_date.is_some());
                }
                ServiceStatus::Cancelled => {}
            }
        }
    }

    #[test]
    fn test_default_profile_is_valid_once_phone_set() {
        let mut form = default_profile();
        form.phone = "9876543210".into();
        assert_eq!(form.validate(), Ok(()));
    }
}
