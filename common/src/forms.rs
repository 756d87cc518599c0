use thiserror::Error;

use crate::phone::is_valid_pincode;

/// Validation failure for a form screen. Surfaced to the user as a
/// destructive toast; nothing is logged or escalated beyond that.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("PIN code must be exactly 6 digits")]
    InvalidPincode,
}

fn require(field: &str, name: &'static str) -> Result<(), FormError> {
    if field.trim().is_empty() {
        Err(FormError::Missing(name))
    } else {
        Ok(())
    }
}

/// Warranty registration form. A valid submission is acknowledged and
/// discarded; no product record is created or updated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarrantyRegistration {
    pub product_id: String,
    /// ISO date string straight from the date input.
    pub installation_date: String,
}

impl WarrantyRegistration {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.product_id, "product")?;
        require(&self.installation_date, "installation date")
    }
}

/// Service request form. Accepted submissions are not appended to the
/// service history; the photo, if any, never leaves the browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceRequestDraft {
    pub product_id: String,
    pub issue_description: String,
}

impl ServiceRequestDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.product_id, "product")?;
        require(&self.issue_description, "issue description")
    }
}

/// Profile editor fields. The phone number is fixed to the session
/// mobile and not validated here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.address, "address")?;
        require(&self.city, "city")?;
        require(&self.state, "state")?;
        if !is_valid_pincode(self.pincode.trim()) {
            return Err(FormError::InvalidPincode);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warranty_registration_requires_all_fields() {
        let empty = WarrantyRegistration::default();
        assert_eq!(empty.validate(), Err(FormError::Missing("product")));

        let no_date = WarrantyRegistration {
            product_id: "1".into(),
            installation_date: "".into(),
        };
        assert_eq!(
            no_date.validate(),
            Err(FormError::Missing("installation date"))
        );

        let full = WarrantyRegistration {
            product_id: "1".into(),
            installation_date: "2024-01-20".into(),
        };
        assert_eq!(full.validate(), Ok(()));
    }

    #[test]
    fn test_service_request_requires_description() {
        let draft = ServiceRequestDraft {
            product_id: "2".into(),
            issue_description: "   ".into(),
        };
        assert_eq!(
            draft.validate(),
            Err(FormError::Missing("issue description"))
        );

        let draft = ServiceRequestDraft {
            product_id: "2".into(),
            issue_description: "Water leakage from bottom".into(),
        };
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_profile_pincode_checked_last() {
        let mut form = ProfileForm {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "9876543210".into(),
            address: "123 Main Street, Apartment 4B".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            pincode: "4000".into(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidPincode));

        form.pincode = "400001".into();
        assert_eq!(form.validate(), Ok(()));

        form.city.clear();
        assert_eq!(form.validate(), Err(FormError::Missing("city")));
    }
}
