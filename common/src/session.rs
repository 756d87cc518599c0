use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phone::{is_valid_mobile, is_valid_otp};

/// Role a user picks on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Distributor,
}

impl Role {
    /// The string persisted to browser storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Distributor => "distributor",
        }
    }

    /// Parse a persisted role string. Unknown values are treated as absent.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "customer" => Some(Role::Customer),
            "distributor" => Some(Role::Distributor),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Distributor => "Distributor",
        }
    }
}

/// Client-local record of role and login state.
///
/// Lives in browser storage between reloads. There is no server-side
/// counterpart, so the authenticated flag is trivially forgeable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub role: Option<Role>,
    pub authenticated: bool,
    pub mobile: Option<String>,
}

impl Session {
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Mark the session authenticated for the given mobile number.
    pub fn authenticate(&mut self, mobile: String) {
        self.authenticated = true;
        self.mobile = Some(mobile);
    }

    /// Drop the authenticated flag. The chosen role survives so the
    /// landing screen can preselect it, matching how login remembers it.
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Full reset back to a fresh session.
    pub fn clear(&mut self) {
        *self = Session::default();
    }

    /// Role for display purposes, defaulting to customer when none was picked.
    pub fn role_or_default(&self) -> Role {
        self.role.unwrap_or(Role::Customer)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("mobile number must be exactly 10 digits")]
    InvalidMobile,
    #[error("OTP must be exactly 6 digits")]
    InvalidOtp,
    #[error("no OTP has been requested for this session")]
    OtpNotRequested,
}

/// Mocked OTP login: MobileEntry -> OtpSent -> Authenticated.
///
/// No OTP is generated or delivered anywhere; any 6-digit code passes
/// verification. The states exist so the screen flow and its validation
/// rules are explicit rather than scattered across event handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginFlow {
    #[default]
    MobileEntry,
    OtpSent {
        mobile: String,
    },
    Authenticated {
        mobile: String,
    },
}

impl LoginFlow {
    /// Request an OTP for `mobile`. Requires exactly 10 digits.
    pub fn submit_mobile(&mut self, mobile: &str) -> Result<(), LoginError> {
        if !is_valid_mobile(mobile) {
            return Err(LoginError::InvalidMobile);
        }
        *self = LoginFlow::OtpSent {
            mobile: mobile.to_string(),
        };
        Ok(())
    }

    /// Verify an OTP. Requires exactly 6 digits; any such code is accepted.
    pub fn submit_otp(&mut self, otp: &str) -> Result<(), LoginError> {
        let mobile = match self {
            LoginFlow::OtpSent { mobile } => mobile.clone(),
            _ => return Err(LoginError::OtpNotRequested),
        };
        if !is_valid_otp(otp) {
            return Err(LoginError::InvalidOtp);
        }
        *self = LoginFlow::Authenticated { mobile };
        Ok(())
    }

    /// Back to mobile entry, discarding any sent OTP. Used by "Resend OTP".
    pub fn reset(&mut self) {
        *self = LoginFlow::MobileEntry;
    }

    pub fn mobile(&self) -> Option<&str> {
        match self {
            LoginFlow::MobileEntry => None,
            LoginFlow::OtpSent { mobile } | LoginFlow::Authenticated { mobile } => Some(mobile),
        }
    }

    pub fn otp_sent(&self) -> bool {
        matches!(self, LoginFlow::OtpSent { .. })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginFlow::Authenticated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("customer"), Some(Role::Customer));
        assert_eq!(Role::parse("distributor"), Some(Role::Distributor));
        assert_eq!(Role::parse(Role::Customer.as_str()), Some(Role::Customer));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_short_mobile_rejected() {
        let mut flow = LoginFlow::default();
        assert_eq!(
            flow.submit_mobile("98765"),
            Err(LoginError::InvalidMobile)
        );
        assert_eq!(flow, LoginFlow::MobileEntry);
        assert_eq!(
            flow.submit_mobile("98765432100"),
            Err(LoginError::InvalidMobile)
        );
        assert_eq!(
            flow.submit_mobile("98765abc10"),
            Err(LoginError::InvalidMobile)
        );
    }

    #[test]
    fn test_valid_mobile_moves_to_otp_entry() {
        let mut flow = LoginFlow::default();
        flow.submit_mobile("9876543210").unwrap();
        assert!(flow.otp_sent());
        assert_eq!(flow.mobile(), Some("9876543210"));
    }

    #[test]
    fn test_short_otp_rejected() {
        let mut flow = LoginFlow::default();
        flow.submit_mobile("9876543210").unwrap();
        assert_eq!(flow.submit_otp("123"), Err(LoginError::InvalidOtp));
        assert!(flow.otp_sent());
        assert!(!flow.is_authenticated());
    }

    #[test]
    fn test_any_six_digit_otp_authenticates() {
        let mut flow = LoginFlow::default();
        flow.submit_mobile("9876543210").unwrap();
        flow.submit_otp("000000").unwrap();
        assert!(flow.is_authenticated());
        assert_eq!(flow.mobile(), Some("9876543210"));
    }

    #[test]
    fn test_otp_without_request_rejected() {
        let mut flow = LoginFlow::default();
        assert_eq!(flow.submit_otp("123456"), Err(LoginError::OtpNotRequested));
    }

    #[test]
    fn test_reset_discards_sent_otp() {
        let mut flow = LoginFlow::default();
        flow.submit_mobile("9876543210").unwrap();
        flow.reset();
        assert_eq!(flow, LoginFlow::MobileEntry);
        assert_eq!(flow.mobile(), None);
    }

    #[test]
    fn test_logout_keeps_role() {
        let mut session = Session::default();
        session.select_role(Role::Distributor);
        session.authenticate("9876543210".into());
        assert!(session.authenticated);

        session.logout();
        assert!(!session.authenticated);
        assert_eq!(session.role, Some(Role::Distributor));
        assert_eq!(session.mobile.as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = Session::default();
        session.select_role(Role::Customer);
        session.authenticate("9876543210".into());
        session.clear();
        assert_eq!(session, Session::default());
    }
}
