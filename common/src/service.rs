use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique service ticket identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

/// Status of a service ticket. Presentation-only badge enum; fixture
/// records never move between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Completed,
    InProgress,
    Cancelled,
}

impl ServiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Completed => "COMPLETED",
            ServiceStatus::InProgress => "IN PROGRESS",
            ServiceStatus::Cancelled => "CANCELLED",
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            ServiceStatus::Completed => "badge badge-completed",
            ServiceStatus::InProgress => "badge badge-in-progress",
            ServiceStatus::Cancelled => "badge badge-cancelled",
        }
    }
}

/// A past or ongoing service request shown in the history view.
///
/// Resolution, completion date and technician are only present once the
/// ticket is completed; a scheduled date only while work is pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub product_name: String,
    pub request_date: NaiveDate,
    pub status: ServiceStatus,
    pub description: String,
    pub resolution: Option<String>,
    pub completed_date: Option<NaiveDate>,
    pub scheduled_date: Option<NaiveDate>,
    pub technician_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ServiceStatus::Completed.label(), "COMPLETED");
        assert_eq!(ServiceStatus::InProgress.label(), "IN PROGRESS");
        assert_eq!(ServiceStatus::Cancelled.label(), "CANCELLED");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&ServiceStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: ServiceStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(back, ServiceStatus::InProgress);
    }
}
