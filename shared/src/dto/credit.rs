use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Credit application status.
///
/// Set to `InProgress` by the server at creation; moved to `Accepted` or
/// `Rejected` by a server-side decision. The desk client only observes
/// status, it never writes it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum CreditStatus {
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "ACCEPTED")]
    Accepted,
    #[serde(rename = "REJECTED")]
    Rejected,
    /// Statuses introduced server-side after this client shipped.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

// Hand-written so an unrecognized wire status degrades to `Unknown`
// instead of failing the whole credit deserialization.
impl<'de> Deserialize<'de> for CreditStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "IN_PROGRESS" => CreditStatus::InProgress,
            "ACCEPTED" => CreditStatus::Accepted,
            "REJECTED" => CreditStatus::Rejected,
            _ => CreditStatus::Unknown,
        })
    }
}

impl CreditStatus {
    /// Badge CSS class for list/detail rendering.
    ///
    /// Unrecognized statuses fall through to the warning style.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CreditStatus::Accepted => "bg-success",
            CreditStatus::Rejected => "bg-danger",
            CreditStatus::InProgress | CreditStatus::Unknown => "bg-warning",
        }
    }

    /// Only accepted credits may take new repayments.
    pub fn accepts_repayments(&self) -> bool {
        matches!(self, CreditStatus::Accepted)
    }
}

/// Property financed by a real-estate credit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
}

/// Credit sub-type discriminant, for filtering and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditKind {
    Personal,
    RealEstate,
    Professional,
}

impl CreditKind {
    /// All kinds, in form/filter display order.
    pub fn all() -> &'static [CreditKind] {
        &[
            CreditKind::Personal,
            CreditKind::RealEstate,
            CreditKind::Professional,
        ]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CreditKind::Personal => "Personal",
            CreditKind::RealEstate => "Real Estate",
            CreditKind::Professional => "Professional",
        }
    }
}

/// Variant-specific payload of a credit.
///
/// Internally tagged by the `type` discriminant, so a serialized personal
/// credit structurally cannot carry `propertyType` or `reason` fields and
/// matching on the variant is exhaustive at compile time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CreditDetails {
    #[serde(rename = "PERSONAL")]
    Personal { motif: String },
    #[serde(rename = "REAL_ESTATE", rename_all = "camelCase")]
    RealEstate { property_type: PropertyType },
    #[serde(rename = "PROFESSIONAL", rename_all = "camelCase")]
    Professional { reason: String, company_name: String },
}

impl CreditDetails {
    pub fn kind(&self) -> CreditKind {
        match self {
            CreditDetails::Personal { .. } => CreditKind::Personal,
            CreditDetails::RealEstate { .. } => CreditKind::RealEstate,
            CreditDetails::Professional { .. } => CreditKind::Professional,
        }
    }
}

/// A credit as stored by the backend.
///
/// `id` is server-assigned and absent before creation. `interest_rate` is a
/// decimal fraction on the wire (`0.055` = 5.5%); the desk layer converts
/// from the percent figure staff enter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub amount: f64,
    /// Duration in months.
    pub duration: u32,
    pub interest_rate: f64,
    pub start_date: NaiveDate,
    pub client_id: i64,
    pub status: CreditStatus,
    #[serde(flatten)]
    pub details: CreditDetails,
}

impl Credit {
    pub fn kind(&self) -> CreditKind {
        self.details.kind()
    }

    /// Interest rate as the percent figure shown to staff.
    pub fn interest_rate_percent(&self) -> f64 {
        self.interest_rate * 100.0
    }
}

/// Creation body for the `POST /credits/{personal,realestate,professional}`
/// endpoints: the common fields plus exactly one variant's payload. The
/// server assigns `id` and the initial `IN_PROGRESS` status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    pub amount: f64,
    /// Duration in months.
    pub duration: u32,
    /// Decimal fraction, like [`Credit::interest_rate`].
    pub interest_rate: f64,
    pub start_date: NaiveDate,
    pub client_id: i64,
    #[serde(flatten)]
    pub details: CreditDetails,
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CreditStatus::InProgress => "In Progress",
            CreditStatus::Accepted => "Accepted",
            CreditStatus::Rejected => "Rejected",
            CreditStatus::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_credit() -> Credit {
        Credit {
            id: Some(12),
            amount: 10000.0,
            duration: 24,
            interest_rate: 0.055,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            client_id: 1,
            status: CreditStatus::InProgress,
            details: CreditDetails::Personal {
                motif: "renovation".to_string(),
            },
        }
    }

    #[test]
    fn test_personal_credit_wire_shape() {
        let json = serde_json::to_value(personal_credit()).unwrap();
        assert_eq!(json["type"], "PERSONAL");
        assert_eq!(json["motif"], "renovation");
        assert_eq!(json["interestRate"], 0.055);
        assert_eq!(json["startDate"], "2026-09-01");
        // Variant fields of the other sub-types must not leak in
        assert!(json.get("propertyType").is_none());
        assert!(json.get("reason").is_none());
        assert!(json.get("companyName").is_none());
    }

    #[test]
    fn test_personal_credit_round_trip() {
        let credit = personal_credit();
        let json = serde_json::to_string(&credit).unwrap();
        let back: Credit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, credit);
        assert_eq!(back.kind(), CreditKind::Personal);
    }

    #[test]
    fn test_real_estate_credit_deserializes() {
        let json = r#"{
            "id": 3,
            "amount": 250000.0,
            "duration": 240,
            "interestRate": 0.032,
            "startDate": "2026-10-15",
            "clientId": 2,
            "status": "ACCEPTED",
            "type": "REAL_ESTATE",
            "propertyType": "Apartment"
        }"#;
        let credit: Credit = serde_json::from_str(json).unwrap();
        assert_eq!(credit.kind(), CreditKind::RealEstate);
        assert_eq!(
            credit.details,
            CreditDetails::RealEstate {
                property_type: PropertyType::Apartment
            }
        );
        assert!(credit.status.accepts_repayments());
    }

    #[test]
    fn test_unknown_status_degrades_to_warning() {
        let status: CreditStatus = serde_json::from_str("\"UNDER_REVIEW\"").unwrap();
        assert_eq!(status, CreditStatus::Unknown);
        assert_eq!(status.badge_class(), "bg-warning");
        assert!(!status.accepts_repayments());
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(CreditStatus::Accepted.badge_class(), "bg-success");
        assert_eq!(CreditStatus::Rejected.badge_class(), "bg-danger");
        assert_eq!(CreditStatus::InProgress.badge_class(), "bg-warning");
    }

    #[test]
    fn test_interest_rate_percent() {
        assert!((personal_credit().interest_rate_percent() - 5.5).abs() < 1e-9);
    }
}
