use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Repayment kind.
///
/// Immutable once created: the ledger is append-only and there is no
/// update-kind operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RepaymentType {
    Monthly,
    Early,
}

/// A single repayment applied against a credit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub repayment_type: RepaymentType,
    pub credit_id: i64,
}

/// Creation body for `POST /repayments/monthly` and `/repayments/early`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRepayment {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub repayment_type: RepaymentType,
    pub credit_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repayment_wire_shape() {
        let repayment = Repayment {
            id: Some(4),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            amount: 450.25,
            repayment_type: RepaymentType::Monthly,
            credit_id: 12,
        };
        let json = serde_json::to_value(&repayment).unwrap();
        assert_eq!(json["type"], "Monthly");
        assert_eq!(json["creditId"], 12);
        assert_eq!(json["date"], "2026-08-01");
    }

    #[test]
    fn test_new_repayment_round_trip() {
        let body = NewRepayment {
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            amount: 1200.0,
            repayment_type: RepaymentType::Early,
            credit_id: 9,
        };
        let json = serde_json::to_string(&body).unwrap();
        let back: NewRepayment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, body);
    }
}
