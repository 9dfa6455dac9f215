//! # Credit Registry
//!
//! Credit reads, fail-fast creation, and local list filtering.
//!
//! Creation validates every field before anything reaches the wire and
//! routes the request to the endpoint matching its variant; the tagged
//! [`CreditDetails`] payload makes it impossible to send personal-only
//! fields on a real-estate credit. Status is read-only here: the server
//! owns the accept/reject decision and this client only observes it.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use shared::{Credit, CreditDetails, CreditKind, CreditRequest, CreditStatus};

use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::utils::validation::{
    validate_amount, validate_duration, validate_interest_rate, validate_required,
    validate_start_date,
};

/// A credit as entered by staff, before the server has seen it.
///
/// The interest rate is the percent figure from the form; the registry
/// converts it to the wire's decimal fraction on dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCredit {
    pub amount: f64,
    /// Duration in months.
    pub duration: u32,
    pub interest_rate_percent: f64,
    pub start_date: NaiveDate,
    pub client_id: i64,
    pub details: CreditDetails,
}

/// Status/kind predicates for local list filtering. `None` matches all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CreditFilter {
    pub status: Option<CreditStatus>,
    pub kind: Option<CreditKind>,
}

impl CreditFilter {
    pub fn matches(&self, credit: &Credit) -> bool {
        self.status.map_or(true, |status| credit.status == status)
            && self.kind.map_or(true, |kind| credit.kind() == kind)
    }
}

/// Narrow a credit list to the intersection of the filter's predicates.
pub fn filter_credits<'a>(credits: &'a [Credit], filter: CreditFilter) -> Vec<&'a Credit> {
    credits
        .iter()
        .filter(|credit| filter.matches(credit))
        .collect()
}

/// Credit operations over the backend API.
pub struct CreditRegistry {
    api: Arc<dyn ApiService>,
}

impl CreditRegistry {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    /// List all credits.
    pub async fn list(&self) -> Result<Vec<Credit>> {
        self.api.get_credits().await
    }

    /// Get one credit by id.
    pub async fn get(&self, id: i64) -> Result<Credit> {
        self.api.get_credit(id).await
    }

    /// List the credits owned by one bank client.
    pub async fn by_client(&self, client_id: i64) -> Result<Vec<Credit>> {
        self.api.get_credits_by_client(client_id).await
    }

    /// Delete a credit.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_credit(id).await
    }

    /// Validate and create a credit.
    ///
    /// Invalid input fails here with [`crate::core::error::AppError::Validation`]
    /// and never reaches the network. The request is dispatched to the
    /// endpoint matching its variant.
    pub async fn create(&self, new_credit: NewCredit) -> Result<Credit> {
        validate(&new_credit, Utc::now().date_naive())?;

        let request = CreditRequest {
            amount: new_credit.amount,
            duration: new_credit.duration,
            interest_rate: new_credit.interest_rate_percent / 100.0,
            start_date: new_credit.start_date,
            client_id: new_credit.client_id,
            details: new_credit.details,
        };

        tracing::info!(
            kind = request.details.kind().label(),
            client_id = request.client_id,
            amount = request.amount,
            "Creating credit"
        );

        match request.details.kind() {
            CreditKind::Personal => self.api.create_personal_credit(request).await,
            CreditKind::RealEstate => self.api.create_real_estate_credit(request).await,
            CreditKind::Professional => self.api.create_professional_credit(request).await,
        }
    }
}

fn validate(new_credit: &NewCredit, today: NaiveDate) -> Result<()> {
    validate_amount(new_credit.amount).into_result()?;
    validate_duration(new_credit.duration).into_result()?;
    validate_interest_rate(new_credit.interest_rate_percent).into_result()?;
    validate_start_date(new_credit.start_date, today).into_result()?;

    match &new_credit.details {
        CreditDetails::Personal { motif } => validate_required("Motif", motif).into_result(),
        // The property type is a closed enum, nothing free-text to check
        CreditDetails::RealEstate { .. } => Ok(()),
        CreditDetails::Professional {
            reason,
            company_name,
        } => {
            validate_required("Reason", reason).into_result()?;
            validate_required("Company name", company_name).into_result()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PropertyType;

    fn credit(id: i64, status: CreditStatus, details: CreditDetails) -> Credit {
        Credit {
            id: Some(id),
            amount: 1000.0,
            duration: 12,
            interest_rate: 0.05,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            client_id: 1,
            status,
            details,
        }
    }

    fn sample_credits() -> Vec<Credit> {
        vec![
            credit(
                1,
                CreditStatus::Accepted,
                CreditDetails::Personal {
                    motif: "car".to_string(),
                },
            ),
            credit(
                2,
                CreditStatus::Rejected,
                CreditDetails::RealEstate {
                    property_type: PropertyType::House,
                },
            ),
            credit(
                3,
                CreditStatus::Accepted,
                CreditDetails::RealEstate {
                    property_type: PropertyType::Apartment,
                },
            ),
            credit(
                4,
                CreditStatus::InProgress,
                CreditDetails::Personal {
                    motif: "studies".to_string(),
                },
            ),
        ]
    }

    fn ids(credits: Vec<&Credit>) -> Vec<i64> {
        credits.into_iter().filter_map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let credits = sample_credits();
        assert_eq!(
            ids(filter_credits(&credits, CreditFilter::default())),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_filter_by_status() {
        let credits = sample_credits();
        let filter = CreditFilter {
            status: Some(CreditStatus::Accepted),
            kind: None,
        };
        assert_eq!(ids(filter_credits(&credits, filter)), vec![1, 3]);
    }

    #[test]
    fn test_filter_by_kind() {
        let credits = sample_credits();
        let filter = CreditFilter {
            status: None,
            kind: Some(CreditKind::RealEstate),
        };
        assert_eq!(ids(filter_credits(&credits, filter)), vec![2, 3]);
    }

    #[test]
    fn test_filter_by_status_and_kind_intersects() {
        let credits = sample_credits();
        let filter = CreditFilter {
            status: Some(CreditStatus::Accepted),
            kind: Some(CreditKind::RealEstate),
        };
        assert_eq!(ids(filter_credits(&credits, filter)), vec![3]);
    }

    fn valid_new_credit() -> NewCredit {
        NewCredit {
            amount: 10000.0,
            duration: 24,
            interest_rate_percent: 5.5,
            start_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            client_id: 1,
            details: CreditDetails::Personal {
                motif: "renovation".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_accepts_valid_credit() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert!(validate(&valid_new_credit(), today).is_ok());
    }

    #[test]
    fn test_validate_rejects_past_start_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let new_credit = NewCredit {
            start_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            ..valid_new_credit()
        };
        assert_eq!(validate(&new_credit, today).unwrap_err().code(), "VALIDATION");
    }

    #[test]
    fn test_validate_rejects_empty_motif() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let new_credit = NewCredit {
            details: CreditDetails::Personal {
                motif: "  ".to_string(),
            },
            ..valid_new_credit()
        };
        assert!(validate(&new_credit, today).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_company_name() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let new_credit = NewCredit {
            details: CreditDetails::Professional {
                reason: "fleet renewal".to_string(),
                company_name: String::new(),
            },
            ..valid_new_credit()
        };
        assert!(validate(&new_credit, today).is_err());
    }

    #[test]
    fn test_validate_bounds() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        for bad in [
            NewCredit {
                amount: 0.0,
                ..valid_new_credit()
            },
            NewCredit {
                amount: 10.005,
                ..valid_new_credit()
            },
            NewCredit {
                duration: 361,
                ..valid_new_credit()
            },
            NewCredit {
                interest_rate_percent: 30.5,
                ..valid_new_credit()
            },
        ] {
            assert!(validate(&bad, today).is_err());
        }
    }
}
