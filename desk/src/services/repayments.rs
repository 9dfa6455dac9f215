//! # Repayment Ledger
//!
//! Append-only repayments against a credit, and the amounts derived from
//! them.
//!
//! Recording routes to one of two distinct endpoints depending on the kind;
//! the server treats them differently (early repayment may recompute
//! interest), so there is deliberately no generic "create repayment" path.
//! The domain precondition is enforced here, before the wire: only an
//! ACCEPTED credit takes new repayments.
//!
//! `total_repaid` and `remaining_amount` are independent server-computed
//! fetches. They are not a consistent snapshot: issued together they may
//! resolve in either order, and a repayment landing between them shows up in
//! one but not the other. Consumers that need a consistent pair should fetch
//! the repayment list once and use [`sum_repayments`]; the remaining amount
//! itself stays server-owned because it may include partial-period interest,
//! and is never clamped client-side.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{Credit, NewRepayment, Repayment, RepaymentType};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::validate_amount;

/// Sum a repayment list. Order-independent; empty ledger sums to 0.
pub fn sum_repayments(repayments: &[Repayment]) -> f64 {
    repayments.iter().map(|repayment| repayment.amount).sum()
}

/// Repayment operations over the backend API.
pub struct RepaymentLedger {
    api: Arc<dyn ApiService>,
}

impl RepaymentLedger {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    /// List the repayments recorded against one credit.
    pub async fn list_for_credit(&self, credit_id: i64) -> Result<Vec<Repayment>> {
        self.api.get_repayments_by_credit(credit_id).await
    }

    /// Record a monthly repayment against `credit`.
    pub async fn record_monthly(
        &self,
        credit: &Credit,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Repayment> {
        self.record(credit, amount, date, RepaymentType::Monthly)
            .await
    }

    /// Record an early repayment against `credit`.
    pub async fn record_early(
        &self,
        credit: &Credit,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Repayment> {
        self.record(credit, amount, date, RepaymentType::Early).await
    }

    /// Server-computed total repaid for one credit.
    pub async fn total_repaid(&self, credit_id: i64) -> Result<f64> {
        self.api.get_total_repaid(credit_id).await
    }

    /// Server-computed remaining amount for one credit.
    pub async fn remaining_amount(&self, credit_id: i64) -> Result<f64> {
        self.api.get_remaining_amount(credit_id).await
    }

    async fn record(
        &self,
        credit: &Credit,
        amount: f64,
        date: NaiveDate,
        kind: RepaymentType,
    ) -> Result<Repayment> {
        validate_amount(amount).into_result()?;

        let credit_id = credit.id.ok_or_else(|| {
            AppError::Validation("Cannot record a repayment on an unsaved credit".to_string())
        })?;

        if !credit.status.accepts_repayments() {
            return Err(AppError::InvalidState(format!(
                "Repayments are only allowed on accepted credits (credit {} is {})",
                credit_id, credit.status
            )));
        }

        let body = NewRepayment {
            date,
            amount,
            repayment_type: kind,
            credit_id,
        };

        tracing::info!(credit_id, amount, kind = ?kind, "Recording repayment");

        match kind {
            RepaymentType::Monthly => self.api.create_monthly_repayment(body).await,
            RepaymentType::Early => self.api.create_early_repayment(body).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repayment(id: i64, amount: f64) -> Repayment {
        Repayment {
            id: Some(id),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            amount,
            repayment_type: RepaymentType::Monthly,
            credit_id: 1,
        }
    }

    #[test]
    fn test_empty_ledger_sums_to_zero() {
        assert_eq!(sum_repayments(&[]), 0.0);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let mut ledger = vec![repayment(1, 450.25), repayment(2, 1200.0), repayment(3, 99.75)];
        let forward = sum_repayments(&ledger);
        ledger.reverse();
        assert_eq!(sum_repayments(&ledger), forward);
        assert!((forward - 1750.0).abs() < 1e-9);
    }

    #[test]
    fn test_remaining_is_non_increasing_as_ledger_grows() {
        let principal = 10000.0;
        let mut ledger = Vec::new();
        let mut previous = principal - sum_repayments(&ledger);

        for (id, amount) in [(1, 450.25), (2, 450.25), (3, 2000.0)] {
            ledger.push(repayment(id, amount));
            let remaining = principal - sum_repayments(&ledger);
            assert!(remaining <= previous);
            previous = remaining;
        }
    }
}
