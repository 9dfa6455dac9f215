//! # Repayment Endpoints
//!
//! The repayment ledger's wire surface: list, the two kind-specific creation
//! endpoints, and the two server-computed aggregates.

use shared::{NewRepayment, Repayment};

use super::client::{parse_response, ApiClient};
use crate::core::error::Result;

/// List the repayments recorded against one credit.
pub async fn get_repayments_by_credit(
    client: &ApiClient,
    credit_id: i64,
) -> Result<Vec<Repayment>> {
    let response = client
        .get(&format!("/repayments/credit/{}", credit_id))
        .send()
        .await?;
    parse_response(response, "fetch repayments").await
}

/// Record a monthly repayment.
pub async fn create_monthly_repayment(client: &ApiClient, body: NewRepayment) -> Result<Repayment> {
    let response = client
        .post("/repayments/monthly")
        .json(&body)
        .send()
        .await?;
    parse_response(response, "create monthly repayment").await
}

/// Record an early repayment.
///
/// A separate endpoint from the monthly one: early repayment may trigger
/// interest recomputation server-side.
pub async fn create_early_repayment(client: &ApiClient, body: NewRepayment) -> Result<Repayment> {
    let response = client.post("/repayments/early").json(&body).send().await?;
    parse_response(response, "create early repayment").await
}

/// Server-computed total repaid for one credit.
pub async fn get_total_repaid(client: &ApiClient, credit_id: i64) -> Result<f64> {
    let response = client
        .get(&format!("/repayments/total/{}", credit_id))
        .send()
        .await?;
    parse_response(response, "fetch total repaid").await
}

/// Server-computed remaining amount for one credit.
pub async fn get_remaining_amount(client: &ApiClient, credit_id: i64) -> Result<f64> {
    let response = client
        .get(&format!("/repayments/remaining/{}", credit_id))
        .send()
        .await?;
    parse_response(response, "fetch remaining amount").await
}
