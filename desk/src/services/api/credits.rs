//! # Credit Endpoints
//!
//! Reads against `/credits` and the three per-variant creation endpoints.
//! The registry guarantees each request body matches the endpoint it is
//! posted to; nothing here inspects the payload.

use shared::{Credit, CreditRequest};

use super::client::{parse_empty, parse_response, ApiClient};
use crate::core::error::Result;

/// List all credits.
pub async fn get_credits(client: &ApiClient) -> Result<Vec<Credit>> {
    let response = client.get("/credits").send().await?;
    parse_response(response, "fetch credits").await
}

/// Get one credit by id.
pub async fn get_credit(client: &ApiClient, id: i64) -> Result<Credit> {
    let response = client.get(&format!("/credits/{}", id)).send().await?;
    parse_response(response, "fetch credit").await
}

/// List the credits owned by one bank client.
pub async fn get_credits_by_client(client: &ApiClient, client_id: i64) -> Result<Vec<Credit>> {
    let response = client
        .get(&format!("/credits/client/{}", client_id))
        .send()
        .await?;
    parse_response(response, "fetch client credits").await
}

/// Create a personal credit.
pub async fn create_personal_credit(client: &ApiClient, request: CreditRequest) -> Result<Credit> {
    let response = client
        .post("/credits/personal")
        .json(&request)
        .send()
        .await?;
    parse_response(response, "create personal credit").await
}

/// Create a real-estate credit.
pub async fn create_real_estate_credit(
    client: &ApiClient,
    request: CreditRequest,
) -> Result<Credit> {
    let response = client
        .post("/credits/realestate")
        .json(&request)
        .send()
        .await?;
    parse_response(response, "create real-estate credit").await
}

/// Create a professional credit.
pub async fn create_professional_credit(
    client: &ApiClient,
    request: CreditRequest,
) -> Result<Credit> {
    let response = client
        .post("/credits/professional")
        .json(&request)
        .send()
        .await?;
    parse_response(response, "create professional credit").await
}

/// Delete a credit.
pub async fn delete_credit(client: &ApiClient, id: i64) -> Result<()> {
    let response = client.delete(&format!("/credits/{}", id)).send().await?;
    parse_empty(response, "delete credit").await
}
