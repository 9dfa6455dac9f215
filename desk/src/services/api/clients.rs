//! # Bank Client Endpoints
//!
//! CRUD and name search against `/clients`.

use shared::Client;

use super::client::{parse_empty, parse_response, ApiClient};
use crate::core::error::{AppError, Result};

/// List all bank clients.
pub async fn get_clients(client: &ApiClient) -> Result<Vec<Client>> {
    let response = client.get("/clients").send().await?;
    parse_response(response, "fetch clients").await
}

/// Get one bank client by id.
pub async fn get_client(client: &ApiClient, id: i64) -> Result<Client> {
    let response = client.get(&format!("/clients/{}", id)).send().await?;
    parse_response(response, "fetch client").await
}

/// Create a bank client.
pub async fn create_client(client: &ApiClient, bank_client: Client) -> Result<Client> {
    let response = client.post("/clients").json(&bank_client).send().await?;
    parse_response(response, "create client").await
}

/// Update a bank client; the record must carry its server id.
pub async fn update_client(client: &ApiClient, bank_client: Client) -> Result<Client> {
    let id = bank_client
        .id
        .ok_or_else(|| AppError::Validation("Cannot update a client without an id".to_string()))?;

    let response = client
        .put(&format!("/clients/{}", id))
        .json(&bank_client)
        .send()
        .await?;
    parse_response(response, "update client").await
}

/// Delete a bank client.
pub async fn delete_client(client: &ApiClient, id: i64) -> Result<()> {
    let response = client.delete(&format!("/clients/{}", id)).send().await?;
    parse_empty(response, "delete client").await
}

/// Search bank clients by name.
pub async fn search_clients(client: &ApiClient, name: &str) -> Result<Vec<Client>> {
    let response = client
        .get("/clients/search")
        .query(&[("name", name)])
        .send()
        .await?;
    parse_response(response, "search clients").await
}
