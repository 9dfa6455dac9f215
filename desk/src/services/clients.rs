//! # Client Directory
//!
//! Bank client CRUD and name search, with fail-fast validation of the
//! identity fields before dispatch.

use std::sync::Arc;

use shared::Client;

use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::utils::validation::{validate_email, validate_required};

/// Bank client operations over the backend API.
pub struct ClientDirectory {
    api: Arc<dyn ApiService>,
}

impl ClientDirectory {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    /// List all bank clients.
    pub async fn list(&self) -> Result<Vec<Client>> {
        self.api.get_clients().await
    }

    /// Get one bank client by id.
    pub async fn get(&self, id: i64) -> Result<Client> {
        self.api.get_client(id).await
    }

    /// Validate and create a bank client.
    pub async fn create(&self, client: Client) -> Result<Client> {
        validate(&client)?;
        self.api.create_client(client).await
    }

    /// Validate and update a bank client.
    pub async fn update(&self, client: Client) -> Result<Client> {
        validate(&client)?;
        self.api.update_client(client).await
    }

    /// Delete a bank client.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_client(id).await
    }

    /// Search bank clients by name. An empty query lists everyone.
    pub async fn search(&self, name: &str) -> Result<Vec<Client>> {
        if name.trim().is_empty() {
            return self.list().await;
        }
        self.api.search_clients(name).await
    }
}

fn validate(client: &Client) -> Result<()> {
    validate_required("First name", &client.first_name).into_result()?;
    validate_required("Last name", &client.last_name).into_result()?;
    validate_email(&client.email).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client {
            id: None,
            first_name: "Nadia".to_string(),
            last_name: "Bennani".to_string(),
            email: "nadia@example.com".to_string(),
            phone: Some("+212600000000".to_string()),
            address: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_client() {
        assert!(validate(&client()).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let bad = Client {
            first_name: String::new(),
            ..client()
        };
        assert_eq!(validate(&bad).unwrap_err().code(), "VALIDATION");
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let bad = Client {
            email: "not-an-email".to_string(),
            ..client()
        };
        assert!(validate(&bad).is_err());
    }
}
