//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    AuthResponse, Client, Credit, CreditRequest, LoginRequest, NewRepayment, Repayment,
    TokenRefreshResponse,
};

use crate::core::error::Result;

/// Trait for backend API operations.
///
/// Implemented by the concrete [`crate::services::api::ApiClient`] and by
/// mocks in tests, so the session manager, registry, and ledger never depend
/// on a live backend.
#[async_trait]
pub trait ApiService: Send + Sync {
    // ==================== AUTH ====================

    /// Login with username and password.
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse>;

    /// Exchange a refresh token for a new access/refresh pair.
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenRefreshResponse>;

    /// Invalidate a refresh token server-side.
    async fn logout(&self, refresh_token: String) -> Result<()>;

    // ==================== CLIENTS ====================

    /// List all bank clients.
    async fn get_clients(&self) -> Result<Vec<Client>>;

    /// Get one bank client by id.
    async fn get_client(&self, id: i64) -> Result<Client>;

    /// Create a bank client.
    async fn create_client(&self, client: Client) -> Result<Client>;

    /// Update a bank client (must carry an id).
    async fn update_client(&self, client: Client) -> Result<Client>;

    /// Delete a bank client.
    async fn delete_client(&self, id: i64) -> Result<()>;

    /// Search bank clients by name.
    async fn search_clients(&self, name: &str) -> Result<Vec<Client>>;

    // ==================== CREDITS ====================

    /// List all credits.
    async fn get_credits(&self) -> Result<Vec<Credit>>;

    /// Get one credit by id.
    async fn get_credit(&self, id: i64) -> Result<Credit>;

    /// List the credits owned by one bank client.
    async fn get_credits_by_client(&self, client_id: i64) -> Result<Vec<Credit>>;

    /// Create a personal credit.
    async fn create_personal_credit(&self, request: CreditRequest) -> Result<Credit>;

    /// Create a real-estate credit.
    async fn create_real_estate_credit(&self, request: CreditRequest) -> Result<Credit>;

    /// Create a professional credit.
    async fn create_professional_credit(&self, request: CreditRequest) -> Result<Credit>;

    /// Delete a credit.
    async fn delete_credit(&self, id: i64) -> Result<()>;

    // ==================== REPAYMENTS ====================

    /// List the repayments recorded against one credit.
    async fn get_repayments_by_credit(&self, credit_id: i64) -> Result<Vec<Repayment>>;

    /// Record a monthly repayment.
    async fn create_monthly_repayment(&self, body: NewRepayment) -> Result<Repayment>;

    /// Record an early repayment.
    async fn create_early_repayment(&self, body: NewRepayment) -> Result<Repayment>;

    /// Server-computed total repaid for one credit.
    async fn get_total_repaid(&self, credit_id: i64) -> Result<f64>;

    /// Server-computed remaining amount for one credit. Fetched
    /// independently of the total; the two are not a consistent snapshot.
    async fn get_remaining_amount(&self, credit_id: i64) -> Result<f64>;
}
