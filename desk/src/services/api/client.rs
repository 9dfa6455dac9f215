//! # API Client
//!
//! Main HTTP client for backend API communication, plus the response
//! normalizer every endpoint module funnels failures through.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use shared::{
    AuthResponse, Client as BankClient, Credit, CreditRequest, LoginRequest, NewRepayment,
    Repayment, TokenRefreshResponse,
};

use crate::config::Config;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::session::SessionStore;

/// HTTP client for communicating with the credit-management backend.
///
/// Maintains a connection pool and injects the current session's bearer
/// token into every resource request. The session store is read-only from
/// here; only the session manager writes it.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new API client with a request timeout.
    ///
    /// The timeout keeps a dead backend from stalling the desk; callers see
    /// the failure as a normalized [`AppError::Network`].
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self::with_timeout(base_url, session, std::time::Duration::from_secs(10))
    }

    /// Create a client using the configured base URL and timeout.
    pub fn from_config(config: &Config, session: SessionStore) -> Self {
        Self::with_timeout(config.api_base_url.clone(), session, config.request_timeout())
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        session: SessionStore,
        timeout: std::time::Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET with the current bearer token attached.
    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    /// POST with the current bearer token attached.
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    /// PUT with the current bearer token attached.
    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.put(self.url(path)))
    }

    /// DELETE with the current bearer token attached.
    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.delete(self.url(path)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

// ==================== ERROR NORMALIZATION ====================

/// Map an HTTP status to the matching error kind.
pub(crate) fn normalize_status(status: StatusCode, message: String) -> AppError {
    match status.as_u16() {
        401 | 403 => AppError::Unauthorized(message),
        404 => AppError::NotFound(message),
        500..=599 => AppError::Server(message),
        _ => AppError::Network(message),
    }
}

/// Extract a display-ready message from a failed response body.
///
/// The backend reports errors as `{"message": ...}` (and occasionally
/// `{"error": ...}`); fall back to the status line when the body is not
/// JSON or carries neither field.
async fn error_message(response: Response, what: &str) -> String {
    let status = response.status();
    let fallback = format!("Failed to {}: {}", what, status);

    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}

/// Normalize a response into `T` or an [`AppError`].
pub(crate) async fn parse_response<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse {} response: {}", what, e)));
    }

    let message = error_message(response, what).await;
    tracing::warn!(status = status.as_u16(), error = %message, "Request failed");
    Err(normalize_status(status, message))
}

/// Normalize a response whose success body is empty (deletes, logout).
pub(crate) async fn parse_empty(response: Response, what: &str) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let message = error_message(response, what).await;
    tracing::warn!(status = status.as_u16(), error = %message, "Request failed");
    Err(normalize_status(status, message))
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        crate::services::api::auth::login(self, request).await
    }

    async fn refresh_token(&self, refresh_token: String) -> Result<TokenRefreshResponse> {
        crate::services::api::auth::refresh_token(self, refresh_token).await
    }

    async fn logout(&self, refresh_token: String) -> Result<()> {
        crate::services::api::auth::logout(self, refresh_token).await
    }

    async fn get_clients(&self) -> Result<Vec<BankClient>> {
        crate::services::api::clients::get_clients(self).await
    }

    async fn get_client(&self, id: i64) -> Result<BankClient> {
        crate::services::api::clients::get_client(self, id).await
    }

    async fn create_client(&self, client: BankClient) -> Result<BankClient> {
        crate::services::api::clients::create_client(self, client).await
    }

    async fn update_client(&self, client: BankClient) -> Result<BankClient> {
        crate::services::api::clients::update_client(self, client).await
    }

    async fn delete_client(&self, id: i64) -> Result<()> {
        crate::services::api::clients::delete_client(self, id).await
    }

    async fn search_clients(&self, name: &str) -> Result<Vec<BankClient>> {
        crate::services::api::clients::search_clients(self, name).await
    }

    async fn get_credits(&self) -> Result<Vec<Credit>> {
        crate::services::api::credits::get_credits(self).await
    }

    async fn get_credit(&self, id: i64) -> Result<Credit> {
        crate::services::api::credits::get_credit(self, id).await
    }

    async fn get_credits_by_client(&self, client_id: i64) -> Result<Vec<Credit>> {
        crate::services::api::credits::get_credits_by_client(self, client_id).await
    }

    async fn create_personal_credit(&self, request: CreditRequest) -> Result<Credit> {
        crate::services::api::credits::create_personal_credit(self, request).await
    }

    async fn create_real_estate_credit(&self, request: CreditRequest) -> Result<Credit> {
        crate::services::api::credits::create_real_estate_credit(self, request).await
    }

    async fn create_professional_credit(&self, request: CreditRequest) -> Result<Credit> {
        crate::services::api::credits::create_professional_credit(self, request).await
    }

    async fn delete_credit(&self, id: i64) -> Result<()> {
        crate::services::api::credits::delete_credit(self, id).await
    }

    async fn get_repayments_by_credit(&self, credit_id: i64) -> Result<Vec<Repayment>> {
        crate::services::api::repayments::get_repayments_by_credit(self, credit_id).await
    }

    async fn create_monthly_repayment(&self, body: NewRepayment) -> Result<Repayment> {
        crate::services::api::repayments::create_monthly_repayment(self, body).await
    }

    async fn create_early_repayment(&self, body: NewRepayment) -> Result<Repayment> {
        crate::services::api::repayments::create_early_repayment(self, body).await
    }

    async fn get_total_repaid(&self, credit_id: i64) -> Result<f64> {
        crate::services::api::repayments::get_total_repaid(self, credit_id).await
    }

    async fn get_remaining_amount(&self, credit_id: i64) -> Result<f64> {
        crate::services::api::repayments::get_remaining_amount(self, credit_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8085/api/", SessionStore::new());
        assert_eq!(client.url("/credits"), "http://localhost:8085/api/credits");
    }

    #[test]
    fn test_normalize_status_taxonomy() {
        let kind = |status: u16| {
            normalize_status(StatusCode::from_u16(status).unwrap(), "x".to_string()).code()
        };
        assert_eq!(kind(401), "UNAUTHORIZED");
        assert_eq!(kind(403), "UNAUTHORIZED");
        assert_eq!(kind(404), "NOT_FOUND");
        assert_eq!(kind(500), "SERVER");
        assert_eq!(kind(503), "SERVER");
        assert_eq!(kind(418), "NETWORK");
    }
}
