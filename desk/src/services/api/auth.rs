//! # Authentication Endpoints
//!
//! Login, token refresh, and logout against `/auth/*`. These are the only
//! endpoints that do not carry a bearer token.

use shared::{AuthResponse, LoginRequest, RefreshTokenRequest, TokenRefreshResponse};

use super::client::{parse_empty, parse_response, ApiClient};
use crate::core::error::Result;

/// Login with username and password.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting login");

    let response = client
        .client
        .post(client.url("/auth/login"))
        .json(&request)
        .send()
        .await?;

    parse_response(response, "login").await
}

/// Exchange a refresh token for a new access/refresh pair.
pub async fn refresh_token(
    client: &ApiClient,
    refresh_token: String,
) -> Result<TokenRefreshResponse> {
    let request = RefreshTokenRequest { refresh_token };

    let response = client
        .client
        .post(client.url("/auth/refresh-token"))
        .json(&request)
        .send()
        .await?;

    parse_response(response, "refresh token").await
}

/// Invalidate a refresh token server-side.
pub async fn logout(client: &ApiClient, refresh_token: String) -> Result<()> {
    let request = RefreshTokenRequest { refresh_token };

    let response = client
        .client
        .post(client.url("/auth/logout"))
        .json(&request)
        .send()
        .await?;

    parse_empty(response, "logout").await
}
