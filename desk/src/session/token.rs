//! # Access Token Claims
//!
//! Extracts the claims this client cares about from a JWT access token.
//!
//! The client never verifies the signature; that is the backend's job. It
//! only reads the payload segment to learn the expiry used by the renewal
//! timer and the roles granted to the user.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use shared::Role;

/// JWT claims carried by the backend's access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Granted roles
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Decode the claims from an access token without verifying it.
pub fn decode_claims(token: &str) -> Result<Claims, Error> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(Error::MalformedToken);
    };

    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| Error::FailToB64uDecode)?;

    serde_json::from_slice(&bytes).map_err(|_| Error::BadPayload)
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MalformedToken,
    FailToB64uDecode,
    BadPayload,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
