//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the desk client and the
//! credit-management backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and token DTOs
//!   - **[`dto::client`]**: Bank client (customer) DTOs
//!   - **[`dto::credit`]**: Credit entity, status, and variant DTOs
//!   - **[`dto::repayment`]**: Repayment ledger DTOs
//!
//! ## Wire Format
//!
//! The backend exposes Java-style JSON, so field names use **camelCase** on
//! the wire (`#[serde(rename_all = "camelCase")]` on every struct). Optional
//! fields are omitted from JSON when `None`. All types implement both
//! `Serialize` and `Deserialize` for bidirectional communication.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//! let json = serde_json::to_string(&request).unwrap();
//! assert!(json.contains("\"username\""));
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
