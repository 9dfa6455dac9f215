//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the
//! credit-management backend over the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, token refresh, logout, and role DTOs
//! - [`client`] - Bank client (customer) records
//! - [`credit`] - Credits, credit status, and the three credit variants
//! - [`repayment`] - Repayment ledger entries
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (the backend is Java-style)
//! - **Optional fields**: omitted when `None` via
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: string-encoded with explicit wire names per variant
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/credits/personal
//! Content-Type: application/json
//!
//! {
//!   "amount": 10000.0,
//!   "duration": 24,
//!   "interestRate": 0.055,
//!   "startDate": "2026-09-01",
//!   "clientId": 1,
//!   "type": "PERSONAL",
//!   "motif": "renovation"
//! }
//! ```

pub mod auth;
pub mod client;
pub mod credit;
pub mod repayment;

pub use auth::*;
pub use client::*;
pub use credit::*;
pub use repayment::*;
