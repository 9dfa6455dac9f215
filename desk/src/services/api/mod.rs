//! # Backend API Client Module
//!
//! HTTP client for communicating with the credit-management backend API.
//! Handles authentication, bank clients, credits, and repayments.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs         - Module exports and documentation
//! ├── client.rs      - ApiClient struct, bearer injection, error normalization
//! ├── auth.rs        - Authentication endpoints (login, refresh, logout)
//! ├── clients.rs     - Bank client endpoints (CRUD, search)
//! ├── credits.rs     - Credit endpoints (list, get, per-variant create, delete)
//! └── repayments.rs  - Repayment endpoints (list, create, total, remaining)
//! ```

pub mod auth;
pub mod client;
pub mod clients;
pub mod credits;
pub mod repayments;

pub use client::ApiClient;
