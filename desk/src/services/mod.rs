//! # Services Module
//!
//! Domain services of the desk client and the HTTP transport they sit on.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/           - Backend HTTP transport (reqwest, one module per resource)
//! ├── clients.rs     - Client directory (CRUD + search, input validation)
//! ├── credits.rs     - Credit registry (validation, variant routing, filtering)
//! ├── repayments.rs  - Repayment ledger (preconditions, derived amounts)
//! └── stats.rs       - Dashboard aggregation over credit lists
//! ```
//!
//! The domain services own the fail-fast rules: invalid input and domain
//! precondition failures are raised synchronously and never reach the
//! transport. Each service holds an `Arc<dyn ApiService>` so tests can swap
//! the transport for a mock.

pub mod api;
pub mod clients;
pub mod credits;
pub mod repayments;
pub mod stats;
