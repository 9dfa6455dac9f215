//! # CreditDesk Client Core - Library Root
//!
//! Client core for the CreditDesk banking API: staff manage bank clients,
//! originate credits of three sub-types, and track repayments against a
//! credit until it is settled. All persistence lives behind the remote
//! credit-management backend; this crate owns the session, the domain
//! preconditions, and the wire plumbing.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  desk (this crate)                   │
//! ├──────────────────────────────────────────────────────┤
//! │  session     - login/refresh/logout, renewal timer   │
//! │  services    - credit registry, repayment ledger,    │
//! │                client directory, dashboard stats     │
//! │  services::api - reqwest transport + normalization   │
//! │  core        - AppError taxonomy, ApiService trait   │
//! └──────────────────────────────────────────────────────┘
//!             │ HTTP/JSON (shared DTO crate)
//!             ▼
//! ┌──────────────────────────────────────────────────────┐
//! │          Credit-management backend API               │
//! │  /auth/*  /clients/*  /credits/*  /repayments/*      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: Error taxonomy ([`core::error::AppError`]) and the
//!   [`core::service::ApiService`] trait used for dependency injection.
//! - **services**: Domain services. The registry and ledger validate and
//!   enforce preconditions locally before anything reaches the wire.
//! - **session**: Process-wide session state, persistence, and the
//!   self-scheduling token renewal timer.
//! - **config**: Environment-driven configuration.
//! - **utils**: Input validation helpers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use desk::{config::Config, CreditDesk};
//!
//! # async fn run() -> desk::core::error::Result<()> {
//! let desk = CreditDesk::new(Config::from_env().expect("valid configuration"));
//! if desk.session.restore().is_none() {
//!     desk.session.login("agent", "secret").await?;
//! }
//! let credits = desk.credits.list().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod services;
pub mod session;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use crate::services::clients::ClientDirectory;
use crate::services::credits::CreditRegistry;
use crate::services::repayments::RepaymentLedger;
use crate::session::{SessionManager, SessionStore};

/// Facade wiring the session manager and the domain services around one
/// shared API client and one session store.
pub struct CreditDesk {
    pub session: SessionManager,
    pub clients: ClientDirectory,
    pub credits: CreditRegistry,
    pub repayments: RepaymentLedger,
}

impl CreditDesk {
    /// Build the full client core from configuration.
    ///
    /// The session store is created here and handed to the API client as a
    /// read-only token source; the session manager is its only writer.
    pub fn new(config: Config) -> Self {
        let store = SessionStore::new();
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::from_config(&config, store.clone()));

        Self {
            session: SessionManager::new(Arc::clone(&api), store, config.session_file.clone()),
            clients: ClientDirectory::new(Arc::clone(&api)),
            credits: CreditRegistry::new(Arc::clone(&api)),
            repayments: RepaymentLedger::new(api),
        }
    }
}
