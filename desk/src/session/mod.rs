//! # Session Module
//!
//! Owns the authenticated session: login, logout, restore across restarts,
//! and the self-scheduling token renewal.
//!
//! ## Module Structure
//!
//! ```text
//! session/
//! ├── mod.rs      - SessionManager (the single writer of session state)
//! ├── store.rs    - SessionStore shared state + file persistence
//! ├── token.rs    - JWT claims decoding (expiry, roles)
//! └── renewal.rs  - the at-most-one pending renewal task
//! ```
//!
//! ## Renewal Cycle
//!
//! ```text
//! login/restore ──> decode exp ──> arm(exp − 60s, clamped to 0)
//!                                     │ fires
//!                                     ▼
//!                                  refresh() ── ok ──> rotate tokens, re-arm
//!                                     │ error
//!                                     ▼
//!                                  logout() (forced), error surfaced
//! ```

pub mod renewal;
pub mod store;
pub mod token;

pub use store::{Session, SessionStore};

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use shared::{LoginRequest, Role};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::session::renewal::{renewal_delay, RenewalTimer};

/// The single writer of session state.
///
/// Cheap to clone; all clones share the same store and timer. The renewal
/// task holds a clone, so the manager outlives the call that armed it.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: Arc<dyn ApiService>,
    store: SessionStore,
    session_file: PathBuf,
    timer: Mutex<RenewalTimer>,
}

impl SessionManager {
    pub fn new(
        api: Arc<dyn ApiService>,
        store: SessionStore,
        session_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                api,
                store,
                session_file: session_file.into(),
                timer: Mutex::new(RenewalTimer::new()),
            }),
        }
    }

    /// Login and open a session.
    ///
    /// On success the session is persisted and the renewal timer is armed
    /// from the access token's expiry.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let response = self
            .inner
            .api
            .login(LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;

        let session = Session::from_login(response);
        self.install(session.clone());
        tracing::info!(username = %session.username, "Session opened");
        Ok(session)
    }

    /// Close the session.
    ///
    /// Local state is cleared first and unconditionally; the server-side
    /// refresh-token invalidation is best-effort and a failure there is
    /// swallowed with a warning. Logout always succeeds locally.
    pub async fn logout(&self) {
        let session = self.inner.store.current();

        self.inner.store.clear();
        store::delete_session(&self.inner.session_file);

        if let Some(refresh_token) = session.and_then(|s| s.refresh_token) {
            if let Err(error) = self.inner.api.logout(refresh_token).await {
                tracing::warn!(%error, "Server-side logout failed; local session already cleared");
            }
        }

        // Disarmed last: when logout runs inside the renewal task itself,
        // aborting earlier would cancel the in-flight server call above.
        self.inner.timer.lock().disarm();
        tracing::info!("Session closed");
    }

    /// Exchange the refresh token for a new access/refresh pair.
    ///
    /// A failed exchange forces a full [`SessionManager::logout`] before the
    /// error is surfaced, since a session with a dead refresh token is
    /// unrecoverable.
    pub async fn refresh(&self) -> Result<Session> {
        let Some(session) = self.inner.store.current() else {
            return Err(AppError::Unauthorized("No active session".to_string()));
        };

        let Some(refresh_token) = session.refresh_token.clone() else {
            self.logout().await;
            return Err(AppError::Unauthorized(
                "Session has no refresh token".to_string(),
            ));
        };

        match self.inner.api.refresh_token(refresh_token).await {
            Ok(tokens) => {
                let renewed = Session {
                    access_token: tokens.access_token,
                    refresh_token: Some(tokens.refresh_token),
                    ..session
                };
                self.install(renewed.clone());
                tracing::debug!("Access token renewed");
                Ok(renewed)
            }
            Err(error) => {
                tracing::warn!(%error, "Token refresh failed; forcing logout");
                self.logout().await;
                Err(error)
            }
        }
    }

    /// Reload a persisted session on process start.
    ///
    /// Re-arms the renewal timer from the token's recorded expiry rather
    /// than a fixed interval, so a token persisted close to expiry renews
    /// promptly.
    pub fn restore(&self) -> Option<Session> {
        let session = store::load_session(&self.inner.session_file)?;
        self.inner.store.set(session.clone());
        self.arm_renewal(&session.access_token);
        tracing::info!(username = %session.username, "Session restored");
        Some(session)
    }

    // ==================== QUERIES ====================

    pub fn current(&self) -> Option<Session> {
        self.inner.store.current()
    }

    pub fn current_token(&self) -> Option<String> {
        self.inner.store.access_token()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.store.is_logged_in()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.inner
            .store
            .current()
            .is_some_and(|session| session.has_role(role))
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.inner
            .store
            .current()
            .is_some_and(|session| session.has_any_role(roles))
    }

    // ==================== INTERNALS ====================

    /// Store, persist, and schedule renewal for a fresh session.
    fn install(&self, session: Session) {
        self.inner.store.set(session.clone());

        if let Err(error) = store::save_session(&self.inner.session_file, &session) {
            // The in-memory session stays valid; only restart restore is lost
            tracing::warn!(%error, "Failed to persist session");
        }

        self.arm_renewal(&session.access_token);
    }

    /// Arm the renewal timer from the access token's expiry.
    ///
    /// A token that cannot be decoded is logged and left unscheduled; the
    /// session stays usable until the backend starts rejecting it.
    fn arm_renewal(&self, access_token: &str) {
        let claims = match token::decode_claims(access_token) {
            Ok(claims) => claims,
            Err(error) => {
                tracing::warn!(%error, "Could not decode access token; renewal not scheduled");
                return;
            }
        };

        let delay = renewal_delay(claims.exp, Utc::now().timestamp());
        let manager = self.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The exchange runs detached from the armed handle, so re-arming
            // (login, restore) never cancels a refresh already in flight.
            tokio::spawn(async move {
                if let Err(error) = manager.refresh().await {
                    tracing::warn!(%error, "Scheduled token renewal failed");
                }
            });
        });

        self.inner.timer.lock().arm(handle);
        tracing::debug!(delay_secs = delay.as_secs(), "Renewal timer armed");
    }
}
