//! # Session Store
//!
//! Process-wide session state and its file persistence.
//!
//! The store is the single shared mutable state of the client. Mutators are
//! crate-private so the session manager stays the only writer; every other
//! component gets a read-only view (`current`, `access_token`, role checks).

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::{AuthResponse, Role};

/// The authenticated session, as persisted between restarts.
///
/// Serialized wholesale to one well-known file on every login/refresh and
/// deleted wholesale on logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    pub(crate) fn from_login(response: AuthResponse) -> Self {
        Self {
            user_id: response.id,
            username: response.username,
            email: response.email,
            roles: response.roles,
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}

/// Shared handle to the one session of the running client.
///
/// Cheap to clone; all clones observe the same state.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session, if logged in.
    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    /// The current access token, for outgoing calls.
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().is_some()
    }

    pub(crate) fn set(&self, session: Session) {
        *self.inner.write() = Some(session);
    }

    pub(crate) fn clear(&self) {
        *self.inner.write() = None;
    }
}

// ==================== FILE PERSISTENCE ====================

/// Overwrite the persisted session record.
pub(crate) fn save_session(path: &Path, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Reload the persisted session record, if any.
///
/// A missing file means "not logged in"; an unreadable one is logged and
/// treated the same way rather than failing startup.
pub(crate) fn load_session(path: &Path) -> Option<Session> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Discarding unreadable session file");
            None
        }
    }
}

/// Delete the persisted session record.
pub(crate) fn delete_session(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to delete session file");
        }
    }
}
