//! Authentication session
//!
//! The session is an explicit object: created on login, persisted through
//! a [`SessionStore`], and invalidated on logout or when the server answers
//! 401. [`Session`] is the shared handle the API client and the UI hold.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use halqa_core::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// User type recorded for console administrators
pub const ADMIN_USER_TYPE: &str = "admin";

// ============================================================================
// AuthSession
// ============================================================================

/// Bearer token plus the user-type flag
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub user_type: String,
}

impl AuthSession {
    pub fn new(token: impl Into<String>, user_type: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_type: user_type.into(),
        }
    }

    /// Session for a console administrator
    pub fn admin(token: impl Into<String>) -> Self {
        Self::new(token, ADMIN_USER_TYPE)
    }
}

// Keep tokens out of logs
impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"<redacted>")
            .field("user_type", &self.user_type)
            .finish()
    }
}

// ============================================================================
// Session Stores
// ============================================================================

/// Where a session survives restarts
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// The stored session, if any
    fn load(&self) -> ConsoleResult<Option<AuthSession>>;

    /// Persist a session, replacing any previous one
    fn save(&self, session: &AuthSession) -> ConsoleResult<()>;

    /// Forget the stored session
    fn clear(&self) -> ConsoleResult<()>;
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ConsoleResult<Option<AuthSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            ConsoleError::Session(format!("Reading {}: {}", self.path.display(), e))
        })?;
        match serde_json::from_str::<AuthSession>(&json) {
            Ok(session) if !session.token.is_empty() => Ok(Some(session)),
            Ok(_) => Ok(None),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &AuthSession) -> ConsoleResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConsoleError::Session(format!("Creating {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json).map_err(|e| {
            ConsoleError::Session(format!("Writing {}: {}", self.path.display(), e))
        })
    }

    fn clear(&self) -> ConsoleResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConsoleError::Session(format!(
                "Removing {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// In-process store, for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ConsoleResult<Option<AuthSession>> {
        Ok(self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, session: &AuthSession) -> ConsoleResult<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ConsoleResult<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// ============================================================================
// Session Handle
// ============================================================================

/// Shared, cloneable session handle
#[derive(Debug, Clone)]
pub struct Session {
    current: Arc<RwLock<Option<AuthSession>>>,
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Restore whatever the store holds
    ///
    /// A store that cannot be read starts signed out.
    pub fn restore(store: Arc<dyn SessionStore>) -> Self {
        let current = match store.load() {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %err, "Could not restore session");
                None
            }
        };
        if current.is_some() {
            info!("Restored saved session");
        }
        Self {
            current: Arc::new(RwLock::new(current)),
            store,
        }
    }

    /// A signed-out session kept only in memory
    pub fn in_memory() -> Self {
        Self::restore(Arc::new(MemorySessionStore::new()))
    }

    /// Bearer token of the active session
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|session| session.token.clone())
    }

    pub fn user_type(&self) -> Option<String> {
        self.read().as_ref().map(|session| session.user_type.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Activate and persist a session
    ///
    /// The in-memory session is set even if persisting fails; the error is
    /// still returned so the caller can warn.
    pub fn begin(&self, session: AuthSession) -> ConsoleResult<()> {
        let saved = self.store.save(&session);
        *self.write() = Some(session);
        info!("Session started");
        saved
    }

    /// Drop the active session and its persisted copy
    pub fn invalidate(&self) {
        let had_session = self.write().take().is_some();
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Could not clear stored session");
        }
        if had_session {
            debug!("Session invalidated");
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<AuthSession>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<AuthSession>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// Handles compare by identity; used to memoize UI props
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}
