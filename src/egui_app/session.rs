//! Session Store
//!
//! The client-side persisted session: the cached user profile plus the
//! opaque bearer token, stored together so they are either both present
//! (authenticated) or both absent (unauthenticated).
//!
//! The store is an explicit context object injected into the API client
//! and the app state rather than process-wide storage. The handle is
//! cheap to clone and shares one inner value, so a worker thread and
//! the UI thread observe the same session. Persistence goes to a small
//! JSON file under the platform data directory and is best-effort:
//! write failures are logged and the in-memory value stays usable.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::shared::models::UserProfile;

/// A logged-in session: cached profile plus bearer token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

/// Shared handle to the current session and its backing file
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<Option<Session>>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Open the store against the default backing file, loading any
    /// persisted session from a previous run.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::with_path(path),
            None => {
                tracing::warn!("no data directory available, session will not persist");
                Self::in_memory()
            }
        }
    }

    /// Open the store against a specific backing file
    pub fn with_path(path: PathBuf) -> Self {
        let session = Self::read_file(&path);
        Self {
            inner: Arc::new(Mutex::new(session)),
            path: Some(path),
        }
    }

    /// A store with no backing file, for tests
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
            path: None,
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("flixdesk").join("session.json"))
    }

    fn read_file(path: &PathBuf) -> Option<Session> {
        let raw = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("discarding unreadable session file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// The current session, if any
    pub fn get(&self) -> Option<Session> {
        self.inner.lock().expect("session lock poisoned").clone()
    }

    /// Replace the session and persist it
    pub fn set(&self, session: Session) {
        {
            let mut guard = self.inner.lock().expect("session lock poisoned");
            *guard = Some(session);
        }
        self.persist();
    }

    /// Drop the session (logout) and remove the backing file
    pub fn clear(&self) {
        {
            let mut guard = self.inner.lock().expect("session lock poisoned");
            *guard = None;
        }
        if let Some(ref path) = self.path {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!("failed to remove session file {}: {}", path.display(), e);
                }
            }
        }
    }

    /// The cached bearer token, read at call time by the API layer
    pub fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    /// The cached user profile
    pub fn user(&self) -> Option<UserProfile> {
        self.get().map(|s| s.user)
    }

    /// Whether a movie id is in the cached favorites sequence.
    ///
    /// False when no session is cached; never an error.
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.get()
            .map(|s| s.user.favorite_movies.iter().any(|id| id == movie_id))
            .unwrap_or(false)
    }

    /// Append a movie id to the cached favorites and persist.
    ///
    /// Uniqueness is not enforced; the remote API treats repeats as a
    /// no-op but the local sequence may hold duplicates.
    pub fn add_favorite_locally(&self, movie_id: &str) {
        {
            let mut guard = self.inner.lock().expect("session lock poisoned");
            if let Some(ref mut session) = *guard {
                session.user.favorite_movies.push(movie_id.to_string());
            }
        }
        self.persist();
    }

    /// Remove the first occurrence of a movie id from the cached
    /// favorites and persist. No-op when the id is absent.
    pub fn remove_favorite_locally(&self, movie_id: &str) {
        {
            let mut guard = self.inner.lock().expect("session lock poisoned");
            if let Some(ref mut session) = *guard {
                if let Some(index) = session
                    .user
                    .favorite_movies
                    .iter()
                    .position(|id| id == movie_id)
                {
                    session.user.favorite_movies.remove(index);
                }
            }
        }
        self.persist();
    }

    /// Replace just the cached profile, keeping the token, and persist
    pub fn set_user(&self, user: UserProfile) {
        {
            let mut guard = self.inner.lock().expect("session lock poisoned");
            if let Some(ref mut session) = *guard {
                session.user = user;
            }
        }
        self.persist();
    }

    fn persist(&self) {
        let Some(ref path) = self.path else {
            return;
        };
        let Some(session) = self.get() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("failed to create session dir {}: {}", parent.display(), e);
                return;
            }
        }
        match serde_json::to_string_pretty(&session) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(path, raw) {
                    tracing::warn!("failed to write session file {}: {}", path.display(), e);
                }
            }
            Err(e) => tracing::warn!("failed to serialize session: {}", e),
        }
    }
}
