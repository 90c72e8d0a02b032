//! Guest-result cache.
//!
//! Unauthenticated founders still get a report; the result is stored under
//! an unguessable `analysis-<uuid>` key and the key is returned to the
//! client as the report id. Holding the key is the read capability. The
//! cache is an explicit interface so tests can swap in an in-memory
//! double, and so the same store doubles as the fallback when persisting
//! an authenticated result fails.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use clarity_core::error::CoreError;
use clarity_core::report::Report;

/// Prefix of every guest-cache key.
pub const GUEST_KEY_PREFIX: &str = "analysis-";

/// Mint a fresh guest-cache key.
pub fn new_guest_key() -> String {
    format!("{GUEST_KEY_PREFIX}{}", uuid::Uuid::new_v4())
}

/// Whether a string is a well-formed guest-cache key. Also the guard
/// against path traversal in the file-backed store.
pub fn is_guest_key(key: &str) -> bool {
    match key.strip_prefix(GUEST_KEY_PREFIX) {
        Some(rest) => {
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        None => false,
    }
}

/// Capability-gated storage for guest analysis results.
pub trait GuestCache: Send + Sync {
    /// Store a report under a key. Overwrites silently.
    fn save(&self, key: &str, report: &Report) -> Result<(), CoreError>;

    /// Load the report stored under a key, if any.
    fn load(&self, key: &str) -> Result<Option<Report>, CoreError>;
}

/// File-backed cache: one JSON file per key under a configured directory.
pub struct FileGuestCache {
    dir: PathBuf,
}

impl FileGuestCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        if !is_guest_key(key) {
            return Err(CoreError::Validation(format!("Invalid guest key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl GuestCache for FileGuestCache {
    fn save(&self, key: &str, report: &Report) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| CoreError::Internal(format!("Guest cache dir: {e}")))?;
        let body = serde_json::to_vec(report)
            .map_err(|e| CoreError::Internal(format!("Guest cache serialize: {e}")))?;
        std::fs::write(&path, body)
            .map_err(|e| CoreError::Internal(format!("Guest cache write: {e}")))
    }

    fn load(&self, key: &str) -> Result<Option<Report>, CoreError> {
        let path = self.path_for(key)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CoreError::Internal(format!("Guest cache read: {e}"))),
        };
        let report = serde_json::from_slice(&bytes)
            .map_err(|e| CoreError::Internal(format!("Guest cache parse: {e}")))?;
        Ok(Some(report))
    }
}

/// In-memory cache, the test double.
#[derive(Default)]
pub struct InMemoryGuestCache {
    entries: Mutex<HashMap<String, Report>>,
}

impl GuestCache for InMemoryGuestCache {
    fn save(&self, key: &str, report: &Report) -> Result<(), CoreError> {
        if !is_guest_key(key) {
            return Err(CoreError::Validation(format!("Invalid guest key '{key}'")));
        }
        self.entries
            .lock()
            .expect("guest cache lock poisoned")
            .insert(key.to_string(), report.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Report>, CoreError> {
        Ok(self
            .entries
            .lock()
            .expect("guest cache lock poisoned")
            .get(key)
            .cloned())
    }
}
