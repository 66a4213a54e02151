//! Viewer identity
//!
//! Anonymous browsing identity: an opaque token generated once per client
//! and passed explicitly into every core call. Not tied to authenticated
//! identity; a viewer who clears their local state simply starts over with
//! an empty history.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Opaque identifier for a browsing entity, independent of authentication
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewerId(String);

impl ViewerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh opaque token
    pub fn generate() -> Self {
        Self(format!("viewer_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Get-or-create a persistent viewer id backed by a local file.
///
/// Returns the stored id when the file exists, otherwise generates one and
/// persists it for subsequent calls. Storage failure is not fatal: the call
/// falls back to a fresh ephemeral id, and recommendations degrade to an
/// empty history instead of crashing.
pub fn load_or_create(path: &Path) -> ViewerId {
    match std::fs::read_to_string(path) {
        Ok(contents) if !contents.trim().is_empty() => {
            return ViewerId::new(contents.trim().to_string());
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!("Could not read viewer id file {}: {}", path.display(), e);
            return ViewerId::generate();
        }
    }

    let id = ViewerId::generate();
    if let Err(e) = persist(path, &id) {
        warn!("Could not persist viewer id to {}: {}", path.display(), e);
    }
    id
}

fn persist(path: &Path, id: &ViewerId) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, id.as_str())
}
