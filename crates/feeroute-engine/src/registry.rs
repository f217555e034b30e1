use std::collections::HashMap;

use feeroute_core::{EngineError, PathId, PathStatus};

/// The path registry: `PathId → PathStatus` with default-Unregistered
/// lookups.
///
/// Absent ids read as `Unregistered`, and `is_active` treats
/// `Unregistered` and `Inactive` identically. Callers that need the
/// distinction use [`PathRegistry::status`].
#[derive(Debug, Default)]
pub struct PathRegistry {
    statuses: HashMap<PathId, PathStatus>,
}

impl PathRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit three-state status of a path.
    pub fn status(&self, path_id: PathId) -> PathStatus {
        self.statuses
            .get(&path_id)
            .copied()
            .unwrap_or(PathStatus::Unregistered)
    }

    /// Whether the path is currently active. Never-seen ids are not
    /// active.
    pub fn is_active(&self, path_id: PathId) -> bool {
        self.status(path_id).is_active()
    }

    /// Activate a path.
    ///
    /// Fails with `MaxPathsExceeded` when the id is outside
    /// `[0, max_paths)`, and with `PathNotRegistered` when the path is
    /// already active — the registry reuses that signal for duplicate
    /// registration rather than carrying a distinct kind. Inactive
    /// paths may be re-activated.
    pub fn activate(&mut self, path_id: PathId, max_paths: u32) -> Result<(), EngineError> {
        if path_id.0 >= max_paths {
            return Err(EngineError::MaxPathsExceeded { path_id, max_paths });
        }
        if self.is_active(path_id) {
            return Err(EngineError::PathNotRegistered { path_id });
        }
        self.statuses.insert(path_id, PathStatus::Active);
        Ok(())
    }

    /// Deactivate a currently active path.
    pub fn deactivate(&mut self, path_id: PathId) -> Result<(), EngineError> {
        if !self.is_active(path_id) {
            return Err(EngineError::PathNotRegistered { path_id });
        }
        self.statuses.insert(path_id, PathStatus::Inactive);
        Ok(())
    }
}
