use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::{PathFlags, StoreError};
use crate::clock::{current_version, Granularity, Version};

/// The state of one resource as seen by a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceState {
    pub version: Version,
    pub is_static: bool,
}

/// Per-path record of explicit mutations.
///
/// Versions are recomputed on every request from the clock; the store only
/// remembers the last version a PUT forced on each path, so a mutated
/// resource never falls back behind it. Distinct paths never share state.
#[derive(Default)]
pub struct ResourceStore {
    mutated: Mutex<HashMap<String, Version>>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the current state of `path` at `now`.
    pub fn resolve(
        &self,
        path: &str,
        flags: &PathFlags,
        now: DateTime<Utc>,
        granularity: Granularity,
    ) -> Result<ResourceState, StoreError> {
        let clocked = current_version(now, granularity, flags.is_static);
        if flags.is_static {
            return Ok(ResourceState {
                version: clocked,
                is_static: true,
            });
        }
        let mutated = self
            .mutated
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        let version = match mutated.get(path) {
            Some(forced) => clocked.max(*forced),
            None => clocked,
        };
        Ok(ResourceState {
            version,
            is_static: false,
        })
    }

    /// Advance `path` to a version strictly newer than its current one.
    ///
    /// The new version is `now` at second resolution, or one second past the
    /// current version if that is later.
    pub fn mutate(
        &self,
        path: &str,
        now: DateTime<Utc>,
        granularity: Granularity,
    ) -> Result<Version, StoreError> {
        let mut mutated = self
            .mutated
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        let clocked = current_version(now, granularity, false);
        let current = match mutated.get(path) {
            Some(forced) => clocked.max(*forced),
            None => clocked,
        };
        let next = Version::from_datetime(now).max(current.next());
        mutated.insert(path.to_string(), next);
        Ok(next)
    }
}
