//! Most-recently-used window ordering, persisted across invocations.
//!
//! Each run loads the snapshot from the previous run, reconciles it with the
//! windows that actually exist right now, and (when a window was focused by
//! this run) promotes that window to the front before saving. Cycling relies
//! entirely on this self-reordering: no separate cycle position is stored.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::window::Window;

/// Reconcile the stored MRU list with the live window set.
///
/// Windows that have been closed since the last run are dropped; windows
/// that have been opened since are placed at the front, in the order the
/// window manager listed them, so a just-opened window is immediately the
/// most recent. Previously-known windows keep their relative MRU order.
#[must_use]
pub fn reconcile(stored: Vec<Window>, live: &[Window]) -> Vec<Window> {
    let mut kept: Vec<Window> = stored
        .into_iter()
        .filter(|window| live.contains(window))
        .collect();

    let mut reconciled: Vec<Window> = live
        .iter()
        .filter(|window| !kept.contains(window))
        .cloned()
        .collect();
    reconciled.append(&mut kept);
    reconciled
}

/// Move `window` to the front of the list, preserving the relative order of
/// everything else.
///
/// # Panics
///
/// Panics if `window` is not in `list`. Callers only promote windows taken
/// from the reconciled list itself, so a miss is a programming error.
#[must_use]
pub fn promote(mut list: Vec<Window>, window: &Window) -> Vec<Window> {
    let position = list
        .iter()
        .position(|candidate| candidate == window)
        .expect("promoted window must be in the reconciled window list");
    let promoted = list.remove(position);
    list.insert(0, promoted);
    list
}

/// Storage for the MRU snapshot.
///
/// A trait so the orchestrator can be tested against an in-memory fake.
pub trait MruStore {
    /// Load the persisted list. Missing or unreadable storage yields an
    /// empty list; a previous snapshot is never required to run.
    fn load(&self) -> Vec<Window>;

    /// Persist the list, replacing any previous snapshot.
    fn save(&self, list: &[Window]) -> Result<(), StorageError>;
}

/// File-backed store: a versionless JSON snapshot, replaced atomically on
/// save so a crash mid-write cannot corrupt the previous one.
pub struct FileMruStore {
    path: PathBuf,
}

impl FileMruStore {
    pub fn new(path: PathBuf) -> Self {
        FileMruStore { path }
    }

    /// Default snapshot location under the user's cache directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("runraisenext").join("mru.json"))
    }
}

impl MruStore for FileMruStore {
    fn load(&self) -> Vec<Window> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!("no MRU snapshot at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(list) => list,
            Err(e) => {
                warn!(
                    "discarding unreadable MRU snapshot {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, list: &[Window]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let json = serde_json::to_string(list)?;
        let temp_path = self.path.with_extension("json.tmp");

        if let Err(source) = fs::write(&temp_path, &json) {
            return Err(StorageError::Write {
                path: temp_path,
                source,
            });
        }
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(id: &str) -> Window {
        Window::from_id(id)
    }

    // ==================== reconcile tests ====================

    #[test]
    fn test_reconcile_empty() {
        assert!(reconcile(vec![], &[]).is_empty());
    }

    #[test]
    fn test_reconcile_drops_closed_windows() {
        let stored = vec![win("1"), win("2"), win("3")];
        let live = vec![win("1"), win("3")];

        let result = reconcile(stored, &live);

        assert_eq!(result, vec![win("1"), win("3")]);
    }

    #[test]
    fn test_reconcile_prepends_new_windows_in_live_order() {
        let stored = vec![win("1"), win("2")];
        let live = vec![win("1"), win("4"), win("2"), win("5")];

        let result = reconcile(stored, &live);

        // New windows first, in live order, then the known MRU order.
        assert_eq!(result, vec![win("4"), win("5"), win("1"), win("2")]);
    }

    #[test]
    fn test_reconcile_keeps_prior_relative_order() {
        let stored = vec![win("3"), win("1"), win("2")];
        let live = vec![win("1"), win("2"), win("3")];

        let result = reconcile(stored, &live);

        assert_eq!(result, vec![win("3"), win("1"), win("2")]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let stored = vec![win("2"), win("9")];
        let live = vec![win("1"), win("2"), win("3")];

        let once = reconcile(stored, &live);
        let twice = reconcile(once.clone(), &live);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_reconcile_from_empty_store_takes_live_order() {
        let live = vec![win("1"), win("2"), win("3")];

        let result = reconcile(vec![], &live);

        assert_eq!(result, live);
    }

    // ==================== promote tests ====================

    #[test]
    fn test_promote_moves_window_to_front() {
        let list = vec![win("1"), win("2"), win("3"), win("4")];

        let result = promote(list, &win("3"));

        assert_eq!(result, vec![win("3"), win("1"), win("2"), win("4")]);
    }

    #[test]
    fn test_promote_front_window_is_a_fixpoint() {
        let list = vec![win("1"), win("2")];

        let result = promote(list.clone(), &win("1"));

        assert_eq!(result, list);
    }

    #[test]
    fn test_promote_preserves_length() {
        let list = vec![win("1"), win("2"), win("3")];
        assert_eq!(promote(list, &win("2")).len(), 3);
    }

    #[test]
    #[should_panic(expected = "promoted window must be in the reconciled window list")]
    fn test_promote_panics_on_unknown_window() {
        let _ = promote(vec![win("1")], &win("99"));
    }

    // ==================== FileMruStore tests ====================

    fn store_in(dir: &tempfile::TempDir) -> FileMruStore {
        FileMruStore::new(dir.path().join("mru.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mru.json");
        fs::write(&path, "{ not json ]").unwrap();

        let store = FileMruStore::new(path);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let list = vec![
            Window {
                id: "0x01".to_string(),
                wm_class: "Navigator.Firefox".to_string(),
                title: "docs".to_string(),
                ..Default::default()
            },
            win("0x02"),
        ];

        store.save(&list).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, list);
        assert_eq!(loaded[0].wm_class, "Navigator.Firefox");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileMruStore::new(dir.path().join("nested").join("mru.json"));

        store.save(&[win("1")]).unwrap();

        assert_eq!(store.load(), vec![win("1")]);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&[win("1"), win("2")]).unwrap();
        store.save(&[win("2")]).unwrap();

        assert_eq!(store.load(), vec![win("2")]);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&[win("1")]).unwrap();

        assert!(!dir.path().join("mru.json.tmp").exists());
    }
}
