//! Settings store: configuration snapshots plus pin-flag persistence.
//!
//! Pin persistence is optimistic. The controller applies the visual
//! transition first and the write completes on a background thread; a
//! failed write is logged and never rolled back (the flag stays flipped in
//! memory, so behavior and the next successful save stay consistent).

use parking_lot::{Mutex, RwLock};
use std::path::PathBuf;
use std::thread::JoinHandle;

use crate::app_logger::SharedLog;
use crate::classify::PanelId;
use crate::config::{self, AutoHideConfig};

/// Read-only configuration snapshots plus the pin-toggle write path.
pub trait SettingsStore: Send + Sync {
    /// Current configuration snapshot.
    fn configuration(&self) -> AutoHideConfig;

    /// Flip a pin flag and persist it. Must not block click handling;
    /// disk-backed implementations write in the background.
    fn set_pinned(&self, panel: PanelId, pinned: bool);
}

// ---------------------------------------------------------------------------
// Disk-backed store
// ---------------------------------------------------------------------------

/// Settings store backed by `settings.json` in the platform config dir.
pub struct JsonSettingsStore {
    dir: PathBuf,
    config: RwLock<AutoHideConfig>,
    /// Outstanding background writes, joined by [`flush`](Self::flush).
    pending: Mutex<Vec<JoinHandle<()>>>,
    /// Activity log to surface persistence failures in, when wired.
    log: Option<SharedLog>,
}

impl JsonSettingsStore {
    /// Open the store at the platform config directory, loading whatever
    /// settings exist there (defaults if none).
    pub fn open() -> Self {
        Self::open_at(config::config_dir())
    }

    /// Open the store rooted at an explicit directory.
    pub fn open_at(dir: PathBuf) -> Self {
        let config = config::load_config_from(&dir);
        Self {
            dir,
            config: RwLock::new(config),
            pending: Mutex::new(Vec::new()),
            log: None,
        }
    }

    /// Wire the shared activity log so persistence failures show up in the
    /// host's log view, not just in tracing output.
    pub fn with_logger(mut self, log: SharedLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Replace the whole configuration (settings-page writes) and persist
    /// it synchronously.
    pub fn replace(&self, config: AutoHideConfig) -> Result<(), String> {
        *self.config.write() = config.clone();
        config::save_config_to(&self.dir, &config)
    }

    /// Wait for any outstanding background writes. Called at shutdown so
    /// the last pin toggle reaches disk before the process exits.
    pub fn flush(&self) {
        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.pending.lock());
        for handle in handles {
            let _ = handle.join();
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn configuration(&self) -> AutoHideConfig {
        self.config.read().clone()
    }

    fn set_pinned(&self, panel: PanelId, pinned: bool) {
        let snapshot = {
            let mut cfg = self.config.write();
            cfg.set_pinned_flag(panel, pinned);
            cfg.clone()
        };

        let dir = self.dir.clone();
        let log = self.log.clone();
        let handle = std::thread::spawn(move || {
            if let Err(e) = config::save_config_to(&dir, &snapshot) {
                // No rollback: the visual state already changed and stays.
                tracing::error!("failed to persist pin state for {}: {e}", panel.as_str());
                if let Some(log) = log {
                    log.lock().push(
                        "error",
                        "store",
                        format!("failed to persist pin state for {}: {e}", panel.as_str()),
                    );
                }
            }
        });

        let mut pending = self.pending.lock();
        // Drop handles of writes that already finished so the list stays small.
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}

impl Drop for JsonSettingsStore {
    fn drop(&mut self) {
        self.flush();
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Settings store with no persistence, for tests and for hosts that own
/// settings storage themselves.
#[derive(Default)]
pub struct MemorySettingsStore {
    config: RwLock<AutoHideConfig>,
    /// Every `set_pinned` call, in order.
    writes: Mutex<Vec<(PanelId, bool)>>,
}

impl MemorySettingsStore {
    pub fn new(config: AutoHideConfig) -> Self {
        Self {
            config: RwLock::new(config),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Pin writes issued so far, oldest first.
    pub fn recorded_writes(&self) -> Vec<(PanelId, bool)> {
        self.writes.lock().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn configuration(&self) -> AutoHideConfig {
        self.config.read().clone()
    }

    fn set_pinned(&self, panel: PanelId, pinned: bool) {
        self.config.write().set_pinned_flag(panel, pinned);
        self.writes.lock().push((panel, pinned));
    }
}
