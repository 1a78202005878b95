//! Panel controller: applies classified clicks and commands to the host.
//!
//! One controller instance lives for the host session. It owns nothing but
//! a cached configuration snapshot; panel state belongs to the host, pin
//! flags to the settings store. All entry points run synchronously on the
//! delivering thread — UI click delivery is serialized, so there is never
//! an overlapping invocation.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app_logger::{LogEntry, SharedLog};
use crate::classify::{classify, Action, ClickEvent, PanelId};
use crate::config::AutoHideConfig;
use crate::host::PanelHost;
use crate::store::SettingsStore;

pub struct PanelController {
    host: Arc<dyn PanelHost>,
    store: Arc<dyn SettingsStore>,
    /// Snapshot of the store's configuration, refreshed on reload and kept
    /// current across pin toggles. Reads are per-click, writes are rare.
    config: RwLock<AutoHideConfig>,
    log: SharedLog,
}

impl PanelController {
    pub fn new(host: Arc<dyn PanelHost>, store: Arc<dyn SettingsStore>, log: SharedLog) -> Self {
        let config = store.configuration();
        Self {
            host,
            store,
            config: RwLock::new(config),
            log,
        }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> AutoHideConfig {
        self.config.read().clone()
    }

    /// Refresh the cached snapshot from the store (settings page saved).
    pub fn reload_config(&self) {
        *self.config.write() = self.store.configuration();
    }

    /// Handle one resolved click. Reads panel visibility from the host,
    /// classifies, and applies every resulting transition.
    pub fn handle_click(&self, event: &ClickEvent) {
        let config = self.config.read().clone();
        let visibility = self.host.visibility();
        for action in classify(event, &config, visibility) {
            self.apply(action);
        }
    }

    fn apply(&self, action: Action) {
        match action {
            Action::Expand(panel) => {
                self.host.expand(panel);
                tracing::debug!("expand {}", panel.as_str());
                self.log
                    .lock()
                    .push("debug", "controller", format!("expand {}", panel.as_str()));
            }
            Action::Collapse(panel) => {
                self.host.collapse(panel);
                tracing::debug!("collapse {}", panel.as_str());
                self.log
                    .lock()
                    .push("debug", "controller", format!("collapse {}", panel.as_str()));
            }
        }
    }

    /// Pin toggle from the panel's pin affordance. Pinning expands the
    /// panel; unpinning leaves its visible state alone. Returns the new
    /// pin value.
    pub fn toggle_pin(&self, panel: PanelId) -> bool {
        let pinned = self.flip_pin(panel);
        if pinned {
            self.host.expand(panel);
        }
        pinned
    }

    /// Pin toggle from the command palette. Same flag handling, but the
    /// visible state is forced to agree with the pin at the moment of the
    /// toggle: expand on pin, collapse on unpin.
    pub fn toggle_pin_command(&self, panel: PanelId) -> bool {
        let pinned = self.flip_pin(panel);
        if pinned {
            self.host.expand(panel);
        } else {
            self.host.collapse(panel);
        }
        pinned
    }

    /// Flip the flag in the cached snapshot, then hand the write to the
    /// store. The store persists in the background; the visual transition
    /// the callers apply does not wait for it.
    fn flip_pin(&self, panel: PanelId) -> bool {
        let pinned = {
            let mut cfg = self.config.write();
            let pinned = match panel {
                PanelId::Left => !cfg.left_pinned,
                PanelId::Right => !cfg.right_pinned,
            };
            cfg.set_pinned_flag(panel, pinned);
            pinned
        };
        self.store.set_pinned(panel, pinned);
        self.log.lock().push(
            "info",
            "controller",
            format!(
                "{} panel {}",
                if pinned { "pinned" } else { "unpinned" },
                panel.as_str()
            ),
        );
        pinned
    }

    /// Named command action: expand a panel if it is collapsed. Repeated
    /// invocations on an open panel do nothing.
    pub fn expand_panel(&self, panel: PanelId) {
        if self.host.is_collapsed(panel) {
            self.apply(Action::Expand(panel));
        }
    }

    /// The host replaced its workspace layout. Re-resolve panel references
    /// and re-apply pin state: the host may have reset visual state
    /// independently of the stored configuration.
    pub fn on_layout_change(&self) {
        self.host.reattach();
        let config = self.config.read().clone();
        for panel in [PanelId::Left, PanelId::Right] {
            if config.is_pinned(panel) && self.host.is_collapsed(panel) {
                self.apply(Action::Expand(panel));
            }
        }
    }

    /// Recent activity entries, most recent last. `limit` of 0 means all.
    pub fn recent_logs(&self, limit: usize) -> Vec<LogEntry> {
        self.log.lock().entries(limit)
    }
}
