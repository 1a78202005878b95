use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classify::PanelId;

/// Settings file name inside the config directory.
pub(crate) const SETTINGS_FILE: &str = "settings.json";

/// User-facing configuration for the auto-hide behavior.
///
/// Field names serialize in camelCase so the on-disk file matches the host
/// application's settings JSON conventions. Every flag defaults to off; a
/// fresh install changes nothing until the user opts in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoHideConfig {
    /// Clicking a ribbon strip's empty area expands its sidedock.
    pub expand_on_ribbon_click: bool,
    /// Clicking the note title expands the left sidedock.
    pub expand_on_title_click: bool,
    /// Master switch for the per-panel pin locks below.
    pub pin_lock_enabled: bool,
    /// Exempt the left sidedock from click-to-collapse. Retained but inert
    /// while `pin_lock_enabled` is false.
    pub left_pinned: bool,
    /// Exempt the right sidedock from click-to-collapse. Same inertness rule.
    pub right_pinned: bool,
}

impl AutoHideConfig {
    /// Whether `panel` is currently locked open. Honors the master switch:
    /// a stored pin flag has no effect while the pin lock is disabled.
    pub fn is_pinned(&self, panel: PanelId) -> bool {
        if !self.pin_lock_enabled {
            return false;
        }
        match panel {
            PanelId::Left => self.left_pinned,
            PanelId::Right => self.right_pinned,
        }
    }

    pub(crate) fn set_pinned_flag(&mut self, panel: PanelId, pinned: bool) {
        match panel {
            PanelId::Left => self.left_pinned = pinned,
            PanelId::Right => self.right_pinned = pinned,
        }
    }
}

/// Config directory using the platform-appropriate location.
///
/// - macOS: `~/Library/Application Support/autohide/`
/// - Linux: `~/.config/autohide/` (or `$XDG_CONFIG_HOME`)
/// - Windows: `%APPDATA%/autohide/`
///
/// Falls back to `~/.autohide/` if no platform dir is available.
pub(crate) fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("autohide"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".autohide")
        })
}

/// Load the settings file from `dir`, returning defaults if missing or
/// corrupt. A corrupt file is logged rather than silently reset so the
/// condition is visible instead of looking like lost settings.
pub(crate) fn load_config_from(dir: &Path) -> AutoHideConfig {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return AutoHideConfig::default();
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("could not read settings {}: {e}", path.display());
            return AutoHideConfig::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("corrupt settings {}: {e}. Using defaults.", path.display());
            AutoHideConfig::default()
        }
    }
}

/// Save the settings file atomically (temp file + rename) under `dir`.
/// Sets 0600 permissions on Unix.
pub(crate) fn save_config_to(dir: &Path, config: &AutoHideConfig) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create config directory: {e}"))?;

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;

    let target = dir.join(SETTINGS_FILE);
    let temp = dir.join(format!("{}.tmp.{}", SETTINGS_FILE, std::process::id()));

    std::fs::write(&temp, &json).map_err(|e| format!("Failed to write temp settings: {e}"))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&temp, perms)
            .map_err(|e| format!("Failed to set settings permissions: {e}"))?;
    }

    // Atomic rename: either the old file or new file exists, never partial
    std::fs::rename(&temp, &target).map_err(|e| {
        let _ = std::fs::remove_file(&temp);
        format!("Failed to commit settings: {e}")
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(dir.path());
        assert_eq!(cfg, AutoHideConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AutoHideConfig {
            expand_on_ribbon_click: true,
            expand_on_title_click: false,
            pin_lock_enabled: true,
            left_pinned: true,
            right_pinned: false,
        };
        save_config_to(dir.path(), &cfg).unwrap();
        assert_eq!(load_config_from(dir.path()), cfg);
    }

    #[test]
    fn on_disk_format_is_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AutoHideConfig {
            expand_on_ribbon_click: true,
            ..Default::default()
        };
        save_config_to(dir.path(), &cfg).unwrap();
        let raw = std::fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert!(raw.contains("\"expandOnRibbonClick\": true"), "got: {raw}");
        assert!(raw.contains("\"pinLockEnabled\""), "got: {raw}");
    }

    #[test]
    fn corrupt_file_loads_defaults_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();
        assert_eq!(load_config_from(dir.path()), AutoHideConfig::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"expandOnTitleClick": true}"#,
        )
        .unwrap();
        let cfg = load_config_from(dir.path());
        assert!(cfg.expand_on_title_click);
        assert!(!cfg.expand_on_ribbon_click);
        assert!(!cfg.pin_lock_enabled);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"pinLockEnabled": true, "someFutureOption": 3}"#,
        )
        .unwrap();
        let cfg = load_config_from(dir.path());
        assert!(cfg.pin_lock_enabled);
    }

    #[test]
    fn save_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        save_config_to(dir.path(), &AutoHideConfig::default()).unwrap();
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![SETTINGS_FILE.to_string()]);
    }

    #[test]
    fn pin_flags_are_inert_without_master_switch() {
        let cfg = AutoHideConfig {
            left_pinned: true,
            right_pinned: true,
            ..Default::default()
        };
        assert!(!cfg.is_pinned(PanelId::Left));
        assert!(!cfg.is_pinned(PanelId::Right));
    }

    #[test]
    fn pin_flags_apply_with_master_switch() {
        let cfg = AutoHideConfig {
            pin_lock_enabled: true,
            left_pinned: true,
            ..Default::default()
        };
        assert!(cfg.is_pinned(PanelId::Left));
        assert!(!cfg.is_pinned(PanelId::Right));
    }
}
