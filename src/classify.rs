//! Click classification for the auto-hide behavior.
//!
//! This is the single source of truth for deciding what a click does to the
//! two sidedocks. The `dom` adapter turns raw element metadata into a typed
//! [`ClickEvent`]; everything here operates on that typed form, so no CSS
//! class string ever reaches the decision logic.

use serde::{Deserialize, Serialize};

use crate::config::AutoHideConfig;

/// Which sidedock a click, action, or command refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Left,
    Right,
}

impl PanelId {
    /// Stable lowercase name, used in log entries and command IDs.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Left => "left",
            PanelId::Right => "right",
        }
    }
}

/// Collapsed/expanded state of both sidedocks, read from the host
/// immediately before classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    pub left_collapsed: bool,
    pub right_collapsed: bool,
}

impl PanelVisibility {
    pub fn is_collapsed(&self, panel: PanelId) -> bool {
        match panel {
            PanelId::Left => self.left_collapsed,
            PanelId::Right => self.right_collapsed,
        }
    }
}

/// Where a click landed, as resolved by the `dom` adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    /// Inside the main workspace (note content area).
    WorkspaceRoot,
    /// Exactly on a ribbon strip's container element.
    RibbonStrip(PanelId),
    /// On a button or icon inside a ribbon strip, not the strip itself.
    RibbonChild(PanelId),
}

/// Special element markers a workspace-root click may carry.
///
/// At most one marker survives resolution; the `dom` adapter applies the
/// same precedence the classifier would (guards before title).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// The panel's own expand/collapse affordance. Never fight it.
    TabHeaderContainer,
    /// An in-note tag. Clicking it searches for the tag; don't hijack.
    Hashtag,
    /// A note-path breadcrumb in the view header.
    Breadcrumb,
    /// The note title region in the view header.
    NoteTitle,
}

/// A click with its resolved region and marker, ready for classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    pub region: RegionKind,
    pub marker: Option<MarkerKind>,
}

impl ClickEvent {
    pub fn workspace(marker: Option<MarkerKind>) -> Self {
        Self {
            region: RegionKind::WorkspaceRoot,
            marker,
        }
    }
}

/// A panel state transition the controller should apply to the host.
///
/// "Collapse both" is always the independent pair of `Collapse` actions;
/// there is deliberately no atomic both-variant, because each side's pin is
/// evaluated on its own. An empty action list means the click is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Expand(PanelId),
    Collapse(PanelId),
}

/// Classify one click against the current configuration and panel state.
///
/// Pure function: reads nothing but its arguments, mutates nothing. The
/// returned actions are already filtered for idempotence (no expand of an
/// expanded panel) and pin locks.
pub fn classify(
    event: &ClickEvent,
    config: &AutoHideConfig,
    visibility: PanelVisibility,
) -> Vec<Action> {
    match event.region {
        RegionKind::WorkspaceRoot => classify_workspace(event.marker, config, visibility),
        RegionKind::RibbonStrip(panel) => {
            if !config.expand_on_ribbon_click {
                return Vec::new();
            }
            if visibility.is_collapsed(panel) {
                vec![Action::Expand(panel)]
            } else {
                // Already open; repeated ribbon clicks never toggle closed.
                Vec::new()
            }
        }
        // The user is operating a ribbon icon, not asking for the panel.
        RegionKind::RibbonChild(_) => Vec::new(),
    }
}

/// Workspace-root clicks, in strict priority order: guards, then the
/// title-expand rule, then default collapse.
fn classify_workspace(
    marker: Option<MarkerKind>,
    config: &AutoHideConfig,
    visibility: PanelVisibility,
) -> Vec<Action> {
    match marker {
        Some(MarkerKind::TabHeaderContainer)
        | Some(MarkerKind::Hashtag)
        | Some(MarkerKind::Breadcrumb) => return Vec::new(),
        Some(MarkerKind::NoteTitle) if config.expand_on_title_click => {
            // Title clicks are expand-only. They never fall through to the
            // collapse rule, even when the left panel is already open.
            return if visibility.left_collapsed {
                vec![Action::Expand(PanelId::Left)]
            } else {
                Vec::new()
            };
        }
        // Title marker with the setting off behaves like any body click.
        Some(MarkerKind::NoteTitle) | None => {}
    }

    let mut actions = Vec::with_capacity(2);
    if !config.is_pinned(PanelId::Left) {
        actions.push(Action::Collapse(PanelId::Left));
    }
    if !config.is_pinned(PanelId::Right) {
        actions.push(Action::Collapse(PanelId::Right));
    }
    actions
}
