//! Adapter from raw DOM metadata to typed click events.
//!
//! The host's event layer hands us the clicked element's class list, its
//! ancestor chain, and the aria-label, exactly as they appear in the
//! webview. Everything presentation-specific — every CSS class string —
//! is matched here and only here; `classify` sees typed regions and
//! markers.

use crate::classify::{ClickEvent, MarkerKind, PanelId, RegionKind};

// ---------------------------------------------------------------------------
// Class markers
// ---------------------------------------------------------------------------

/// The sidedock's own expand/collapse affordance.
const TAB_HEADER_CONTAINER_CLASS: &str = "workspace-tab-header-container";

/// In-note tags: `cm-hashtag` in the editor, `tag` in reading view.
const HASHTAG_CLASSES: [&str; 2] = ["cm-hashtag", "tag"];

/// Note-path breadcrumb in the view header.
const BREADCRUMB_CLASS: &str = "view-header-breadcrumb";

/// Note title region in the view header.
const NOTE_TITLE_CLASS: &str = "view-header-title-container";

/// Buttons inside a ribbon strip.
const RIBBON_ACTION_CLASS: &str = "side-dock-ribbon-action";

// ---------------------------------------------------------------------------
// Raw event shape
// ---------------------------------------------------------------------------

/// Metadata for one element as delivered by the host event layer.
#[derive(Clone, Debug, Default)]
pub struct ElementInfo {
    pub classes: Vec<String>,
    pub aria_label: Option<String>,
}

impl ElementInfo {
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            aria_label: None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A raw click inside the main workspace: the target element plus its
/// ancestor chain, innermost first.
#[derive(Clone, Debug, Default)]
pub struct RawClick {
    pub target: ElementInfo,
    pub ancestors: Vec<ElementInfo>,
    /// Whether the click lies within the workspace root's bounds.
    pub in_workspace_root: bool,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a workspace click to a typed event, or `None` when the click is
/// outside the workspace root and none of our rules apply.
///
/// Marker precedence mirrors the classifier's priority order: the tab
/// header guard is checked against the whole ancestor chain, the remaining
/// markers against the target element only. A click with no recognizable
/// metadata resolves to a plain workspace click — malformed events degrade
/// to the default collapse behavior instead of erroring.
pub fn resolve_workspace_click(raw: &RawClick) -> Option<ClickEvent> {
    if !raw.in_workspace_root {
        return None;
    }

    let in_chain = |class: &str| {
        raw.target.has_class(class) || raw.ancestors.iter().any(|a| a.has_class(class))
    };

    let marker = if in_chain(TAB_HEADER_CONTAINER_CLASS) {
        Some(MarkerKind::TabHeaderContainer)
    } else if HASHTAG_CLASSES.iter().any(|c| raw.target.has_class(c)) {
        Some(MarkerKind::Hashtag)
    } else if raw.target.has_class(BREADCRUMB_CLASS) {
        Some(MarkerKind::Breadcrumb)
    } else if raw.target.has_class(NOTE_TITLE_CLASS) {
        Some(MarkerKind::NoteTitle)
    } else {
        None
    };

    Some(ClickEvent::workspace(marker))
}

/// Resolve a click delivered by one of the ribbon strips' handlers.
///
/// A target that carries an aria-label or the ribbon-action class is one of
/// the strip's icon buttons; only a click on the bare strip container
/// counts as a request to expand the sidedock.
pub fn resolve_ribbon_click(panel: PanelId, target: &ElementInfo) -> ClickEvent {
    let on_button = target.aria_label.is_some() || target.has_class(RIBBON_ACTION_CLASS);
    let region = if on_button {
        RegionKind::RibbonChild(panel)
    } else {
        RegionKind::RibbonStrip(panel)
    };
    ClickEvent {
        region,
        marker: None,
    }
}
