//! Auto-hide controller for a note-taking app's two sidedocks.
//!
//! Clicking the main content area collapses both side panels; clicking a
//! ribbon strip or the note title expands one (both opt-in); a per-panel
//! pin exempts a panel from click-to-collapse. The host application wires
//! its click events through the `dom` adapter and hands the resulting
//! typed events to a [`PanelController`], which talks back to the host
//! only through the [`PanelHost`] trait.

pub mod app_logger;
pub mod classify;
pub mod commands;
pub mod config;
pub mod controller;
pub mod dom;
pub mod host;
pub mod logging;
pub mod store;

pub use classify::{classify, Action, ClickEvent, MarkerKind, PanelId, PanelVisibility, RegionKind};
pub use commands::{descriptor, dispatch, CommandId, ALL_COMMANDS};
pub use config::AutoHideConfig;
pub use controller::PanelController;
pub use dom::{resolve_ribbon_click, resolve_workspace_click, ElementInfo, RawClick};
pub use host::PanelHost;
pub use store::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
