//! Command-palette surface.
//!
//! The host registers one palette entry per [`CommandId`] using the stable
//! string ID and display name from [`descriptor`], and routes invocations
//! back through [`dispatch`].

use serde::{Deserialize, Serialize};

use crate::classify::PanelId;
use crate::controller::PanelController;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandId {
    ExpandLeftPanel,
    ExpandRightPanel,
    TogglePinLeft,
    TogglePinRight,
}

/// Stable ID and display name for palette registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub id: &'static str,
    pub name: &'static str,
}

/// Every command, in registration order.
pub const ALL_COMMANDS: [CommandId; 4] = [
    CommandId::ExpandLeftPanel,
    CommandId::ExpandRightPanel,
    CommandId::TogglePinLeft,
    CommandId::TogglePinRight,
];

pub fn descriptor(id: CommandId) -> CommandDescriptor {
    match id {
        CommandId::ExpandLeftPanel => CommandDescriptor {
            id: "expand-left-panel",
            name: "Expand left panel",
        },
        CommandId::ExpandRightPanel => CommandDescriptor {
            id: "expand-right-panel",
            name: "Expand right panel",
        },
        CommandId::TogglePinLeft => CommandDescriptor {
            id: "toggle-pin-left",
            name: "Toggle pin for left panel",
        },
        CommandId::TogglePinRight => CommandDescriptor {
            id: "toggle-pin-right",
            name: "Toggle pin for right panel",
        },
    }
}

/// Route a palette invocation to the controller. Expand commands are
/// idempotent; pin commands force visible state to agree with the pin.
pub fn dispatch(controller: &PanelController, id: CommandId) {
    match id {
        CommandId::ExpandLeftPanel => controller.expand_panel(PanelId::Left),
        CommandId::ExpandRightPanel => controller.expand_panel(PanelId::Right),
        CommandId::TogglePinLeft => {
            controller.toggle_pin_command(PanelId::Left);
        }
        CommandId::TogglePinRight => {
            controller.toggle_pin_command(PanelId::Right);
        }
    }
}
