use plugin_core::{MenuItem, PluginMenus};

use crate::toggle::ToggleState;

/// Global menu entries registered by the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    EnablePlugin = 1,
    DisablePlugin = 2,
}

impl MenuId {
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// The entry that undoes this one.
    pub fn opposite(self) -> MenuId {
        match self {
            MenuId::EnablePlugin => MenuId::DisablePlugin,
            MenuId::DisablePlugin => MenuId::EnablePlugin,
        }
    }
}

impl TryFrom<i32> for MenuId {
    type Error = i32;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(MenuId::EnablePlugin),
            2 => Ok(MenuId::DisablePlugin),
            other => Err(other),
        }
    }
}

pub const MENU_ICON: &str = "plugin.png";

pub fn plugin_menus() -> PluginMenus {
    PluginMenus {
        items: vec![
            MenuItem::global(MenuId::EnablePlugin.raw(), "Enable Plugin", "enable.png"),
            MenuItem::global(MenuId::DisablePlugin.raw(), "Disable Plugin", "disable.png"),
        ],
        icon: Some(MENU_ICON.to_string()),
    }
}

/// Menu affordances for `state`, in the order they are applied.
///
/// The entry that would re-enter `state` is greyed out first, then the entry
/// leading out of it is enabled.
pub fn menu_enablement(state: ToggleState) -> [(MenuId, bool); 2] {
    let taken = match state {
        ToggleState::Enabled => MenuId::EnablePlugin,
        ToggleState::Disabled => MenuId::DisablePlugin,
    };
    [(taken, false), (taken.opposite(), true)]
}
