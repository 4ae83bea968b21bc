//! The enabled/disabled switch behind the plugin's two menu entries.

use std::sync::{Mutex, MutexGuard, PoisonError};

use plugin_core::{log_info, log_warn, HostError};

use crate::menus::{menu_enablement, MenuId};
use crate::messaging::outcome_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Disabled,
    Enabled,
}

/// Result of one enable or disable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Enabled,
    AlreadyEnabled,
    Disabled,
    AlreadyDisabled,
}

impl ToggleOutcome {
    pub fn changed_state(self) -> bool {
        matches!(self, ToggleOutcome::Enabled | ToggleOutcome::Disabled)
    }
}

/// Where a toggle request sends its side effects.
pub trait ToggleEffects {
    fn set_menu_enabled(&self, menu: MenuId, enabled: bool) -> Result<(), HostError>;

    /// Deliver a notice to the user.
    fn notify(&self, message: &str) -> Result<(), HostError>;
}

/// Holds the plugin's on/off state.
///
/// A request checks the state, updates it and runs its side effects under one
/// lock, so concurrent requests are applied one after another and the menu
/// calls of each land in request order. Effects must not call back into the
/// toggle.
#[derive(Debug, Default)]
pub struct PluginToggle {
    state: Mutex<ToggleState>,
}

impl PluginToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToggleState {
        *self.lock()
    }

    pub fn request_enable(&self, effects: &dyn ToggleEffects) -> ToggleOutcome {
        self.request(ToggleState::Enabled, effects)
    }

    pub fn request_disable(&self, effects: &dyn ToggleEffects) -> ToggleOutcome {
        self.request(ToggleState::Disabled, effects)
    }

    fn request(&self, target: ToggleState, effects: &dyn ToggleEffects) -> ToggleOutcome {
        let mut state = self.lock();

        let outcome = match (*state, target) {
            (ToggleState::Enabled, ToggleState::Enabled) => ToggleOutcome::AlreadyEnabled,
            (ToggleState::Disabled, ToggleState::Disabled) => ToggleOutcome::AlreadyDisabled,
            (_, ToggleState::Enabled) => ToggleOutcome::Enabled,
            (_, ToggleState::Disabled) => ToggleOutcome::Disabled,
        };

        if outcome.changed_state() {
            *state = target;
            apply_menu_enablement(target, |menu, enabled| effects.set_menu_enabled(menu, enabled));
        } else {
            log_info!("Toggle request rejected: {:?}", outcome);
        }

        if let Err(e) = effects.notify(&outcome_message(outcome)) {
            log_warn!("Failed to deliver toggle notice: {}", e);
        }

        outcome
    }

    fn lock(&self) -> MutexGuard<'_, ToggleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Push the menu affordances for `state`, disabling before enabling.
///
/// Stops at the first failed call so a later menu is never enabled when an
/// earlier one could not be disabled.
pub fn apply_menu_enablement<F>(state: ToggleState, mut set_menu_enabled: F)
where
    F: FnMut(MenuId, bool) -> Result<(), HostError>,
{
    for (menu, enabled) in menu_enablement(state) {
        if let Err(e) = set_menu_enabled(menu, enabled) {
            log_warn!("Failed to set menu {:?} enabled={}: {}", menu, enabled, e);
            return;
        }
    }
}
