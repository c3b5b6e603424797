//! Settings submenu routes.
//!
//! Every settings submenu (`settings.gui`, `settings.streams`, ...) reports
//! itself to the settings menu. Entering a submenu marks it as the current
//! one and leaving it turns on the menu's switch animation. Submenus carry no
//! model of their own; the settings data stays with the application.
//!
//! ```
//! use std::sync::Arc;
//! use stream_navigator::{MemoryRouter, RouteDefinition, Router, SettingsMenuState, SettingsSubmenu};
//! use stream_navigator::TransitionMethod;
//!
//! let menu = Arc::new(SettingsMenuState::new());
//! let mut router = MemoryRouter::new();
//! router.add_route(
//!     RouteDefinition::new("settings.gui", "/settings/gui")
//!         .lifecycle(SettingsSubmenu::new(Arc::clone(&menu))),
//! );
//!
//! router.do_url_transition(TransitionMethod::Push, "/settings/gui").unwrap();
//! assert_eq!(menu.current_submenu().as_deref(), Some("settings.gui"));
//! ```

use crate::lifecycle::{NavigationAction, RouteLifecycle};
use crate::{trace_log, NavigationRequest};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MenuFlags {
    current_submenu: Option<String>,
    is_animated: bool,
}

/// State of the settings menu shared by its submenu routes.
#[derive(Debug, Default)]
pub struct SettingsMenuState {
    flags: Mutex<MenuFlags>,
}

impl SettingsMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route name of the submenu currently shown.
    pub fn current_submenu(&self) -> Option<String> {
        self.flags().current_submenu.clone()
    }

    /// Whether switching submenus should animate.
    pub fn is_animated(&self) -> bool {
        self.flags().is_animated
    }

    fn flags(&self) -> MutexGuard<'_, MenuFlags> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lifecycle of a settings submenu route.
#[derive(Debug, Clone)]
pub struct SettingsSubmenu {
    menu: Arc<SettingsMenuState>,
}

impl SettingsSubmenu {
    pub fn new(menu: Arc<SettingsMenuState>) -> Self {
        Self { menu }
    }
}

impl RouteLifecycle for SettingsSubmenu {
    fn on_enter(&self, request: &NavigationRequest) -> NavigationAction {
        trace_log!("Settings submenu '{}' activated", request.route_name);
        self.menu.flags().current_submenu = Some(request.route_name.clone());
        NavigationAction::Continue
    }

    fn on_exit(&self) {
        self.menu.flags().is_animated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_sets_current_submenu() {
        let menu = Arc::new(SettingsMenuState::new());
        let submenu = SettingsSubmenu::new(Arc::clone(&menu));

        let action = submenu.on_enter(&NavigationRequest::new("settings.player", "/settings/player"));

        assert!(action.is_continue());
        assert_eq!(menu.current_submenu().as_deref(), Some("settings.player"));
        assert!(!menu.is_animated());
    }

    #[test]
    fn test_exit_turns_on_animation() {
        let menu = Arc::new(SettingsMenuState::new());
        SettingsSubmenu::new(Arc::clone(&menu)).on_exit();
        assert!(menu.is_animated());
    }
}
