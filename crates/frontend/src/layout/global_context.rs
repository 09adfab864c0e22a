use contracts::system::users::{UserProfile, UserRole};
use leptos::prelude::*;

use crate::shared::data::mock_store;

/// Shell-wide UI state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Admin sidebar expanded (labels visible) or collapsed to icons
    pub sidebar_open: RwSignal<bool>,
    pub user_menu_open: RwSignal<bool>,
    pub current_user: RwSignal<UserProfile>,
}

impl AppGlobalContext {
    pub fn new(role: UserRole) -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            user_menu_open: RwSignal::new(false),
            current_user: RwSignal::new(mock_store::current_user(role)),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn toggle_user_menu(&self) {
        self.user_menu_open.update(|open| *open = !*open);
    }

    pub fn close_user_menu(&self) {
        self.user_menu_open.set(false);
    }

    /// Reactive: re-evaluates when the current user changes
    pub fn is_admin(&self) -> bool {
        self.current_user.with(|u| u.is_admin())
    }

    /// There is no session backend yet; the request is only logged
    pub fn logout(&self) {
        let email = self.current_user.with_untracked(|u| u.email.clone());
        log::info!("Logout requested for {email}");
        self.close_user_menu();
    }
}
