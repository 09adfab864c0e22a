use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::{ToastService, Toaster};
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Shell-wide UI state and the current (mock) user.
    provide_context(AppGlobalContext::new(config.session.demo_role));

    provide_context(ToastService::new(
        config.notifications.toast_duration_ms,
        config.notifications.max_visible,
    ));

    provide_context(config);

    view! {
        <AppRoutes />
        <Toaster />
    }
}
