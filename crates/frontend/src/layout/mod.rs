pub mod admin;
pub mod global_context;
pub mod header;
pub mod toast_service;

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Storefront shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |              routed page                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn PublicShell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                <Outlet />
            </main>
        </div>
    }
}
