use crate::layout::admin::sidebar::AdminSidebar;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Admin console shell: top bar, collapsible sidebar and the routed page
#[component]
pub fn AdminLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="admin-layout">
            <header data-zone="header" class="admin-header">
                <div class="admin-header__left">
                    <button
                        class="button button--ghost button--icon"
                        aria-label="Toggle sidebar"
                        on:click=move |_| ctx.toggle_sidebar()
                    >
                        {icon("menu")}
                    </button>
                    <h1 class="admin-header__title">"Decoration Admin"</h1>
                </div>
                <div class="admin-header__right">
                    <span class="admin-header__user">
                        {icon("user")}
                        "Admin User"
                    </span>
                    <button class="button button--outline button--sm" on:click=move |_| ctx.logout()>
                        {icon("log-out")}
                        "Logout"
                    </button>
                </div>
            </header>
            <div class="admin-layout__body">
                <AdminSidebar />
                <main class="admin-layout__main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
