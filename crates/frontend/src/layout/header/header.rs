use crate::layout::global_context::AppGlobalContext;
use crate::shared::click_outside::use_click_outside;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Storefront navigation: (path, label)
pub fn nav_links(is_admin: bool) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![
        ("/", "Browse Decorations"),
        ("/wishlist", "Wishlist"),
        ("/dashboard", "Dashboard"),
    ];
    if is_admin {
        links.push(("/admin", "Admin Panel"));
    }
    links
}

/// Header links highlight only on an exact path match
pub fn is_nav_active(link: &str, current_path: &str) -> bool {
    link == current_path
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let location = use_location();

    let menu_ref = NodeRef::<leptos::html::Div>::new();
    use_click_outside(menu_ref, move || {
        if ctx.user_menu_open.get_untracked() {
            ctx.close_user_menu();
        }
    });

    let links = move || {
        let current = location.pathname.get();
        nav_links(ctx.is_admin())
            .into_iter()
            .map(|(path, label)| {
                let class = if is_nav_active(path, &current) {
                    "header__nav-link header__nav-link--active"
                } else {
                    "header__nav-link"
                };
                view! { <a href=path class=class>{label}</a> }
            })
            .collect_view()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href="/" class="header__logo">
                    <span class="header__logo-icon"></span>
                    <span class="header__title">{config.app.brand_name.clone()}</span>
                </a>
                <nav class="header__nav">{links}</nav>
            </div>

            <div class="header__actions">
                <a href="/wishlist" class="button button--ghost button--icon" aria-label="Wishlist">
                    {icon("heart")}
                </a>
                <div node_ref=menu_ref class="dropdown">
                    <button
                        class="button button--ghost button--icon"
                        aria-label="User menu"
                        on:click=move |_| ctx.toggle_user_menu()
                    >
                        {icon("user")}
                    </button>
                    <Show when=move || ctx.user_menu_open.get()>
                        <div class="dropdown__menu">
                            <a href="/dashboard" class="dropdown__item" on:click=move |_| ctx.close_user_menu()>
                                {icon("user")}
                                "Profile"
                            </a>
                            <Show when=move || ctx.is_admin()>
                                <a href="/admin" class="dropdown__item" on:click=move |_| ctx.close_user_menu()>
                                    {icon("settings")}
                                    "Admin Panel"
                                </a>
                            </Show>
                            <button class="dropdown__item" on:click=move |_| ctx.logout()>
                                {icon("log-out")}
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_link_only_for_admins() {
        assert_eq!(nav_links(false).len(), 3);
        assert_eq!(nav_links(true).last(), Some(&("/admin", "Admin Panel")));
    }

    #[test]
    fn test_active_link_is_exact_match() {
        assert!(is_nav_active("/", "/"));
        assert!(!is_nav_active("/", "/wishlist"));
        assert!(!is_nav_active("/admin", "/admin/bookings"));
    }
}
