//! Admin sidebar with collapsible labels

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminNavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const ADMIN_ROOT: &str = "/admin";

pub const ADMIN_NAV_ITEMS: &[AdminNavItem] = &[
    AdminNavItem { title: "Dashboard", url: ADMIN_ROOT, icon: "layout-dashboard" },
    AdminNavItem { title: "Decorations", url: "/admin/decorations", icon: "package" },
    AdminNavItem { title: "Add Decoration", url: "/admin/decorations/new", icon: "plus-circle" },
    AdminNavItem { title: "Bookings", url: "/admin/bookings", icon: "calendar" },
    AdminNavItem { title: "Users", url: "/admin/users", icon: "users" },
    AdminNavItem { title: "Wishlists", url: "/admin/wishlists", icon: "heart" },
    AdminNavItem { title: "Analytics", url: "/admin/analytics", icon: "bar-chart" },
    AdminNavItem { title: "Settings", url: "/admin/settings", icon: "settings" },
];

/// The overview item matches `/admin` exactly, every other item by prefix
pub fn is_admin_nav_active(item_url: &str, current_path: &str) -> bool {
    if item_url == ADMIN_ROOT {
        current_path == ADMIN_ROOT
    } else {
        current_path.starts_with(item_url)
    }
}

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let location = use_location();

    view! {
        <aside
            class="admin-sidebar"
            class:admin-sidebar--collapsed=move || !ctx.sidebar_open.get()
        >
            <Show when=move || ctx.sidebar_open.get()>
                <div class="admin-sidebar__group-label">"Admin Panel"</div>
            </Show>
            <nav class="admin-sidebar__menu">
                {ADMIN_NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let url = item.url;
                        let is_active = move || is_admin_nav_active(url, &location.pathname.get());
                        view! {
                            <a
                                href=url
                                class="admin-sidebar__item"
                                class:admin-sidebar__item--active=is_active
                                title=item.title
                            >
                                {icon(item.icon)}
                                <Show when=move || ctx.sidebar_open.get()>
                                    <span class="admin-sidebar__label">{item.title}</span>
                                </Show>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_matches_exactly() {
        assert!(is_admin_nav_active("/admin", "/admin"));
        assert!(!is_admin_nav_active("/admin", "/admin/bookings"));
    }

    #[test]
    fn test_sections_match_by_prefix() {
        assert!(is_admin_nav_active("/admin/bookings", "/admin/bookings"));
        assert!(is_admin_nav_active("/admin/decorations", "/admin/decorations/new"));
        assert!(!is_admin_nav_active("/admin/users", "/admin/bookings"));
    }

    #[test]
    fn test_nav_has_eight_items() {
        let titles: Vec<_> = ADMIN_NAV_ITEMS.iter().map(|i| i.title).collect();
        assert_eq!(titles.len(), 8);
        assert_eq!(titles[0], "Dashboard");
        assert_eq!(titles[7], "Settings");
    }
}
