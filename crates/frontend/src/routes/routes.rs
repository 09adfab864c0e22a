use crate::dashboards::d400_admin_overview::ui::AdminOverviewDashboard;
use crate::dashboards::d401_user_dashboard::ui::UserDashboard;
use crate::domain::a001_decoration::ui::admin_list::AdminDecorationList;
use crate::domain::a001_decoration::ui::catalog::DecorationCatalog;
use crate::domain::a001_decoration::ui::details::DecorationDetails;
use crate::domain::a002_booking::ui::admin_list::AdminBookingList;
use crate::domain::a003_wishlist::ui::WishlistPage;
use crate::layout::admin::AdminLayout;
use crate::layout::PublicShell;
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    ParamSegment, StaticSegment,
};

/// Client-side routes.
///
/// Storefront pages share the header; `/admin/*` pages use the admin shell.
/// Anything unmatched renders [`NotFound`].
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminOverviewDashboard />
                    <Route path=StaticSegment("decorations") view=AdminDecorationList />
                    <Route path=StaticSegment("bookings") view=AdminBookingList />
                </ParentRoute>
                <ParentRoute path=StaticSegment("") view=PublicShell>
                    <Route path=StaticSegment("") view=DecorationCatalog />
                    <Route
                        path=(StaticSegment("decoration"), ParamSegment("id"))
                        view=DecorationDetails
                    />
                    <Route path=StaticSegment("wishlist") view=WishlistPage />
                    <Route path=StaticSegment("dashboard") view=UserDashboard />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
