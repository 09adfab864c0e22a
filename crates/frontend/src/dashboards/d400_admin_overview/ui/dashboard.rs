use crate::shared::components::ui::Badge;
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::data::mock_store;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_admin_overview::{AdminStats, RecentBooking};
use leptos::prelude::*;

fn counter(value: u32) -> Signal<usize> {
    Signal::stored(value as usize)
}

/// `/admin` landing page
#[component]
pub fn AdminOverviewDashboard() -> impl IntoView {
    let stats = mock_store::admin_stats();
    let recent = mock_store::recent_bookings();
    log::debug!(
        "Admin overview: {} decorations, {} bookings",
        stats.total_decorations,
        stats.total_bookings
    );

    view! {
        <PageFrame page_id="d400_admin_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Admin Dashboard" subtitle="Manage your decoration platform" />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Decorations"
                        icon_name="package"
                        value=counter(stats.total_decorations)
                        subtitle=stats.decorations_subtitle()
                    />
                    <StatCard
                        label="Total Bookings"
                        icon_name="calendar"
                        value=counter(stats.total_bookings)
                        subtitle=stats.bookings_subtitle()
                    />
                    <StatCard
                        label="Total Users"
                        icon_name="users"
                        value=counter(stats.total_users)
                        tone=StatTone::Success
                        subtitle="+12% from last month"
                    />
                    <StatCard
                        label="Wishlist Items"
                        icon_name="heart"
                        value=counter(stats.total_wishlists)
                        subtitle="Across all users"
                    />
                </div>

                <div class="dashboard-columns">
                    <RecentBookingsPanel bookings=recent />
                    <QuickActionsPanel stats=stats />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn RecentBookingsPanel(bookings: Vec<RecentBooking>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{icon("alert-circle")}"Recent Bookings"</h2>
            </div>
            <div class="card__content activity-list">
                {bookings
                    .into_iter()
                    .map(|booking| {
                        view! {
                            <div class="activity-list__item">
                                <div>
                                    <p class="activity-list__primary">{booking.user}</p>
                                    <p class="activity-list__secondary">{booking.decoration}</p>
                                    <p class="activity-list__meta">
                                        {format!("Date: {}", booking.date)}
                                    </p>
                                </div>
                                <Badge variant=booking.status.admin_badge_variant()>
                                    {booking.status.display_name()}
                                </Badge>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn QuickActionsPanel(stats: AdminStats) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Quick Actions"</h2>
            </div>
            <div class="card__content activity-list">
                <div class="activity-list__item activity-list__item--primary">
                    <div>
                        <p class="activity-list__primary">"Pending Approvals"</p>
                        <p class="activity-list__secondary">
                            {format!("{} bookings need review", stats.pending_bookings)}
                        </p>
                    </div>
                    <Badge variant="reserved">{stats.pending_bookings}</Badge>
                </div>
                <div class="activity-list__item">
                    <div>
                        <p class="activity-list__primary">"Fully Booked Items"</p>
                        <p class="activity-list__secondary">"Items at capacity"</p>
                    </div>
                    <Badge variant="full">{stats.full_decorations}</Badge>
                </div>
                <div class="activity-list__item">
                    <div>
                        <p class="activity-list__primary">"Available Items"</p>
                        <p class="activity-list__secondary">"Ready for booking"</p>
                    </div>
                    <Badge variant="available">{stats.available_decorations}</Badge>
                </div>
            </div>
        </div>
    }
}
