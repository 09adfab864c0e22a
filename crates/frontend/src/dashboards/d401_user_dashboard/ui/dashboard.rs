use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::components::ui::{Badge, Button, LinkButton};
use crate::shared::data::mock_store;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_user_dashboard::DashboardSummary;
use contracts::domain::a001_decoration::Decoration;
use contracts::domain::a002_booking::Booking;
use contracts::system::users::UserProfile;
use leptos::prelude::*;
use thaw::{Tab, TabList};

const TAB_PROFILE: &str = "profile";
const TAB_WISHLIST: &str = "wishlist";
const TAB_BOOKINGS: &str = "bookings";

/// Customer dashboard: profile, saved decorations and own bookings
#[component]
pub fn UserDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let wishlist = mock_store::wishlist();
    let saved = mock_store::wishlist_decorations(&wishlist);
    let bookings = mock_store::customer_bookings();
    let summary = DashboardSummary::new(&wishlist, &bookings);

    let selected_tab = RwSignal::new(TAB_PROFILE.to_string());

    let wishlist_label = format!("Wishlist ({})", saved.len());
    let bookings_label = format!("Bookings ({})", bookings.len());

    let saved = StoredValue::new(saved);
    let bookings = StoredValue::new(bookings);

    view! {
        <PageFrame page_id="d401_user_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page-header__title-row">
                    {icon("user")}
                    <h1 class="page-header__title">"Dashboard"</h1>
                </div>
                <p class="page-header__subtitle">
                    "Manage your profile, wishlist, and bookings all in one place."
                </p>
            </div>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    <Tab value=TAB_PROFILE>"Profile"</Tab>
                    <Tab value=TAB_WISHLIST>{wishlist_label}</Tab>
                    <Tab value=TAB_BOOKINGS>{bookings_label}</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match selected_tab.get().as_str() {
                        TAB_WISHLIST => {
                            view! { <WishlistTab items=saved.get_value() /> }.into_any()
                        }
                        TAB_BOOKINGS => {
                            view! { <BookingsTab bookings=bookings.get_value() /> }.into_any()
                        }
                        _ => {
                            view! { <ProfileTab user=ctx.current_user.get() summary=summary /> }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn ProfileTab(user: UserProfile, summary: DashboardSummary) -> impl IntoView {
    let email = user.email.clone();
    let on_edit = move |_: leptos::ev::MouseEvent| {
        log::info!("Edit profile requested for {email}");
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Profile Information"</h2>
            </div>
            <div class="card__content">
                <dl class="profile-grid">
                    <div class="profile-grid__item">
                        <dt class="profile-grid__label">"Name"</dt>
                        <dd class="profile-grid__value">{user.name.clone()}</dd>
                    </div>
                    <div class="profile-grid__item">
                        <dt class="profile-grid__label">"Email"</dt>
                        <dd class="profile-grid__value">{user.email.clone()}</dd>
                    </div>
                    <div class="profile-grid__item">
                        <dt class="profile-grid__label">"Role"</dt>
                        <dd class="profile-grid__value">{user.role.code()}</dd>
                    </div>
                    <div class="profile-grid__item">
                        <dt class="profile-grid__label">"Joined"</dt>
                        <dd class="profile-grid__value">{format_date(user.joined_date)}</dd>
                    </div>
                </dl>
                <div class="card__actions">
                    <Button on_click=Callback::new(on_edit)>
                        {icon("edit")}
                        "Edit Profile"
                    </Button>
                </div>
            </div>
        </div>

        <div class="summary-grid">
            <div class="card summary-card">
                {icon("heart")}
                <p class="summary-card__value">{summary.wishlist_items}</p>
                <p class="summary-card__label">"Wishlist Items"</p>
            </div>
            <div class="card summary-card">
                {icon("calendar")}
                <p class="summary-card__value">{summary.total_bookings}</p>
                <p class="summary-card__label">"Total Bookings"</p>
            </div>
            <div class="card summary-card">
                <Badge variant="success" class="summary-card__check">"✓"</Badge>
                <p class="summary-card__value">{summary.confirmed_bookings}</p>
                <p class="summary-card__label">"Confirmed"</p>
            </div>
        </div>
    }
}

#[component]
fn WishlistTab(items: Vec<Decoration>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let placeholder = config.app.placeholder_image;

    if items.is_empty() {
        return view! {
            <div class="card empty-state">
                {icon("heart")}
                <h3 class="empty-state__title">"No items in wishlist"</h3>
                <p class="empty-state__text">
                    "Start browsing decorations to add items to your wishlist."
                </p>
                <LinkButton href="/">"Browse Decorations"</LinkButton>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="decorations-grid">
            {items
                .into_iter()
                .map(|item| {
                    let cover = item.cover_image(&placeholder).to_string();
                    view! {
                        <div class="card mini-card">
                            <div class="mini-card__image">
                                <img src=cover alt=item.title.clone() />
                            </div>
                            <div class="mini-card__body">
                                <Badge variant=item.status.badge_variant()>
                                    {item.status.display_name()}
                                </Badge>
                                <h3 class="mini-card__title">{item.title.clone()}</h3>
                                <p class="mini-card__category">{item.category.clone()}</p>
                                <LinkButton href=item.detail_path() class="button--block">
                                    {icon("eye")}
                                    "View Details"
                                </LinkButton>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn BookingsTab(bookings: Vec<Booking>) -> impl IntoView {
    if bookings.is_empty() {
        return view! {
            <div class="card empty-state">
                {icon("calendar")}
                <h3 class="empty-state__title">"No bookings yet"</h3>
                <p class="empty-state__text">
                    "Start browsing decorations to make your first booking."
                </p>
                <LinkButton href="/">"Browse Decorations"</LinkButton>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="booking-cards">
            {bookings
                .into_iter()
                .map(|booking| view! { <BookingCard booking=booking /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn BookingCard(booking: Booking) -> impl IntoView {
    view! {
        <div class="card booking-card">
            <div class="booking-card__image">
                <img src=booking.decoration_image.clone() alt=booking.decoration_title.clone() />
            </div>
            <div class="booking-card__body">
                <div class="booking-card__heading">
                    <div>
                        <h3 class="booking-card__title">{booking.decoration_title.clone()}</h3>
                        <p class="booking-card__id">{format!("Booking ID: {}", booking.id.as_str())}</p>
                    </div>
                    <Badge variant=booking.status.badge_variant()>
                        {booking.status.display_name()}
                    </Badge>
                </div>
                <div class="booking-card__details">
                    <div>
                        <p class="booking-card__label">"Event Date"</p>
                        <p class="booking-card__value">{format_date(booking.event_date)}</p>
                    </div>
                    <div>
                        <p class="booking-card__label">"Contact"</p>
                        <p class="booking-card__value">{booking.customer.phone.clone()}</p>
                    </div>
                    <div class="booking-card__wide">
                        <p class="booking-card__label">"Address"</p>
                        <p class="booking-card__value">{booking.customer.address.clone()}</p>
                    </div>
                </div>
                <div class="booking-card__actions">
                    <LinkButton href=booking.decoration_path() variant="outline" size="sm">
                        {icon("eye")}
                        "View Decoration"
                    </LinkButton>
                </div>
            </div>
        </div>
    }
}
