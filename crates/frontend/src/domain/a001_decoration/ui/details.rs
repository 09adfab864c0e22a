use crate::domain::a002_booking::ui::BookingRequestForm;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::{Badge, Button, LinkButton};
use crate::shared::config::AppConfig;
use crate::shared::data::mock_store;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_decoration::{Decoration, StatusTone};
use contracts::domain::a003_wishlist::toggle_wishlisted;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => "status-banner status-banner--success",
        StatusTone::Warning => "status-banner status-banner--warning",
        StatusTone::Destructive => "status-banner status-banner--destructive",
    }
}

/// `/decoration/:id`
#[component]
pub fn DecorationDetails() -> impl IntoView {
    let params = use_params_map();
    let decoration = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        let found = mock_store::decoration_from_param(&id);
        if found.is_none() {
            log::warn!("Decoration {id:?} not found");
        }
        found
    });

    view! {
        <PageFrame page_id="a001_decoration--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <LinkButton href="/" variant="ghost">
                    {icon("arrow-left")}
                    "Back to Browse"
                </LinkButton>
            </div>
            {move || match decoration.get() {
                Some(d) => view! { <DecorationDetailsView decoration=d /> }.into_any(),
                None => view! {
                    <div class="page__content empty-state">
                        {icon("alert-circle")}
                        <h2 class="empty-state__title">"Decoration not found"</h2>
                        <p class="empty-state__text">
                            "The decoration you are looking for does not exist or was removed."
                        </p>
                        <LinkButton href="/">"Browse Decorations"</LinkButton>
                    </div>
                }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn DecorationDetailsView(decoration: Decoration) -> impl IntoView {
    let toasts = use_toasts();
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let cover = decoration.cover_image(&config.app.placeholder_image).to_string();
    let is_wishlisted = RwSignal::new(false);
    let title = decoration.title.clone();

    let on_toggle = move |_| {
        let (next, notification) = toggle_wishlisted(is_wishlisted.get_untracked(), &title);
        is_wishlisted.set(next);
        toasts.push(notification);
    };

    let status = decoration.status;
    let message = status.availability_message();
    let subtitle = format!(
        "{} • Added {}",
        decoration.category,
        format_date(decoration.created_at)
    );
    let gallery = decoration
        .gallery()
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let alt = format!("{} {}", decoration.title, i + 2);
            view! {
                <div class="gallery__thumb">
                    <img src=src.clone() alt=alt />
                </div>
            }
        })
        .collect_view();

    let booking_block = if decoration.is_bookable() {
        view! { <BookingRequestForm decoration=decoration.clone() /> }.into_any()
    } else {
        view! {
            <div class="booking-card__disabled">
                <p>"This decoration is fully booked and not available for new reservations."</p>
                <Button variant="outline" disabled=true>"Booking Disabled"</Button>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page__content detail">
            <div class="detail__images">
                <div class="detail__cover">
                    <img src=cover alt=decoration.title.clone() />
                </div>
                <div class="gallery">{gallery}</div>
            </div>

            <div class="detail__info">
                <div class="detail__heading">
                    <div>
                        <Badge variant=status.badge_variant()>{status.display_name()}</Badge>
                        <h1 class="detail__title">{decoration.title.clone()}</h1>
                        <p class="detail__subtitle">{subtitle}</p>
                    </div>
                    <button
                        class="button button--ghost button--icon detail__wishlist"
                        class:detail__wishlist--active=move || is_wishlisted.get()
                        aria-label="Toggle wishlist"
                        on:click=on_toggle
                    >
                        {icon("heart")}
                    </button>
                </div>

                <div class=tone_class(message.tone)>{message.text}</div>

                <section class="detail__description">
                    <h2>"Description"</h2>
                    <p>{decoration.description.clone()}</p>
                </section>

                <section class="booking-card">
                    <h2 class="booking-card__title">"Request Booking"</h2>
                    {booking_block}
                </section>
            </div>
        </div>
    }
}
