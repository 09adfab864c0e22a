use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::{Badge, LinkButton};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_decoration::Decoration;
use contracts::domain::a003_wishlist::toggle_wishlisted;
use leptos::prelude::*;

/// Catalog tile with a local wishlist toggle
#[component]
pub fn DecorationCard(
    decoration: Decoration,
    /// Start with the heart filled (wishlist page)
    #[prop(optional)]
    wishlisted: bool,
) -> impl IntoView {
    let toasts = use_toasts();
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let cover = decoration.cover_image(&config.app.placeholder_image).to_string();
    let is_wishlisted = RwSignal::new(wishlisted);
    let title = decoration.title.clone();

    let on_toggle = move |_| {
        let (next, notification) = toggle_wishlisted(is_wishlisted.get_untracked(), &title);
        is_wishlisted.set(next);
        toasts.push(notification);
    };

    let status = decoration.status;

    view! {
        <article class="card">
            <div class="card__image-container">
                <img
                    class="card__image"
                    src=cover
                    alt=decoration.title.clone()
                />
                <div class="card__badge">
                    <Badge variant=status.badge_variant()>{status.display_name()}</Badge>
                </div>
                <button
                    class="button button--ghost button--icon card__wishlist"
                    class:card__wishlist--active=move || is_wishlisted.get()
                    aria-label="Toggle wishlist"
                    aria-pressed=move || is_wishlisted.get().to_string()
                    on:click=on_toggle
                >
                    {icon("heart")}
                </button>
            </div>

            <div class="card__content">
                <div class="card__category">{decoration.category.clone()}</div>
                <h3 class="card__title">{decoration.title.clone()}</h3>
                <p class="card__description">{decoration.description.clone()}</p>
            </div>

            <div class="card__footer">
                <LinkButton href=decoration.detail_path() variant="outline" class="button--block">
                    {icon("eye")}
                    "View Details"
                </LinkButton>
            </div>
        </article>
    }
}
