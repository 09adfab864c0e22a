pub mod state;

use self::state::{create_filter, create_state};
use crate::domain::a001_decoration::ui::card::DecorationCard;
use crate::shared::components::ui::LinkButton;
use crate::shared::components::FilterBar;
use crate::shared::config::AppConfig;
use crate::shared::data::mock_store;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_decoration::{CATEGORY_OPTIONS, STATUS_OPTIONS};
use leptos::prelude::*;

/// Storefront home: hero plus the filterable decoration grid
#[component]
pub fn DecorationCatalog() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let state = create_state();
    let filter = create_filter();

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            let decorations = mock_store::catalog();
            log::debug!("Catalog loaded: {} decorations", decorations.len());
            state.update(|s| {
                s.decorations = decorations;
                s.is_loaded = true;
            });
        }
    });

    let visible = Memo::new(move |_| filter.with(|f| state.with(|s| f.apply(&s.decorations))));
    let hero_style = format!("background-image: url({})", config.app.hero_image);

    view! {
        <PageFrame page_id="a001_decoration--list" category=PAGE_CAT_LIST class="catalog">
            <section class="hero">
                <div class="hero__background" style=hero_style>
                    <div class="hero__overlay"></div>
                </div>
                <div class="hero__content">
                    <h1 class="hero__title">"Transform Your Special Moments"</h1>
                    <p class="hero__subtitle">
                        "Discover stunning decorations for weddings, parties, and corporate events"
                    </p>
                    <div class="hero__buttons">
                        <a href="#browse" class="button button--hero button--lg">"Browse Decorations"</a>
                        <LinkButton href="/wishlist" variant="premium" size="lg">
                            "View Wishlist"
                        </LinkButton>
                    </div>
                </div>
            </section>

            <section id="browse" class="page__content browse">
                <div class="browse__header">
                    <h2 class="browse__title">"Browse Our Decorations"</h2>
                    <p class="browse__description">
                        "Find the perfect decorations for your event. Filter by category and availability to discover exactly what you need."
                    </p>
                </div>

                <FilterBar
                    filter=filter
                    category_options=CATEGORY_OPTIONS
                    status_options=STATUS_OPTIONS
                    search_placeholder="Search decorations..."
                />

                <Show
                    when=move || visible.with(|items| !items.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <p class="empty-state__text">"No decorations found matching your criteria."</p>
                        </div>
                    }
                >
                    <div class="decorations-grid">
                        <For
                            each=move || visible.get()
                            key=|decoration| decoration.id.clone()
                            children=|decoration| view! { <DecorationCard decoration=decoration /> }
                        />
                    </div>
                </Show>
            </section>
        </PageFrame>
    }
}
