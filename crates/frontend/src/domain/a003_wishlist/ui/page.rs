use crate::domain::a001_decoration::ui::DecorationCard;
use crate::shared::components::ui::LinkButton;
use crate::shared::data::mock_store;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;

/// `/wishlist`
#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = mock_store::wishlist();
    let items = mock_store::wishlist_decorations(&wishlist);
    let summary = wishlist.summary_label();

    let content = if items.is_empty() {
        view! {
            <div class="empty-state empty-state--large">
                {icon("heart")}
                <h2 class="empty-state__title">"Your wishlist is empty"</h2>
                <p class="empty-state__text">
                    "Browse our beautiful decorations and add your favorites to your wishlist. They'll appear here for easy access when you're ready to book."
                </p>
                <LinkButton href="/" size="lg">
                    {icon("shopping-bag")}
                    "Browse Decorations"
                </LinkButton>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="wishlist__toolbar">
                <p class="wishlist__summary">{summary}</p>
                <LinkButton href="/">
                    {icon("shopping-bag")}
                    "Continue Browsing"
                </LinkButton>
            </div>
            <div class="decorations-grid">
                {items
                    .into_iter()
                    .map(|decoration| view! { <DecorationCard decoration=decoration wishlisted=true /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a003_wishlist--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page-header__title-row">
                    {icon("heart")}
                    <h1 class="page-header__title">"My Wishlist"</h1>
                </div>
                <p class="page-header__subtitle">
                    "Keep track of your favorite decorations and book them when you're ready."
                </p>
            </div>
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}
