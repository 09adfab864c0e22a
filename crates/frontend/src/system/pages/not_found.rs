use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    log::warn!(
        "404: no route for {}",
        location.pathname.get_untracked()
    );

    view! {
        <PageFrame page_id="system--not-found" category=PAGE_CAT_SYSTEM class="not-found">
            <div class="not-found__content">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__message">"Oops! Page not found"</p>
                <a href="/" class="not-found__link">"Return to Home"</a>
            </div>
        </PageFrame>
    }
}
