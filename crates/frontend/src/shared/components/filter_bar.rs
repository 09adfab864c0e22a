use crate::shared::components::ui::{Button, Select};
use crate::shared::icons::icon;
use contracts::shared::filter::ListFilter;
use leptos::prelude::*;

/// Converts `(value, label)` constants into owned select options
pub fn to_options(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

/// FilterBar component: search box plus category and status selectors.
///
/// Writes straight into `filter`; lists derive their visible rows from it.
#[component]
pub fn FilterBar(
    filter: RwSignal<ListFilter>,
    category_options: &'static [(&'static str, &'static str)],
    status_options: &'static [(&'static str, &'static str)],
    #[prop(optional, into)] search_placeholder: MaybeProp<String>,
) -> impl IntoView {
    let search = Signal::derive(move || filter.with(|f| f.search.clone()));
    let category = Signal::derive(move || filter.with(|f| f.category.clone()));
    let status = Signal::derive(move || filter.with(|f| f.status.clone()));
    let active_count = move || filter.with(|f| f.active_count());

    let placeholder =
        move || search_placeholder.get().unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="filter-bar">
            <div class="filter-bar__search">
                {icon("search")}
                <input
                    type="search"
                    class="form__input filter-bar__search-input"
                    placeholder=placeholder
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        filter.update(|f| f.search = term);
                    }
                />
            </div>
            <Select
                class="filter-bar__select"
                value=category
                options=to_options(category_options)
                on_change=Callback::new(move |v: String| filter.update(|f| f.category = v))
            />
            <Select
                class="filter-bar__select"
                value=status
                options=to_options(status_options)
                on_change=Callback::new(move |v: String| filter.update(|f| f.status = v))
            />
            <Show when=move || { active_count() > 0 }>
                <Button
                    variant="ghost"
                    size="sm"
                    on_click=Callback::new(move |_| filter.update(|f| f.reset()))
                >
                    {icon("x")}
                    "Clear"
                    <span class="badge badge--secondary">{active_count}</span>
                </Button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_decoration::CATEGORY_OPTIONS;

    #[test]
    fn test_to_options_keeps_order() {
        let options = to_options(CATEGORY_OPTIONS);
        assert_eq!(options.len(), CATEGORY_OPTIONS.len());
        assert_eq!(options[0], ("all".to_string(), "All Categories".to_string()));
    }
}
