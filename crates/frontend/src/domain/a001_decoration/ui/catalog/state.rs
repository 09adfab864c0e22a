use contracts::domain::a001_decoration::Decoration;
use contracts::shared::filter::ListFilter;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub decorations: Vec<Decoration>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}

pub fn create_filter() -> RwSignal<ListFilter> {
    RwSignal::new(ListFilter::default())
}
