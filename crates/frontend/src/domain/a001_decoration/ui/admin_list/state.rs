use contracts::domain::a001_decoration::Decoration;
use contracts::shared::filter::ListFilter;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

#[derive(Clone, Debug, Default)]
pub struct AdminDecorationListState {
    pub decorations: Vec<Decoration>,
    pub view_mode: ViewMode,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<AdminDecorationListState> {
    RwSignal::new(AdminDecorationListState::default())
}

pub fn create_filter() -> RwSignal<ListFilter> {
    RwSignal::new(ListFilter::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_view_by_default() {
        assert_eq!(AdminDecorationListState::default().view_mode, ViewMode::Table);
    }
}
