pub mod state;

use self::state::{create_filter, create_state, ViewMode};
use crate::shared::components::ui::{Badge, Button, LinkButton};
use crate::shared::components::{FilterBar, PageHeader};
use crate::shared::config::AppConfig;
use crate::shared::data::mock_store;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_decoration::{Decoration, CATEGORY_OPTIONS, STATUS_OPTIONS};
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

fn log_edit(decoration: &Decoration) {
    log::info!("Edit requested for decoration {} ({})", decoration.id, decoration.title);
}

fn log_delete(decoration: &Decoration) {
    log::info!("Delete requested for decoration {} ({})", decoration.id, decoration.title);
}

/// `/admin/decorations`
#[component]
pub fn AdminDecorationList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let placeholder = StoredValue::new(config.app.placeholder_image);
    let state = create_state();
    let filter = create_filter();

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            let decorations = mock_store::catalog();
            state.update(|s| {
                s.decorations = decorations;
                s.is_loaded = true;
            });
        }
    });

    let visible = Memo::new(move |_| filter.with(|f| state.with(|s| f.apply(&s.decorations))));
    let view_mode = Memo::new(move |_| state.with(|s| s.view_mode));
    let set_mode = move |mode: ViewMode| state.update(|s| s.view_mode = mode);
    let mode_variant = move |mode: ViewMode| {
        Signal::derive(move || {
            let variant = if view_mode.get() == mode { "default" } else { "outline" };
            Some(variant.to_string())
        })
    };

    view! {
        <PageFrame page_id="a001_decoration_admin--list" category=PAGE_CAT_LIST>
            <PageHeader title="Manage Decorations" subtitle="Add, edit, and manage decoration items">
                <LinkButton href="/admin/decorations/new">
                    {icon("plus")}
                    "Add Decoration"
                </LinkButton>
            </PageHeader>

            <div class="page__content">
                <div class="toolbar">
                    <FilterBar
                        filter=filter
                        category_options=CATEGORY_OPTIONS
                        status_options=STATUS_OPTIONS
                        search_placeholder="Search decorations..."
                    />
                    <div class="toolbar__group">
                        <Button
                            size="sm"
                            variant=mode_variant(ViewMode::Table)
                            on_click=Callback::new(move |_| set_mode(ViewMode::Table))
                        >
                            {icon("table")}
                            "Table"
                        </Button>
                        <Button
                            size="sm"
                            variant=mode_variant(ViewMode::Grid)
                            on_click=Callback::new(move |_| set_mode(ViewMode::Grid))
                        >
                            {icon("grid")}
                            "Grid"
                        </Button>
                    </div>
                </div>

                <Show
                    when=move || visible.with(|items| !items.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <p class="empty-state__text">"No decorations found matching your criteria."</p>
                        </div>
                    }
                >
                    {move || match view_mode.get() {
                        ViewMode::Table => {
                            view! { <DecorationTable items=visible placeholder=placeholder.get_value() /> }
                                .into_any()
                        }
                        ViewMode::Grid => {
                            view! { <DecorationGrid items=visible placeholder=placeholder.get_value() /> }
                                .into_any()
                        }
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}

/// Owned cell values for one table row
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationRowData {
    pub title: String,
    pub description: String,
    pub category: String,
    pub cover: String,
    pub badge_variant: &'static str,
    pub status_label: &'static str,
    pub bookings: u32,
    pub wishlists: u32,
    pub created: String,
    pub detail_path: String,
}

impl DecorationRowData {
    pub fn new(decoration: &Decoration, placeholder: &str) -> Self {
        Self {
            title: decoration.title.clone(),
            description: decoration.description.clone(),
            category: decoration.category.clone(),
            cover: decoration.cover_image(placeholder).to_string(),
            badge_variant: decoration.status.badge_variant(),
            status_label: decoration.status.display_name(),
            bookings: decoration.bookings,
            wishlists: decoration.wishlists,
            created: format_date(decoration.created_at),
            detail_path: decoration.detail_path(),
        }
    }
}

#[component]
fn DecorationTable(items: Memo<Vec<Decoration>>, placeholder: String) -> impl IntoView {
    view! {
        <div class="table-container">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=260.0>"Decoration"</TableHeaderCell>
                        <TableHeaderCell>"Category"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Bookings"</TableHeaderCell>
                        <TableHeaderCell>"Wishlists"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get()
                        key=|d| d.id.clone()
                        children=move |d| {
                            view! { <DecorationTableRow decoration=d placeholder=placeholder.clone() /> }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn DecorationTableRow(decoration: Decoration, placeholder: String) -> impl IntoView {
    let DecorationRowData {
        title,
        description,
        category,
        cover,
        badge_variant,
        status_label,
        bookings,
        wishlists,
        created,
        detail_path,
    } = DecorationRowData::new(&decoration, &placeholder);
    let alt = title.clone();

    let for_edit = decoration.clone();
    let on_edit = Callback::new(move |_: leptos::ev::MouseEvent| log_edit(&for_edit));
    let on_delete = Callback::new(move |_: leptos::ev::MouseEvent| log_delete(&decoration));

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <div class="table__decoration">
                        <img class="table__thumb" src=cover alt=alt />
                        <div>
                            <div class="table__primary">{title}</div>
                            <div class="table__secondary">{description}</div>
                        </div>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="text--capitalize">{category}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <Badge variant=badge_variant>{status_label}</Badge>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{bookings}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{wishlists}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{created}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <div class="table__actions">
                        <LinkButton href=detail_path variant="ghost" size="sm">
                            {icon("eye")}
                        </LinkButton>
                        <Button variant="ghost" size="sm" title="Edit" on_click=on_edit>
                            {icon("edit")}
                        </Button>
                        <Button variant="ghost" size="sm" title="Delete" on_click=on_delete>
                            {icon("trash")}
                        </Button>
                    </div>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn DecorationGrid(items: Memo<Vec<Decoration>>, placeholder: String) -> impl IntoView {
    view! {
        <div class="decorations-grid">
            <For
                each=move || items.get()
                key=|d| d.id.clone()
                children=move |d| {
                    view! { <DecorationGridCard decoration=d placeholder=placeholder.clone() /> }
                }
            />
        </div>
    }
}

#[component]
fn DecorationGridCard(decoration: Decoration, placeholder: String) -> impl IntoView {
    let row = DecorationRowData::new(&decoration, &placeholder);

    let for_edit = decoration.clone();
    let on_edit = Callback::new(move |_: leptos::ev::MouseEvent| log_edit(&for_edit));
    let on_delete = Callback::new(move |_: leptos::ev::MouseEvent| log_delete(&decoration));

    view! {
        <article class="card">
            <div class="card__image-container">
                <img class="card__image" src=row.cover alt=row.title.clone() />
                <div class="card__badge">
                    <Badge variant=row.badge_variant>{row.status_label}</Badge>
                </div>
            </div>
            <div class="card__content">
                <div class="card__category">{row.category}</div>
                <h3 class="card__title">{row.title}</h3>
                <p class="card__description">{row.description}</p>
                <div class="card__counters">
                    <span>{format!("Bookings: {}", row.bookings)}</span>
                    <span>{format!("Wishlists: {}", row.wishlists)}</span>
                </div>
            </div>
            <div class="card__footer">
                <LinkButton href=row.detail_path variant="outline" size="sm" class="button--grow">
                    {icon("eye")}
                    "View"
                </LinkButton>
                <Button variant="outline" size="sm" title="Edit" on_click=on_edit>
                    {icon("edit")}
                </Button>
                <Button variant="outline" size="sm" title="Delete" on_click=on_delete>
                    {icon("trash")}
                </Button>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_decoration::{DecorationId, DecorationStatus};

    fn decoration(images: Vec<String>) -> Decoration {
        Decoration {
            id: DecorationId::new("3"),
            title: "Birthday Party Decor".into(),
            description: "Colorful".into(),
            category: "birthday".into(),
            images,
            status: DecorationStatus::Full,
            added_by: "admin".into(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            bookings: 15,
            wishlists: 20,
        }
    }

    #[test]
    fn test_row_data_owns_every_cell() {
        let row = DecorationRowData::new(&decoration(vec!["/a.jpg".into()]), "/placeholder.svg");
        assert_eq!(row.title, "Birthday Party Decor");
        assert_eq!(row.cover, "/a.jpg");
        assert_eq!(row.badge_variant, "full");
        assert_eq!(row.status_label, "Fully Booked");
        assert_eq!(row.created, "1/5/2024");
        assert_eq!(row.detail_path, "/decoration/3");
        assert_eq!((row.bookings, row.wishlists), (15, 20));
    }

    #[test]
    fn test_row_data_uses_configured_placeholder() {
        let row = DecorationRowData::new(&decoration(vec![]), "/img/none.svg");
        assert_eq!(row.cover, "/img/none.svg");
    }
}
