pub mod state;

use self::state::{create_filter, create_state, update_booking_status};
use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::{Badge, Button, LinkButton};
use crate::shared::components::{FilterBar, PageHeader, StatCard, StatTone};
use crate::shared::data::mock_store;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d400_admin_overview::BookingCounts;
use contracts::domain::a002_booking::{
    Booking, BookingId, BookingStatus, BOOKING_CATEGORY_OPTIONS, BOOKING_STATUS_OPTIONS,
};
use contracts::shared::notification::Notification;
use leptos::prelude::*;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

impl CsvExportable for Booking {
    fn headers() -> Vec<&'static str> {
        vec![
            "Booking ID",
            "Customer",
            "Email",
            "Phone",
            "Decoration",
            "Category",
            "Event Date",
            "Address",
            "Status",
            "Booked At",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.customer.name.clone(),
            self.customer.email.clone(),
            self.customer.phone.clone(),
            self.decoration_title.clone(),
            self.decoration_category.clone(),
            format_date(self.event_date),
            self.customer.address.clone(),
            self.status.display_name().to_string(),
            format_datetime(self.created_at),
        ]
    }
}

fn status_icon(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "clock",
        BookingStatus::Confirmed => "check-circle",
        BookingStatus::Cancelled => "x-circle",
    }
}

/// `/admin/bookings`
#[component]
pub fn AdminBookingList() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let filter = create_filter();

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            let bookings = mock_store::admin_bookings();
            state.update(|s| {
                s.bookings = bookings;
                s.is_loaded = true;
            });
        }
    });

    let visible = Memo::new(move |_| filter.with(|f| state.with(|s| f.apply(&s.bookings))));
    let counts = Memo::new(move |_| state.with(|s| BookingCounts::from_bookings(&s.bookings)));

    let change_status = Callback::new(move |(id, to): (BookingId, BookingStatus)| {
        log::info!("Updating booking {id} to {}", to.code());
        let mut outcome = None;
        state.update(|s| outcome = update_booking_status(&mut s.bookings, &id, to));
        match outcome {
            Some(Ok(notification)) => toasts.push(notification),
            Some(Err(err)) => toasts.push(err.notification()),
            None => log::warn!("Booking {id} not found"),
        }
    });

    let on_export = Callback::new(move |_: leptos::ev::MouseEvent| {
        let rows = visible.get_untracked();
        log::info!("Exporting {} bookings", rows.len());
        if let Err(e) = export_to_csv(&rows, "bookings.csv") {
            log::error!("Export failed: {e}");
            toasts.push(Notification::destructive("Export Failed", e));
        }
    });

    view! {
        <PageFrame page_id="a002_booking--list" category=PAGE_CAT_LIST>
            <PageHeader title="Bookings Management" subtitle="View and manage all decoration bookings">
                <Button variant="outline" on_click=on_export>
                    {icon("download")}
                    "Export Data"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stats-grid">
                    <StatCard
                        label="Pending"
                        icon_name="clock"
                        tone=StatTone::Warning
                        value=Signal::derive(move || counts.get().pending)
                    />
                    <StatCard
                        label="Confirmed"
                        icon_name="check-circle"
                        tone=StatTone::Success
                        value=Signal::derive(move || counts.get().confirmed)
                    />
                    <StatCard
                        label="Cancelled"
                        icon_name="x-circle"
                        tone=StatTone::Destructive
                        value=Signal::derive(move || counts.get().cancelled)
                    />
                    <StatCard
                        label="Total"
                        icon_name="eye"
                        tone=StatTone::Primary
                        value=Signal::derive(move || counts.get().total)
                    />
                </div>

                <FilterBar
                    filter=filter
                    category_options=BOOKING_CATEGORY_OPTIONS
                    status_options=BOOKING_STATUS_OPTIONS
                    search_placeholder="Search by user, email, or decoration..."
                />

                <Show
                    when=move || visible.with(|items| !items.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <p class="empty-state__text">"No bookings found matching your criteria."</p>
                        </div>
                    }
                >
                    <div class="table-container">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=180.0>"Customer"</TableHeaderCell>
                                    <TableHeaderCell min_width=160.0>"Decoration"</TableHeaderCell>
                                    <TableHeaderCell min_width=160.0>"Event Date"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Booking Date"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || visible.get()
                                    key=|b| (b.id.clone(), b.status)
                                    children=move |b| view! {
                                        <BookingRow booking=b on_status=change_status />
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

/// Owned cell values for one bookings table row
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRowData {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub decoration_title: String,
    pub decoration_category: String,
    pub event_date: String,
    pub address: String,
    pub status: BookingStatus,
    pub booked_at: String,
    pub decoration_path: String,
    pub is_pending: bool,
}

impl From<&Booking> for BookingRowData {
    fn from(booking: &Booking) -> Self {
        Self {
            customer_name: booking.customer.name.clone(),
            customer_email: booking.customer.email.clone(),
            customer_phone: booking.customer.phone.clone(),
            decoration_title: booking.decoration_title.clone(),
            decoration_category: booking.decoration_category.clone(),
            event_date: format_date(booking.event_date),
            address: booking.customer.address.clone(),
            status: booking.status,
            booked_at: format_datetime(booking.created_at),
            decoration_path: booking.decoration_path(),
            is_pending: booking.is_pending(),
        }
    }
}

#[component]
fn BookingRow(
    booking: Booking,
    on_status: Callback<(BookingId, BookingStatus)>,
) -> impl IntoView {
    let BookingRowData {
        customer_name,
        customer_email,
        customer_phone,
        decoration_title,
        decoration_category,
        event_date,
        address,
        status,
        booked_at,
        decoration_path,
        is_pending,
    } = BookingRowData::from(&booking);

    let approve_id = booking.id.clone();
    let reject_id = booking.id;
    let on_approve = Callback::new(move |_: leptos::ev::MouseEvent| {
        on_status.run((approve_id.clone(), BookingStatus::Confirmed))
    });
    let on_reject = Callback::new(move |_: leptos::ev::MouseEvent| {
        on_status.run((reject_id.clone(), BookingStatus::Cancelled))
    });

    let actions = if is_pending {
        view! {
            <Button variant="outline" size="sm" on_click=on_approve>
                {icon("check-circle")}
                "Approve"
            </Button>
            <Button variant="outline" size="sm" on_click=on_reject>
                {icon("x-circle")}
                "Reject"
            </Button>
        }
        .into_any()
    } else {
        ().into_any()
    };

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <div>
                        <div class="table__primary">{customer_name}</div>
                        <div class="table__secondary">{customer_email}</div>
                        <div class="table__secondary">{customer_phone}</div>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <div>
                        <div class="table__primary">{decoration_title}</div>
                        <div class="table__secondary text--capitalize">{decoration_category}</div>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <div>
                        <div class="table__primary">{event_date}</div>
                        <div class="table__secondary">{address}</div>
                    </div>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <Badge variant=status.admin_badge_variant()>
                        {icon(status_icon(status))}
                        {status.display_name()}
                    </Badge>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{booked_at}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <div class="table__actions">
                        {actions}
                        <LinkButton href=decoration_path variant="ghost" size="sm">
                            {icon("eye")}
                        </LinkButton>
                    </div>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_data_formats_cells() {
        let bookings = mock_store::admin_bookings();
        let row = BookingRowData::from(&bookings[0]);

        assert_eq!(row.customer_name, "Sarah Johnson");
        assert_eq!(row.decoration_title, "Elegant Wedding Arch");
        assert_eq!(row.event_date, "2/15/2024");
        assert_eq!(row.booked_at, "Jan 10, 2024, 10:30 AM");
        assert_eq!(row.decoration_path, "/decoration/1");
        assert!(row.is_pending);
    }

    #[test]
    fn test_only_pending_rows_offer_actions() {
        let pending: Vec<bool> = mock_store::admin_bookings()
            .iter()
            .map(|b| BookingRowData::from(b).is_pending)
            .collect();
        assert_eq!(pending, vec![true, false, false]);
    }

    #[test]
    fn test_csv_row_matches_headers() {
        let booking = &mock_store::admin_bookings()[1];
        let row = booking.to_csv_row();
        assert_eq!(row.len(), Booking::headers().len());
        assert_eq!(row[1], "Mike Chen");
        assert_eq!(row[8], "Confirmed");
    }
}
