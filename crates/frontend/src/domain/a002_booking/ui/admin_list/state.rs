use contracts::domain::a002_booking::{Booking, BookingError, BookingId, BookingStatus};
use contracts::shared::filter::ListFilter;
use contracts::shared::notification::Notification;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AdminBookingListState {
    pub bookings: Vec<Booking>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<AdminBookingListState> {
    RwSignal::new(AdminBookingListState::default())
}

pub fn create_filter() -> RwSignal<ListFilter> {
    RwSignal::new(ListFilter::default())
}

/// Approves or rejects booking `id` in place.
///
/// Returns `None` when no booking has that id.
pub fn update_booking_status(
    bookings: &mut [Booking],
    id: &BookingId,
    to: BookingStatus,
) -> Option<Result<Notification, BookingError>> {
    let booking = bookings.iter_mut().find(|b| &b.id == id)?;
    Some(booking.transition(to).map(|()| {
        Notification::info(
            "Booking Updated",
            format!(
                "Booking for {} is now {}",
                booking.customer.name,
                to.display_name().to_lowercase()
            ),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock_store;

    #[test]
    fn test_approve_pending_booking() {
        let mut bookings = mock_store::admin_bookings();
        let id = BookingId::new("1");

        let notification = update_booking_status(&mut bookings, &id, BookingStatus::Confirmed)
            .unwrap()
            .unwrap();

        assert_eq!(bookings[0].status, BookingStatus::Confirmed);
        assert_eq!(notification.description, "Booking for Sarah Johnson is now confirmed");
    }

    #[test]
    fn test_settled_booking_is_not_changed() {
        let mut bookings = mock_store::admin_bookings();
        let id = BookingId::new("2");

        let result = update_booking_status(&mut bookings, &id, BookingStatus::Cancelled).unwrap();

        assert!(result.is_err());
        assert_eq!(bookings[1].status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_unknown_id() {
        let mut bookings = mock_store::admin_bookings();
        let id = BookingId::new("missing");
        assert!(update_booking_status(&mut bookings, &id, BookingStatus::Confirmed).is_none());
    }
}
