use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_booking::{Booking, BookingStatus};

/// Site-wide counters shown on the admin overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_decorations: u32,
    pub total_bookings: u32,
    pub total_users: u32,
    pub total_wishlists: u32,
    pub available_decorations: u32,
    pub reserved_decorations: u32,
    pub full_decorations: u32,
    pub pending_bookings: u32,
    pub confirmed_bookings: u32,
    pub cancelled_bookings: u32,
}

impl AdminStats {
    /// "18 available, 4 reserved"
    pub fn decorations_subtitle(&self) -> String {
        format!(
            "{} available, {} reserved",
            self.available_decorations, self.reserved_decorations
        )
    }

    pub fn bookings_subtitle(&self) -> String {
        format!("{} pending approval", self.pending_bookings)
    }
}

/// One line of the "Recent Bookings" panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentBooking {
    pub id: String,
    pub user: String,
    pub decoration: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
}

/// Bookings grouped by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub total: usize,
}

impl BookingCounts {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings
            .iter()
            .fold(Self::default(), |mut counts, booking| {
                match booking.status {
                    BookingStatus::Pending => counts.pending += 1,
                    BookingStatus::Confirmed => counts.confirmed += 1,
                    BookingStatus::Cancelled => counts.cancelled += 1,
                }
                counts.total += 1;
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_decoration::DecorationId;
    use crate::domain::a002_booking::{BookingId, ContactDetails};

    fn booking(status: BookingStatus) -> Booking {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        Booking {
            id: BookingId::new("b"),
            decoration_id: DecorationId::new("1"),
            decoration_title: "Arch".into(),
            decoration_category: "wedding".into(),
            decoration_image: String::new(),
            customer: ContactDetails {
                name: "A".into(),
                email: "a@b.c".into(),
                phone: "1".into(),
                address: "x".into(),
            },
            event_date: date,
            status,
            created_at: date.and_hms_opt(9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_counts_by_status() {
        let bookings = vec![
            booking(BookingStatus::Pending),
            booking(BookingStatus::Confirmed),
            booking(BookingStatus::Confirmed),
            booking(BookingStatus::Cancelled),
        ];
        let counts = BookingCounts::from_bookings(&bookings);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.confirmed, 2);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(counts.total, 4);
    }

    #[test]
    fn test_subtitles() {
        let stats = AdminStats {
            available_decorations: 18,
            reserved_decorations: 4,
            pending_bookings: 12,
            ..AdminStats::default()
        };
        assert_eq!(stats.decorations_subtitle(), "18 available, 4 reserved");
        assert_eq!(stats.bookings_subtitle(), "12 pending approval");
    }
}
