use serde::{Deserialize, Serialize};

use crate::dashboards::d400_admin_overview::BookingCounts;
use crate::domain::a002_booking::Booking;
use crate::domain::a003_wishlist::Wishlist;

/// Counters shown on the profile tab of the customer dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub wishlist_items: usize,
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
}

impl DashboardSummary {
    pub fn new(wishlist: &Wishlist, bookings: &[Booking]) -> Self {
        let counts = BookingCounts::from_bookings(bookings);
        Self {
            wishlist_items: wishlist.len(),
            total_bookings: counts.total,
            confirmed_bookings: counts.confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_decoration::DecorationId;

    #[test]
    fn test_summary_without_bookings() {
        let wishlist = Wishlist::from_ids(["1", "4"].into_iter().map(DecorationId::new));
        let summary = DashboardSummary::new(&wishlist, &[]);
        assert_eq!(summary.wishlist_items, 2);
        assert_eq!(summary.total_bookings, 0);
        assert_eq!(summary.confirmed_bookings, 0);
    }
}
