//! In-memory mock data standing in for the future booking backend.
//!
//! Every accessor returns owned copies, so pages can mutate their local
//! state freely without affecting other pages.

use chrono::{NaiveDate, NaiveDateTime};
use contracts::dashboards::d400_admin_overview::{AdminStats, RecentBooking};
use contracts::domain::a001_decoration::{Decoration, DecorationId, DecorationStatus};
use contracts::domain::a002_booking::{Booking, BookingId, BookingStatus, ContactDetails};
use contracts::domain::a003_wishlist::Wishlist;
use contracts::domain::common::AggregateId;
use contracts::system::users::{UserProfile, UserRole};
use once_cell::sync::Lazy;

/// Stock photo shared by every mock decoration
const DECORATION_IMAGE: &str = "/assets/decoration-sample.jpg";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

struct DecorationSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    status: DecorationStatus,
    created_at: (i32, u32, u32),
    bookings: u32,
    wishlists: u32,
}

const DECORATION_SEEDS: &[DecorationSeed] = &[
    DecorationSeed {
        id: "1",
        title: "Elegant Wedding Arch",
        description: "Beautiful floral arch perfect for wedding ceremonies with burgundy and gold accents",
        category: "wedding",
        status: DecorationStatus::Available,
        created_at: (2024, 1, 10),
        bookings: 5,
        wishlists: 12,
    },
    DecorationSeed {
        id: "2",
        title: "Corporate Event Setup",
        description: "Professional table arrangements with sophisticated centerpieces for corporate functions",
        category: "corporate",
        status: DecorationStatus::Reserved,
        created_at: (2024, 1, 8),
        bookings: 8,
        wishlists: 6,
    },
    DecorationSeed {
        id: "3",
        title: "Birthday Party Decor",
        description: "Colorful and festive decorations perfect for birthday celebrations and parties",
        category: "birthday",
        status: DecorationStatus::Full,
        created_at: (2024, 1, 5),
        bookings: 15,
        wishlists: 20,
    },
    DecorationSeed {
        id: "4",
        title: "Garden Party Setup",
        description: "Rustic outdoor decorations with natural elements and warm lighting",
        category: "outdoor",
        status: DecorationStatus::Available,
        created_at: (2024, 1, 12),
        bookings: 3,
        wishlists: 8,
    },
    DecorationSeed {
        id: "5",
        title: "Anniversary Celebration",
        description: "Romantic decoration setup with candles, flowers, and elegant drapery",
        category: "anniversary",
        status: DecorationStatus::Reserved,
        created_at: (2024, 1, 14),
        bookings: 4,
        wishlists: 9,
    },
    DecorationSeed {
        id: "6",
        title: "Holiday Gala Decor",
        description: "Luxurious holiday-themed decorations with metallic accents and festive elements",
        category: "holiday",
        status: DecorationStatus::Available,
        created_at: (2024, 1, 18),
        bookings: 2,
        wishlists: 11,
    },
];

static CATALOG: Lazy<Vec<Decoration>> = Lazy::new(|| {
    DECORATION_SEEDS
        .iter()
        .map(|seed| {
            let (y, m, d) = seed.created_at;
            Decoration {
                id: DecorationId::new(seed.id),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                category: seed.category.to_string(),
                images: vec![DECORATION_IMAGE.to_string(); 3],
                status: seed.status,
                added_by: "admin".to_string(),
                created_at: date(y, m, d),
                bookings: seed.bookings,
                wishlists: seed.wishlists,
            }
        })
        .collect()
});

pub fn catalog() -> Vec<Decoration> {
    CATALOG.clone()
}

pub fn find_decoration(id: &DecorationId) -> Option<Decoration> {
    CATALOG.iter().find(|d| &d.id == id).cloned()
}

/// Looks up the decoration named by a raw `:id` route segment
pub fn decoration_from_param(raw: &str) -> Option<Decoration> {
    let id = DecorationId::from_string(raw).ok()?;
    find_decoration(&id)
}

/// The signed-in customer's saved decorations
pub fn wishlist() -> Wishlist {
    Wishlist::from_ids(["1", "4", "6"].into_iter().map(DecorationId::new))
}

/// Resolves wishlist ids against the catalog, skipping ids that no longer exist
pub fn wishlist_decorations(wishlist: &Wishlist) -> Vec<Decoration> {
    wishlist
        .ids()
        .filter_map(find_decoration)
        .collect()
}

pub fn current_user(role: UserRole) -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        role,
        joined_date: date(2024, 1, 15),
    }
}

fn booking_for(
    id: &str,
    decoration_id: &str,
    customer: ContactDetails,
    event_date: NaiveDate,
    status: BookingStatus,
    created_at: NaiveDateTime,
) -> Booking {
    let decoration_id = DecorationId::new(decoration_id);
    let decoration = find_decoration(&decoration_id);
    Booking {
        id: BookingId::new(id),
        decoration_id,
        decoration_title: decoration
            .as_ref()
            .map(|d| d.title.clone())
            .unwrap_or_default(),
        decoration_category: decoration
            .as_ref()
            .map(|d| d.category.clone())
            .unwrap_or_default(),
        decoration_image: DECORATION_IMAGE.to_string(),
        customer,
        event_date,
        status,
        created_at,
    }
}

fn contact(name: &str, email: &str, phone: &str, address: &str) -> ContactDetails {
    ContactDetails {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    }
}

/// Bookings made by the signed-in customer
pub fn customer_bookings() -> Vec<Booking> {
    vec![
        booking_for(
            "b1",
            "1",
            contact(
                "John Doe",
                "john.doe@example.com",
                "+1 (555) 123-4567",
                "123 Main St, City, State 12345",
            ),
            date(2024, 2, 14),
            BookingStatus::Confirmed,
            timestamp(2024, 1, 20, 0, 0),
        ),
        booking_for(
            "b2",
            "4",
            contact(
                "John Doe",
                "john.doe@example.com",
                "+1 (555) 123-4567",
                "456 Garden Ave, City, State 12345",
            ),
            date(2024, 3, 15),
            BookingStatus::Pending,
            timestamp(2024, 1, 25, 0, 0),
        ),
    ]
}

/// All bookings, as seen by the admin console
pub fn admin_bookings() -> Vec<Booking> {
    vec![
        booking_for(
            "1",
            "1",
            contact(
                "Sarah Johnson",
                "sarah@example.com",
                "+1234567890",
                "123 Main St, City, State 12345",
            ),
            date(2024, 2, 15),
            BookingStatus::Pending,
            timestamp(2024, 1, 10, 10, 30),
        ),
        booking_for(
            "2",
            "2",
            contact(
                "Mike Chen",
                "mike@example.com",
                "+1987654321",
                "456 Business Ave, Downtown 67890",
            ),
            date(2024, 2, 20),
            BookingStatus::Confirmed,
            timestamp(2024, 1, 8, 14, 15),
        ),
        booking_for(
            "3",
            "3",
            contact(
                "Emma Davis",
                "emma@example.com",
                "+1122334455",
                "789 Party Lane, Suburb 54321",
            ),
            date(2024, 2, 18),
            BookingStatus::Cancelled,
            timestamp(2024, 1, 5, 9, 45),
        ),
    ]
}

pub fn admin_stats() -> AdminStats {
    AdminStats {
        total_decorations: 24,
        total_bookings: 156,
        total_users: 89,
        total_wishlists: 234,
        available_decorations: 18,
        reserved_decorations: 4,
        full_decorations: 2,
        pending_bookings: 12,
        confirmed_bookings: 134,
        cancelled_bookings: 10,
    }
}

pub fn recent_bookings() -> Vec<RecentBooking> {
    [
        ("1", "Sarah Johnson", "Elegant Wedding Arch", date(2024, 1, 15), BookingStatus::Pending),
        ("2", "Mike Chen", "Corporate Event Setup", date(2024, 1, 20), BookingStatus::Confirmed),
        ("3", "Emma Davis", "Birthday Party Decor", date(2024, 1, 18), BookingStatus::Pending),
    ]
    .into_iter()
    .map(|(id, user, decoration, date, status)| RecentBooking {
        id: id.to_string(),
        user: user.to_string(),
        decoration: decoration.to_string(),
        date,
        status,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let items = catalog();
        assert_eq!(items.len(), 6);
        for (i, a) in items.iter().enumerate() {
            assert!(items.iter().skip(i + 1).all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_find_decoration() {
        let id = DecorationId::new("3");
        assert_eq!(find_decoration(&id).map(|d| d.status), Some(DecorationStatus::Full));
        assert!(find_decoration(&DecorationId::new("42")).is_none());
    }

    #[test]
    fn test_decoration_from_route_param() {
        assert_eq!(
            decoration_from_param(" 4 ").map(|d| d.title),
            Some("Garden Party Setup".to_string())
        );
        assert!(decoration_from_param("").is_none());
        assert!(decoration_from_param("unknown").is_none());
    }

    #[test]
    fn test_wishlist_resolves_against_catalog() {
        let titles: Vec<_> = wishlist_decorations(&wishlist())
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Elegant Wedding Arch", "Garden Party Setup", "Holiday Gala Decor"]
        );
    }

    #[test]
    fn test_bookings_link_to_catalog_entries() {
        for booking in customer_bookings().iter().chain(admin_bookings().iter()) {
            let decoration = find_decoration(&booking.decoration_id).unwrap();
            assert_eq!(decoration.title, booking.decoration_title);
            assert_eq!(decoration.category, booking.decoration_category);
        }
    }
}
