use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a001_decoration::DecorationId;
use crate::shared::filter::{Filterable, FILTER_ALL};
use crate::shared::notification::Notification;
use crate::string_aggregate_id;

/// Category selector options offered on the admin bookings page
pub const BOOKING_CATEGORY_OPTIONS: &[(&str, &str)] = &[
    (FILTER_ALL, "All Categories"),
    ("wedding", "Wedding"),
    ("corporate", "Corporate"),
    ("birthday", "Birthday"),
    ("outdoor", "Outdoor"),
];

pub const BOOKING_STATUS_OPTIONS: &[(&str, &str)] = &[
    (FILTER_ALL, "All Status"),
    ("pending", "Pending"),
    ("confirmed", "Confirmed"),
    ("cancelled", "Cancelled"),
];

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор бронирования
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);

string_aggregate_id!(BookingId);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge variant on the customer dashboard
    pub fn badge_variant(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "warning",
            BookingStatus::Confirmed => "success",
            BookingStatus::Cancelled => "destructive",
        }
    }

    /// Badge variant in the admin console (reuses the availability palette)
    pub fn admin_badge_variant(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "reserved",
            BookingStatus::Confirmed => "available",
            BookingStatus::Cancelled => "full",
        }
    }

    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("This decoration is fully booked and cannot be reserved.")]
    FullyBooked,
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Preferred date must be a valid date (YYYY-MM-DD).")]
    InvalidDate,
    #[error("Preferred date cannot be in the past.")]
    DateInPast,
    #[error("Cannot change booking status from {from} to {to}.")]
    InvalidTransition { from: &'static str, to: &'static str },
}

impl BookingError {
    /// Toast shown to the user for this error
    pub fn notification(&self) -> Notification {
        let title = match self {
            BookingError::FullyBooked => "Booking Not Available",
            BookingError::InvalidTransition { .. } => "Status Not Updated",
            _ => "Check Booking Details",
        };
        Notification::destructive(title, self.to_string())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Контактные данные заказчика
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Бронирование декорации на дату мероприятия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(rename = "decorId")]
    pub decoration_id: DecorationId,
    #[serde(rename = "decorTitle")]
    pub decoration_title: String,
    #[serde(rename = "decorCategory")]
    pub decoration_category: String,
    #[serde(rename = "decorImage")]
    pub decoration_image: String,
    pub customer: ContactDetails,
    #[serde(rename = "date")]
    pub event_date: NaiveDate,
    pub status: BookingStatus,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    /// Admin approve/reject: only pending bookings may be confirmed or cancelled
    pub fn transition(&mut self, to: BookingStatus) -> Result<(), BookingError> {
        match (self.status, to) {
            (BookingStatus::Pending, BookingStatus::Confirmed | BookingStatus::Cancelled) => {
                self.status = to;
                Ok(())
            }
            (from, to) => Err(BookingError::InvalidTransition {
                from: from.code(),
                to: to.code(),
            }),
        }
    }

    pub fn decoration_path(&self) -> String {
        format!("/decoration/{}", self.decoration_id)
    }
}

impl Filterable for Booking {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.customer.name.as_str(),
            self.customer.email.as_str(),
            self.decoration_title.as_str(),
        ]
    }

    fn category(&self) -> &str {
        &self.decoration_category
    }

    fn status_code(&self) -> &str {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::ListFilter;

    fn booking(id: &str, name: &str, category: &str, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::new(id),
            decoration_id: DecorationId::new("1"),
            decoration_title: "Elegant Wedding Arch".into(),
            decoration_category: category.into(),
            decoration_image: "/hero.jpg".into(),
            customer: ContactDetails {
                name: name.into(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "+1234567890".into(),
                address: "123 Main St".into(),
            },
            event_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_pending_can_be_confirmed_or_cancelled() {
        let mut approved = booking("1", "Sarah", "wedding", BookingStatus::Pending);
        assert!(approved.transition(BookingStatus::Confirmed).is_ok());
        assert_eq!(approved.status, BookingStatus::Confirmed);

        let mut rejected = booking("2", "Mike", "corporate", BookingStatus::Pending);
        assert!(rejected.transition(BookingStatus::Cancelled).is_ok());
        assert_eq!(rejected.status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_settled_bookings_reject_transitions() {
        let mut b = booking("1", "Sarah", "wedding", BookingStatus::Confirmed);
        assert_eq!(
            b.transition(BookingStatus::Cancelled),
            Err(BookingError::InvalidTransition { from: "confirmed", to: "cancelled" })
        );
        assert_eq!(b.status, BookingStatus::Confirmed);

        let mut p = booking("2", "Mike", "wedding", BookingStatus::Pending);
        assert!(p.transition(BookingStatus::Pending).is_err());
    }

    #[test]
    fn test_filter_searches_customer_and_decoration() {
        let items = vec![
            booking("1", "Sarah", "wedding", BookingStatus::Pending),
            booking("2", "Mike", "corporate", BookingStatus::Confirmed),
        ];

        let by_email = ListFilter::new("MIKE@", FILTER_ALL, FILTER_ALL).apply(&items);
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id.as_str(), "2");

        let by_title = ListFilter::new("arch", "wedding", "pending").apply(&items);
        assert_eq!(by_title.len(), 1);

        assert!(ListFilter::new("", "birthday", FILTER_ALL).apply(&items).is_empty());
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(BookingStatus::Pending.badge_variant(), "warning");
        assert_eq!(BookingStatus::Pending.admin_badge_variant(), "reserved");
        assert_eq!(BookingStatus::Cancelled.admin_badge_variant(), "full");
        assert_eq!(BookingStatus::from_code("confirmed"), Some(BookingStatus::Confirmed));
    }

    #[test]
    fn test_fully_booked_error_notification() {
        let n = BookingError::FullyBooked.notification();
        assert_eq!(n.title, "Booking Not Available");
        assert_eq!(n.description, "This decoration is fully booked and cannot be reserved.");
        assert!(n.is_destructive());
    }
}
