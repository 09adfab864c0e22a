use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::filter::{Filterable, FILTER_ALL};
use crate::string_aggregate_id;

/// Category selector options (value, label) for the catalog and admin filters
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    (FILTER_ALL, "All Categories"),
    ("wedding", "Wedding"),
    ("corporate", "Corporate"),
    ("birthday", "Birthday"),
    ("outdoor", "Outdoor"),
    ("anniversary", "Anniversary"),
    ("holiday", "Holiday"),
];

/// Status selector options (value, label)
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    (FILTER_ALL, "All Status"),
    ("available", "Available"),
    ("reserved", "Reserved"),
    ("full", "Fully Booked"),
];

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор декорации
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationId(pub String);

string_aggregate_id!(DecorationId);

// ============================================================================
// Status
// ============================================================================

/// Доступность декорации для бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationStatus {
    Available,
    Reserved,
    Full,
}

/// Colour of the availability banner on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub tone: StatusTone,
}

impl DecorationStatus {
    /// Код статуса (совпадает со значением фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            DecorationStatus::Available => "available",
            DecorationStatus::Reserved => "reserved",
            DecorationStatus::Full => "full",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DecorationStatus::Available => "Available",
            DecorationStatus::Reserved => "Reserved",
            DecorationStatus::Full => "Fully Booked",
        }
    }

    /// Badge variant used to render this status
    pub fn badge_variant(&self) -> &'static str {
        self.code()
    }

    pub fn all() -> Vec<DecorationStatus> {
        vec![
            DecorationStatus::Available,
            DecorationStatus::Reserved,
            DecorationStatus::Full,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(DecorationStatus::Available),
            "reserved" => Some(DecorationStatus::Reserved),
            "full" => Some(DecorationStatus::Full),
            _ => None,
        }
    }

    /// Booking requests are accepted for everything except fully booked items
    pub fn is_bookable(&self) -> bool {
        !matches!(self, DecorationStatus::Full)
    }

    pub fn availability_message(&self) -> StatusMessage {
        match self {
            DecorationStatus::Available => StatusMessage {
                text: "This decoration is available for booking!",
                tone: StatusTone::Success,
            },
            DecorationStatus::Reserved => StatusMessage {
                text: "This decoration is reserved but you can still request booking.",
                tone: StatusTone::Warning,
            },
            DecorationStatus::Full => StatusMessage {
                text: "This decoration is fully booked. Booking requests are disabled.",
                tone: StatusTone::Destructive,
            },
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Декорация, доступная для аренды
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: DecorationId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub images: Vec<String>,
    pub status: DecorationStatus,
    #[serde(rename = "addedBy")]
    pub added_by: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    /// Number of bookings made for this item (admin column)
    pub bookings: u32,
    /// Number of wishlists containing this item (admin column)
    pub wishlists: u32,
}

impl Decoration {
    /// First image, or `placeholder` when the decoration has no pictures yet
    pub fn cover_image<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(placeholder)
    }

    /// Images after the cover, shown as thumbnails on the detail page
    pub fn gallery(&self) -> &[String] {
        self.images.get(1..).unwrap_or(&[])
    }

    pub fn is_bookable(&self) -> bool {
        self.status.is_bookable()
    }

    pub fn detail_path(&self) -> String {
        format!("/decoration/{}", self.id)
    }
}

impl Filterable for Decoration {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn status_code(&self) -> &str {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    fn sample(images: Vec<&str>, status: DecorationStatus) -> Decoration {
        Decoration {
            id: DecorationId::new("1"),
            title: "Elegant Wedding Arch".into(),
            description: "Floral arch".into(),
            category: "wedding".into(),
            images: images.into_iter().map(String::from).collect(),
            status,
            added_by: "admin".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            bookings: 5,
            wishlists: 12,
        }
    }

    #[test]
    fn test_cover_image_falls_back_to_placeholder() {
        let decoration = sample(vec![], DecorationStatus::Available);
        assert_eq!(decoration.cover_image("/placeholder.svg"), "/placeholder.svg");
        assert!(decoration.gallery().is_empty());
    }

    #[test]
    fn test_gallery_skips_cover() {
        let decoration = sample(vec!["a.jpg", "b.jpg", "c.jpg"], DecorationStatus::Available);
        assert_eq!(decoration.cover_image("/placeholder.svg"), "a.jpg");
        assert_eq!(decoration.gallery(), &["b.jpg".to_string(), "c.jpg".to_string()]);
    }

    #[test]
    fn test_only_full_blocks_booking() {
        assert!(DecorationStatus::Available.is_bookable());
        assert!(DecorationStatus::Reserved.is_bookable());
        assert!(!DecorationStatus::Full.is_bookable());
        assert_eq!(
            DecorationStatus::Full.availability_message().tone,
            StatusTone::Destructive
        );
    }

    #[test]
    fn test_status_codes_round_trip_through_options() {
        for status in DecorationStatus::all() {
            assert_eq!(DecorationStatus::from_code(status.code()), Some(status));
            assert!(STATUS_OPTIONS.iter().any(|(code, _)| *code == status.code()));
        }
        assert_eq!(DecorationStatus::from_code("sold"), None);
    }

    #[test]
    fn test_serializes_status_lowercase() {
        let json = serde_json::to_value(sample(vec![], DecorationStatus::Full)).unwrap();
        assert_eq!(json["status"], "full");
        assert_eq!(json["createdAt"], "2024-01-15");
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!(DecorationId::from_string(" 4 ").unwrap().as_str(), "4");
        assert!(DecorationId::from_string("  ").is_err());
        assert_eq!(sample(vec![], DecorationStatus::Full).detail_path(), "/decoration/1");
    }
}
