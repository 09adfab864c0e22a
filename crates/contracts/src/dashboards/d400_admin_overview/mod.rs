pub mod dto;

pub use dto::{AdminStats, BookingCounts, RecentBooking};
