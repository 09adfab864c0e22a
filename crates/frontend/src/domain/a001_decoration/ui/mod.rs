pub mod admin_list;
pub mod card;
pub mod catalog;
pub mod details;

pub use card::DecorationCard;
